//! History subcommand implementation.
//!
//! Handles the `cocoknock history` command for filtered listings.

use crate::error::CliResult;
use crate::output;
use crate::store::ScanHistoryStore;
use crate::types::{DateRange, StatusFilter};
use clap::Parser;

/// View and filter scan history.
#[derive(Parser, Debug)]
pub struct HistoryCommand {
    /// Filter by maturity status (all, premature, mature, overmature, unknown)
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,

    /// Filter by date range
    #[arg(short, long, value_enum, default_value = "all")]
    pub range: DateRange,

    /// Limit to the N most recent records
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Show location, duration, and analysis summary for each record
    #[arg(short, long)]
    pub detailed: bool,
}

impl HistoryCommand {
    /// Execute the history command.
    pub async fn execute(&self, store: &ScanHistoryStore) -> CliResult<()> {
        let mut records = store.filtered(self.status, self.range).await?;
        if let Some(count) = self.count {
            records.truncate(count);
        }

        output::print_history(&records, self.detailed)?;
        Ok(())
    }
}
