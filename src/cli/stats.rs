//! Stats subcommand implementation.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ScanHistoryStore;
use clap::Parser;

/// Show aggregate scan statistics.
#[derive(Parser, Debug)]
pub struct StatsCommand {
    /// Emit statistics as JSON instead of the plain summary
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    /// Execute the stats command.
    pub async fn execute(&self, store: &ScanHistoryStore) -> CliResult<()> {
        let stats = store.statistics().await?;

        if self.json {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| CliError::Other(e.to_string()))?;
            println!("{}", json);
        } else {
            output::print_statistics(&stats)?;
        }

        Ok(())
    }
}
