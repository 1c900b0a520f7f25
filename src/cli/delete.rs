//! Delete subcommand implementation.
//!
//! Deletion is permanent and immediate; there is no soft-delete. Bulk
//! deletion requires an explicit `--yes`.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ScanHistoryStore;
use crate::types::RecordId;
use clap::Parser;

/// Delete one record, or the whole history.
#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// ID of the record to delete
    #[arg(value_name = "RECORD_ID", required_unless_present = "all")]
    pub id: Option<String>,

    /// Delete every record
    #[arg(long, conflicts_with = "id")]
    pub all: bool,

    /// Confirm bulk deletion
    #[arg(long)]
    pub yes: bool,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub async fn execute(&self, store: &ScanHistoryStore, quiet: bool) -> CliResult<()> {
        if self.all {
            if !self.yes {
                return Err(CliError::Other(
                    "deleting all records is permanent; pass --yes to confirm".to_string(),
                ));
            }

            store.delete_all().await?;
            if !quiet {
                output::print_success("Deleted all scan records");
            }
            return Ok(());
        }

        // clap guarantees id is present when --all is absent
        let raw = self.id.as_deref().unwrap_or_default();
        let id: RecordId = raw.parse().map_err(|_| CliError::InvalidId(raw.to_string()))?;

        store.delete(id).await?;
        if !quiet {
            output::print_success(&format!("Deleted scan record {}", id.short()));
        }

        Ok(())
    }
}
