//! Save subcommand implementation.
//!
//! Wraps an already-computed analysis result (the robot's analyze response)
//! into a scan record and appends it to the history. Records are only ever
//! created through this confirm-save path, never speculatively.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::{AnalysisOutcome, ScanHistoryStore, ScanRecord};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Save a completed analysis.
#[derive(Parser, Debug)]
pub struct SaveCommand {
    /// Path to the analysis result JSON (as returned by the robot)
    #[arg(value_name = "ANALYSIS_JSON")]
    pub analysis: PathBuf,

    /// Custom name for the scanned coconut
    #[arg(short, long)]
    pub name: Option<String>,
}

impl SaveCommand {
    /// Execute the save command.
    pub async fn execute(&self, store: &ScanHistoryStore, quiet: bool) -> CliResult<()> {
        let content = fs::read_to_string(&self.analysis)
            .map_err(|e| CliError::Other(format!("failed to read {}: {}", self.analysis.display(), e)))?;
        let outcome: AnalysisOutcome = serde_json::from_str(&content)
            .map_err(|e| CliError::Other(format!("invalid analysis file: {}", e)))?;

        let record = ScanRecord::from_analysis(&outcome, self.name.as_deref())
            .map_err(|e| CliError::Other(e.to_string()))?;

        let coconut_id = record.coconut_id.clone();
        let id = record.id;
        store.add(record).await?;

        if !quiet {
            output::print_success(&format!(
                "Analysis saved as \"{}\" ({})",
                coconut_id,
                id.short()
            ));
        }

        Ok(())
    }
}
