//! Export subcommand implementation.
//!
//! Handles the `cocoknock export` command for exporting the scan
//! collection in interchange formats.

use crate::cli::ExportFormat;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::store::ScanHistoryStore;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Export scan history.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,
}

impl ExportCommand {
    /// Execute the export command.
    pub async fn execute(&self, store: &ScanHistoryStore, quiet: bool) -> CliResult<()> {
        let content = match self.format {
            ExportFormat::Json => store.export_json().await?,
            ExportFormat::Csv => store.export_csv().await?,
        };

        if content.is_empty() && !quiet {
            output::print_warning("scan history is empty");
        }

        if let Some(ref path) = self.output_file {
            fs::write(path, &content)
                .map_err(|e| CliError::Other(format!("failed to write file: {}", e)))?;

            if !quiet {
                output::print_success(&format!(
                    "Exported scan history to {} ({})",
                    path.display(),
                    self.format
                ));
            }
        } else {
            println!("{}", content);
        }

        Ok(())
    }
}
