//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `cocoknock save <analysis.json>` - Save a completed analysis
//! - `cocoknock history` - View and filter scan history
//! - `cocoknock stats` - Aggregate statistics
//! - `cocoknock export` - Export the collection as JSON or CSV
//! - `cocoknock delete <id>` - Delete one record or the whole history

mod delete;
mod export;
mod history;
mod save;
mod stats;

pub use delete::DeleteCommand;
pub use export::ExportCommand;
pub use history::HistoryCommand;
pub use save::SaveCommand;
pub use stats::StatsCommand;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cocoknock - scan history for a coconut-maturity detection robot.
///
/// Stores the maturity assessments the robot produces, and provides
/// filtered history views, aggregate statistics, and CSV/JSON export.
#[derive(Parser, Debug)]
#[command(name = "cocoknock")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Coconut maturity scan history", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for the history store (defaults to the XDG data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a completed robot analysis as a scan record
    #[command(alias = "s")]
    Save(SaveCommand),

    /// View and filter scan history
    #[command(alias = "h")]
    History(HistoryCommand),

    /// Show aggregate scan statistics
    Stats(StatsCommand),

    /// Export scan history
    #[command(alias = "e")]
    Export(ExportCommand),

    /// Delete one record, or the whole history
    #[command(alias = "d")]
    Delete(DeleteCommand),
}

/// Interchange format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// JSON structured output
    #[default]
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
