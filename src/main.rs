//! Cocoknock CLI entry point.

use clap::Parser;
use cocoknock::cli::{Cli, Commands};
use cocoknock::config::Paths;
use cocoknock::error::CliResult;
use cocoknock::output;
use cocoknock::store::{JsonFileBackend, ScanHistoryStore};
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let store_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| Paths::get().store_dir());
    let backend = Arc::new(JsonFileBackend::new(&store_dir)?);
    let store = ScanHistoryStore::new(backend);

    match &cli.command {
        Commands::Save(cmd) => cmd.execute(&store, cli.quiet).await,
        Commands::History(cmd) => cmd.execute(&store).await,
        Commands::Stats(cmd) => cmd.execute(&store).await,
        Commands::Export(cmd) => cmd.execute(&store, cli.quiet).await,
        Commands::Delete(cmd) => cmd.execute(&store, cli.quiet).await,
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "cocoknock=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
