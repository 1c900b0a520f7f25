//! Terminal output formatting.
//!
//! Produces human-readable listings of scan history with colors and
//! formatting.

use crate::store::{ScanRecord, ScanStatistics};
use crate::types::Maturity;
use chrono::Local;
use console::{style, Style};
use std::io::{self, Write};

/// Print a history listing as a table.
pub fn print_history(records: &[ScanRecord], detailed: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if records.is_empty() {
        writeln!(out, "  {}", style("No scan records to display.").dim())?;
        return Ok(());
    }

    writeln!(
        out,
        "  {}",
        style("────────────────────────────────────────────────────────────────").dim()
    )?;
    writeln!(
        out,
        "  {:<10}  {:<18}  {:^12}  {:>6}  {}",
        style("ID").bold(),
        style("COCONUT").bold(),
        style("STATUS").bold(),
        style("CONF").bold(),
        style("SCANNED").bold()
    )?;
    writeln!(
        out,
        "  {}",
        style("────────────────────────────────────────────────────────────────").dim()
    )?;

    for record in records {
        writeln!(
            out,
            "  {:<10}  {:<18}  {:^12}  {:>5}%  {}",
            style(record.id.short()).dim(),
            record.coconut_id,
            status_style(record.status).apply_to(record.status.to_string()),
            record.confidence.rounded(),
            record
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        )?;

        if detailed {
            writeln!(out, "      {} {}", style("Location:").bold(), record.location)?;
            writeln!(out, "      {} {}", style("Duration:").bold(), record.duration)?;
            writeln!(
                out,
                "      {} {}",
                style("Result:").bold(),
                style(&record.analysis_result).dim()
            )?;
        }
    }

    writeln!(
        out,
        "  {}",
        style("────────────────────────────────────────────────────────────────").dim()
    )?;
    writeln!(out, "  {} records", records.len())?;

    Ok(())
}

/// Print aggregate statistics.
pub fn print_statistics(stats: &ScanStatistics) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(out, "  {} {}", style("Total scans:").bold(), stats.total)?;
    writeln!(
        out,
        "  {} {} premature, {} mature, {} overmature, {} unknown",
        style("By status:").bold(),
        style(stats.premature).yellow(),
        style(stats.mature).green().bold(),
        style(stats.overmature).blue(),
        style(stats.unknown).dim()
    )?;
    writeln!(
        out,
        "  {} {}%",
        style("Average confidence:").bold(),
        stats.average_confidence
    )?;
    writeln!(out, "  {} {}", style("Scans today:").bold(), stats.today_scans)?;
    writeln!(out)?;

    Ok(())
}

fn status_style(status: Maturity) -> Style {
    match status {
        Maturity::Premature => Style::new().yellow(),
        Maturity::Mature => Style::new().green().bold(),
        Maturity::Overmature => Style::new().blue(),
        Maturity::Unknown => Style::new().dim(),
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
