//! ZeroSift — zero-prefix file finder.
//!
//! Thin binary entry point. All scanning and reporting logic lives in
//! the `zerosift-core` crate.

use clap::Parser;
use std::path::PathBuf;
use zerosift_core::{run_scan, ScanConfig};

#[derive(Parser)]
#[command(
    name = "zerosift",
    version,
    about = "Scan a directory tree for zero-prefix (likely corrupted) files and report results as CSV"
)]
struct Cli {
    /// Root directory to scan.
    root: PathBuf,

    /// Output CSV for files with a non-zero prefix.
    #[arg(long, default_value = "valid_files.csv")]
    valid_report: PathBuf,

    /// Output CSV for zero-prefix files.
    #[arg(long, default_value = "zero_prefix_files.csv")]
    zero_report: PathBuf,

    /// Output CSV for unreadable files (default: read_errors.csv next to
    /// the valid report; only written when errors occurred).
    #[arg(long)]
    error_report: Option<PathBuf>,

    /// Prepend a "Number of <category> files: <N>" line to each report.
    #[arg(long)]
    counts: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    let config = ScanConfig {
        root: cli.root,
        valid_report: cli.valid_report,
        zero_prefix_report: cli.zero_report,
        error_report: cli.error_report,
        count_preamble: cli.counts,
    };

    // Per-file read errors are reported, not fatal: only a bad root or an
    // unwritable report propagates here and exits non-zero.
    let summary = run_scan(&config)?;

    tracing::info!(
        "Scan complete: {} files visited ({} valid, {} zero-prefix, {} read errors)",
        summary.total(),
        summary.valid,
        summary.zero_prefix,
        summary.read_errors
    );
    Ok(())
}
