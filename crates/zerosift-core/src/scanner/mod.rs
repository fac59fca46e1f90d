/// Scanner module — orchestrates the classification run.
///
/// Walks the configured root depth-first in a single thread, classifies
/// every regular file that is not in the ignore set, accumulates outcome
/// records into buckets, and flushes the buckets to CSV reports once the
/// traversal is done.
pub mod ignore;

use crate::classifier::{self, Classification};
use crate::error::ScanError;
use crate::model::{ClassificationOutcome, ErrorRecord, FileRecord, ScanSummary};
use crate::report::{self, ReportBuckets};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where to scan and where to write the reports. Replaces the hardcoded
/// paths of older one-off scripts with explicit per-run configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory tree to scan. Must exist and be readable.
    pub root: PathBuf,
    /// CSV report of files with a non-zero prefix.
    pub valid_report: PathBuf,
    /// CSV report of zero-prefix (likely corrupted) files.
    pub zero_prefix_report: PathBuf,
    /// CSV report of unreadable files. Defaults to `read_errors.csv`
    /// alongside the valid report; only written when errors occurred.
    pub error_report: Option<PathBuf>,
    /// Prepend a `Number of <category> files: <N>` line to each file
    /// report before the CSV header.
    pub count_preamble: bool,
}

impl ScanConfig {
    pub fn new(root: PathBuf, valid_report: PathBuf, zero_prefix_report: PathBuf) -> Self {
        Self {
            root,
            valid_report,
            zero_prefix_report,
            error_report: None,
            count_preamble: false,
        }
    }

    /// Resolved location of the error report.
    pub fn error_report_path(&self) -> PathBuf {
        self.error_report
            .clone()
            .unwrap_or_else(|| self.valid_report.with_file_name("read_errors.csv"))
    }
}

/// Run a full scan: traverse, classify, accumulate, write reports.
///
/// Traversal is depth-first with entries sorted lexicographically per
/// directory, so report row order is deterministic. Symlinks are not
/// followed, which also rules out directory cycles.
///
/// Per-file failures never abort the run. A file that cannot be opened
/// or read becomes a `ReadError` record; a file whose size/mtime fetch
/// fails *after* a successful classification is demoted to `ReadError`
/// as well (demote-not-drop, so every visited file lands in exactly one
/// bucket). Unreadable directories reported by the walker are recorded
/// the same way and their subtrees skipped.
///
/// Returns the per-outcome counts. Fatal errors are a bad root
/// ([`ScanError::Config`], before traversal) and a report that cannot be
/// written ([`ScanError::ReportWrite`], after traversal).
pub fn run_scan(config: &ScanConfig) -> Result<ScanSummary, ScanError> {
    // Fail fast on a missing or unreadable root.
    fs::read_dir(&config.root).map_err(|source| ScanError::Config {
        path: config.root.clone(),
        source,
    })?;

    info!("Starting scan of {}", config.root.display());
    let start = Instant::now();
    let mut buckets = ReportBuckets::default();

    let walker = jwalk::WalkDir::new(&config.root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a directory. Record it and
                // keep walking the rest of the tree.
                let err_path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| config.root.clone());
                warn!("Error reading {}: {err}", err_path.display());
                buckets.push(ClassificationOutcome::ReadError(ErrorRecord::new(
                    &err_path,
                    err.to_string(),
                )));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if ignore::is_ignored(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let outcome = visit_file(&path);
        match &outcome {
            ClassificationOutcome::Valid(record) => {
                info!(
                    "Found valid file: {} (Size: {} bytes)",
                    record.full_path, record.size
                );
            }
            ClassificationOutcome::ZeroPrefix(record) => {
                info!(
                    "Found zero-prefix file: {} (Size: {} bytes)",
                    record.full_path, record.size
                );
            }
            ClassificationOutcome::ReadError(record) => {
                warn!(
                    "Error reading {}: {}",
                    path.display(),
                    record.error_description
                );
            }
        }
        buckets.push(outcome);
    }

    let summary = buckets.summary();
    debug!(
        "Traversal complete in {:?}: {} valid, {} zero-prefix, {} errors",
        start.elapsed(),
        summary.valid,
        summary.zero_prefix,
        summary.read_errors
    );

    report::write_reports(&buckets, config)?;
    Ok(summary)
}

/// Classify one file and assemble its outcome record.
///
/// Size and mtime are fetched only after a successful classification;
/// both reads are independent best-effort snapshots (TOCTOU accepted).
fn visit_file(path: &Path) -> ClassificationOutcome {
    match classifier::classify(path) {
        Classification::ReadError(description) => {
            ClassificationOutcome::ReadError(ErrorRecord::new(path, description))
        }
        verdict => match stat_record(path) {
            Ok(record) => match verdict {
                Classification::Valid => ClassificationOutcome::Valid(record),
                _ => ClassificationOutcome::ZeroPrefix(record),
            },
            // The file changed under us between classify and stat.
            Err(err) => ClassificationOutcome::ReadError(ErrorRecord::new(path, err.to_string())),
        },
    }
}

fn stat_record(path: &Path) -> std::io::Result<FileRecord> {
    let meta = fs::symlink_metadata(path)?;
    let modified = meta.modified()?;
    Ok(FileRecord::new(path, meta.len(), modified))
}
