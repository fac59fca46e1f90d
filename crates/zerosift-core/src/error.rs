/// Fatal error taxonomy.
///
/// Only two failures abort a run: a bad scan root (before any traversal)
/// and a report that cannot be created or written (after traversal).
/// Per-file open/read/stat failures are never surfaced here — they become
/// `ErrorRecord`s in the error bucket and the scan continues.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist, is not a directory, or cannot be read.
    /// Raised before any traversal starts.
    #[error("cannot scan {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be created or written. Reports already
    /// written before the failure are left in place, not rolled back.
    #[error("failed to write report {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
