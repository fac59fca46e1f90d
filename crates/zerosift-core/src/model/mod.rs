/// Data model for ZeroSift scan results.
///
/// Re-exports the per-file records, the classification outcome enum,
/// and the end-of-run summary.
pub mod record;
pub mod summary;

pub use record::{ClassificationOutcome, ErrorRecord, FileRecord};
pub use summary::ScanSummary;
