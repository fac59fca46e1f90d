/// ZeroSift Core — classification and reporting engine.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (CLI, TUI, GUI).
///
/// # Modules
///
/// - [`model`] — File and error records, classification outcomes, summaries.
/// - [`classifier`] — Leading-byte inspection (the zero-prefix heuristic).
/// - [`scanner`] — Serial directory traversal with per-file classification.
/// - [`report`] — Outcome buckets and CSV report writing.
/// - [`error`] — Fatal error taxonomy for configuration and output failures.
pub mod classifier;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use error::ScanError;
pub use model::ScanSummary;
pub use scanner::{run_scan, ScanConfig};
