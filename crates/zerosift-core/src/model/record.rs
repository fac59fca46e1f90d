/// Per-file records produced during a scan.
///
/// Each visited file yields exactly one [`ClassificationOutcome`], which
/// owns the record that will later be appended to the matching report
/// bucket. Records are immutable once constructed and live only for the
/// duration of one run.
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::path::Path;
use std::time::SystemTime;

/// Timestamp layout used in the CSV reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A successfully classified file.
///
/// Field order matches the CSV column order of the reports.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Absolute or root-relative path exactly as the walker produced it.
    pub full_path: String,
    /// Parent directory of the file.
    pub directory: String,
    /// File name only.
    pub filename: String,
    /// Logical file size in bytes.
    pub size: u64,
    /// Last-modified timestamp, written as local time.
    #[serde(serialize_with = "serialize_timestamp")]
    pub modified_at: DateTime<Local>,
}

impl FileRecord {
    /// Build a record from a path plus the stat results fetched after
    /// classification.
    pub fn new(path: &Path, size: u64, modified: SystemTime) -> Self {
        let (directory, filename) = split_path(path);
        Self {
            full_path: path.to_string_lossy().into_owned(),
            directory,
            filename,
            size,
            modified_at: DateTime::<Local>::from(modified),
        }
    }
}

/// A file that could not be read (or stat'ed after classification).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord {
    pub directory: String,
    pub filename: String,
    /// Human-readable description of the open/read/stat failure.
    pub error_description: String,
}

impl ErrorRecord {
    pub fn new(path: &Path, error_description: String) -> Self {
        let (directory, filename) = split_path(path);
        Self {
            directory,
            filename,
            error_description,
        }
    }
}

/// The three-way result of visiting one file. Exactly one variant is
/// produced per non-skipped file.
#[derive(Debug)]
pub enum ClassificationOutcome {
    /// Readable, at least one non-zero byte in the probed prefix.
    Valid(FileRecord),
    /// Readable, every probed byte is zero (empty files included).
    ZeroPrefix(FileRecord),
    /// Open, read, or follow-up stat failed.
    ReadError(ErrorRecord),
}

fn split_path(path: &Path) -> (String, String) {
    let directory = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (directory, filename)
}

fn serialize_timestamp<S>(ts: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_record_splits_directory_and_filename() {
        let path = PathBuf::from("/data/photos/img_001.raw");
        let record = FileRecord::new(&path, 42, SystemTime::now());
        assert_eq!(record.full_path, "/data/photos/img_001.raw");
        assert_eq!(record.directory, "/data/photos");
        assert_eq!(record.filename, "img_001.raw");
        assert_eq!(record.size, 42);
    }

    #[test]
    fn error_record_splits_directory_and_filename() {
        let path = PathBuf::from("/data/locked.bin");
        let record = ErrorRecord::new(&path, "permission denied".into());
        assert_eq!(record.directory, "/data");
        assert_eq!(record.filename, "locked.bin");
        assert_eq!(record.error_description, "permission denied");
    }
}
