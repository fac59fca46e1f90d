/// Outcome buckets and CSV report writing.
///
/// Buckets accumulate records in traversal order during the scan and are
/// flushed to disk in one pass at the end. Each report starts with a
/// header row naming the record fields; an empty bucket still yields a
/// valid header-only file. The error report is the exception: it is only
/// written when at least one read error occurred.
use crate::error::ScanError;
use crate::model::{ClassificationOutcome, ErrorRecord, FileRecord, ScanSummary};
use crate::scanner::ScanConfig;

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column order for the valid and zero-prefix reports. Matches the
/// field order of [`FileRecord`].
const FILE_REPORT_HEADER: [&str; 5] = ["full_path", "directory", "filename", "size", "modified_at"];

/// Column order for the error report.
const ERROR_REPORT_HEADER: [&str; 3] = ["directory", "filename", "error_description"];

/// One ordered record sequence per outcome kind.
///
/// Owned exclusively by the scanner for the duration of one run; paths
/// appear at most once per bucket because the traversal never revisits
/// a directory.
#[derive(Debug, Default)]
pub struct ReportBuckets {
    pub valid: Vec<FileRecord>,
    pub zero_prefix: Vec<FileRecord>,
    pub read_errors: Vec<ErrorRecord>,
}

impl ReportBuckets {
    /// Append an outcome to its bucket.
    pub fn push(&mut self, outcome: ClassificationOutcome) {
        match outcome {
            ClassificationOutcome::Valid(record) => self.valid.push(record),
            ClassificationOutcome::ZeroPrefix(record) => self.zero_prefix.push(record),
            ClassificationOutcome::ReadError(record) => self.read_errors.push(record),
        }
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            valid: self.valid.len() as u64,
            zero_prefix: self.zero_prefix.len() as u64,
            read_errors: self.read_errors.len() as u64,
        }
    }
}

/// Write all reports for a finished scan.
///
/// Write failures are fatal; reports already written before the failure
/// are left in place.
pub fn write_reports(buckets: &ReportBuckets, config: &ScanConfig) -> Result<(), ScanError> {
    write_file_report(
        &config.valid_report,
        "valid",
        &buckets.valid,
        config.count_preamble,
    )?;
    info!(
        "Valid file report written to {}",
        config.valid_report.display()
    );

    write_file_report(
        &config.zero_prefix_report,
        "zero-prefix",
        &buckets.zero_prefix,
        config.count_preamble,
    )?;
    info!(
        "Zero-prefix file report written to {}",
        config.zero_prefix_report.display()
    );

    if !buckets.read_errors.is_empty() {
        let path = config.error_report_path();
        write_csv(&path, &ERROR_REPORT_HEADER, &buckets.read_errors)?;
        info!("Read-error report written to {}", path.display());
    }
    Ok(())
}

/// Write one file-record report, optionally preceded by the non-tabular
/// `Number of <category> files: <N>` preamble line.
fn write_file_report(
    path: &Path,
    category: &str,
    records: &[FileRecord],
    count_preamble: bool,
) -> Result<(), ScanError> {
    let mut file = File::create(path).map_err(|e| write_error(path, e.into()))?;
    if count_preamble {
        writeln!(file, "Number of {category} files: {}", records.len())
            .map_err(|e| write_error(path, e.into()))?;
    }
    write_rows(path, file, &FILE_REPORT_HEADER, records)
}

fn write_csv<R: Serialize>(path: &Path, header: &[&str], records: &[R]) -> Result<(), ScanError> {
    let file = File::create(path).map_err(|e| write_error(path, e.into()))?;
    write_rows(path, file, header, records)
}

/// Header row plus one CSV row per record. The header is written
/// explicitly so that an empty bucket still produces it; `serialize`
/// with `has_headers(false)` then emits data rows only.
fn write_rows<R: Serialize>(
    path: &Path,
    file: File,
    header: &[&str],
    records: &[R],
) -> Result<(), ScanError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(header)
        .map_err(|e| write_error(path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| write_error(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| write_error(path, e.into()))?;
    Ok(())
}

fn write_error(path: &Path, source: csv::Error) -> ScanError {
    ScanError::ReportWrite {
        path: path.to_path_buf(),
        source,
    }
}
