/// End-of-run outcome counts returned by the scanner for caller-side
/// summarisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files whose probed prefix contained at least one non-zero byte.
    pub valid: u64,
    /// Files whose probed prefix was entirely zero.
    pub zero_prefix: u64,
    /// Files that could not be opened, read, or stat'ed.
    pub read_errors: u64,
}

impl ScanSummary {
    /// Total number of non-skipped files encountered. Always equals the
    /// sum of the three buckets — every visited file lands in exactly one.
    pub fn total(&self) -> u64 {
        self.valid + self.zero_prefix + self.read_errors
    }
}
