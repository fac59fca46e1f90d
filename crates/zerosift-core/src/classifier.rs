/// Leading-byte classifier — the zero-prefix heuristic.
///
/// A file whose first up-to-200 bytes are all zero almost always came out
/// of an interrupted write or copy: the allocation succeeded but the data
/// never arrived. Reading a fixed-size prefix keeps the probe cheap even
/// on multi-gigabyte files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected per file. Files shorter than this
/// are classified on whatever prefix is available.
pub const PROBE_LEN: usize = 200;

/// Verdict for a single file. The record-carrying outcome is assembled by
/// the scanner once size and mtime have been fetched.
#[derive(Debug, PartialEq, Eq)]
pub enum Classification {
    /// At least one non-zero byte in the probed prefix.
    Valid,
    /// Every probed byte is zero. An empty file lands here too — the
    /// all-zero check holds vacuously.
    ZeroPrefix,
    /// The file could not be opened or read; carries a description of
    /// the failure.
    ReadError(String),
}

/// Classify a file by reading at most [`PROBE_LEN`] bytes from the start.
///
/// Never panics: open/read failures (permissions, broken symlink, file
/// vanished mid-scan) are folded into [`Classification::ReadError`] so a
/// single bad file cannot abort the surrounding traversal. Content beyond
/// the probe window never affects the verdict.
pub fn classify(path: &Path) -> Classification {
    match read_prefix(path) {
        Ok(prefix) => {
            if prefix.iter().all(|&b| b == 0) {
                Classification::ZeroPrefix
            } else {
                Classification::Valid
            }
        }
        Err(err) => Classification::ReadError(err.to_string()),
    }
}

/// Read up to [`PROBE_LEN`] bytes, retrying on short reads until EOF.
///
/// `File::read` may return fewer bytes than requested without reaching
/// EOF, so a single read call is not enough to fill the window.
fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; PROBE_LEN];
    let mut filled = 0;
    loop {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == PROBE_LEN {
            break;
        }
    }
    Ok(buf[..filled].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn nonzero_content_is_valid() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a.txt", b"hello");
        assert_eq!(classify(&path), Classification::Valid);
    }

    #[test]
    fn short_all_zero_file_is_zero_prefix() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "short.bin", &[0u8; 17]);
        assert_eq!(classify(&path), Classification::ZeroPrefix);
    }

    #[test]
    fn empty_file_is_zero_prefix() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty", b"");
        assert_eq!(classify(&path), Classification::ZeroPrefix);
    }

    #[test]
    fn exactly_probe_len_zeros_is_zero_prefix() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "window.bin", &[0u8; PROBE_LEN]);
        assert_eq!(classify(&path), Classification::ZeroPrefix);
    }

    #[test]
    fn content_beyond_probe_window_is_ignored() {
        // 200 zeros followed by non-zero data: the verdict must come from
        // the window alone.
        let tmp = TempDir::new().unwrap();
        let mut content = vec![0u8; PROBE_LEN];
        content.extend_from_slice(b"trailing data");
        let path = write_file(&tmp, "padded.bin", &content);
        assert_eq!(classify(&path), Classification::ZeroPrefix);
    }

    #[test]
    fn single_nonzero_byte_inside_window_is_valid() {
        let tmp = TempDir::new().unwrap();
        let mut content = vec![0u8; PROBE_LEN];
        content[PROBE_LEN - 1] = 1;
        let path = write_file(&tmp, "lastbyte.bin", &content);
        assert_eq!(classify(&path), Classification::Valid);
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vanished.dat");
        match classify(&path) {
            Classification::ReadError(desc) => assert!(!desc.is_empty()),
            other => panic!("expected ReadError, got {other:?}"),
        }
    }
}
