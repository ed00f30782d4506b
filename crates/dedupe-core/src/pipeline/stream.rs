//! Opening input and output streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::DedupeError;

/// Read buffer size. Large enough that very long URLs never force extra syscalls.
pub const READ_BUFFER_BYTES: usize = 1024 * 1024;

/// Output buffer size used by the driver.
pub const WRITE_BUFFER_BYTES: usize = 64 * 1024;

fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

/// Open `path` for reading, or stdin when `path` is `None` or `-`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, DedupeError> {
    match file_path(path) {
        None => Ok(Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, io::stdin()))),
        Some(p) => {
            let file = File::open(p).map_err(|source| DedupeError::OpenInput {
                path: p.to_path_buf(),
                source,
            })?;
            tracing::debug!("reading URLs from {}", p.display());
            Ok(Box::new(BufReader::with_capacity(READ_BUFFER_BYTES, file)))
        }
    }
}

/// Create (truncate) `path` for writing, or stdout when `path` is `None` or `-`.
///
/// The returned writer is unbuffered; the driver adds its own buffer.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, DedupeError> {
    match file_path(path) {
        None => Ok(Box::new(io::stdout().lock())),
        Some(p) => {
            let file = File::create(p).map_err(|source| DedupeError::OpenOutput {
                path: p.to_path_buf(),
                source,
            })?;
            tracing::debug!("writing URLs to {}", p.display());
            Ok(Box::new(file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn open_missing_input_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = open_input(Some(&missing)).err().unwrap();
        assert!(matches!(err, DedupeError::OpenInput { .. }), "{err:?}");
    }

    #[test]
    fn open_output_in_missing_dir_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("no").join("such").join("out.txt");
        let err = open_output(Some(&bad)).err().unwrap();
        assert!(matches!(err, DedupeError::OpenOutput { .. }), "{err:?}");
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut w = open_output(Some(&path)).unwrap();
            w.write_all(b"http://a.com/\n").unwrap();
        }
        let mut s = String::new();
        open_input(Some(&path)).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "http://a.com/\n");
    }
}
