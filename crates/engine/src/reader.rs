use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the whole file into memory.
///
/// The handle is dropped when this function returns, on the error paths too.
///
/// # Errors
///
/// Returns [`EngineError::Open`] when the file cannot be opened and
/// [`EngineError::ReadFrom`] when reading its contents fails.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| EngineError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| EngineError::ReadFrom {
            path: path.to_path_buf(),
            source: e,
        })?;

    log::debug!("read {} bytes from {}", buf.len(), path.display());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_entire_contents() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Call me Ishmael.\nSome years ago").unwrap();

        let buf = read_file(file.path()).unwrap();
        assert_eq!(buf, b"Call me Ishmael.\nSome years ago");
    }

    #[test]
    fn empty_file_gives_empty_buffer() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::Open { .. }));
        assert_eq!(err.stage(), "Open");
    }

    #[test]
    fn directory_is_a_read_error_or_open_error() {
        // Opening a directory succeeds on Unix and fails on Windows;
        // reading it fails on Unix.
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ReadFrom { .. } | EngineError::Open { .. }
        ));
    }
}
