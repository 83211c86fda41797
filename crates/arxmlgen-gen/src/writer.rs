//! Fixture file output.
//!
//! One policy for both suites: UTF-8 bytes with `\n` line endings (the
//! renderer never emits `\r`), parent directories created on demand, and
//! any existing file at the target path overwritten unconditionally.

use std::fs;
use std::path::Path;

use crate::GenError;

/// Writes rendered fixture text to `path`, creating missing parent
/// directories first.
pub fn write_text(path: &Path, text: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cases").join("6.1").join("small1.arxml");

        write_text(&path, "<A/>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<A/>");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.arxml");

        write_text(&path, "first").unwrap();
        write_text(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The parent "directory" is a regular file, so create_dir_all fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = write_text(&blocker.join("out.arxml"), "<A/>").unwrap_err();
        assert!(err.is_io());
    }
}
