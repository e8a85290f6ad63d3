//! Write the rendered report to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AppError;

/// Overwrite `path` with `document`.
///
/// No temp file, no backup: a failure here ends the run.
pub fn write_report(path: &Path, document: &str) -> Result<(), AppError> {
    fs::write(path, document)
        .map_err(|e| AppError::new(3, format!("Failed to write report '{}': {e}", path.display())))?;
    info!(path = %path.display(), bytes = document.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "old content that is much longer than the new one\n").unwrap();

        write_report(&path, "# 새 리포트\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# 새 리포트\n");
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_report(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn unwritable_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("README.md");
        let err = write_report(&path, "x").unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("README.md"));
    }
}
