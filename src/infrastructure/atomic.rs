//! Atomic file replacement shared by every `.quotebook/` writer

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Temp file used while replacing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let tmp_name = format!(
        "{}.quotebook-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("state"),
        std::process::id()
    );
    path.with_file_name(tmp_name)
}

/// Write a file using a best-effort atomic replace:
/// write to a temp file in the same directory, then rename into place.
///
/// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, content)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        write_atomic(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("sync.toml");

        write_atomic(&path, "x").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        write_atomic(&path, "fetch_limit = 5\n").unwrap();

        // A directory squatting on the temp name makes the temp write fail.
        fs::create_dir(temp_path_for(&path)).unwrap();

        assert!(write_atomic(&path, "fetch_limit = ").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "fetch_limit = 5\n");
    }
}
