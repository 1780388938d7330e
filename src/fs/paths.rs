//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Full output path of a file inside the download folder.
pub fn download_path(download_folder: &Path, filename: &str) -> PathBuf {
    download_folder.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("downloads").join("nested");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_download_path() {
        assert_eq!(
            download_path(Path::new("downloads"), "a.mp4"),
            PathBuf::from("downloads/a.mp4")
        );
    }
}
