//! File system existence probes with unified error handling
//!
//! The only I/O in the crate. `NotFound` is an answer, not a failure; every
//! other I/O error propagates so the caller can report the probe itself
//! failing (permissions, unreadable mounts).

use std::fs;
use std::io;
use std::path::Path;

/// Check whether a plain file (or anything statable) exists at `path`.
pub fn is_path_exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Check whether a directory exists at `path`. A plain file at `path`
/// answers false.
pub fn is_dir_exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_path_exists_for_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("app.aab");
        fs::write(&file, b"binary").unwrap();

        assert!(is_path_exists(&file).unwrap());
        assert!(!is_path_exists(temp.path().join("missing.aab")).unwrap());
    }

    #[test]
    fn test_is_dir_exists() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("whatsnew");
        fs::create_dir(&dir).unwrap();
        let file = temp.path().join("mapping.txt");
        fs::write(&file, b"map").unwrap();

        assert!(is_dir_exists(&dir).unwrap());
        assert!(!is_dir_exists(temp.path().join("missing")).unwrap());
        // A file is not a directory
        assert!(!is_dir_exists(&file).unwrap());
    }

    #[test]
    fn test_is_path_exists_for_dir() {
        let temp = TempDir::new().unwrap();
        // metadata on a directory stats fine
        assert!(is_path_exists(temp.path()).unwrap());
    }
}
