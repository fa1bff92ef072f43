//! Writes rendered documents back to disk
//!
//! Two modes:
//! - in place: truncate and rewrite the target (a crash mid-write can leave
//!   a truncated file)
//! - atomic: write a temp file in the target's directory, fsync, then rename
//!   it over the target

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::errors::{StoreError, StoreResult};

/// Writes `bytes` to `path`, replacing its contents.
pub fn write_file(path: &Path, bytes: &[u8], atomic: bool) -> StoreResult<()> {
    if atomic {
        write_atomic(path, bytes)
    } else {
        write_in_place(path, bytes)
    }
}

fn write_in_place(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let mut file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    file.write_all(bytes).map_err(|e| StoreError::io(path, e))?;
    file.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;

    // Temp files are created 0600; keep the mode of the file being replaced.
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
    }

    tmp.write_all(bytes).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(tmp.path(), e))?;

    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_place_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hdfs-site.xml");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        write_file(&path, b"<configuration />", false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<configuration />");
    }

    #[test]
    fn test_atomic_replaces_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hdfs-rbf-site.xml");
        fs::write(&path, "old").unwrap();

        write_file(&path, b"<configuration />", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<configuration />");
        let count = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("core-site.xml");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_file(&path, b"<configuration />", true).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
