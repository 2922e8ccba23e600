//! JSON blob reading and writing
//!
//! Every repository persists through these two functions. Writes go to a
//! sibling temp file first and are renamed into place, so a crash mid-write
//! leaves the previous blob intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ZenithError;

/// Read a JSON blob. A file that does not exist yet reads as the type's
/// default value; any other failure is an error.
pub fn read_json<T, P>(path: P) -> Result<T, ZenithError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(ZenithError::Storage(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ZenithError::Storage(format!("{} is not valid JSON: {}", path.display(), e))
    })
}

/// Write a JSON blob atomically: serialize into `<stem>.tmp` next to the
/// target, fsync, then rename over it.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ZenithError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ZenithError::Storage(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    // Same directory as the target, so the rename cannot cross filesystems
    let staging = path.with_extension("tmp");

    let file = File::create(&staging).map_err(|e| {
        ZenithError::Storage(format!("cannot create {}: {}", staging.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ZenithError::Storage(format!("cannot serialize blob: {}", e)))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| {
            ZenithError::Storage(format!("cannot flush {}: {}", staging.display(), e))
        })?;

    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        ZenithError::Storage(format!(
            "cannot move {} into place: {}",
            staging.display(),
            e
        ))
    })
}

/// Delete a blob file. Missing files are not an error.
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> Result<(), ZenithError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ZenithError::Storage(format!(
            "cannot remove {}: {}",
            path.display(),
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Blob {
        label: String,
        count: u32,
    }

    fn blob() -> Blob {
        Blob {
            label: "sample".to_string(),
            count: 3,
        }
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Blob = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Blob::default());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");

        write_json_atomic(&path, &blob()).unwrap();
        let loaded: Blob = read_json(&path).unwrap();
        assert_eq!(loaded, blob());
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<Blob, _> = read_json(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");

        write_json_atomic(&path, &blob()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("blob.tmp").exists());
    }

    #[test]
    fn test_write_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("blob.json");

        write_json_atomic(&path, &blob()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_remove_file_if_exists_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");

        remove_file_if_exists(&path).unwrap();

        fs::write(&path, "{}").unwrap();
        remove_file_if_exists(&path).unwrap();
        assert!(!path.exists());
        remove_file_if_exists(&path).unwrap();
    }
}
