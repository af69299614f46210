// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Flat-file JSON storage.
//!
//! Each persisted entity lives in its own JSON file under the data
//! directory. Individual files are written atomically (temp file + rename);
//! there is no atomicity or locking across files. Concurrent writers for
//! the same path are last-writer-wins.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::StoragePaths;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Entity not found (mapped by the API error layer, constructed by
    /// callers that need a typed absence)
    #[allow(dead_code)]
    #[error("not found: {0}")]
    NotFound(String),

    /// Entity already exists
    #[allow(dead_code)]
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Stored record exists but could not be decoded
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// File-backed storage rooted at the configured data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    paths: StoragePaths,
}

impl FileStorage {
    /// Open storage rooted at `paths`, creating the directory layout.
    ///
    /// Safe to call multiple times (idempotent).
    pub fn open(paths: StoragePaths) -> StorageResult<Self> {
        fs::create_dir_all(paths.root())?;
        fs::create_dir_all(paths.documents_dir())?;
        Ok(Self { paths })
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Check if the data directory is writable and readable.
    ///
    /// Performs a write-read-delete probe under the storage root.
    pub fn health_check(&self) -> StorageResult<()> {
        let test_file = self.paths.root().join(".health_check");
        let test_data = b"health_check_data";

        fs::write(&test_file, test_data)?;
        let read_data = fs::read(&test_file)?;
        fs::remove_file(&test_file)?;

        if read_data != test_data {
            return Err(StorageError::Corrupt(
                "health check data mismatch".to_string(),
            ));
        }

        Ok(())
    }

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Read a JSON file, resolving a missing file to `None`.
    ///
    /// Only real I/O or decode errors propagate.
    pub fn read_json_opt<T: DeserializeOwned>(
        &self,
        path: impl AsRef<Path>,
    ) -> StorageResult<Option<T>> {
        match File::open(path.as_ref()) {
            Ok(file) => {
                let reader = BufReader::new(file);
                Ok(Some(serde_json::from_reader(reader)?))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a file exists.
    #[allow(dead_code)]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    fn test_storage() -> (FileStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::open(StoragePaths::new(dir.path())).expect("open storage");
        (storage, dir)
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        id: String,
        value: i32,
    }

    #[test]
    fn open_creates_directories() {
        let (storage, _dir) = test_storage();
        assert!(storage.paths().root().exists());
        assert!(storage.paths().documents_dir().exists());
    }

    #[test]
    fn write_and_read_json() {
        let (storage, _dir) = test_storage();
        let data = TestData {
            id: "test-1".to_string(),
            value: 42,
        };

        let path = storage.paths().documents_dir().join("test.json");
        storage.write_json(&path, &data).unwrap();

        let read: TestData = storage.read_json(&path).unwrap();
        assert_eq!(read, data);
        assert!(storage.exists(&path));
    }

    #[test]
    fn read_json_opt_resolves_missing_to_none() {
        let (storage, _dir) = test_storage();
        let path = storage.paths().documents_dir().join("missing.json");

        let read: Option<TestData> = storage.read_json_opt(&path).unwrap();
        assert!(read.is_none());
    }

    #[test]
    fn read_json_opt_propagates_decode_errors() {
        let (storage, _dir) = test_storage();
        let path = storage.paths().documents_dir().join("garbage.json");
        fs::write(&path, b"not json at all").unwrap();

        let read: StorageResult<Option<TestData>> = storage.read_json_opt(&path);
        assert!(matches!(read, Err(StorageError::Json(_))));
    }

    #[test]
    fn write_json_replaces_existing_content() {
        let (storage, _dir) = test_storage();
        let path = storage.paths().documents_dir().join("replace.json");

        storage
            .write_json(
                &path,
                &TestData {
                    id: "a".into(),
                    value: 1,
                },
            )
            .unwrap();
        storage
            .write_json(
                &path,
                &TestData {
                    id: "b".into(),
                    value: 2,
                },
            )
            .unwrap();

        let read: TestData = storage.read_json(&path).unwrap();
        assert_eq!(read.id, "b");
        assert_eq!(read.value, 2);
        // No stray temp file left behind.
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn health_check_works() {
        let (storage, _dir) = test_storage();
        storage.health_check().expect("health check should pass");
    }
}
