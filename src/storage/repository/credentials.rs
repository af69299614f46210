// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential repository over `users.json`.
//!
//! Passwords are stored base64-encoded, NOT hashed: the credential file is
//! reversible and therefore not secret-safe at rest. This preserves the
//! historical on-disk format and login contract; see DESIGN.md before
//! changing it.
//!
//! Usernames double as document file-name stems, so they are restricted to
//! `[A-Za-z0-9_-]` with a maximum length of 64.

use std::collections::BTreeMap;

use base64ct::{Base64, Encoding};
use thiserror::Error;

use super::super::{FileStorage, StorageError, StorageResult};

/// Maximum accepted username length.
const MAX_USERNAME_LEN: usize = 64;

/// Credential operation errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Username or password missing/empty
    #[error("Username and password are required")]
    MissingFields,

    /// Username contains characters unsafe for a file-name stem
    #[error("Username may only contain letters, digits, '_' and '-' (max 64 characters)")]
    InvalidUsername,

    /// Username already registered
    #[error("Username already exists")]
    DuplicateUsername,

    /// Username unknown or password mismatch
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Stored password could not be decoded
    #[error("Stored credential for '{0}' is corrupt")]
    CorruptRecord(String),

    /// Underlying storage failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The on-disk credential table. A BTreeMap keeps the file diff-stable.
type CredentialTable = BTreeMap<String, String>;

/// Repository for credential operations over flat-file storage.
pub struct CredentialRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> CredentialRepository<'a> {
    /// Create a new CredentialRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    fn load_table(&self) -> StorageResult<CredentialTable> {
        Ok(self
            .storage
            .read_json_opt(self.storage.paths().users_file())?
            .unwrap_or_default())
    }

    fn save_table(&self, table: &CredentialTable) -> StorageResult<()> {
        self.storage
            .write_json(self.storage.paths().users_file(), table)
    }

    /// Register a new user, persisting the full table before returning.
    pub fn register(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        if username.is_empty() || password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        if !is_valid_username(username) {
            return Err(CredentialError::InvalidUsername);
        }

        let mut table = self.load_table()?;
        if table.contains_key(username) {
            return Err(CredentialError::DuplicateUsername);
        }

        table.insert(
            username.to_string(),
            Base64::encode_string(password.as_bytes()),
        );
        self.save_table(&table)?;
        Ok(())
    }

    /// Verify a username/password pair against the stored table.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), CredentialError> {
        let table = self.load_table()?;
        let encoded = table
            .get(username)
            .ok_or(CredentialError::InvalidCredentials)?;

        let decoded = Base64::decode_vec(encoded)
            .map_err(|_| CredentialError::CorruptRecord(username.to_string()))?;
        let stored = String::from_utf8(decoded)
            .map_err(|_| CredentialError::CorruptRecord(username.to_string()))?;

        if stored == password {
            Ok(())
        } else {
            Err(CredentialError::InvalidCredentials)
        }
    }
}

fn is_valid_username(username: &str) -> bool {
    username.len() <= MAX_USERNAME_LEN
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use tempfile::TempDir;

    fn test_storage() -> (FileStorage, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let storage = FileStorage::open(StoragePaths::new(dir.path())).expect("open storage");
        (storage, dir)
    }

    #[test]
    fn register_then_verify_succeeds() {
        let (storage, _dir) = test_storage();
        let repo = CredentialRepository::new(&storage);

        repo.register("alice", "pw1").unwrap();
        repo.verify("alice", "pw1").unwrap();
    }

    #[test]
    fn register_persists_across_repository_instances() {
        let (storage, _dir) = test_storage();
        CredentialRepository::new(&storage)
            .register("alice", "pw1")
            .unwrap();

        // A fresh repository reads the same file.
        CredentialRepository::new(&storage)
            .verify("alice", "pw1")
            .unwrap();
    }

    #[test]
    fn duplicate_username_rejected_regardless_of_password() {
        let (storage, _dir) = test_storage();
        let repo = CredentialRepository::new(&storage);

        repo.register("alice", "pw1").unwrap();
        let err = repo.register("alice", "other").unwrap_err();
        assert!(matches!(err, CredentialError::DuplicateUsername));
    }

    #[test]
    fn empty_fields_rejected() {
        let (storage, _dir) = test_storage();
        let repo = CredentialRepository::new(&storage);

        assert!(matches!(
            repo.register("", "pw").unwrap_err(),
            CredentialError::MissingFields
        ));
        assert!(matches!(
            repo.register("alice", "").unwrap_err(),
            CredentialError::MissingFields
        ));
    }

    #[test]
    fn unsafe_usernames_rejected() {
        let (storage, _dir) = test_storage();
        let repo = CredentialRepository::new(&storage);

        for bad in ["../etc/passwd", "a/b", "a b", "a.b", "é"] {
            assert!(
                matches!(
                    repo.register(bad, "pw").unwrap_err(),
                    CredentialError::InvalidUsername
                ),
                "expected InvalidUsername for {bad:?}"
            );
        }

        let too_long = "a".repeat(MAX_USERNAME_LEN + 1);
        assert!(matches!(
            repo.register(&too_long, "pw").unwrap_err(),
            CredentialError::InvalidUsername
        ));

        repo.register("Ok_user-123", "pw").unwrap();
    }

    #[test]
    fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (storage, _dir) = test_storage();
        let repo = CredentialRepository::new(&storage);

        repo.register("alice", "pw1").unwrap();

        assert!(matches!(
            repo.verify("alice", "wrong").unwrap_err(),
            CredentialError::InvalidCredentials
        ));
        assert!(matches!(
            repo.verify("nobody", "pw1").unwrap_err(),
            CredentialError::InvalidCredentials
        ));
    }

    #[test]
    fn corrupt_stored_password_surfaces_as_corrupt_record() {
        let (storage, _dir) = test_storage();

        let mut table = CredentialTable::new();
        table.insert("alice".to_string(), "!!! not base64 !!!".to_string());
        storage
            .write_json(storage.paths().users_file(), &table)
            .unwrap();

        let repo = CredentialRepository::new(&storage);
        assert!(matches!(
            repo.verify("alice", "anything").unwrap_err(),
            CredentialError::CorruptRecord(_)
        ));
    }

    #[test]
    fn stored_passwords_are_base64_encoded() {
        let (storage, _dir) = test_storage();
        CredentialRepository::new(&storage)
            .register("alice", "pw1")
            .unwrap();

        let table: CredentialTable = storage.read_json(storage.paths().users_file()).unwrap();
        assert_eq!(table["alice"], Base64::encode_string(b"pw1"));
    }
}
