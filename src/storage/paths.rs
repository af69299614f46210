// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the persistent storage layout.

use std::path::{Path, PathBuf};

/// Storage path utilities for the data directory.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DATA_DIR)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all persisted data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== Credential Paths ==========

    /// Path to the credential table (username → encoded password).
    pub fn users_file(&self) -> PathBuf {
        self.root.join("users.json")
    }

    // ========== User Document Paths ==========

    /// Directory containing all per-user documents.
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join("documents")
    }

    /// Path to one of a user's documents, named `{username}_{kind}.json`.
    pub fn user_document(&self, username: &str, kind: &str) -> PathBuf {
        self.documents_dir().join(format!("{username}_{kind}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_use_data_root() {
        let paths = StoragePaths::default();
        assert_eq!(paths.root(), Path::new("data"));
    }

    #[test]
    fn custom_root_for_testing() {
        let paths = StoragePaths::new("/tmp/test-data");
        assert_eq!(paths.root(), Path::new("/tmp/test-data"));
        assert_eq!(
            paths.users_file(),
            PathBuf::from("/tmp/test-data/users.json")
        );
    }

    #[test]
    fn document_paths_follow_naming_convention() {
        let paths = StoragePaths::new("/tmp/test-data");
        assert_eq!(
            paths.documents_dir(),
            PathBuf::from("/tmp/test-data/documents")
        );
        assert_eq!(
            paths.user_document("alice", "syllabus"),
            PathBuf::from("/tmp/test-data/documents/alice_syllabus.json")
        );
        assert_eq!(
            paths.user_document("alice", "progress"),
            PathBuf::from("/tmp/test-data/documents/alice_progress.json")
        );
        assert_eq!(
            paths.user_document("alice", "summary"),
            PathBuf::from("/tmp/test-data/documents/alice_summary.json")
        );
    }
}
