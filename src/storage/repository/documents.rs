// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-user document repository.
//!
//! Each user has up to three independent documents (syllabus, progress,
//! summary), each in its own `{username}_{kind}.json` file. Reads resolve a
//! missing syllabus/summary to `None` and missing progress to an empty map.
//! Writes replace the target file wholesale; there is no atomicity across
//! the three files (see the module docs in `storage`).

use tracing::error;

use crate::models::{ProgressMap, Syllabus, SyllabusSummary};

use super::super::{FileStorage, StorageResult};

/// The three per-user document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Syllabus,
    Progress,
    Summary,
}

impl DocumentKind {
    /// File-name component for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Syllabus => "syllabus",
            DocumentKind::Progress => "progress",
            DocumentKind::Summary => "summary",
        }
    }
}

/// A user's full document set as held in memory.
///
/// `progress` is always present (empty map when nothing is stored);
/// syllabus and summary are optional. Handlers go through the per-kind
/// accessors; the wholesale pair serves bulk callers and the tests.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(dead_code)]
pub struct UserDocumentSet {
    pub syllabus: Option<Syllabus>,
    pub progress: ProgressMap,
    pub summary: Option<SyllabusSummary>,
}

/// Repository for per-user document operations over flat-file storage.
pub struct DocumentRepository<'a> {
    storage: &'a FileStorage,
}

impl<'a> DocumentRepository<'a> {
    /// Create a new DocumentRepository.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self { storage }
    }

    fn document_path(&self, username: &str, kind: DocumentKind) -> std::path::PathBuf {
        self.storage.paths().user_document(username, kind.as_str())
    }

    /// Load all three documents for a user.
    ///
    /// Missing files never fail; only real I/O or decode errors propagate.
    #[allow(dead_code)]
    pub fn load_all(&self, username: &str) -> StorageResult<UserDocumentSet> {
        Ok(UserDocumentSet {
            syllabus: self.syllabus(username)?,
            progress: self.progress(username)?,
            summary: self.summary(username)?,
        })
    }

    /// Persist every non-absent field of a document set, best-effort.
    ///
    /// Each field is written independently; one field's failure is logged
    /// and does not block the others. The first failure is returned after
    /// all writes were attempted. Progress is written even when empty,
    /// since the empty map is a valid state distinct from absent.
    #[allow(dead_code)]
    pub fn save_all(&self, username: &str, set: &UserDocumentSet) -> StorageResult<()> {
        let mut first_error = None;

        if let Some(syllabus) = &set.syllabus {
            if let Err(e) = self.set_syllabus(username, syllabus) {
                error!(username, error = %e, "failed to persist syllabus");
                first_error.get_or_insert(e);
            }
        }

        if let Err(e) = self.set_progress(username, &set.progress) {
            error!(username, error = %e, "failed to persist progress");
            first_error.get_or_insert(e);
        }

        if let Some(summary) = &set.summary {
            if let Err(e) = self.set_summary(username, summary) {
                error!(username, error = %e, "failed to persist summary");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Get a user's stored syllabus, if any.
    pub fn syllabus(&self, username: &str) -> StorageResult<Option<Syllabus>> {
        self.storage
            .read_json_opt(self.document_path(username, DocumentKind::Syllabus))
    }

    /// Replace a user's syllabus wholesale.
    pub fn set_syllabus(&self, username: &str, syllabus: &Syllabus) -> StorageResult<()> {
        self.storage
            .write_json(self.document_path(username, DocumentKind::Syllabus), syllabus)
    }

    /// Get a user's progress map; absent resolves to an empty map.
    pub fn progress(&self, username: &str) -> StorageResult<ProgressMap> {
        Ok(self
            .storage
            .read_json_opt(self.document_path(username, DocumentKind::Progress))?
            .unwrap_or_default())
    }

    /// Replace a user's progress map wholesale.
    pub fn set_progress(&self, username: &str, progress: &ProgressMap) -> StorageResult<()> {
        self.storage
            .write_json(self.document_path(username, DocumentKind::Progress), progress)
    }

    /// Get a user's stored summary, if any.
    pub fn summary(&self, username: &str) -> StorageResult<Option<SyllabusSummary>> {
        self.storage
            .read_json_opt(self.document_path(username, DocumentKind::Summary))
    }

    /// Replace a user's summary wholesale.
    pub fn set_summary(&self, username: &str, summary: &SyllabusSummary) -> StorageResult<()> {
        self.storage
            .write_json(self.document_path(username, DocumentKind::Summary), summary)
    }
}
