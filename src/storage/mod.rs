// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Persistent Storage Module
//!
//! Flat-file JSON persistence for credentials and per-user documents.
//! Repositories are read-through/write-through: every operation goes to the
//! filesystem, so there is no process-wide mutable cache to keep coherent.
//!
//! ## Storage Layout
//!
//! ```text
//! {DATA_DIR}/
//!   users.json                          # credential table (username → encoded password)
//!   documents/
//!     {username}_syllabus.json          # structured syllabus (optional)
//!     {username}_progress.json          # flat key/value progress map (optional)
//!     {username}_summary.json           # AI-generated summaries (optional)
//! ```
//!
//! ## Consistency
//!
//! Each file is written atomically (temp + rename), but the three document
//! files for a user are independent: a crash between writes can leave a
//! mixed-generation set in which each file is individually valid. This is a
//! documented limitation, not a guarantee to code against.

pub mod files;
pub mod paths;
pub mod repository;

pub use files::{FileStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{
    CredentialError, CredentialRepository, DocumentKind, DocumentRepository, UserDocumentSet,
};
