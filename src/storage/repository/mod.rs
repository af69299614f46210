// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repositories over flat-file storage.

pub mod credentials;
pub mod documents;

pub use credentials::{CredentialError, CredentialRepository};
pub use documents::{DocumentKind, DocumentRepository, UserDocumentSet};
