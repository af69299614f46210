// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::ai::SyllabusAi;
use crate::auth::SessionStore;
use crate::storage::FileStorage;

#[derive(Clone)]
pub struct AppState {
    /// Flat-file storage backend; injectable root so tests use a scratch dir.
    pub storage: FileStorage,
    /// In-memory session table.
    pub sessions: SessionStore,
    /// AI transform service; a trait object so tests substitute a mock.
    pub ai: Arc<dyn SyllabusAi>,
}

impl AppState {
    pub fn new(storage: FileStorage, ai: Arc<dyn SyllabusAi>) -> Self {
        Self {
            storage,
            sessions: SessionStore::new(),
            ai,
        }
    }
}
