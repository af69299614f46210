// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Liveness endpoint with a storage probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub active_sessions: usize,
}

/// Write-read-delete probe against the data directory; a failing probe
/// means every persistence endpoint would fail too, so report 500.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.storage.health_check()?;

    Ok(Json(HealthResponse {
        status: "ok",
        active_sessions: state.sessions.session_count().await,
    }))
}
