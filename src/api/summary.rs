// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Summary retrieval handler.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    auth::Auth, error::ApiError, models::SyllabusSummary, state::AppState,
    storage::DocumentRepository,
};

pub async fn get_summary(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(username): Path<String>,
) -> Result<Json<SyllabusSummary>, ApiError> {
    user.ensure_owns(&username)?;

    let summary = DocumentRepository::new(&state.storage)
        .summary(&username)?
        .ok_or_else(|| ApiError::not_found("Summary not found for this user"))?;

    Ok(Json(summary))
}
