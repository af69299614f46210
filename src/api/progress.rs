// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Progress read/replace handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{MessageResponse, ProgressMap},
    state::AppState,
    storage::DocumentRepository,
};

/// Absent progress reads as an empty map, never 404.
pub async fn get_progress(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(username): Path<String>,
) -> Result<Json<ProgressMap>, ApiError> {
    user.ensure_owns(&username)?;

    let progress = DocumentRepository::new(&state.storage).progress(&username)?;
    Ok(Json(progress))
}

/// Replace the progress document wholesale. The body must be a flat JSON
/// object; anything else is invalid input.
pub async fn update_progress(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(username): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<MessageResponse>, ApiError> {
    user.ensure_owns(&username)?;

    let Value::Object(progress) = body else {
        return Err(ApiError::bad_request("Invalid progress data format"));
    };

    DocumentRepository::new(&state.storage).set_progress(&username, &progress)?;
    Ok(Json(MessageResponse::new("Progress updated successfully")))
}
