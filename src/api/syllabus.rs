// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Syllabus parsing, summarization, and retrieval handlers.
//!
//! The two AI-backed endpoints always operate on the session's own user;
//! the retrieval endpoint is additionally gated by the ownership check on
//! the `{user}` path segment.

use axum::{
    extract::{Form, Path, State},
    Json,
};
use tracing::{debug, error};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{
        ParseSyllabusForm, ParseSyllabusResponse, SummarizeSyllabusRequest,
        SummarizeSyllabusResponse, Syllabus,
    },
    state::AppState,
    storage::DocumentRepository,
};

pub async fn parse_syllabus(
    State(state): State<AppState>,
    Auth(user): Auth,
    Form(form): Form<ParseSyllabusForm>,
) -> Result<Json<ParseSyllabusResponse>, ApiError> {
    // An absent field and a blank one are the same failure.
    let syllabus_text = form.syllabus_text.unwrap_or_default();
    if syllabus_text.trim().is_empty() {
        return Err(ApiError::bad_request("No syllabus text provided"));
    }

    if let Some(filename) = &form.filename {
        debug!(username = %user.username, filename, "parsing uploaded syllabus");
    }

    let parsed = state
        .ai
        .parse_syllabus(&syllabus_text)
        .await
        .map_err(|e| {
            error!(username = %user.username, error = %e, "syllabus parsing failed");
            ApiError::internal(format!("Failed to parse syllabus with AI: {e}"))
        })?;

    DocumentRepository::new(&state.storage).set_syllabus(&user.username, &parsed)?;

    Ok(Json(ParseSyllabusResponse {
        message: "Syllabus parsed successfully".to_string(),
        parsed_data: parsed,
    }))
}

pub async fn summarize_syllabus(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<SummarizeSyllabusRequest>,
) -> Result<Json<SummarizeSyllabusResponse>, ApiError> {
    let Some(parsed_syllabus) = request.parsed_syllabus else {
        return Err(ApiError::bad_request(
            "No parsed syllabus data provided for summarization",
        ));
    };

    let summarized = state
        .ai
        .summarize_syllabus(&parsed_syllabus)
        .await
        .map_err(|e| {
            error!(username = %user.username, error = %e, "syllabus summarization failed");
            ApiError::internal(format!("Failed to summarize syllabus with AI: {e}"))
        })?;

    DocumentRepository::new(&state.storage).set_summary(&user.username, &summarized)?;

    Ok(Json(SummarizeSyllabusResponse {
        message: "Syllabus summarized successfully".to_string(),
        summarized_data: summarized,
    }))
}

pub async fn get_syllabus(
    State(state): State<AppState>,
    Auth(user): Auth,
    Path(username): Path<String>,
) -> Result<Json<Syllabus>, ApiError> {
    user.ensure_owns(&username)?;

    let syllabus = DocumentRepository::new(&state.storage)
        .syllabus(&username)?
        .ok_or_else(|| ApiError::not_found("Syllabus not found for this user"))?;

    Ok(Json(syllabus))
}
