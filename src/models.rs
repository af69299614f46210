// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Domain models and request/response bodies.
//!
//! The syllabus and summary trees mirror the JSON schemas the AI service is
//! prompted to produce. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Progress documents are flat JSON objects with caller-defined keys.
/// An empty map is a valid state distinct from "no progress stored yet".
pub type ProgressMap = serde_json::Map<String, Value>;

/// Structured syllabus: subjects → units → topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Syllabus {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub subject_name: String,
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub unit_name: String,
    pub topics: Vec<String>,
}

/// AI-generated prose summaries keyed to the syllabus structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusSummary {
    pub overall_syllabus_summary: String,
    pub subjects_detailed_summaries: Vec<SubjectSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub subject_name: String,
    pub subject_summary: String,
    pub topic_summaries: Vec<TopicSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub topic_name: String,
    pub summary: String,
}

// ========== Request Bodies ==========

/// Credential fields are optional at the wire level: an absent or null
/// field must surface as a 400 from the handler, not as a body
/// deserialization rejection (which axum reports as 422).
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

/// Form-encoded body of `POST /api/parse_syllabus`. `syllabus_text` is
/// optional at the wire level for the same 400-not-422 reason as the
/// credential requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseSyllabusForm {
    #[serde(default)]
    pub syllabus_text: Option<String>,
    /// Original upload file name; accepted for the frontend's benefit,
    /// not persisted with the parsed document.
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeSyllabusRequest {
    #[serde(default)]
    pub parsed_syllabus: Option<Syllabus>,
}

// ========== Response Bodies ==========

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckAuthResponse {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParseSyllabusResponse {
    pub message: String,
    pub parsed_data: Syllabus,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarizeSyllabusResponse {
    pub message: String,
    pub summarized_data: SyllabusSummary,
}
