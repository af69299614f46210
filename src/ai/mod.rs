// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! AI transform service seam.
//!
//! The backend treats text-to-structured-data work as an opaque external
//! collaborator: raw text in, schema-shaped JSON out. [`SyllabusAi`] is the
//! seam; [`gemini::GeminiClient`] is the production implementation and
//! tests substitute a mock. Failures are uniform: one error type, no retry,
//! no distinction between transient and permanent causes.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Syllabus, SyllabusSummary};

/// Upstream AI service errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Required configuration (API key) absent
    #[error("Gemini configuration missing: {0}")]
    MissingConfig(String),

    /// Transport-level failure talking to the service
    #[error("Gemini request failed: {0}")]
    Request(String),

    /// Service answered but the payload did not match the expected shape
    #[error("Gemini response was invalid: {0}")]
    InvalidResponse(String),
}

/// Text-to-structured-data operations delegated to the AI service.
#[async_trait]
pub trait SyllabusAi: Send + Sync {
    /// Parse free-form syllabus text into the structured syllabus schema.
    ///
    /// Empty or unparseable input should still come back as an
    /// empty-but-schema-valid structure (zero subjects) when the model can
    /// manage it; anything else is an error.
    async fn parse_syllabus(&self, raw_text: &str) -> Result<Syllabus, AiError>;

    /// Generate prose summaries for a structured syllabus.
    async fn summarize_syllabus(&self, syllabus: &Syllabus) -> Result<SyllabusSummary, AiError>;
}

pub use gemini::GeminiClient;
