// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Gemini `generateContent` integration.
//!
//! One blocking-style request per operation: no retry, no streaming, no
//! caching beyond the copy the caller persists. The model is asked for
//! `application/json` output and the reply text is parsed into the target
//! schema; any deviation surfaces as [`AiError::InvalidResponse`].

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::models::{Syllabus, SyllabusSummary};

use super::{AiError, SyllabusAi};

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_base_url: String,
    model: String,
    api_key: String,
    http: Client,
}

impl GeminiClient {
    /// Build a client from the environment (`GEMINI_API_KEY` required;
    /// `GEMINI_API_BASE_URL` and `GEMINI_MODEL` optional overrides).
    pub fn from_env() -> Result<Self, AiError> {
        let api_base_url = env_or_default("GEMINI_API_BASE_URL", DEFAULT_API_BASE_URL);
        let model = env_or_default("GEMINI_MODEL", DEFAULT_MODEL);
        let api_key = env_required("GEMINI_API_KEY")?;

        Ok(Self::new(api_base_url, model, api_key))
    }

    /// Fallback client carrying no API key. Requests fail upstream, the
    /// same as an unconfigured deployment of the original service.
    pub fn unconfigured() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_MODEL, String::new())
    }

    /// Build a client with explicit configuration (used by tests).
    pub fn new(
        api_base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Send one prompt and return the JSON document the model produced.
    async fn generate_json(&self, prompt: String) -> Result<Value, AiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base_url, self.model, self.api_key
        );

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "response_mime_type": "application/json" }
        });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Request(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        debug!(model = %self.model, "received Gemini response");
        extract_json_payload(&body)
    }
}

/// Pull the generated text out of a `generateContent` response and parse
/// it as JSON.
fn extract_json_payload(body: &Value) -> Result<Value, AiError> {
    let text = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            AiError::InvalidResponse("missing candidate text in response".to_string())
        })?;

    serde_json::from_str(text)
        .map_err(|e| AiError::InvalidResponse(format!("candidate text is not JSON: {e}")))
}

/// Prompt instructing the model to structure raw syllabus text.
fn parse_prompt(raw_text: &str) -> String {
    format!(
        r#"Parse the following syllabus text into a structured JSON object. The JSON should strictly conform to this schema:
{{
  "subjects": [
    {{
      "subjectName": "string",
      "units": [
        {{
          "unitName": "string",
          "topics": ["string"]
        }}
      ]
    }}
  ]
}}

If you cannot extract units for a subject, provide an empty array for "units". If a unit has no explicit topics, provide an empty array for "topics".
The syllabus text is:

{raw_text}"#
    )
}

/// Prompt instructing the model to summarize a structured syllabus.
fn summarize_prompt(syllabus: &Syllabus) -> Result<String, AiError> {
    let syllabus_json = serde_json::to_string_pretty(syllabus)
        .map_err(|e| AiError::Request(format!("failed to encode syllabus: {e}")))?;

    Ok(format!(
        r#"Generate a comprehensive overall syllabus summary and detailed summaries for each subject and its topics based on the following structured syllabus data. The output should be a JSON object strictly conforming to this schema:
{{
  "overallSyllabusSummary": "string",
  "subjectsDetailedSummaries": [
    {{
      "subjectName": "string",
      "subjectSummary": "string",
      "topicSummaries": [
        {{
          "topicName": "string",
          "summary": "string"
        }}
      ]
    }}
  ]
}}
The structured syllabus data is:

{syllabus_json}"#
    ))
}

#[async_trait]
impl SyllabusAi for GeminiClient {
    async fn parse_syllabus(&self, raw_text: &str) -> Result<Syllabus, AiError> {
        let document = self.generate_json(parse_prompt(raw_text)).await?;
        serde_json::from_value(document)
            .map_err(|e| AiError::InvalidResponse(format!("syllabus shape mismatch: {e}")))
    }

    async fn summarize_syllabus(&self, syllabus: &Syllabus) -> Result<SyllabusSummary, AiError> {
        let document = self.generate_json(summarize_prompt(syllabus)?).await?;
        serde_json::from_value(document)
            .map_err(|e| AiError::InvalidResponse(format!("summary shape mismatch: {e}")))
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_required(name: &str) -> Result<String, AiError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AiError::MissingConfig(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Subject, Unit};

    #[test]
    fn parse_prompt_embeds_schema_and_input() {
        let prompt = parse_prompt("Unit 1: Intro. Unit 2: Loops.");
        assert!(prompt.contains("\"subjectName\""));
        assert!(prompt.contains("\"unitName\""));
        assert!(prompt.contains("\"topics\""));
        assert!(prompt.contains("Unit 1: Intro. Unit 2: Loops."));
    }

    #[test]
    fn summarize_prompt_embeds_schema_and_syllabus() {
        let syllabus = Syllabus {
            subjects: vec![Subject {
                subject_name: "CS".to_string(),
                units: vec![Unit {
                    unit_name: "Unit 1".to_string(),
                    topics: vec!["Intro".to_string()],
                }],
            }],
        };

        let prompt = summarize_prompt(&syllabus).unwrap();
        assert!(prompt.contains("\"overallSyllabusSummary\""));
        assert!(prompt.contains("\"topicSummaries\""));
        assert!(prompt.contains("\"CS\""));
    }

    #[test]
    fn extract_json_payload_reads_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": r#"{"subjects": []}"# }]
                }
            }]
        });

        let value = extract_json_payload(&body).unwrap();
        assert_eq!(value, json!({ "subjects": [] }));
    }

    #[test]
    fn extract_json_payload_rejects_missing_candidates() {
        let err = extract_json_payload(&json!({})).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }

    #[test]
    fn extract_json_payload_rejects_non_json_text() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "sorry, I cannot do that" }] }
            }]
        });

        let err = extract_json_payload(&body).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }
}
