//! Client for the external text-generation service.
//!
//! Insights are a one-shot request/response: the result is displayed and
//! discarded, never written back into the store. Failures at this boundary
//! are logged and converted to an empty result; they are never propagated
//! into the rest of the application.

use std::{future::Future, time::Duration};

use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::{Config, GlowError, Result};

// ── Wire types ──────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

/// Response body of a `generateContent` call. Every level defaults so a
/// structurally sparse response deserializes rather than erroring.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Extracts the generated text from a response: the text parts of the
/// first candidate, joined. Returns `None` when the response carries no
/// usable text.
pub fn response_text(response: &GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parses the action-extraction response text into a list of items.
///
/// Missing, empty, or malformed text all produce an empty list; a parse
/// failure is handled identically to a service failure rather than being
/// allowed to surface as a fault.
pub fn parse_action_items(text: Option<&str>) -> Vec<String> {
    let raw = match text {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(e) => {
            error!("Action extraction returned malformed JSON: {}", e);
            Vec::new()
        }
    }
}

// ── Client ──────────────────────────────────────────

/// HTTP client for the text-generation service.
#[derive(Clone)]
pub struct InsightClient {
    http: reqwest::Client,
    config: Config,
}

impl InsightClient {
    /// Builds a client with the configured per-request timeout.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Asks for a concise 1-2 sentence insight for the given note content.
    ///
    /// Any failure (missing key, transport, non-success status, malformed
    /// body) is logged and collapsed to `None`; the caller only ever sees
    /// an optional string.
    pub async fn summarize(&self, content: &str) -> Option<String> {
        let prompt = format!(
            "Summarize the following note content into a concise 1-2 sentence \
             \"Glow Insight\":\n\n{}",
            content
        );

        match self.generate(prompt, None).await {
            Ok(text) => text,
            Err(e) => {
                error!("Summarization failed: {}", e);
                None
            }
        }
    }

    /// Asks for actionable items in the given note content, constrained to
    /// a JSON array of strings. Failures and malformed responses produce
    /// an empty list, never a fault.
    pub async fn extract_actions(&self, content: &str) -> Vec<String> {
        let prompt = format!(
            "Identify any actionable items or tasks in this note. Return them \
             as a JSON array of strings. Content: {}",
            content
        );

        let schema = GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: json!({
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }),
        };

        match self.generate(prompt, Some(schema)).await {
            Ok(text) => parse_action_items(text.as_deref()),
            Err(e) => {
                error!("Action extraction failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Performs one `generateContent` round trip and extracts the text.
    async fn generate(
        &self,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> Result<Option<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GlowError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        };

        debug!("Requesting generation from {}", self.config.generate_url());
        let response = self
            .http
            .post(self.config.generate_url())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GlowError::ServiceStatus { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(response_text(&parsed))
    }
}

// ── In-flight request tracking ──────────────────────

/// Tracks the single in-flight insight request, keyed by note id.
///
/// Starting a new request aborts the previous one, so a late result is
/// discarded instead of being displayed against a note the user has moved
/// away from.
pub struct InsightTracker {
    inflight: Option<Inflight>,
}

struct Inflight {
    note_id: String,
    handle: JoinHandle<Option<String>>,
}

impl InsightTracker {
    pub fn new() -> Self {
        Self { inflight: None }
    }

    /// Id of the note with an in-flight request, if any.
    pub fn inflight_note_id(&self) -> Option<&str> {
        self.inflight.as_ref().map(|i| i.note_id.as_str())
    }

    /// Starts a request for `note_id`, aborting any previous in-flight
    /// request regardless of which note it belonged to.
    pub fn start<F>(&mut self, note_id: impl Into<String>, request: F)
    where
        F: Future<Output = Option<String>> + Send + 'static,
    {
        if let Some(previous) = self.inflight.take() {
            debug!(
                "Discarding in-flight insight request for note {}",
                previous.note_id
            );
            previous.handle.abort();
        }

        self.inflight = Some(Inflight {
            note_id: note_id.into(),
            handle: tokio::spawn(request),
        });
    }

    /// Waits for the in-flight request and returns its result, but only if
    /// it still belongs to `note_id`; a request for a different note is
    /// aborted and yields `None`. Cancelled tasks also yield `None`.
    pub async fn wait(&mut self, note_id: &str) -> Option<String> {
        let inflight = self.inflight.take()?;

        if inflight.note_id != note_id {
            debug!(
                "Dropping insight result for note {} (now waiting on {})",
                inflight.note_id, note_id
            );
            inflight.handle.abort();
            return None;
        }

        match inflight.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => {
                debug!("Insight request for note {} was cancelled", note_id);
                None
            }
            Err(e) => {
                error!("Insight task for note {} failed: {}", note_id, e);
                None
            }
        }
    }
}

impl Default for InsightTracker {
    fn default() -> Self {
        Self::new()
    }
}
