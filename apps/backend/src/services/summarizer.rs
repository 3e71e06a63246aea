//! Note summarization through the Gemini `generateContent` API.
//!
//! The upstream model is asked for a JSON object with `summary` and
//! `keyPoints`; the reply text is unwrapped from the candidate envelope,
//! stripped of any Markdown code fence and parsed.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SummarizerConfig;

const SUMMARY_PROMPT: &str = "You are a helpful learning assistant. Summarize the following notes \
into concise points and extract 3-5 key learnings. Respond in a clean JSON format with two keys: \
a 'summary' (string) and 'keyPoints' (an array of strings). Do not include any other text or \
formatting in your response.\n\nNotes to summarize:\n";

/// Summarizer errors.
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Gemini API request failed with status: {status}")]
    Upstream { status: u16, body: String },

    #[error("The AI model did not return a valid response (no candidates).")]
    NoCandidates { body: String },

    #[error("The AI model returned an unexpected response structure (missing text field).")]
    MissingText { body: String },

    #[error("Invalid JSON from AI model: {reason}")]
    InvalidJson { reason: String, body: String },
}

impl SummarizerError {
    /// Raw upstream response text, when one was received.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            Self::NotConfigured | Self::Network(_) => None,
            Self::Upstream { body, .. }
            | Self::NoCandidates { body }
            | Self::MissingText { body }
            | Self::InvalidJson { body, .. } => Some(body),
        }
    }
}

/// Summary and key points extracted from a note.
///
/// Serialized as `{summary, keyPoints}`, the shape the model is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub summary: String,
    #[serde(default, rename = "keyPoints", alias = "key_points")]
    pub key_points: Vec<String>,
}

/// Anything that can turn note text into a [`NoteSummary`].
#[async_trait]
pub trait NoteSummarizer: Send + Sync {
    async fn summarize(&self, content: &str) -> Result<NoteSummary, SummarizerError>;
}

// === Upstream wire types ===

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini-backed summarizer.
pub struct GeminiSummarizer {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiSummarizer {
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizerError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NoteSummarizer for GeminiSummarizer {
    async fn summarize(&self, content: &str) -> Result<NoteSummary, SummarizerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummarizerError::NotConfigured)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: format!("{SUMMARY_PROMPT}{content}"),
                }],
            }],
        };

        tracing::debug!(model = %self.model, chars = content.len(), "Requesting note summary");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizerError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SummarizerError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SummarizerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        parse_generate_content(&body)
    }
}

/// Reshape a raw `generateContent` response body into a [`NoteSummary`].
pub fn parse_generate_content(raw: &str) -> Result<NoteSummary, SummarizerError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(raw).map_err(|e| SummarizerError::InvalidJson {
            reason: e.to_string(),
            body: raw.to_string(),
        })?;

    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| SummarizerError::NoCandidates {
            body: raw.to_string(),
        })?;

    let text = candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| SummarizerError::MissingText {
            body: raw.to_string(),
        })?;

    serde_json::from_str(strip_code_fence(&text)).map_err(|e| SummarizerError::InvalidJson {
        reason: e.to_string(),
        body: raw.to_string(),
    })
}

/// Remove a surrounding ```` ```json ```` / ```` ``` ```` fence from model output.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
