// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Google Gemini API provider implementation
//!
//! Implements the TextGenerator trait over the `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::common::{parse_retry_after_seconds, server_error, transport_error};
use crate::error::{ApiError, CopysmithError, Result};
use crate::llm::provider::TextGenerator;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_URL)
    }

    /// Create with a custom base URL
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Bound every request by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body
    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }

    /// Parse an error response
    ///
    /// # Arguments
    /// * `status` - HTTP status code
    /// * `body` - Response body
    /// * `retry_after` - Optional Retry-After header value in seconds
    fn parse_error(&self, status: u16, body: &str, retry_after: Option<u64>) -> CopysmithError {
        let (message, error_status, key_invalid) =
            match serde_json::from_str::<GeminiErrorEnvelope>(body) {
                Ok(envelope) => {
                    let key_invalid = envelope
                        .error
                        .details
                        .iter()
                        .any(|detail| detail.reason.as_deref() == Some("API_KEY_INVALID"));
                    (envelope.error.message, envelope.error.status, key_invalid)
                }
                Err(_) => (body.to_string(), String::new(), false),
            };

        let api_error = match (status, error_status.as_str()) {
            // Bad keys come back as 400 INVALID_ARGUMENT with the reason in details
            _ if key_invalid => ApiError::AuthenticationFailed,
            (401 | 403, _) | (_, "UNAUTHENTICATED" | "PERMISSION_DENIED") => {
                ApiError::AuthenticationFailed
            }
            (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                // Use Retry-After header if available, otherwise default to 10 seconds
                let secs = u32::try_from(retry_after.unwrap_or(10)).unwrap_or(u32::MAX);
                ApiError::RateLimited(secs)
            }
            (404, _) | (_, "NOT_FOUND") => ApiError::ModelNotFound(self.model.clone()),
            (400, _) | (_, "INVALID_ARGUMENT" | "FAILED_PRECONDITION") => {
                ApiError::InvalidRequest(message)
            }
            _ => return server_error(status, message),
        };

        CopysmithError::Api(api_error)
    }

    /// Pull the generated text out of a successful response
    fn extract_text(response: GeminiResponse) -> Result<String> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason);
            return Err(match reason {
                Some(reason) => CopysmithError::Api(ApiError::Blocked(reason)),
                None => CopysmithError::Api(ApiError::InvalidResponse(
                    "response contained no candidates".to_string(),
                )),
            });
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(match candidate.finish_reason.as_deref() {
                Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
                    CopysmithError::Api(ApiError::Blocked(reason.to_string()))
                }
                _ => CopysmithError::Api(ApiError::InvalidResponse(
                    "response contained no text".to_string(),
                )),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = Self::build_request(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            // Extract Retry-After header before consuming response body
            let retry_after = parse_retry_after_seconds(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(self.parse_error(status, &body, retry_after));
        }

        let text = response.text().await.map_err(transport_error)?;
        let api_response: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| CopysmithError::Api(ApiError::InvalidResponse(e.to_string())))?;

        Self::extract_text(api_response)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}
