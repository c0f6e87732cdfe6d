//! Generative Language API client
//!
//! Wire types and a thin request helper for the `generateContent` endpoint.
//! Request and response sides are modeled separately: the request is built by
//! us and always well-formed, while the response envelope is deserialized
//! tolerantly so a missing nested field never aborts parsing.

use crate::config::Config;
use crate::http::get_client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Request payload for the generateContent API
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// A content block in the request: a role plus one or more text parts
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-part content block with the given role
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Create a user content block
    pub fn user(text: impl Into<String>) -> Self {
        Self::new("user", text)
    }
}

/// A single text part of a content block
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Response envelope of the generateContent API
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// One generated response option
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// The content of a candidate
#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A part of a candidate's content. Non-text parts deserialize with
/// `text: None` rather than failing.
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Send a generateContent request
///
/// The key travels as a query parameter on the endpoint URL, which is how
/// this API authenticates. Do not log the URL.
pub async fn generate_content(
    config: &Config,
    api_key: &str,
    contents: Vec<Content>,
) -> Result<GenerateContentResponse> {
    let client = get_client();

    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.api_base_url.trim_end_matches('/'),
        config.model,
        api_key
    );

    let request = GenerateContentRequest { contents };

    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await
        .context("Failed to send request to Generative Language API")?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        anyhow::bail!("Generative Language API error {}: {}", status, text);
    }

    response
        .json()
        .await
        .context("Failed to parse Generative Language API response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = GenerateContentRequest {
            contents: vec![
                Content::new("model", "instructions"),
                Content::user("Items: Milk"),
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "model");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "instructions");
        assert_eq!(json["contents"][1]["role"], "user");
        assert_eq!(json["contents"][1]["parts"][0]["text"], "Items: Milk");
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "{\"items\": []}"}]
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some(r#"{"items": []}"#));
    }

    #[test]
    fn test_response_text_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_response_text_candidate_without_content() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_response_text_non_text_part() {
        let raw = r#"{"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), None);
    }
}
