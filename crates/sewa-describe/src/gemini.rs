// crates/sewa-describe/src/gemini.rs
//
// Description generation over the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use sewa_core::traits::DescriptionGenerator;

use crate::{EMPTY_ANSWER, GENERATION_FAILED, NOT_CONFIGURED};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Why a generation attempt produced no text. Never leaves this crate's
/// `describe`; callers only see the placeholder.
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Calls a hosted model to write a listing blurb.
#[derive(Debug, Clone)]
pub struct GeminiDescriber {
    /// `None` (or blank) short-circuits to the not-configured placeholder.
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl GeminiDescriber {
    pub fn new(api_key: Option<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client,
        }
    }

    /// Point at a different API root (proxies, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn request(&self, api_key: &str, prompt: String) -> Result<Option<String>, DescribeError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
        };
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DescribeError::Status(status));
        }
        let text = resp.text().await?;
        parse_answer(&text)
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriber {
    async fn describe(&self, title: &str, category: &str, location: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Description requested but no API key is configured");
            return NOT_CONFIGURED.to_string();
        };

        match self.request(api_key, listing_prompt(title, category, location)).await {
            Ok(Some(text)) => {
                tracing::info!(model = %self.model, title, "Generated listing description");
                text
            }
            Ok(None) => {
                tracing::warn!(model = %self.model, title, "Model returned no text");
                EMPTY_ANSWER.to_string()
            }
            Err(e) => {
                tracing::warn!(model = %self.model, title, "Description generation failed: {}", e);
                GENERATION_FAILED.to_string()
            }
        }
    }
}

/// Prompt sent for one listing.
pub fn listing_prompt(title: &str, category: &str, location: &str) -> String {
    format!(
        "You are an assistant for a rental marketplace called 'SewaLokal' in Malaysia.\n\
         Write a short, attractive, and professional listing description (in Bahasa Melayu) \
         for an item being rented out.\n\
         \n\
         Item: {}\n\
         Category: {}\n\
         Location: {}\n\
         \n\
         Keep it under 50 words. Focus on utility and condition. Do not invent specific \
         defects, just say it is in good condition.\n\
         Tone: Friendly and trustworthy.",
        title, category, location
    )
}

/// Pull the answer text out of a `generateContent` response body.
///
/// Returns `Ok(None)` when the body is well-formed but carries no text.
pub fn parse_answer(body: &str) -> Result<Option<String>, DescribeError> {
    let resp: GenerateResponse = serde_json::from_str(body)?;
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_listing() {
        let prompt = listing_prompt("Heavy Duty Drill Bosch", "Tools & Hardware", "Precint 9");
        assert!(prompt.contains("Item: Heavy Duty Drill Bosch"));
        assert!(prompt.contains("Category: Tools & Hardware"));
        assert!(prompt.contains("Location: Precint 9"));
        assert!(prompt.contains("Bahasa Melayu"));
        assert!(prompt.contains("under 50 words"));
    }

    #[test]
    fn parse_joins_parts_of_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Gerudi Bosch "}, {"text": "dalam keadaan baik.\n"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"totalTokenCount": 42}
        }"#;
        assert_eq!(
            parse_answer(body).unwrap().as_deref(),
            Some("Gerudi Bosch dalam keadaan baik.")
        );
    }

    #[test]
    fn parse_without_text_is_none() {
        assert_eq!(parse_answer(r#"{"candidates": []}"#).unwrap(), None);
        assert_eq!(parse_answer(r#"{}"#).unwrap(), None);
        assert_eq!(
            parse_answer(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap(),
            None
        );
        assert_eq!(
            parse_answer(r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#).unwrap(),
            None
        );
    }

    #[test]
    fn parse_malformed_body_is_an_error() {
        assert!(matches!(
            parse_answer("<html>502</html>"),
            Err(DescribeError::Parse(_))
        ));
    }

    #[test]
    fn blank_key_counts_as_unconfigured() {
        let gen = GeminiDescriber::new(Some("  ".to_string()), DEFAULT_MODEL, Duration::from_secs(5));
        assert!(!gen.is_configured());
        assert_eq!(gen.model(), "gemini-2.5-flash");
        assert_eq!(
            gen.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_returns_placeholder() {
        let gen = GeminiDescriber::new(None, DEFAULT_MODEL, Duration::from_secs(5));
        let text = gen.describe("Khemah", "Camping & Outdoor", "Tasek").await;
        assert_eq!(text, NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_placeholder() {
        let gen = GeminiDescriber::new(Some("test-key".to_string()), DEFAULT_MODEL, Duration::from_secs(2))
            .with_endpoint("http://127.0.0.1:9/");
        let text = gen.describe("Khemah", "Camping & Outdoor", "Tasek").await;
        assert_eq!(text, GENERATION_FAILED);
    }
}
