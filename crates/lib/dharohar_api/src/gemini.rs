//! Client for the Gemini generateContent API.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RelayError;

/// Request body: a single-turn message list.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One message in a generateContent exchange.
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One text fragment of a message. Non-text parts deserialize with an
/// empty `text` and contribute nothing to the extracted reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Response body; fields we do not read are ignored.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

/// Client for one fixed generateContent endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }

    /// Sends the prompt as a single user-role message and returns the
    /// first candidate's concatenated text.
    ///
    /// Every failure mode (non-2xx status, transport error, undecodable
    /// body, empty candidates) comes back as a [`RelayError`]; the caller
    /// decides how to recover.
    pub async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        };

        debug!(endpoint = %self.endpoint, "calling Gemini generateContent");

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(&parsed).ok_or(RelayError::EmptyCandidates)
    }
}

/// Concatenates the first candidate's part texts; `None` when the result
/// would be empty.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let text: String = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
