//! Wire models for the inbound chat endpoint.

use serde::{Deserialize, Serialize};

/// `POST /gemini` request body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's question. Missing and null both read as `None` and are
    /// treated the same as an empty message.
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /gemini` response body. Always returned with status 200.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Either the live Gemini answer or a canned fallback text.
    pub reply: String,
}
