//! Application error types.

use http::StatusCode;
use thiserror::Error;

/// Startup configuration errors. These abort the process; nothing here is
/// ever surfaced to a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set — refusing to start without an upstream API key")]
    MissingApiKey,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Failures while obtaining a live reply from Gemini.
///
/// These never cross the handler boundary as HTTP errors: the chat handler
/// logs them and substitutes a fallback reply, keeping the response at 200.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream answered with a non-success status (quota exhaustion shows
    /// up here as a 429).
    #[error("Gemini returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Transport failure or undecodable response body.
    #[error("request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response that carried no candidate text.
    #[error("Gemini response contained no candidate text")]
    EmptyCandidates,
}
