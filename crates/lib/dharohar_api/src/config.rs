//! API server configuration.

use crate::error::ConfigError;

/// Default Gemini generateContent endpoint.
pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Configuration for the relay server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3000").
    pub bind_addr: String,
    /// Gemini API key, passed upstream as a `key` query parameter.
    pub gemini_api_key: String,
    /// Gemini generateContent URL. Overridable so tests can point the
    /// relay at a local stand-in server.
    pub gemini_endpoint: String,
}

impl ApiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable         | Default                               |
    /// |------------------|---------------------------------------|
    /// | `PORT`           | `3000`                                |
    /// | `GEMINI_API_KEY` | required — startup fails when missing |
    /// | `GEMINI_API_URL` | the real Gemini endpoint              |
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        Ok(Self {
            bind_addr: format!("0.0.0.0:{port}"),
            gemini_api_key: resolve_api_key()?,
            gemini_endpoint: resolve_endpoint(),
        })
    }
}

/// Reads `GEMINI_API_KEY` from the environment.
///
/// The key is never embedded in source; a missing or empty value is a
/// startup error rather than a silent broken relay.
pub fn resolve_api_key() -> Result<String, ConfigError> {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

/// Reads `GEMINI_API_URL` from the environment, defaulting to the real
/// Gemini generateContent endpoint.
pub fn resolve_endpoint() -> String {
    std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_GEMINI_ENDPOINT.into())
}
