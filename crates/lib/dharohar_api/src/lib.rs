//! # dharohar_api
//!
//! HTTP API library for the Dharohar heritage-guide chat relay.
//!
//! One route: `POST /gemini` takes `{"message": "..."}`, relays the prompt
//! to the Gemini generateContent API and answers `{"reply": "..."}`. When
//! the upstream call fails the reply is substituted from a fixed set of
//! heritage-themed fallback texts, and the status stays 200.

pub mod config;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::gemini::GeminiClient;
use crate::handlers::chat;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Client for the Gemini generateContent endpoint.
    pub gemini: GeminiClient,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/gemini", post(chat::chat_handler))
        .layer(cors)
        .with_state(state)
}
