//! Chat request handler — relays prompts to Gemini, falls back on failure.

use axum::Json;
use axum::extract::State;
use tracing::{info, warn};

use crate::AppState;
use crate::fallback::{EMPTY_PROMPT_REPLY, fallback_reply};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /gemini` — send a chat message, get a reply.
///
/// Always answers 200. Upstream failures are logged and absorbed into a
/// topic-matched fallback reply; an empty message short-circuits to a
/// fixed prompt-for-input text without calling upstream.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = body.message.unwrap_or_default();
    if message.is_empty() {
        return Json(ChatResponse {
            reply: EMPTY_PROMPT_REPLY.into(),
        });
    }

    let reply = match state.gemini.generate(&message).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Gemini call failed, serving fallback reply: {e}");
            fallback_reply(&message).to_string()
        }
    };

    info!(chars = reply.len(), "answering chat request");

    Json(ChatResponse { reply })
}
