//! Chat endpoint.
//!
//! POST /
//!
//! Forwards a user message (plus the caller-supplied turn history) to the
//! model and returns the reply text. On a first turn -- no history -- the
//! persona instructions are injected as a one-time system instruction with
//! the caller's nickname interpolated; later turns rely on the replayed
//! history alone. The service keeps no conversational state of its own.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use mindspace_types::llm::{GenerationRequest, Turn};

use crate::http::error::AppError;
use crate::state::AppState;

/// Cap on companion replies; the persona asks for 3-5 lines.
const CHAT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The new user message.
    pub message: String,
    /// Prior turns of this conversation; absent or empty means first turn.
    #[serde(default)]
    pub history: Vec<Turn>,
    /// Display name to interpolate into the persona on a first turn.
    pub nickname: Option<String>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// POST / — send a message to the companion.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let system_instruction = body
        .history
        .is_empty()
        .then(|| state.persona.render(body.nickname.as_deref()));

    let request = GenerationRequest::chat(body.history, body.message, system_instruction)
        .with_max_output_tokens(CHAT_MAX_OUTPUT_TOKENS);

    let response = state
        .llm
        .generate(&request)
        .await
        .map_err(AppError::ChatUpstream)?;

    Ok(Json(ChatResponse {
        message: response.text,
    }))
}
