//! Summary endpoint.
//!
//! POST /summary
//!
//! Sends the full conversation to the model in a single-shot extraction
//! prompt, parses the reply into a four-key `SummaryRecord`, and appends
//! it to the identified user's summary collection. Persistence is
//! best-effort: an unknown `userId` is skipped silently, and a failed
//! lookup or write is logged without failing the request. The parsed
//! summary is returned to the caller in every successful case.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use mindspace_core::summary::{SummaryError, SummaryExtractor};
use mindspace_core::user::repository::UserRepository;
use mindspace_types::llm::Turn;
use mindspace_types::user::SummaryRecord;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// The full conversation to summarize.
    #[serde(default)]
    pub history: Vec<Turn>,
    /// The user whose summary collection receives the record.
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// POST /summary — summarize a conversation and persist it.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummaryRequest>,
) -> Result<Json<SummaryRecord>, AppError> {
    let record = SummaryExtractor::extract(&state.llm, &body.history)
        .await
        .map_err(|e| match e {
            SummaryError::Parse(detail) => AppError::SummaryParse(detail),
            SummaryError::Llm(e) => AppError::SummaryUpstream(e),
        })?;

    match state.users.find_by_id(&body.user_id).await {
        Ok(Some(_)) => {
            if let Err(e) = state.users.append_summary(&body.user_id, &record).await {
                tracing::error!(user_id = %body.user_id, error = %e, "failed to persist summary");
            }
        }
        Ok(None) => {
            tracing::debug!(user_id = %body.user_id, "no matching user; skipping summary persistence");
        }
        Err(e) => {
            tracing::error!(user_id = %body.user_id, error = %e, "user lookup failed; skipping summary persistence");
        }
    }

    Ok(Json(record))
}
