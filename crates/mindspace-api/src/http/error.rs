//! Application error type mapping to HTTP status codes and the
//! `{"error": ...}` body format.
//!
//! All upstream and parse failures surface to the caller as an opaque
//! 500 with a fixed message; the specific cause is logged server-side
//! and never included in the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use mindspace_types::llm::LlmError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// The chat generation call failed.
    ChatUpstream(LlmError),
    /// The summary generation call failed.
    SummaryUpstream(LlmError),
    /// The summary reply was not valid JSON after fence-stripping.
    SummaryParse(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::ChatUpstream(e) => {
                tracing::error!(error = %e, "chat generation failed");
                "Failed to get a response from the AI model."
            }
            AppError::SummaryUpstream(e) => {
                tracing::error!(error = %e, "summary generation failed");
                "Failed to generate chat summary."
            }
            AppError::SummaryParse(detail) => {
                tracing::error!(error = %detail, "summary response was not parseable");
                "Failed to process AI summary."
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            json!({ "error": message }).to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants_map_to_500() {
        for err in [
            AppError::ChatUpstream(LlmError::RateLimited),
            AppError::SummaryUpstream(LlmError::EmptyResponse),
            AppError::SummaryParse("expected value at line 1".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
