//! Conversation summary extraction via LLM.
//!
//! `SummaryExtractor` sends the full conversation to the model in a
//! single-shot prompt and parses the reply as a strict four-key JSON
//! object (`SummaryRecord`). Models frequently wrap JSON replies in
//! markdown code fences despite being told not to, so fences are stripped
//! before parsing.
//!
//! The JSON-only reply is a promise from the model, not a guarantee:
//! parsing is an explicit failure boundary. A reply that does not parse
//! after fence-stripping fails the whole extraction -- there is no retry
//! or repair, and nothing partial is ever returned.

use mindspace_types::llm::{GenerationRequest, LlmError, Turn};
use mindspace_types::user::SummaryRecord;

use crate::llm::box_provider::BoxLlmProvider;

/// Instructions for the summary extraction call.
///
/// The serialized conversation history is appended after this preamble.
const SUMMARY_PROMPT_PREAMBLE: &str = r#"Based on the following chat conversation, generate a response as a single, valid JSON object with ONLY these four keys: "summary", "keyInsights", "currentMood", and "gentleSuggestion". IMPORTANT: Address the user directly using second-person pronouns like "you" and "your". Do not use third-person language like "the user".

Example: "You seemed to be feeling..." instead of "The user seemed to be feeling...".

Conversation:
"#;

/// Errors from summary extraction.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// The remote generation call failed.
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The model's reply was not a valid four-key JSON object after
    /// fence-stripping.
    #[error("summary response was not valid JSON: {0}")]
    Parse(String),
}

/// Stateless utility for deriving a [`SummaryRecord`] from a conversation.
pub struct SummaryExtractor;

impl SummaryExtractor {
    /// Derive a summary record from the full turn history.
    ///
    /// One network call; either a fully-parsed four-key record or an error.
    #[tracing::instrument(
        name = "extract_summary",
        skip(provider, history),
        fields(turn_count = history.len())
    )]
    pub async fn extract(
        provider: &BoxLlmProvider,
        history: &[Turn],
    ) -> Result<SummaryRecord, SummaryError> {
        let request = GenerationRequest::single_shot(build_summary_prompt(history));
        let response = provider.generate(&request).await?;

        let cleaned = strip_code_fences(&response.text);
        serde_json::from_str(cleaned).map_err(|e| {
            // take chars, not bytes: a byte slice can split a UTF-8 char
            let preview: String = cleaned.chars().take(200).collect();
            tracing::warn!(
                error = %e,
                content_preview = %preview,
                "failed to parse summary JSON from model"
            );
            SummaryError::Parse(e.to_string())
        })
    }
}

/// Build the single-shot extraction prompt with the history embedded
/// verbatim as JSON.
pub fn build_summary_prompt(history: &[Turn]) -> String {
    let serialized = serde_json::to_string(history).unwrap_or_default();
    format!("{SUMMARY_PROMPT_PREAMBLE}{serialized}")
}

/// Strip surrounding markdown code fences (``` or ```json) from model
/// output. Text without fences is returned trimmed and otherwise untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
