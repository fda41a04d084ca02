//! LLM request/response types for MindSpace.
//!
//! These types model the data shapes for generative-model interactions:
//! conversation turns, generation requests, and error handling. Callers
//! resend the full turn history on every request; the service holds no
//! conversational state of its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a turn in a conversation.
///
/// The Gemini API uses `user` and `model` (not `assistant`) as its two
/// conversational roles, and callers supply history in the same terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Model => write!(f, "model"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "model" => Ok(TurnRole::Model),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single message exchange unit in a conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Request to an LLM provider for a single generation.
///
/// Covers both shapes the service needs: a conversational exchange
/// (prior turns plus a new user message, optionally with a one-time
/// system instruction) and a single-shot prompt with no history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered turns, ending with the new user message.
    pub turns: Vec<Turn>,
    /// One-time system instruction; sent only on the first turn of a
    /// conversation and never injected by single-shot requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<String>,
    /// Cap on generated output size; `None` uses the provider default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Conversational request: prior history plus a new user message.
    pub fn chat(
        history: Vec<Turn>,
        message: impl Into<String>,
        system_instruction: Option<String>,
    ) -> Self {
        let mut turns = history;
        turns.push(Turn::user(message));
        Self {
            turns,
            system_instruction,
            max_output_tokens: None,
        }
    }

    /// Single-shot request: one user prompt, no history, no system
    /// instruction.
    pub fn single_shot(prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::user(prompt)],
            system_instruction: None,
            max_output_tokens: None,
        }
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

/// Reply text from a generation, with token usage when the provider
/// reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Token usage for a generation request/response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub response_tokens: u32,
}

/// Errors from LLM provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("content blocked by safety filter: {reason}")]
    SafetyBlocked { reason: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider returned no content")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Model] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let role = TurnRole::Model;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"model\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Model);
    }

    #[test]
    fn test_turn_deserialize_wire_shape() {
        let json = r#"{"role":"user","text":"I feel anxious today"}"#;
        let turn: Turn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.text, "I feel anxious today");
    }

    #[test]
    fn test_chat_request_appends_message_as_user_turn() {
        let history = vec![Turn::user("hi"), Turn::model("hello, how are you?")];
        let request = GenerationRequest::chat(history, "not great", None);
        assert_eq!(request.turns.len(), 3);
        assert_eq!(request.turns[2].role, TurnRole::User);
        assert_eq!(request.turns[2].text, "not great");
        assert!(request.system_instruction.is_none());
    }

    #[test]
    fn test_single_shot_request_has_one_user_turn() {
        let request = GenerationRequest::single_shot("summarize this");
        assert_eq!(request.turns.len(), 1);
        assert_eq!(request.turns[0].role, TurnRole::User);
        assert!(request.system_instruction.is_none());
        assert!(request.max_output_tokens.is_none());
    }

    #[test]
    fn test_with_max_output_tokens() {
        let request = GenerationRequest::single_shot("hi").with_max_output_tokens(1000);
        assert_eq!(request.max_output_tokens, Some(1000));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::SafetyBlocked {
            reason: "SAFETY".to_string(),
        };
        assert!(err.to_string().contains("SAFETY"));
    }
}
