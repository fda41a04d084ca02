//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends non-streaming requests to the Generative Language REST API
//! (`/v1beta/models/{model}:generateContent`). Carries the fixed safety
//! configuration on every request: all four harm categories at the most
//! permissive threshold.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use mindspace_core::llm::provider::LlmProvider;
use mindspace_types::llm::{GenerationRequest, GenerationResponse, LlmError, Usage};

use super::types::{
    default_safety_settings, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse,
    GenerationConfig,
};

/// Google Gemini LLM provider.
///
/// Implements [`LlmProvider`] for the Generative Language API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the request header. It never appears in Debug output,
/// Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long generations
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full `:generateContent` URL for the configured model.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a generic [`GenerationRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(&self, request: &GenerationRequest) -> GeminiRequest {
        let contents = request
            .turns
            .iter()
            .map(|turn| GeminiContent {
                role: Some(turn.role.to_string()),
                parts: vec![GeminiPart {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        let system_instruction = request.system_instruction.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: text.clone() }],
        });

        let generation_config = request.max_output_tokens.map(|max| GenerationConfig {
            max_output_tokens: Some(max),
        });

        GeminiRequest {
            contents,
            system_instruction,
            safety_settings: default_safety_settings(),
            generation_config,
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug to prevent accidental
// exposure of internal state alongside the SecretString API key.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        let body = self.to_gemini_request(request);
        let url = self.generate_url();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                400 => LlmError::InvalidRequest(error_body),
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        extract_reply(gemini_resp)
    }
}

/// Pull the reply text out of a Gemini response, surfacing safety blocks
/// and empty candidate lists as errors.
fn extract_reply(response: GeminiResponse) -> Result<GenerationResponse, LlmError> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(LlmError::SafetyBlocked {
                reason: reason.clone(),
            });
        }
    }

    let usage = response.usage_metadata.map(|u| Usage {
        prompt_tokens: u.prompt_token_count,
        response_tokens: u.candidates_token_count,
    });

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(LlmError::EmptyResponse);
    };

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(LlmError::SafetyBlocked {
            reason: "SAFETY".to_string(),
        });
    }

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(GenerationResponse { text, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindspace_types::llm::Turn;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-2.5-flash".to_string(),
        )
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_generate_url() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.generate_url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_to_gemini_request_maps_turns_and_system_instruction() {
        let provider = make_provider();
        let request = GenerationRequest::chat(
            vec![Turn::user("hi"), Turn::model("hello")],
            "I feel anxious",
            Some("be calm".to_string()),
        )
        .with_max_output_tokens(1000);

        let body = provider.to_gemini_request(&request);
        assert_eq!(body.contents.len(), 3);
        assert_eq!(body.contents[0].role.as_deref(), Some("user"));
        assert_eq!(body.contents[1].role.as_deref(), Some("model"));
        assert_eq!(body.contents[2].parts[0].text, "I feel anxious");
        assert_eq!(
            body.system_instruction.unwrap().parts[0].text,
            "be calm"
        );
        assert_eq!(
            body.generation_config.unwrap().max_output_tokens,
            Some(1000)
        );
        assert_eq!(body.safety_settings.len(), 4);
    }

    #[test]
    fn test_to_gemini_request_single_shot_omits_extras() {
        let provider = make_provider();
        let request = GenerationRequest::single_shot("summarize this");
        let body = provider.to_gemini_request(&request);
        assert_eq!(body.contents.len(), 1);
        assert!(body.system_instruction.is_none());
        assert!(body.generation_config.is_none());
    }

    #[test]
    fn test_extract_reply_text_and_usage() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "I hear "}, {"text": "you."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 8, "candidatesTokenCount": 3}
        }"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        let reply = extract_reply(response).unwrap();
        assert_eq!(reply.text, "I hear you.");
        assert_eq!(reply.usage.unwrap().prompt_tokens, 8);
    }

    #[test]
    fn test_extract_reply_prompt_block() {
        let body = r#"{"promptFeedback": {"blockReason": "PROHIBITED_CONTENT"}}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        let err = extract_reply(response).unwrap_err();
        assert!(matches!(err, LlmError::SafetyBlocked { reason } if reason == "PROHIBITED_CONTENT"));
    }

    #[test]
    fn test_extract_reply_safety_finish() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            extract_reply(response).unwrap_err(),
            LlmError::SafetyBlocked { .. }
        ));
    }

    #[test]
    fn test_extract_reply_empty_candidates() {
        let body = r#"{"candidates": []}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            extract_reply(response).unwrap_err(),
            LlmError::EmptyResponse
        ));
    }
}
