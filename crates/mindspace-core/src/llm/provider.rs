//! LlmProvider trait definition.
//!
//! This is the core abstraction the remote-model adapter implements.
//! Uses RPITIT for `generate`; `BoxLlmProvider` provides the object-safe
//! wrapper for dynamic dispatch.

use mindspace_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for generative-model backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in mindspace-infra (e.g., `GeminiProvider`).
///
/// One network call per `generate` invocation; no retry, no caching,
/// no local conversational state. Callers resend full history each time.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier this provider targets.
    fn model(&self) -> &str;

    /// Send a generation request and receive the reply text.
    ///
    /// Fails if the remote call errors or the content is blocked by the
    /// provider's safety filtering.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
