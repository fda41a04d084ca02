//! Google Gemini LLM provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`LlmProvider`](mindspace_core::llm::provider::LlmProvider) trait for
//! the Generative Language REST API (`:generateContent`).

pub mod client;
pub mod types;

pub use client::GeminiProvider;

/// The model the companion service targets by default.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
