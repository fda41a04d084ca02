//! Domain logic and repository trait definitions for MindSpace.
//!
//! This crate defines the "ports" (the `LlmProvider` and `UserRepository`
//! traits) that the infrastructure layer implements, plus the persona
//! template and the summary extractor. It depends only on
//! `mindspace-types` -- never on `mindspace-infra` or any database/IO crate.

pub mod llm;
pub mod persona;
pub mod summary;
pub mod user;
