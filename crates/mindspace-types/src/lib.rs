//! Shared domain types for MindSpace.
//!
//! This crate contains the core domain types used across the MindSpace
//! companion service: conversation turns, generation requests, summary
//! records, user records, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod llm;
pub mod user;
