//! HTTP/REST API layer for MindSpace.
//!
//! Axum-based JSON API with two endpoints (`POST /` and `POST /summary`),
//! CORS support, and request tracing.

pub mod error;
pub mod handlers;
pub mod router;
