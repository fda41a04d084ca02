//! HTTP request handlers for the companion API.

pub mod chat;
pub mod summary;
