//! Infrastructure layer for MindSpace.
//!
//! Contains implementations of the ports defined in `mindspace-core`:
//! the Gemini HTTP client and SQLite storage for user summaries.

pub mod gemini;
pub mod sqlite;
