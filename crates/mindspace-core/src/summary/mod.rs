//! Conversation summary extraction.

pub mod extractor;

pub use extractor::{SummaryError, SummaryExtractor};
