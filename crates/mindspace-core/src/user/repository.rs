//! UserRepository trait definition.
//!
//! The user store is externally owned; this service only looks users up
//! and appends summary records. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition). Implementations live in mindspace-infra
//! (e.g., `SqliteUserRepository`).

use mindspace_types::error::RepositoryError;
use mindspace_types::user::{StoredSummary, SummaryRecord, UserRecord};

/// Repository trait for user lookup and summary persistence.
pub trait UserRepository: Send + Sync {
    /// Look up a user by their external identifier.
    fn find_by_id(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserRecord>, RepositoryError>> + Send;

    /// Append a summary record to a user's collection and persist it.
    ///
    /// Records are append-only; nothing is ever updated in place.
    fn append_summary(
        &self,
        user_id: &str,
        record: &SummaryRecord,
    ) -> impl std::future::Future<Output = Result<StoredSummary, RepositoryError>> + Send;

    /// List a user's summaries, oldest first.
    fn list_summaries(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<StoredSummary>, RepositoryError>> + Send;
}
