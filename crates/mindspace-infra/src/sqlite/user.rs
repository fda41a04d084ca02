//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `mindspace-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, reader for lookups,
//! writer for the append.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use mindspace_core::user::repository::UserRepository;
use mindspace_types::error::RepositoryError;
use mindspace_types::user::{StoredSummary, SummaryRecord, UserRecord};

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct UserRow {
    id: String,
    nickname: Option<String>,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            nickname: row.try_get("nickname")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<UserRecord, RepositoryError> {
        let created_at = parse_datetime(&self.created_at)?;
        Ok(UserRecord {
            id: self.id,
            nickname: self.nickname,
            created_at,
        })
    }
}

struct SummaryRow {
    id: String,
    user_id: String,
    summary: String,
    key_insights: String,
    current_mood: String,
    gentle_suggestion: String,
    created_at: String,
}

impl SummaryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            summary: row.try_get("summary")?,
            key_insights: row.try_get("key_insights")?,
            current_mood: row.try_get("current_mood")?,
            gentle_suggestion: row.try_get("gentle_suggestion")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_stored(self) -> Result<StoredSummary, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid summary id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(StoredSummary {
            id,
            user_id: self.user_id,
            record: SummaryRecord {
                summary: self.summary,
                key_insights: self.key_insights,
                current_mood: self.current_mood,
                gentle_suggestion: self.gentle_suggestion,
            },
            created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

// ---------------------------------------------------------------------------
// UserRepository implementation
// ---------------------------------------------------------------------------

impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn append_summary(
        &self,
        user_id: &str,
        record: &SummaryRecord,
    ) -> Result<StoredSummary, RepositoryError> {
        let stored = StoredSummary {
            id: Uuid::now_v7(),
            user_id: user_id.to_string(),
            record: record.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"INSERT INTO summaries (id, user_id, summary, key_insights, current_mood, gentle_suggestion, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(stored.id.to_string())
        .bind(&stored.user_id)
        .bind(&stored.record.summary)
        .bind(&stored.record.key_insights)
        .bind(&stored.record.current_mood)
        .bind(&stored.record.gentle_suggestion)
        .bind(stored.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(stored)
    }

    async fn list_summaries(&self, user_id: &str) -> Result<Vec<StoredSummary>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM summaries WHERE user_id = ? ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                SummaryRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_stored()
            })
            .collect()
    }
}
