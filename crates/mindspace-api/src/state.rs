//! Application state wiring the provider, persistence, and persona together.
//!
//! `AppState` holds the concrete instances used by the REST API handlers.
//! The provider is type-erased behind `BoxLlmProvider` so tests can wire
//! in mock providers; the persona is a constructed value, not a module
//! constant, for the same reason. Everything here is immutable after
//! initialization -- handlers share no mutable state between requests.

use std::sync::Arc;

use secrecy::SecretString;

use mindspace_core::llm::box_provider::BoxLlmProvider;
use mindspace_core::persona::Persona;
use mindspace_infra::gemini::{GeminiProvider, DEFAULT_MODEL};
use mindspace_infra::sqlite::pool::DatabasePool;
use mindspace_infra::sqlite::user::SqliteUserRepository;

/// Shared application state holding the outbound collaborators.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<BoxLlmProvider>,
    pub users: Arc<SqliteUserRepository>,
    pub persona: Arc<Persona>,
}

impl AppState {
    /// Initialize the application state: connect to the DB, build the
    /// Gemini provider with its fixed persona and safety configuration.
    pub async fn init(database_url: &str, api_key: SecretString) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;
        let users = SqliteUserRepository::new(db_pool);

        let provider = GeminiProvider::new(api_key, DEFAULT_MODEL.to_string());

        Ok(Self {
            llm: Arc::new(BoxLlmProvider::new(provider)),
            users: Arc::new(users),
            persona: Arc::new(Persona::default()),
        })
    }
}
