//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::auth::CredentialProvider;
use crate::config::Config;
use crate::db::sqlite::SqliteStore;
use crate::dify::DifyClient;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Persistent evaluation store.
    pub store: Arc<SqliteStore>,
    /// Upstream chat API client.
    pub dify: Arc<DifyClient>,
    /// Login credential backend.
    pub credentials: Arc<dyn CredentialProvider>,
}
