//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (CORS, per-request trace-ID injection)
//! - Optional Swagger UI / OpenAPI spec endpoint (disable with
//!   `RAGEVAL_ENABLE_SWAGGER=false`)
//! - Health / heartbeat route
//! - The `/api` evaluation-gateway routes

pub mod chat;
pub mod doc;
pub mod evaluations;
pub mod evaluators;
pub mod health;
pub mod login;

use std::sync::Arc;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware::{cors, trace};
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .merge(evaluators::router())
        .merge(login::router())
        .merge(chat::router())
        .merge(evaluations::router());

    let mut app = Router::new()
        .merge(health::router())
        .nest("/api", api_router);

    // ── Swagger UI ────────────────────────────────────────────────────────────
    // Enabled by default; disable with RAGEVAL_ENABLE_SWAGGER=false in
    // production to avoid exposing the API structure.
    if state.config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::get_docs()),
        );
    }

    app
        // Outermost layers execute first on the way in.
        .layer(ServiceBuilder::new().layer(cors::cors_layer(state.clone())))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .with_state(state)
}

// ── Test support ──────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::auth::StaticCredentials;
    use crate::config::Config;
    use crate::db::sqlite::SqliteStore;
    use crate::dify::DifyClient;
    use crate::state::AppState;

    /// Build an [`AppState`] backed by a throwaway SQLite file. `mutate`
    /// adjusts the config before the state's components are constructed.
    pub async fn state(name: &str, mutate: impl FnOnce(&mut Config)) -> Arc<AppState> {
        let path = std::env::temp_dir().join(format!("rageval-route-test-{name}.db"));
        let _ = std::fs::remove_file(&path);

        let mut config = Config {
            bind_address: "127.0.0.1:0".into(),
            database_url: format!("sqlite://{}?mode=rwc", path.display()),
            dify_api_url: "http://localhost:9999".into(),
            dify_api_key: String::new(),
            app_user_id: "eval-user".into(),
            app_password: "secret".into(),
            evaluators: "alice, bob".into(),
            cors_allowed_origins: None,
            log_level: "info".into(),
            log_json: false,
            enable_swagger: false,
        };
        mutate(&mut config);

        let store = SqliteStore::connect(&config.database_url)
            .await
            .expect("open test database");

        Arc::new(AppState {
            store: Arc::new(store),
            dify: Arc::new(DifyClient::new(
                config.dify_api_url.as_str(),
                config.dify_api_key.as_str(),
            )),
            credentials: Arc::new(StaticCredentials::new(
                config.app_user_id.as_str(),
                config.app_password.as_str(),
            )),
            config: Arc::new(config),
        })
    }
}
