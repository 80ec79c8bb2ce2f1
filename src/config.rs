//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for rageval-server.
///
/// Every field has a default so the server starts without any environment
/// variables set, though the upstream key and login credentials will be
/// empty until configured.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// SQLite (or other) database URL (default: `"sqlite://rageval.db"`).
    /// Any sqlx-compatible connection string works – swap the scheme to
    /// migrate to Postgres (`postgres://…`) or MySQL (`mysql://…`).
    pub database_url: String,

    /// Base URL of the Dify-compatible chat API, e.g. `"https://api.dify.ai/v1"`.
    pub dify_api_url: String,

    /// Bearer token for the chat API.
    pub dify_api_key: String,

    /// Shared login identifier all evaluators use.
    pub app_user_id: String,

    /// Shared login password.
    pub app_password: String,

    /// Comma-separated evaluator names shown in the frontend dropdown.
    pub evaluators: String,

    /// Comma-separated allowed CORS origins. When unset, a permissive
    /// wildcard layer is used instead (development fallback).
    pub cors_allowed_origins: Option<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI at `/swagger-ui`. Disable in production.
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("RAGEVAL_BIND", "0.0.0.0:8000"),
            database_url: env_or("RAGEVAL_DATABASE_URL", "sqlite://rageval.db"),
            dify_api_url: env_or("RAGEVAL_DIFY_API_URL", "http://localhost/v1"),
            dify_api_key: env_or("RAGEVAL_DIFY_API_KEY", ""),
            app_user_id: env_or("RAGEVAL_APP_USER_ID", ""),
            app_password: env_or("RAGEVAL_APP_PASSWORD", ""),
            evaluators: env_or("RAGEVAL_EVALUATORS", ""),
            cors_allowed_origins: std::env::var("RAGEVAL_CORS_ORIGINS").ok(),
            log_level: env_or("RAGEVAL_LOG", "info"),
            log_json: std::env::var("RAGEVAL_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            enable_swagger: std::env::var("RAGEVAL_ENABLE_SWAGGER")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }

    /// Evaluator names derived from the configured comma-separated list:
    /// split, trimmed, empty pieces dropped, configuration order preserved.
    pub fn evaluator_names(&self) -> Vec<String> {
        self.evaluators
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn config_with_evaluators(raw: &str) -> Config {
        Config {
            bind_address: "127.0.0.1:0".into(),
            database_url: "sqlite://:memory:".into(),
            dify_api_url: "http://localhost/v1".into(),
            dify_api_key: String::new(),
            app_user_id: String::new(),
            app_password: String::new(),
            evaluators: raw.into(),
            cors_allowed_origins: None,
            log_level: "info".into(),
            log_json: false,
            enable_swagger: false,
        }
    }

    #[test]
    fn evaluator_names_split_trim_and_drop_empties() {
        let cfg = config_with_evaluators("a, b ,,c");
        assert_eq!(cfg.evaluator_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_evaluator_config_yields_empty_list() {
        let cfg = config_with_evaluators("");
        assert!(cfg.evaluator_names().is_empty());
    }

    #[test]
    fn whitespace_only_entries_are_dropped() {
        let cfg = config_with_evaluators(" , ,  ");
        assert!(cfg.evaluator_names().is_empty());
    }
}
