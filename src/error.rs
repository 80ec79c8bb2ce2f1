//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! **Security note:** Database errors are logged with full detail but only a
//! generic message is returned to the caller so that file paths or SQL never
//! leak to clients. Upstream failures deliberately expose the upstream status
//! code and body text so evaluators can report what the chat API said.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::dify::DifyError;

/// All errors that can occur in the rageval-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Login credential mismatch. Carries no detail beyond the fixed message.
    #[error("Incorrect ID or password")]
    Unauthorized,

    /// The caller sent a structurally invalid request.
    #[error("validation error: {0}")]
    Validation(String),

    /// The upstream chat API answered with a non-success HTTP status.
    #[error("upstream chat API error: status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Propagated from the SQLite (or other) store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Incorrect ID or password".to_owned())
            }
            ServerError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),

            // The upstream's own status code and body are part of the message
            // so the failure can be reported verbatim.
            ServerError::Upstream { status, body } => {
                warn!(upstream_status = *status, "upstream chat API failure");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("upstream chat API error: status {status}: {body}"),
                )
            }

            ServerError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }

            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<DifyError> for ServerError {
    fn from(e: DifyError) -> Self {
        match e {
            DifyError::Status { status, body } => ServerError::Upstream { status, body },
            DifyError::Transport(e) => ServerError::Internal(e.to_string()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ServerError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::Validation("missing".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServerError::Upstream { status: 503, body: "overloaded".into() }
                .into_response()
                .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ServerError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_message_carries_status_and_body() {
        let e = ServerError::Upstream { status: 503, body: "overloaded".into() };
        let msg = e.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("overloaded"));
    }
}
