//! Shared-credential login check.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(login), components(schemas(LoginRequest, LoginResponse)))]
pub struct LoginApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

/// Check a candidate pair against the shared login credentials.
///
/// No rate limiting and no lockout; a mismatch reveals nothing beyond the
/// fixed failure message.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Credential mismatch"),
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServerError> {
    if !state.credentials.verify(&req.user_id, &req.password) {
        return Err(ServerError::Unauthorized);
    }
    Ok(Json(LoginResponse {
        status: "success".into(),
        message: "Login successful".into(),
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support;

    #[tokio::test]
    async fn accepts_exact_credentials() {
        let state = test_support::state("login-ok", |_| {}).await;
        let result = login(
            State(state),
            Json(LoginRequest {
                user_id: "eval-user".into(),
                password: "secret".into(),
            }),
        )
        .await;
        let Json(body) = result.expect("login should succeed");
        assert_eq!(body.status, "success");
        assert_eq!(body.message, "Login successful");
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let state = test_support::state("login-bad-password", |_| {}).await;
        let result = login(
            State(state),
            Json(LoginRequest {
                user_id: "eval-user".into(),
                password: "secret2".into(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ServerError::Unauthorized)));
    }

    #[tokio::test]
    async fn rejects_empty_inputs() {
        let state = test_support::state("login-empty", |_| {}).await;
        let result = login(
            State(state),
            Json(LoginRequest {
                user_id: String::new(),
                password: String::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ServerError::Unauthorized)));
    }
}
