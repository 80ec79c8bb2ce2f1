//! Evaluator listing endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::models::EvaluatorsResponse;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_evaluators), components(schemas(EvaluatorsResponse)))]
pub struct EvaluatorsApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/evaluators", get(get_evaluators))
}

/// List the configured evaluator names.
///
/// The list is derived from configuration on every request: split on commas,
/// trimmed, empty pieces dropped.
#[utoipa::path(
    get,
    path = "/api/evaluators",
    tag = "evaluators",
    responses(
        (status = 200, description = "Configured evaluator names", body = EvaluatorsResponse)
    )
)]
pub async fn get_evaluators(State(state): State<Arc<AppState>>) -> Json<EvaluatorsResponse> {
    Json(EvaluatorsResponse {
        evaluators: state.config.evaluator_names(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support;

    #[tokio::test]
    async fn lists_trimmed_names_in_order() {
        let state = test_support::state("evaluators-list", |c| {
            c.evaluators = "a, b ,,c".into();
        })
        .await;
        let Json(body) = get_evaluators(State(state)).await;
        assert_eq!(body.evaluators, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn empty_config_yields_empty_list() {
        let state = test_support::state("evaluators-empty", |c| {
            c.evaluators = String::new();
        })
        .await;
        let Json(body) = get_evaluators(State(state)).await;
        assert!(body.evaluators.is_empty());
    }
}
