//! Evaluation submission endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::db::{EvaluationRecord, EvaluationStore, NewEvaluation};
use crate::error::ServerError;
use crate::models::{CreateEvaluationRequest, EvaluationResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(create_evaluation),
    components(schemas(CreateEvaluationRequest, EvaluationResponse))
)]
pub struct EvaluationsApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/evaluations", post(create_evaluation))
}

fn to_response(r: EvaluationRecord) -> EvaluationResponse {
    EvaluationResponse {
        evaluation_id: r.evaluation_id,
        evaluator_name: r.evaluator_name,
        prompt: r.prompt,
        rag_response: r.rag_response,
        dify_conversation_id: r.dify_conversation_id,
        rating: r.rating,
        reason_category: r.reason_category,
        reason_free_text: r.reason_free_text,
        remarks: r.remarks,
        created_at: r.created_at.to_rfc3339(),
    }
}

/// Reject empty required fields. Presence and shape are already enforced at
/// the JSON extraction boundary; there are no cross-field rules.
fn validate(req: &CreateEvaluationRequest) -> Result<(), ServerError> {
    for (field, value) in [
        ("evaluator_name", &req.evaluator_name),
        ("prompt", &req.prompt),
        ("rag_response", &req.rag_response),
        ("rating", &req.rating),
    ] {
        if value.is_empty() {
            return Err(ServerError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}

/// Store one human evaluation of a chat answer.
#[utoipa::path(
    post,
    path = "/api/evaluations",
    tag = "evaluations",
    request_body = CreateEvaluationRequest,
    responses(
        (status = 201, description = "Evaluation stored", body = EvaluationResponse),
        (status = 422, description = "Missing or malformed required fields"),
    )
)]
pub async fn create_evaluation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEvaluationRequest>,
) -> Result<(StatusCode, Json<EvaluationResponse>), ServerError> {
    validate(&req)?;

    let record = state
        .store
        .insert_evaluation(NewEvaluation {
            evaluator_name: req.evaluator_name,
            prompt: req.prompt,
            rag_response: req.rag_response,
            dify_conversation_id: req.dify_conversation_id,
            rating: req.rating,
            reason_category: req.reason_category,
            reason_free_text: req.reason_free_text,
            remarks: req.remarks,
        })
        .await?;

    info!(
        evaluation_id = record.evaluation_id,
        evaluator = %record.evaluator_name,
        "evaluation stored"
    );

    Ok((StatusCode::CREATED, Json(to_response(record))))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support;

    fn valid_request() -> CreateEvaluationRequest {
        CreateEvaluationRequest {
            evaluator_name: "alice".into(),
            prompt: "What is the leave policy?".into(),
            rag_response: "Employees receive 20 days.".into(),
            dify_conversation_id: Some("conv-1".into()),
            rating: "good".into(),
            reason_category: None,
            reason_free_text: None,
            remarks: None,
        }
    }

    #[tokio::test]
    async fn stores_record_and_returns_created() {
        let state = test_support::state("evaluations-store", |_| {}).await;

        let (status, Json(first)) =
            create_evaluation(State(state.clone()), Json(valid_request()))
                .await
                .expect("first submission should succeed");
        assert_eq!(status, StatusCode::CREATED);
        assert!(first.evaluation_id >= 1);
        assert_eq!(first.evaluator_name, "alice");
        assert!(!first.created_at.is_empty());

        let (_, Json(second)) = create_evaluation(State(state), Json(valid_request()))
            .await
            .expect("second submission should succeed");
        assert!(second.evaluation_id > first.evaluation_id);
    }

    #[tokio::test]
    async fn rejects_empty_rating() {
        let state = test_support::state("evaluations-empty-rating", |_| {}).await;
        let mut req = valid_request();
        req.rating = String::new();
        let result = create_evaluation(State(state), Json(req)).await;
        assert!(matches!(result, Err(ServerError::Validation(_))));
    }

    #[tokio::test]
    async fn rejects_empty_evaluator_name() {
        let state = test_support::state("evaluations-empty-name", |_| {}).await;
        let mut req = valid_request();
        req.evaluator_name = String::new();
        let result = create_evaluation(State(state), Json(req)).await;
        assert!(matches!(result, Err(ServerError::Validation(_))));
    }
}
