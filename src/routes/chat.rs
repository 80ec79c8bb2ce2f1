//! Chat proxy endpoint.
//!
//! Forwards one prompt to the upstream chat API in streaming mode and
//! returns the aggregated answer as a single payload. Every call opens a
//! fresh upstream conversation; if the client disconnects mid-stream the
//! handler future is dropped, which closes the upstream connection.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(chat), components(schemas(ChatRequest, ChatResponse)))]
pub struct ChatApi;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// Ask the RAG assistant one question and return its complete answer.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Aggregated answer", body = ChatResponse),
        (status = 422, description = "Empty prompt"),
        (status = 502, description = "Upstream chat API failure"),
        (status = 500, description = "Unexpected failure"),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    if req.prompt.is_empty() {
        return Err(ServerError::Validation("prompt must not be empty".into()));
    }

    let reply = state.dify.send_chat(&req.prompt, &req.user).await?;

    info!(
        answer_len = reply.answer.len(),
        conversation_id = %reply.conversation_id,
        "chat proxy complete"
    );

    Ok(Json(ChatResponse {
        response: reply.answer,
        conversation_id: reply.conversation_id,
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::routes::test_support;

    #[tokio::test]
    async fn rejects_empty_prompt() {
        let state = test_support::state("chat-empty-prompt", |_| {}).await;
        let result = chat(
            State(state),
            Json(ChatRequest { prompt: String::new(), user: "u".into() }),
        )
        .await;
        assert!(matches!(result, Err(ServerError::Validation(_))));
    }

    #[tokio::test]
    async fn connect_failure_maps_to_internal() {
        let state = test_support::state("chat-conn-refused", |c| {
            c.dify_api_url = "http://127.0.0.1:1".into();
        })
        .await;
        let result = chat(
            State(state),
            Json(ChatRequest { prompt: "hi".into(), user: "u".into() }),
        )
        .await;
        assert!(matches!(result, Err(ServerError::Internal(_))));
    }
}
