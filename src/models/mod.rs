//! REST API request / response types.
//!
//! The JSON field names here are the wire contract with the evaluation
//! frontend and must stay stable.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ── Evaluators ───────────────────────────────────────────────────────────────

/// Response body for `GET /api/evaluators`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluatorsResponse {
    /// Configured evaluator names, in configuration order.
    pub evaluators: Vec<String>,
}

// ── Login ────────────────────────────────────────────────────────────────────

/// Request body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub message: String,
}

// ── Chat ─────────────────────────────────────────────────────────────────────

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The question forwarded verbatim to the upstream chat API.
    pub prompt: String,
    /// End-user identifier; the upstream API requires it.
    pub user: String,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// The complete aggregated answer.
    pub response: String,
    /// Upstream-assigned conversation ID; empty if none was observed.
    pub conversation_id: String,
}

// ── Evaluations ──────────────────────────────────────────────────────────────

/// Request body for `POST /api/evaluations`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEvaluationRequest {
    pub evaluator_name: String,
    pub prompt: String,
    pub rag_response: String,
    #[serde(default)]
    pub dify_conversation_id: Option<String>,
    pub rating: String,
    #[serde(default)]
    pub reason_category: Option<String>,
    #[serde(default)]
    pub reason_free_text: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Response body for `POST /api/evaluations`: the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluationResponse {
    pub evaluation_id: i64,
    pub evaluator_name: String,
    pub prompt: String,
    pub rag_response: String,
    pub dify_conversation_id: Option<String>,
    pub rating: String,
    pub reason_category: Option<String>,
    pub reason_free_text: Option<String>,
    pub remarks: Option<String>,
    /// RFC 3339, UTC.
    pub created_at: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
