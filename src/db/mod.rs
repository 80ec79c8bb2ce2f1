//! Database abstraction layer.
//!
//! [`EvaluationStore`] defines the interface for persisting evaluation
//! records. The default implementation is [`sqlite::SqliteStore`]. To swap
//! to another database (Postgres, MySQL, …), implement the trait for your
//! new type and change the concrete type in [`crate::state::AppState`].
//!
//! Trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required.

pub mod sqlite;

use std::future::Future;

use chrono::{DateTime, Utc};

/// Insert payload for one evaluation: everything the evaluator supplies.
#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub evaluator_name: String,
    pub prompt: String,
    pub rag_response: String,
    pub dify_conversation_id: Option<String>,
    pub rating: String,
    pub reason_category: Option<String>,
    pub reason_free_text: Option<String>,
    pub remarks: Option<String>,
}

/// A stored row in the `evaluations` table.
#[derive(Debug, Clone)]
pub struct EvaluationRecord {
    /// System-assigned, monotonically increasing, never reused.
    pub evaluation_id: i64,
    pub evaluator_name: String,
    pub prompt: String,
    pub rag_response: String,
    pub dify_conversation_id: Option<String>,
    pub rating: String,
    pub reason_category: Option<String>,
    pub reason_free_text: Option<String>,
    pub remarks: Option<String>,
    /// Server-assigned at insert; immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Trait for persisting evaluation records.
pub trait EvaluationStore: Send + Sync + 'static {
    /// Persist a new evaluation and return the stored row with its assigned
    /// id and timestamp.
    fn insert_evaluation(
        &self,
        new: NewEvaluation,
    ) -> impl Future<Output = Result<EvaluationRecord, sqlx::Error>> + Send;
}
