//! SQLite implementation of [`EvaluationStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature. Migrations are run automatically
//! on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary. The database file location is determined at
//! runtime by `RAGEVAL_DATABASE_URL` and is **not** related to the current
//! working directory at runtime.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use chrono::Utc;
use sqlx::SqlitePool;

use super::{EvaluationRecord, EvaluationStore, NewEvaluation};

/// SQLite-backed evaluation store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://rageval.db"`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePool::connect(url).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

impl EvaluationStore for SqliteStore {
    async fn insert_evaluation(
        &self,
        new: NewEvaluation,
    ) -> Result<EvaluationRecord, sqlx::Error> {
        let created_at = Utc::now();

        // Per-request transaction scope: committed on success, rolled back
        // on drop if anything below fails.
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO evaluations (evaluator_name, prompt, rag_response, \
             dify_conversation_id, rating, reason_category, reason_free_text, \
             remarks, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&new.evaluator_name)
        .bind(&new.prompt)
        .bind(&new.rag_response)
        .bind(&new.dify_conversation_id)
        .bind(&new.rating)
        .bind(&new.reason_category)
        .bind(&new.reason_free_text)
        .bind(&new.remarks)
        .bind(created_at.to_rfc3339())
        .execute(&mut *tx)
        .await?;
        let evaluation_id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(EvaluationRecord {
            evaluation_id,
            evaluator_name: new.evaluator_name,
            prompt: new.prompt,
            rag_response: new.rag_response,
            dify_conversation_id: new.dify_conversation_id,
            rating: new.rating,
            reason_category: new.reason_category,
            reason_free_text: new.reason_free_text,
            remarks: new.remarks,
            created_at,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
