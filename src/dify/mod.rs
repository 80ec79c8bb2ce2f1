//! Client for the Dify-compatible `chat-messages` API.
//!
//! The upstream is always asked for a streaming response;
//! [`DifyClient::send_chat`] drives one request and folds the event stream
//! into a complete [`ChatReply`] (see [`stream`]). There is no retry and no
//! session continuity: every call opens a fresh upstream conversation.

pub mod stream;

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::dify::stream::{ChatReply, aggregate};

/// Whole-request ceiling covering connect, headers, and the full stream.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors from one upstream chat exchange.
#[derive(Debug, Error)]
pub enum DifyError {
    /// The upstream answered with a non-success HTTP status.
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    /// Connect failure, timeout, or a broken stream.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Streaming chat API client. Cheap to share behind an `Arc`; the inner
/// `reqwest::Client` pools connections across requests.
pub struct DifyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DifyClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Send one prompt and aggregate the streamed answer.
    ///
    /// `conversation_id` is sent empty so the upstream starts a new session
    /// each call; the ID it assigns is reported back in the reply.
    pub async fn send_chat(&self, prompt: &str, user: &str) -> Result<ChatReply, DifyError> {
        let payload = serde_json::json!({
            "inputs": {},
            "query": prompt,
            "response_mode": "streaming",
            "user": user,
            "conversation_id": "",
        });

        let url = format!("{}/chat-messages", self.base_url.trim_end_matches('/'));
        debug!(%url, prompt_len = prompt.len(), "sending chat request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DifyError::Status { status: status.as_u16(), body });
        }

        let reply = aggregate(response.bytes_stream()).await?;
        debug!(
            answer_len = reply.answer.len(),
            conversation_id = %reply.conversation_id,
            "chat stream complete"
        );
        Ok(reply)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_error_displays_code_and_body() {
        let e = DifyError::Status { status: 503, body: "overloaded".into() };
        assert_eq!(e.to_string(), "status 503: overloaded");
    }
}
