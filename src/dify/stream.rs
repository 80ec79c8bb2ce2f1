//! Fold of the upstream event stream into a single reply.
//!
//! The chat API answers with newline-delimited events, each optionally
//! prefixed with `data:` and carrying a JSON payload:
//!
//! ```text
//! data: {"event":"message","answer":"Hel","conversation_id":"c1"}
//! ```
//!
//! Lines may be split across transport chunks, so the decoder reassembles
//! complete lines before parsing. Lines without the prefix, with an empty
//! payload, or with unparseable JSON are skipped and never abort the stream.

use bytes::Bytes;
use futures::{Stream, StreamExt, pin_mut};
use serde::Deserialize;
use tracing::debug;

/// One decoded upstream event. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct StreamEvent {
    #[serde(default)]
    pub event: String,
    pub answer: Option<String>,
    pub conversation_id: Option<String>,
}

/// Final accumulator state of one chat exchange.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// All `answer` fragments from `message` events, concatenated in arrival
    /// order with no separator.
    pub answer: String,
    /// Last non-empty `conversation_id` observed on any event kind; empty if
    /// none was ever seen.
    pub conversation_id: String,
}

impl ChatReply {
    fn apply(&mut self, event: StreamEvent) {
        if event.event == "message" {
            if let Some(fragment) = event.answer {
                self.answer.push_str(&fragment);
            }
        }
        if let Some(id) = event.conversation_id {
            if !id.is_empty() {
                self.conversation_id = id;
            }
        }
    }
}

/// Decode one raw stream line into an event, or `None` for anything that
/// should be skipped.
fn decode_line(line: &str) -> Option<StreamEvent> {
    let payload = line.strip_prefix("data:")?.trim();
    if payload.is_empty() {
        return None;
    }
    match serde_json::from_str(payload) {
        Ok(event) => Some(event),
        Err(e) => {
            // Malformed events are tolerated by contract; keep a trace for
            // diagnosis.
            debug!(error = %e, line = %line, "skipping unparseable stream event");
            None
        }
    }
}

/// Fold a chunked byte stream of events into a [`ChatReply`].
///
/// The stream is consumed exactly once; a transport error aborts the fold
/// and is returned to the caller.
pub async fn aggregate<S, E>(body: S) -> Result<ChatReply, E>
where
    S: Stream<Item = Result<Bytes, E>>,
{
    pin_mut!(body);

    let mut reply = ChatReply::default();
    let mut pending: Vec<u8> = Vec::new();

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        pending.extend_from_slice(&chunk);

        // Drain every complete line out of the buffer; a partial trailing
        // line stays pending until the next chunk.
        while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = pending.drain(..=pos).collect();
            if let Some(event) = decode_line(String::from_utf8_lossy(&line).trim_end()) {
                reply.apply(event);
            }
        }
    }

    // The upstream may omit the final newline.
    if !pending.is_empty() {
        if let Some(event) = decode_line(String::from_utf8_lossy(&pending).trim_end()) {
            reply.apply(event);
        }
    }

    Ok(reply)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
