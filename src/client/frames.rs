//! Wire frames: server envelope and the event-name decode boundary.
//!
//! The feed server pushes JSON text frames of the form
//! `{"event": "<name>", "data": <value>}`. Decoding happens here, once per
//! frame: known event names map to [`FeedEvent`] variants, unknown names
//! and malformed JSON are absorbed with a log and produce no event.

use chrono::Utc;
use serde::Deserialize;

use crate::domain::{ApiPayload, FeedEvent};

/// Name of the generic message event.
pub const EVENT_MESSAGE: &str = "message";

/// Name of the list payload event.
pub const EVENT_API_DATA: &str = "api_data";

/// Server → client frame envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerFrame {
    /// Named event this frame carries.
    pub event: String,
    /// Event payload; defaults to JSON `null` when absent.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Decodes one text frame into a [`FeedEvent`].
///
/// `api_data` payloads are classified here via
/// [`ApiPayload::from_value`]; `message` payloads pass through undecoded.
#[must_use]
pub fn decode_frame(text: &str) -> Option<FeedEvent> {
    let frame = match serde_json::from_str::<ServerFrame>(text) {
        Ok(frame) => frame,
        Err(err) => {
            tracing::warn!(%err, "malformed frame from feed server");
            return None;
        }
    };

    match frame.event.as_str() {
        EVENT_MESSAGE => Some(FeedEvent::Message {
            payload: frame.data,
            received_at: Utc::now(),
        }),
        EVENT_API_DATA => Some(FeedEvent::ApiData {
            payload: ApiPayload::from_value(&frame.data),
            received_at: Utc::now(),
        }),
        other => {
            tracing::debug!(event = other, "ignoring unknown event");
            None
        }
    }
}
