//! Feed events delivered by the client.
//!
//! Every transport transition and every decoded server frame becomes a
//! [`FeedEvent`] pushed through the client's event channel. Events arrive
//! at the consumer in delivery order and carry the wall-clock time at
//! which the client observed them.

use chrono::{DateTime, Utc};

use super::ApiPayload;

/// Closed set of events a [`FeedClient`](crate::client::FeedClient)
/// delivers.
///
/// `Connected`, `ConnectError`, and `Disconnected` are generated from the
/// WebSocket transport lifecycle; `Message` and `ApiData` are decoded from
/// incoming frames.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// Handshake with the feed server succeeded.
    Connected {
        /// When the handshake completed.
        received_at: DateTime<Utc>,
    },

    /// Generic `message` frame; the payload is passed through undecoded.
    Message {
        /// Raw payload value attached to the frame.
        payload: serde_json::Value,
        /// When the frame was received.
        received_at: DateTime<Utc>,
    },

    /// `api_data` frame carrying the list payload.
    ApiData {
        /// Decoded payload: the items, or the unexpected-shape marker.
        payload: ApiPayload,
        /// When the frame was received.
        received_at: DateTime<Utc>,
    },

    /// Handshake failure or mid-stream transport error.
    ConnectError {
        /// Human-readable failure reason.
        reason: String,
        /// When the failure was observed.
        received_at: DateTime<Utc>,
    },

    /// The channel closed: server close frame, end of stream, or a local
    /// [`close`](crate::client::FeedClient::close).
    Disconnected {
        /// When the close was observed.
        received_at: DateTime<Utc>,
    },
}

impl FeedEvent {
    /// Returns the event name as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connect",
            Self::Message { .. } => "message",
            Self::ApiData { .. } => "api_data",
            Self::ConnectError { .. } => "connect_error",
            Self::Disconnected { .. } => "disconnect",
        }
    }

    /// Returns when the client observed this event.
    #[must_use]
    pub fn received_at(&self) -> DateTime<Utc> {
        match self {
            Self::Connected { received_at }
            | Self::Message { received_at, .. }
            | Self::ApiData { received_at, .. }
            | Self::ConnectError { received_at, .. }
            | Self::Disconnected { received_at } => *received_at,
        }
    }
}
