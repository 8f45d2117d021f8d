//! Client error types.
//!
//! [`ClientError`] covers the failures a caller observes through `Result`
//! seams. Transport failures observed after `open` returns are delivered
//! as [`FeedEvent::ConnectError`](crate::domain::FeedEvent) through the
//! event channel instead of being raised; their only recovery is the log.

use tokio_tungstenite::tungstenite;

/// Errors surfaced by the client lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configured server URL is not a `ws://` or `wss://` endpoint.
    #[error("invalid server url: {0}")]
    InvalidServerUrl(String),

    /// WebSocket transport failure.
    #[error("connection failed: {0}")]
    Connect(#[from] tungstenite::Error),

    /// Background read task failed to join.
    #[error("internal error: {0}")]
    Internal(String),
}
