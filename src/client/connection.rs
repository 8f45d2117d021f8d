//! WebSocket read loop.
//!
//! Drives a single established connection: decodes incoming frames into
//! [`FeedEvent`]s and forwards them through the bounded event channel in
//! delivery order. Exactly one terminal event (`Disconnected` or
//! `ConnectError`) is emitted before the loop returns.

use chrono::Utc;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::frames::decode_frame;
use crate::domain::FeedEvent;

/// WebSocket stream type produced by `connect_async`.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Runs the read loop for one connection.
///
/// - Text frames are decoded and forwarded; `send().await` on the bounded
///   channel preserves order and suspends on a full queue rather than
///   dropping events.
/// - A close frame, end of stream, or the shutdown signal ends the loop
///   with `Disconnected`.
/// - A transport error ends the loop with `ConnectError`. No retry.
pub async fn run_connection(
    mut socket: WsStream,
    events: mpsc::Sender<FeedEvent>,
    mut shutdown: oneshot::Receiver<()>,
) {
    loop {
        tokio::select! {
            // Local close requested
            _ = &mut shutdown => {
                let _ = socket.close(None).await;
                let _ = events
                    .send(FeedEvent::Disconnected { received_at: Utc::now() })
                    .await;
                break;
            }
            // Frame from the feed server
            msg = socket.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(event) = decode_frame(text.as_str())
                            && events.send(event).await.is_err()
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        let _ = events
                            .send(FeedEvent::Disconnected { received_at: Utc::now() })
                            .await;
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(%err, "feed connection error");
                        let _ = events
                            .send(FeedEvent::ConnectError {
                                reason: err.to_string(),
                                received_at: Utc::now(),
                            })
                            .await;
                        break;
                    }
                }
            }
        }
    }

    tracing::debug!("feed connection closed");
}
