//! Owned feed client with an explicit `open`/`close` lifecycle.

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;

use super::connection::run_connection;
use crate::config::ClientConfig;
use crate::domain::FeedEvent;
use crate::error::ClientError;

/// Handle to one feed connection.
///
/// Constructed once at application startup via [`FeedClient::open`]. The
/// handle owns the background read task; [`FeedClient::close`] tears the
/// connection down and waits for the task, while dropping the handle
/// tears it down without waiting. There is exactly one connection attempt
/// per handle: no reconnection, no retry.
#[derive(Debug)]
pub struct FeedClient {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl FeedClient {
    /// Opens the connection described by `config`.
    ///
    /// Returns immediately with the client handle and the event receiver;
    /// the handshake runs on a background task and event delivery begins
    /// asynchronously. A handshake failure is delivered as a
    /// [`FeedEvent::ConnectError`], after which the task terminates and
    /// the event channel closes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidServerUrl`] if the configured URL
    /// does not use the `ws` or `wss` scheme.
    pub fn open(config: &ClientConfig) -> Result<(Self, mpsc::Receiver<FeedEvent>), ClientError> {
        let url = config.server_url.clone();
        if !url.starts_with("ws://") && !url.starts_with("wss://") {
            return Err(ClientError::InvalidServerUrl(url));
        }

        let (events_tx, events_rx) = mpsc::channel(config.event_channel_capacity);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            match connect_async(url.as_str()).await {
                Ok((socket, _response)) => {
                    tracing::info!(%url, "connected to feed server");
                    if events_tx
                        .send(FeedEvent::Connected {
                            received_at: Utc::now(),
                        })
                        .await
                        .is_err()
                    {
                        return;
                    }
                    run_connection(socket, events_tx, shutdown_rx).await;
                }
                Err(err) => {
                    tracing::error!(%url, %err, "feed connection failed");
                    let _ = events_tx
                        .send(FeedEvent::ConnectError {
                            reason: err.to_string(),
                            received_at: Utc::now(),
                        })
                        .await;
                }
            }
        });

        Ok((
            Self {
                shutdown: shutdown_tx,
                task,
            },
            events_rx,
        ))
    }

    /// Closes the connection and waits for the read task to finish.
    ///
    /// Safe to call after the connection already ended on its own: the
    /// shutdown signal is simply ignored by a finished task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Internal`] if the background task panicked
    /// or was aborted.
    pub async fn close(self) -> Result<(), ClientError> {
        let _ = self.shutdown.send(());
        self.task
            .await
            .map_err(|err| ClientError::Internal(err.to_string()))
    }
}
