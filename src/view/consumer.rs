//! Consumer loop applying feed events to the list view.
//!
//! Events are processed run-to-completion, one at a time, in delivery
//! order. `ApiData` is the only event that mutates the view; the other
//! four produce diagnostic logs only.

use std::io;

use tokio::sync::mpsc;

use super::ListView;
use crate::domain::FeedEvent;

/// Receives events until the channel closes, mirroring each `api_data`
/// payload into `view` and rendering the refreshed view to `out`.
///
/// The view has exactly one mutator (this loop), so no locking is needed;
/// a full replacement happens before the next event is received.
pub async fn run_consumer<W: io::Write>(
    mut events: mpsc::Receiver<FeedEvent>,
    view: &mut ListView,
    out: &mut W,
) {
    while let Some(event) = events.recv().await {
        match event {
            FeedEvent::Connected { .. } => {
                tracing::info!("connected to feed server");
            }
            FeedEvent::Message { payload, .. } => {
                tracing::info!(%payload, "message from server");
            }
            FeedEvent::ApiData { payload, .. } => {
                view.apply(&payload);
                tracing::info!(
                    target_id = view.target(),
                    entries = view.len(),
                    "list view refreshed"
                );
                if let Err(err) = write!(out, "{view}") {
                    tracing::warn!(%err, "failed to render list view");
                }
            }
            FeedEvent::ConnectError { reason, .. } => {
                tracing::error!(%reason, "feed connection error");
            }
            FeedEvent::Disconnected { .. } => {
                tracing::info!("disconnected from feed server");
            }
        }
    }
}
