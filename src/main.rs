//! quakefeed-client entry point.
//!
//! Connects to the feed server and mirrors `api_data` payloads into the
//! list view rendered on stdout.

use std::io;

use tracing_subscriber::EnvFilter;

use quakefeed_client::client::FeedClient;
use quakefeed_client::config::ClientConfig;
use quakefeed_client::view::{ListView, run_consumer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ClientConfig::from_env();
    tracing::info!(url = %config.server_url, "starting quakefeed-client");

    // The list target exists before the first api_data event can arrive.
    let mut view = ListView::new(config.list_target.clone());

    // Open the feed connection; event delivery begins asynchronously.
    let (client, events) = FeedClient::open(&config)?;

    let mut stdout = io::stdout();
    tokio::select! {
        () = run_consumer(events, &mut view, &mut stdout) => {
            tracing::info!("event channel closed");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    client.close().await?;

    Ok(())
}
