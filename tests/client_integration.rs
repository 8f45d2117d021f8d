//! End-to-end tests against a local WebSocket feed server.
//!
//! Each test stands up a throwaway `tokio-tungstenite` server on an
//! ephemeral port, drives the client against it, and observes the event
//! stream and the resulting list view.

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::{Duration, timeout};
use tokio_test::assert_ok;
use tokio_tungstenite::tungstenite::Message;

use quakefeed_client::client::FeedClient;
use quakefeed_client::config::ClientConfig;
use quakefeed_client::domain::{ApiPayload, FeedEvent};
use quakefeed_client::view::{ListView, run_consumer};

/// Binds a local feed server that sends `frames` to the first client and
/// then closes the connection. Returns the `ws://` URL to dial.
async fn spawn_feed_server(frames: Vec<serde_json::Value>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((stream, _)) = listener.accept().await else {
            return;
        };
        let Ok(mut ws) = tokio_tungstenite::accept_async(stream).await else {
            return;
        };
        for frame in frames {
            if ws.send(Message::text(frame.to_string())).await.is_err() {
                return;
            }
        }
        let _ = ws.close(None).await;
    });

    Ok(format!("ws://{addr}"))
}

/// Binds a local feed server that sends nothing and holds the connection
/// open until the client closes it.
async fn spawn_idle_feed_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((stream, _)) = listener.accept().await else {
            return;
        };
        let Ok(mut ws) = tokio_tungstenite::accept_async(stream).await else {
            return;
        };
        // Drain until the client goes away.
        while let Some(Ok(_)) = ws.next().await {}
    });

    Ok(format!("ws://{addr}"))
}

fn config_for(url: &str) -> ClientConfig {
    ClientConfig {
        server_url: url.to_string(),
        list_target: "usgs_earthquakes".to_string(),
        event_channel_capacity: 16,
    }
}

async fn next_event(events: &mut mpsc::Receiver<FeedEvent>) -> Result<FeedEvent> {
    timeout(Duration::from_secs(5), events.recv())
        .await?
        .ok_or_else(|| anyhow::anyhow!("event channel closed"))
}

#[tokio::test]
async fn events_arrive_in_delivery_order() -> Result<()> {
    let url = spawn_feed_server(vec![
        json!({"event": "message", "data": {"data": "Welcome!"}}),
        json!({"event": "api_data", "data": ["M4.2 - 10km NE of Springfield", "M2.1 - Offshore"]}),
    ])
    .await?;

    let (client, mut events) = FeedClient::open(&config_for(&url))?;

    let FeedEvent::Connected { .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected connect first");
    };
    let FeedEvent::Message { payload, .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected message second");
    };
    assert_eq!(payload, json!({"data": "Welcome!"}));

    let FeedEvent::ApiData { payload, .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected api_data third");
    };
    assert_eq!(
        payload,
        ApiPayload::Items(vec![
            "M4.2 - 10km NE of Springfield".to_string(),
            "M2.1 - Offshore".to_string(),
        ])
    );

    let FeedEvent::Disconnected { .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected disconnect last");
    };

    assert_ok!(client.close().await);
    Ok(())
}

#[tokio::test]
async fn view_mirrors_the_latest_payload() -> Result<()> {
    let url = spawn_feed_server(vec![
        json!({"event": "api_data", "data": ["a", "b"]}),
        json!({"event": "api_data", "data": {"error": "bad request"}}),
        json!({"event": "api_data", "data": ["x"]}),
    ])
    .await?;

    let (client, events) = FeedClient::open(&config_for(&url))?;
    let mut view = ListView::new("usgs_earthquakes");
    let mut out = Vec::new();

    // The channel closes once the server disconnects and the read task ends.
    timeout(
        Duration::from_secs(5),
        run_consumer(events, &mut view, &mut out),
    )
    .await?;

    assert_eq!(view.entries(), ["x"]);
    let rendered = String::from_utf8_lossy(&out);
    assert!(rendered.contains("  - a"));
    assert!(rendered.contains("Error: Expected an array, but received object"));
    assert!(rendered.contains("  - x"));

    assert_ok!(client.close().await);
    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_emits_connect_error() -> Result<()> {
    // Grab an ephemeral port, then free it so nobody is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let url = format!("ws://{addr}");
    let (client, mut events) = FeedClient::open(&config_for(&url))?;

    let FeedEvent::ConnectError { reason, .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected connect_error");
    };
    assert!(!reason.is_empty());

    // No retry: the task terminates and the channel closes.
    let closed = timeout(Duration::from_secs(5), events.recv()).await?;
    assert!(closed.is_none());

    assert_ok!(client.close().await);
    Ok(())
}

#[tokio::test]
async fn close_delivers_disconnected() -> Result<()> {
    let url = spawn_idle_feed_server().await?;
    let (client, mut events) = FeedClient::open(&config_for(&url))?;

    let FeedEvent::Connected { .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected connect");
    };

    assert_ok!(client.close().await);

    let FeedEvent::Disconnected { .. } = next_event(&mut events).await? else {
        anyhow::bail!("expected disconnect after close");
    };
    let closed = timeout(Duration::from_secs(5), events.recv()).await?;
    assert!(closed.is_none());
    Ok(())
}
