//! Client layer: connection lifecycle, read loop, and wire frames.
//!
//! [`FeedClient`] owns the background read task for one WebSocket
//! connection and delivers [`FeedEvent`](crate::domain::FeedEvent)s in
//! order through a bounded channel.

pub mod connection;
pub mod feed_client;
pub mod frames;

pub use feed_client::FeedClient;
