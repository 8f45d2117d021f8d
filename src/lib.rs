//! # quakefeed-client
//!
//! WebSocket notification client that mirrors a real-time earthquake feed
//! into a list view.
//!
//! The client opens one connection to a fixed feed endpoint, turns the
//! transport lifecycle and incoming frames into a closed set of typed
//! [`FeedEvent`](domain::FeedEvent)s, and delivers them in order through a
//! bounded channel to a consumer loop that mirrors each `api_data`
//! payload into a [`ListView`](view::ListView). A non-array payload is a
//! presentation error rendered inline; connection failures are logged and
//! never retried.
//!
//! ## Architecture
//!
//! ```text
//! Feed server (WebSocket)
//!     │
//!     ├── FeedClient (client/)      handshake + background read task
//!     ├── decode boundary           frames → FeedEvent / ApiPayload
//!     │
//!     ├── event channel             bounded mpsc, delivery order
//!     │
//!     └── run_consumer (view/)      ListView replace-all rendering
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod view;
