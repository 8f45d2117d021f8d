//! Client configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults matching the upstream
//! feed server's development setup.

/// Top-level client configuration.
///
/// Loaded once at startup via [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket URL of the feed server (e.g. `ws://127.0.0.1:5001/ws`).
    pub server_url: String,

    /// Identifier of the list container the view mirrors the feed into.
    pub list_target: String,

    /// Capacity of the bounded event channel between the read task and
    /// the consumer loop.
    pub event_channel_capacity: usize,
}

impl ClientConfig {
    /// Default feed server endpoint.
    pub const DEFAULT_SERVER_URL: &'static str = "ws://127.0.0.1:5001/ws";

    /// Default list target identifier.
    pub const DEFAULT_LIST_TARGET: &'static str = "usgs_earthquakes";

    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_url = std::env::var("FEED_SERVER_URL")
            .unwrap_or_else(|_| Self::DEFAULT_SERVER_URL.to_string());

        let list_target = std::env::var("FEED_LIST_TARGET")
            .unwrap_or_else(|_| Self::DEFAULT_LIST_TARGET.to_string());

        // Minimum capacity is 1 (clamped).
        let event_channel_capacity = parse_env("EVENT_CHANNEL_CAPACITY", 256).max(1);

        Self {
            server_url,
            list_target,
            event_channel_capacity,
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
