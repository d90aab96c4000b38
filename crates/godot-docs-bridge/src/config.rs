//! Bridge configuration

use std::time::Duration;

/// Default editor endpoint when `GODOT_WS_URL` is unset
pub const DEFAULT_WS_URL: &str = "ws://localhost:9081";

/// Fixed delay between reconnect attempts
pub const RECONNECT_DELAY: Duration = Duration::from_millis(5000);

/// Fixed per-call reply window
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Configuration for the engine bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// WebSocket endpoint of the editor plugin
    pub url: String,
    /// Delay before each reconnect attempt (constant, no backoff)
    pub reconnect_delay: Duration,
    /// How long a call waits for its correlated reply
    pub request_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WS_URL.to_string(),
            reconnect_delay: RECONNECT_DELAY,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl BridgeConfig {
    /// Build a config from the environment (`GODOT_WS_URL`)
    pub fn from_env() -> Self {
        let url = std::env::var("GODOT_WS_URL").unwrap_or_else(|_| DEFAULT_WS_URL.to_string());
        Self {
            url,
            ..Self::default()
        }
    }
}
