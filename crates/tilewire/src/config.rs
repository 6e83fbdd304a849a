//! Client configuration.

use serde::{Deserialize, Serialize};

/// Where the reference server listens.
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8888";

/// Settings for one client connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// WebSocket URL of the game server.
    pub endpoint: String,

    /// The name to log in with. Validated when the client runs, not here.
    pub nickname: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            nickname: String::new(),
        }
    }
}
