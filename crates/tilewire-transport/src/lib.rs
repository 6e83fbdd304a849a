//! Client-side transport layer for Tilewire.
//!
//! Provides the [`Connector`] and [`Connection`] traits that abstract over
//! the channel to the game server, plus a WebSocket implementation.
//!
//! A client owns exactly one connection per session. There is no
//! buffering, no retry and no reconnect: once the channel reports closed or
//! failed, it stays that way.
//!
//! # Feature Flags
//!
//! - `websocket` (default): WebSocket transport via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::{WebSocketConnection, WebSocketConnector};

use std::fmt;

/// Opaque identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a new `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Lifecycle of a single connection.
///
/// ```text
///   Open ──(peer close)──→ Closed
///     │
///     └──(I/O error)────→ Failed
/// ```
///
/// `Closed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Closed,
    Failed,
}

impl ConnectionState {
    /// Returns `true` if frames can still be sent.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
            Self::Failed => 2,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Open,
            1 => Self::Closed,
            _ => Self::Failed,
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// Opens connections to a server endpoint.
pub trait Connector: Send + Sync + 'static {
    /// The connection type produced by this connector.
    type Connection: Connection;
    /// The error type for connect operations.
    type Error: std::error::Error + Send + Sync;

    /// Opens one channel to `endpoint`. Returns once the channel is open.
    async fn connect(
        &self,
        endpoint: &str,
    ) -> Result<Self::Connection, Self::Error>;
}

/// A single connection that exchanges text frames with the server.
pub trait Connection: Send + Sync + 'static {
    /// The error type for connection operations.
    type Error: std::error::Error + Send + Sync;

    /// Sends one frame to the server.
    ///
    /// If the connection is no longer open this is a silent no-op: the
    /// frame is dropped and `Ok(())` is returned. Nothing is buffered.
    async fn send(&self, frame: &str) -> Result<(), Self::Error>;

    /// Receives the next frame from the server.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&self) -> Result<Option<String>, Self::Error>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), Self::Error>;

    /// Returns the current lifecycle state.
    fn state(&self) -> ConnectionState;

    /// Returns the unique identifier for this connection.
    fn id(&self) -> ConnectionId;
}
