//! Unified error type for the Tilewire client.

use tilewire_protocol::ProtocolError;
use tilewire_session::SessionError;
use tilewire_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum TilewireError {
    /// A transport-level error (connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Local validation rejected an action before anything was sent.
    #[error(transparent)]
    Session(#[from] SessionError),
}
