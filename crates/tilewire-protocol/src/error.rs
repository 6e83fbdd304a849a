//! Error types for the protocol layer.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a command into a frame).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// An inbound frame could not be turned into a command.
    ///
    /// Covers broken JSON, frames that are not envelope-shaped, commands
    /// outside the expected set, and payloads that don't match the schema
    /// of their command. The connection stays usable; callers log and
    /// drop the frame.
    #[error("malformed message: {0}")]
    MalformedMessage(serde_json::Error),

    /// The envelope parsed but violates a protocol rule, e.g. a seat index
    /// outside `0..4` or an outbound command arriving from the server.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}
