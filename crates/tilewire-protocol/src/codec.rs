//! Codec trait and the JSON implementation.
//!
//! A codec turns typed commands into text frames and back. The runtime is
//! generic over [`Codec`], so a test can swap in its own implementation;
//! the server speaks JSON, which is what [`JsonCodec`] provides.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes values into text frames and decodes frames back.
///
/// Decoding is strict about shape: a frame that is not an envelope, that
/// names a command outside the target type's set, or whose payload
/// doesn't fit the command, is a [`ProtocolError::MalformedMessage`].
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into one frame.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError>;

    /// Deserializes one frame.
    ///
    /// # Errors
    /// Returns `ProtocolError::MalformedMessage` if the frame doesn't
    /// describe a valid `T`.
    fn decode<T: DeserializeOwned>(
        &self,
        frame: &str,
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// ## Example
///
/// ```rust
/// use tilewire_protocol::{ClientCommand, Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let cmd = ClientCommand::PlayCard { tile: "5p".into() };
///
/// let frame = codec.encode(&cmd).unwrap();
/// let decoded: ClientCommand = codec.decode(&frame).unwrap();
/// assert_eq!(cmd, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, ProtocolError> {
        serde_json::to_string(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        frame: &str,
    ) -> Result<T, ProtocolError> {
        serde_json::from_str(frame).map_err(ProtocolError::MalformedMessage)
    }
}
