//! Error types for the session layer.

/// Local validation failures. Nothing is sent when one of these occurs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// The nickname was empty or only whitespace.
    #[error("nickname must not be empty")]
    EmptyNickname,

    /// A nickname was already submitted for this session.
    #[error("nickname already submitted as {0:?}")]
    AlreadySubmitted(String),

    /// The connection has ended. No further commands can be produced.
    #[error("session is disconnected")]
    Disconnected,
}
