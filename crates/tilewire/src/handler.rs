//! Frame-level glue between the connection and the session.
//!
//! Inbound frames are decoded and handed to the session; a frame that does
//! not decode is logged and dropped, and the connection stays up. Outbound
//! commands are encoded and written as single text frames.

use tilewire_protocol::{ClientCommand, Codec, ServerCommand};
use tilewire_session::Session;
use tilewire_transport::{Connection, ConnectionId, WebSocketConnection};
use tilewire_view::Presenter;

use crate::TilewireError;

/// Decodes one inbound frame and applies it to `session`.
pub(crate) fn dispatch_frame<C: Codec, P: Presenter>(
    conn_id: ConnectionId,
    frame: &str,
    codec: &C,
    session: &mut Session,
    presenter: &mut P,
) {
    let command: ServerCommand = match codec.decode(frame) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(%conn_id, error = %e, "failed to decode server message");
            return;
        }
    };

    tracing::debug!(%conn_id, command = %command.kind(), "received");
    session.handle(command, presenter);
}

/// Encodes and sends one command.
pub(crate) async fn send_command<C: Codec>(
    conn: &WebSocketConnection,
    codec: &C,
    command: &ClientCommand,
) -> Result<(), TilewireError> {
    let frame = codec.encode(command)?;
    conn.send(&frame).await?;
    tracing::debug!(conn_id = %conn.id(), command = %command.kind(), "sent");
    Ok(())
}
