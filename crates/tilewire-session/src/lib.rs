//! Client session state for Tilewire.
//!
//! A [`Session`] is the client's record of where it stands with the server:
//! whether it has logged in, the last snapshot the server sent, and whether
//! the player is being asked to claim a tile. It consumes decoded
//! [`ServerCommand`](tilewire_protocol::ServerCommand)s, drives a
//! [`Presenter`](tilewire_view::Presenter), and turns player intents into
//! [`ClientCommand`](tilewire_protocol::ClientCommand)s, but only when the
//! server would accept them right now.
//!
//! The session never touches a socket. Feeding it commands and reading
//! back the commands it returns is all the I/O there is, so it can be
//! driven entirely from tests.

mod error;
mod phase;
mod session;

pub use error::SessionError;
pub use phase::Phase;
pub use session::Session;
