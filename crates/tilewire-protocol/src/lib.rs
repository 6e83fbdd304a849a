//! Wire protocol for Tilewire.
//!
//! This crate defines the message contract between the client and the
//! authoritative game server:
//!
//! - **Envelope** ([`Envelope`], [`CommandKind`]): the raw
//!   `{ "command": ..., "data": ... }` shape of every text frame.
//! - **Commands** ([`ClientCommand`], [`ServerCommand`]): the typed,
//!   closed set of commands flowing in each direction.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how commands are turned
//!   into frames and back.
//! - **Errors** ([`ProtocolError`]): what can go wrong while doing so.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw text frames) and the
//! session (client state). It holds no state and has no behaviour beyond
//! shape checking.
//!
//! ```text
//! Transport (frames) → Protocol (ServerCommand) → Session (phase, snapshot)
//! ```

mod codec;
mod commands;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use commands::{
    ActionRequest, ClientCommand, GameUpdate, ServerCommand, Snapshot,
    UpdateEvent,
};
pub use error::ProtocolError;
pub use types::{
    ActionKind, CommandKind, Direction, Envelope, SEAT_COUNT, SeatIndex, Tile,
};
