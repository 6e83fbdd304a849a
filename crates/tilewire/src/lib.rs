//! # Tilewire
//!
//! Client runtime for a four-seat, server-authoritative tile game.
//!
//! The server owns every rule. A Tilewire client connects, logs in, draws
//! whatever snapshot the server sends, and forwards the player's clicks,
//! but only the ones the server would accept at that moment. The crate
//! ties the layers together:
//!
//! ```text
//! transport → protocol → session → view → Presenter
//!     ↑                                       │
//!     └──────────── Intent ◄──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tilewire::prelude::*;
//! use tokio::sync::mpsc;
//!
//! # struct MyScreen;
//! # impl Presenter for MyScreen {
//! #     fn log(&mut self, _: &str) {}
//! #     fn render(&mut self, _: &TableView) {}
//! #     fn show_prompt(&mut self, _: &ActionPrompt) {}
//! #     fn retract_prompt(&mut self) {}
//! # }
//! # async fn demo() -> Result<(), TilewireError> {
//! let (_clicks, intents) = mpsc::channel(16);
//! let mut client = TileClient::builder()
//!     .endpoint("ws://localhost:8888")
//!     .nickname("Alice")
//!     .build(MyScreen);
//! client.run(intents).await
//! # }
//! ```

mod client;
mod config;
mod error;
mod handler;

pub use client::{TileClient, TileClientBuilder};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::TilewireError;

/// Everything needed to drive a client and draw its table.
pub mod prelude {
    pub use crate::{ClientConfig, TileClient, TileClientBuilder, TilewireError};

    pub use tilewire_protocol::{
        ActionKind, ActionRequest, ClientCommand, Codec, JsonCodec, SeatIndex, ServerCommand,
        Snapshot, Tile,
    };
    pub use tilewire_session::{Phase, Session, SessionError};
    pub use tilewire_transport::TransportError;
    pub use tilewire_view::{
        ActionPrompt, HandView, Intent, Position, Presenter, SeatView, TableView,
    };
}
