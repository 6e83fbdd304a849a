//! Presentation-side types for Tilewire.
//!
//! The server speaks in absolute seats; the screen is laid out relative to
//! the local player. This crate owns that translation and the boundary to
//! whatever draws the table:
//!
//! - **Perspective** ([`Position`], [`position_of`], [`seat_at`]): absolute
//!   seat ↔ screen slot.
//! - **View-models** ([`TableView`], [`SeatView`], [`HandView`],
//!   [`ActionPrompt`]): fully resolved, ready-to-draw state.
//! - **Presenter** ([`Presenter`] trait, [`Intent`]): the rendering surface
//!   and the intents it sends back up.
//!
//! ```text
//! Snapshot (absolute seats) → TableView (Bottom/Right/Across/Left) → Presenter
//! ```

mod perspective;
mod presenter;
mod view;

pub use perspective::{Position, position_of, seat_at};
pub use presenter::{Intent, Presenter};
pub use view::{ActionPrompt, HandView, SeatView, TableView};
