//! Core protocol types for Tilewire's wire format.
//!
//! Everything in this module travels on the wire: identity newtypes for
//! seats, tiles and claim kinds, and the raw [`Envelope`] that wraps every
//! frame.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ProtocolError;

/// Number of seats at the table. Fixed; the protocol has no notion of
/// smaller or larger tables.
pub const SEAT_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// SeatIndex
// ---------------------------------------------------------------------------

/// Absolute index of one of the four seats, always in `0..4`.
///
/// The server addresses everything (hand counts, melds, whose turn it is)
/// by absolute seat. Screen-relative placement is derived from it later
/// and never stored.
///
/// On the wire this is a plain integer. Deserialization goes through
/// `TryFrom<u8>`, so `5` or `-1` is rejected instead of silently wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatIndex(u8);

impl SeatIndex {
    /// All four seats in absolute order.
    pub const ALL: [SeatIndex; SEAT_COUNT] =
        [SeatIndex(0), SeatIndex(1), SeatIndex(2), SeatIndex(3)];

    /// Returns the seat for `index`, or `None` if it's not in `0..4`.
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < SEAT_COUNT).then_some(Self(index))
    }

    /// Returns the raw index.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the index for addressing seat-indexed arrays.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Returns the seat `steps` places further round the table.
    pub fn offset(self, steps: u8) -> Self {
        Self(((usize::from(self.0) + usize::from(steps)) % SEAT_COUNT) as u8)
    }
}

impl TryFrom<u8> for SeatIndex {
    type Error = ProtocolError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| {
            ProtocolError::InvalidMessage(format!(
                "seat index {index} out of range 0..{SEAT_COUNT}"
            ))
        })
    }
}

impl From<SeatIndex> for u8 {
    fn from(seat: SeatIndex) -> u8 {
        seat.0
    }
}

impl fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tile / ActionKind
// ---------------------------------------------------------------------------

/// A tile face as the server names it (`"5p"`, `"East"`, ...).
///
/// The client never interprets tile faces; it only displays them and echoes
/// them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tile(String);

impl Tile {
    pub fn new(face: impl Into<String>) -> Self {
        Self(face.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tile {
    fn from(face: &str) -> Self {
        Self::new(face)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A claim type offered by the server (`"PONG"`, `"KONG"`, `"HU"`, ...),
/// or the client-side decline, `"SKIP"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKind(String);

impl ActionKind {
    /// Wire name of the decline option.
    pub const SKIP: &'static str = "SKIP";

    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// The decline option every prompt carries.
    pub fn skip() -> Self {
        Self::new(Self::SKIP)
    }

    pub fn is_skip(&self) -> bool {
        self.0 == Self::SKIP
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// CommandKind
// ---------------------------------------------------------------------------

/// Which way a command travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Client → Server.
    Outbound,
    /// Server → Client.
    Inbound,
}

/// The closed set of commands. Anything else on the wire fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    // -- Client → Server --
    /// `{ nickname }`
    Login,
    /// `{ tile }`
    PlayCard,
    /// `{ type }`
    Action,

    // -- Server → Client --
    /// `{}`
    LoginSuccess,
    /// `{}`; the hand is about to be dealt.
    GameStart,
    /// Optional message, optional action, optional snapshot fields.
    GameUpdate,
    /// `{ action: "CHOOSE_ACTION", choices, tile? }`
    ActionRequest,
    /// `{ message? }`
    GameOver,
    /// `{ message? }`
    Error,
}

impl CommandKind {
    pub fn direction(self) -> Direction {
        match self {
            Self::Login | Self::PlayCard | Self::Action => Direction::Outbound,
            Self::LoginSuccess
            | Self::GameStart
            | Self::GameUpdate
            | Self::ActionRequest
            | Self::GameOver
            | Self::Error => Direction::Inbound,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "LOGIN",
            Self::PlayCard => "PLAY_CARD",
            Self::Action => "ACTION",
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::GameStart => "GAME_START",
            Self::GameUpdate => "GAME_UPDATE",
            Self::ActionRequest => "ACTION_REQUEST",
            Self::GameOver => "GAME_OVER",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Envelope: the top-level wire format
// ---------------------------------------------------------------------------

/// The raw shape of every frame: a command tag plus a payload whose schema
/// depends on the tag.
///
/// ```text
/// { "command": "PLAY_CARD", "data": { "tile": "5p" } }
/// ```
///
/// `data` may be missing or `null` on the wire (payload-less commands are
/// sent that way); both come out as `Value::Null` and are read as `{}`.
/// Key order is irrelevant in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub command: CommandKind,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn new(command: CommandKind, data: serde_json::Value) -> Self {
        Self { command, data }
    }

    /// Parses `data` into the payload type for this command.
    pub(crate) fn payload<T: serde::de::DeserializeOwned>(
        self,
    ) -> Result<T, ProtocolError> {
        let command = self.command;
        let data = match self.data {
            serde_json::Value::Null => {
                serde_json::Value::Object(serde_json::Map::new())
            }
            other => other,
        };
        serde_json::from_value(data).map_err(|e| {
            ProtocolError::InvalidMessage(format!("bad {command} payload: {e}"))
        })
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // SeatIndex
    // =====================================================================

    #[test]
    fn test_seat_index_accepts_zero_to_three() {
        for i in 0..4u8 {
            assert_eq!(SeatIndex::new(i).map(SeatIndex::get), Some(i));
        }
        assert!(SeatIndex::new(4).is_none());
        assert!(SeatIndex::new(255).is_none());
    }

    #[test]
    fn test_seat_index_serializes_as_plain_number() {
        let json = serde_json::to_string(&SeatIndex::ALL[2]).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_seat_index_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<SeatIndex>("4").is_err());
        assert!(serde_json::from_str::<SeatIndex>("-1").is_err());
        assert_eq!(
            serde_json::from_str::<SeatIndex>("3").unwrap(),
            SeatIndex::ALL[3]
        );
    }

    #[test]
    fn test_seat_index_offset_wraps_round_the_table() {
        let s3 = SeatIndex::ALL[3];
        assert_eq!(s3.offset(1), SeatIndex::ALL[0]);
        assert_eq!(s3.offset(2), SeatIndex::ALL[1]);
        assert_eq!(s3.offset(4), s3);
    }

    #[test]
    fn test_seat_index_display() {
        assert_eq!(SeatIndex::ALL[1].to_string(), "S-1");
    }

    // =====================================================================
    // Tile / ActionKind
    // =====================================================================

    #[test]
    fn test_tile_serializes_as_plain_string() {
        let json = serde_json::to_string(&Tile::from("5p")).unwrap();
        assert_eq!(json, "\"5p\"");
    }

    #[test]
    fn test_action_kind_skip() {
        assert!(ActionKind::skip().is_skip());
        assert!(!ActionKind::from("PONG").is_skip());
        assert_eq!(ActionKind::skip().to_string(), "SKIP");
    }

    // =====================================================================
    // CommandKind
    // =====================================================================

    #[test]
    fn test_command_kind_wire_names() {
        let json = serde_json::to_string(&CommandKind::PlayCard).unwrap();
        assert_eq!(json, "\"PLAY_CARD\"");
        let json = serde_json::to_string(&CommandKind::LoginSuccess).unwrap();
        assert_eq!(json, "\"LOGIN_SUCCESS\"");
    }

    #[test]
    fn test_command_kind_display_matches_wire_name() {
        for kind in [
            CommandKind::Login,
            CommandKind::ActionRequest,
            CommandKind::GameOver,
        ] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_command_kind_direction() {
        assert_eq!(CommandKind::Login.direction(), Direction::Outbound);
        assert_eq!(CommandKind::Action.direction(), Direction::Outbound);
        assert_eq!(CommandKind::GameUpdate.direction(), Direction::Inbound);
        assert_eq!(CommandKind::Error.direction(), Direction::Inbound);
    }

    #[test]
    fn test_unknown_command_kind_fails() {
        assert!(serde_json::from_str::<CommandKind>("\"FLY_TO_MOON\"").is_err());
    }

    // =====================================================================
    // Envelope
    // =====================================================================

    #[test]
    fn test_envelope_data_defaults_to_null_when_missing() {
        let env: Envelope =
            serde_json::from_str(r#"{"command":"GAME_START"}"#).unwrap();
        assert_eq!(env.command, CommandKind::GameStart);
        assert!(env.data.is_null());
    }

    #[test]
    fn test_envelope_accepts_explicit_null_data() {
        let env: Envelope =
            serde_json::from_str(r#"{"command":"LOGIN_SUCCESS","data":null}"#)
                .unwrap();
        assert_eq!(env.command, CommandKind::LoginSuccess);
    }

    #[test]
    fn test_envelope_key_order_is_irrelevant() {
        let a: Envelope = serde_json::from_str(
            r#"{"command":"PLAY_CARD","data":{"tile":"5p"}}"#,
        )
        .unwrap();
        let b: Envelope = serde_json::from_str(
            r#"{"data":{"tile":"5p"},"command":"PLAY_CARD"}"#,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_garbage_returns_error() {
        let result: Result<Envelope, _> = serde_json::from_str("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_wrong_shape_returns_error() {
        let result: Result<Envelope, _> =
            serde_json::from_str(r#"{"name": "hello"}"#);
        assert!(result.is_err());
    }
}
