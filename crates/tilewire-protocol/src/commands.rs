//! Typed commands and their payload schemas.
//!
//! [`ClientCommand`] and [`ServerCommand`] are the only things the rest of
//! the client deals with. Both serialize through [`Envelope`], so each
//! variant can only ever be paired with the payload its command requires.
//! Decoding checks the command tag against the expected direction and the
//! payload against the tag's schema.

use serde::{Deserialize, Serialize, Serializer, ser::Error as _};
use serde_json::{Map, Value, json};

use crate::{
    ActionKind, CommandKind, Direction, Envelope, ProtocolError, SEAT_COUNT,
    SeatIndex, Tile,
};

/// Wire value of `GAME_UPDATE.action` carrying a full snapshot.
const STATE_UPDATE: &str = "STATE_UPDATE";
/// Wire value of `GAME_UPDATE.action` announcing a drawn tile.
const DRAW: &str = "DRAW";
/// The only `ACTION_REQUEST.action` the server sends.
const CHOOSE_ACTION: &str = "CHOOSE_ACTION";

// ---------------------------------------------------------------------------
// ClientCommand: Client → Server
// ---------------------------------------------------------------------------

/// Everything the client can say to the server.
///
/// ```text
/// { "command": "LOGIN",     "data": { "nickname": "Alice" } }
/// { "command": "PLAY_CARD", "data": { "tile": "5p" } }
/// { "command": "ACTION",    "data": { "type": "PONG" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Envelope", try_from = "Envelope")]
pub enum ClientCommand {
    Login { nickname: String },
    PlayCard { tile: Tile },
    Action { kind: ActionKind },
}

impl ClientCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Login { .. } => CommandKind::Login,
            Self::PlayCard { .. } => CommandKind::PlayCard,
            Self::Action { .. } => CommandKind::Action,
        }
    }
}

#[derive(Deserialize)]
struct LoginData {
    nickname: String,
}

#[derive(Deserialize)]
struct PlayCardData {
    tile: Tile,
}

#[derive(Deserialize)]
struct ActionData {
    #[serde(rename = "type")]
    kind: ActionKind,
}

impl From<ClientCommand> for Envelope {
    fn from(cmd: ClientCommand) -> Self {
        let kind = cmd.kind();
        let data = match cmd {
            ClientCommand::Login { nickname } => json!({ "nickname": nickname }),
            ClientCommand::PlayCard { tile } => json!({ "tile": tile.as_str() }),
            ClientCommand::Action { kind } => json!({ "type": kind.as_str() }),
        };
        Envelope::new(kind, data)
    }
}

impl TryFrom<Envelope> for ClientCommand {
    type Error = ProtocolError;

    fn try_from(env: Envelope) -> Result<Self, Self::Error> {
        match env.command {
            CommandKind::Login => {
                let LoginData { nickname } = env.payload()?;
                Ok(Self::Login { nickname })
            }
            CommandKind::PlayCard => {
                let PlayCardData { tile } = env.payload()?;
                Ok(Self::PlayCard { tile })
            }
            CommandKind::Action => {
                let ActionData { kind } = env.payload()?;
                Ok(Self::Action { kind })
            }
            other => Err(wrong_direction(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerCommand: Server → Client
// ---------------------------------------------------------------------------

/// Everything the server can say to the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Envelope")]
pub enum ServerCommand {
    /// The nickname was accepted; the player is waiting for a table.
    LoginSuccess,
    /// A hand is starting.
    GameStart,
    /// A notice, a drawn tile, or a full snapshot.
    GameUpdate(GameUpdate),
    /// The server offers the local player a claim.
    ActionRequest(ActionRequest),
    /// The hand ended.
    GameOver { message: Option<String> },
    /// The server reports a problem.
    Error { message: Option<String> },
}

impl ServerCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::LoginSuccess => CommandKind::LoginSuccess,
            Self::GameStart => CommandKind::GameStart,
            Self::GameUpdate(_) => CommandKind::GameUpdate,
            Self::ActionRequest(_) => CommandKind::ActionRequest,
            Self::GameOver { .. } => CommandKind::GameOver,
            Self::Error { .. } => CommandKind::Error,
        }
    }
}

#[derive(Deserialize)]
struct NoticeData {
    #[serde(default)]
    message: Option<String>,
}

fn notice(message: Option<String>) -> Value {
    let mut data = Map::new();
    if let Some(message) = message {
        data.insert("message".into(), Value::String(message));
    }
    Value::Object(data)
}

impl TryFrom<ServerCommand> for Envelope {
    type Error = serde_json::Error;

    fn try_from(cmd: ServerCommand) -> Result<Envelope, serde_json::Error> {
        let kind = cmd.kind();
        let data = match cmd {
            ServerCommand::LoginSuccess | ServerCommand::GameStart => json!({}),
            ServerCommand::GameUpdate(update) => update.into_wire()?,
            ServerCommand::ActionRequest(request) => request.into_wire(),
            ServerCommand::GameOver { message }
            | ServerCommand::Error { message } => notice(message),
        };
        Ok(Envelope::new(kind, data))
    }
}

/// Serializes through [`Envelope`]. A payload that fails to serialize fails
/// the whole command; no partial envelope is produced.
impl Serialize for ServerCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope::try_from(self.clone())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl TryFrom<Envelope> for ServerCommand {
    type Error = ProtocolError;

    fn try_from(env: Envelope) -> Result<ServerCommand, ProtocolError> {
        match env.command {
            CommandKind::LoginSuccess => Ok(ServerCommand::LoginSuccess),
            CommandKind::GameStart => Ok(ServerCommand::GameStart),
            CommandKind::GameUpdate => {
                GameUpdate::from_wire(env.payload()?)
                    .map(ServerCommand::GameUpdate)
            }
            CommandKind::ActionRequest => {
                ActionRequest::from_wire(env.payload()?)
                    .map(ServerCommand::ActionRequest)
            }
            CommandKind::GameOver => {
                let NoticeData { message } = env.payload()?;
                Ok(ServerCommand::GameOver { message })
            }
            CommandKind::Error => {
                let NoticeData { message } = env.payload()?;
                Ok(ServerCommand::Error { message })
            }
            other => Err(wrong_direction(other)),
        }
    }
}

/// The error for a command that arrived on the wrong side of the wire.
fn wrong_direction(kind: CommandKind) -> ProtocolError {
    let expected = match kind.direction() {
        Direction::Inbound => "client",
        Direction::Outbound => "server",
    };
    ProtocolError::InvalidMessage(format!("{kind} is not a {expected} command"))
}

// ---------------------------------------------------------------------------
// GAME_UPDATE
// ---------------------------------------------------------------------------

/// The authoritative state of the table for one instant, as seen by one
/// seat.
///
/// Every seat-indexed array is indexed by absolute [`SeatIndex`]. A new
/// snapshot replaces the previous one wholesale; nothing is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The local player's seat. Read fresh from every snapshot.
    pub my_index: SeatIndex,
    /// The seat entitled to act.
    pub turn_index: SeatIndex,
    /// Shared discard pool, oldest first.
    pub sea: Vec<Tile>,
    /// The local player's concealed tiles.
    pub my_hand: Vec<Tile>,
    /// Concealed tile count per seat.
    pub hand_counts: [u32; SEAT_COUNT],
    /// Exposed tiles per seat.
    pub all_melds: [Vec<Tile>; SEAT_COUNT],
    /// Display name per seat, when the server sends them.
    pub nicknames: Option<[String; SEAT_COUNT]>,
}

impl Snapshot {
    /// Returns `true` if the local player holds the turn.
    pub fn is_my_turn(&self) -> bool {
        self.my_index == self.turn_index
    }
}

/// What a `GAME_UPDATE` carries besides its optional message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateEvent {
    /// No `action`: a plain notice.
    None,
    /// `action = "STATE_UPDATE"`: a full snapshot.
    StateUpdate(Snapshot),
    /// `action = "DRAW"`: the local player drew `tile`. Advisory only.
    Draw(Tile),
    /// Any other `action`. Treated like a plain notice.
    Unrecognized(String),
}

/// Payload of `GAME_UPDATE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUpdate {
    pub message: Option<String>,
    pub event: UpdateEvent,
}

impl GameUpdate {
    /// A message-only update.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            event: UpdateEvent::None,
        }
    }

    /// A snapshot update with no message.
    pub fn state(snapshot: Snapshot) -> Self {
        Self {
            message: None,
            event: UpdateEvent::StateUpdate(snapshot),
        }
    }

    fn from_wire(mut wire: GameUpdateData) -> Result<Self, ProtocolError> {
        let event = match wire.action.take() {
            None => UpdateEvent::None,
            Some(action) if action == STATE_UPDATE => {
                UpdateEvent::StateUpdate(wire.take_snapshot()?)
            }
            Some(action) if action == DRAW => {
                let tile = wire.tile.take().ok_or_else(|| {
                    ProtocolError::InvalidMessage("DRAW without tile".into())
                })?;
                UpdateEvent::Draw(tile)
            }
            Some(other) => UpdateEvent::Unrecognized(other),
        };
        Ok(Self {
            message: wire.message,
            event,
        })
    }

    fn into_wire(self) -> Result<Value, serde_json::Error> {
        let mut wire = GameUpdateData {
            message: self.message,
            ..GameUpdateData::default()
        };
        match self.event {
            UpdateEvent::None => {}
            UpdateEvent::StateUpdate(s) => {
                wire.action = Some(STATE_UPDATE.into());
                wire.my_index = Some(s.my_index);
                wire.turn_index = Some(s.turn_index);
                wire.sea = Some(s.sea);
                wire.my_hand = Some(s.my_hand);
                wire.hand_counts = Some(s.hand_counts);
                wire.all_melds = Some(s.all_melds);
                wire.nicknames = s.nicknames;
            }
            UpdateEvent::Draw(tile) => {
                wire.action = Some(DRAW.into());
                wire.tile = Some(tile);
            }
            UpdateEvent::Unrecognized(action) => wire.action = Some(action),
        }
        serde_json::to_value(wire)
    }
}

/// Flat wire shape of `GAME_UPDATE.data`: every field is optional and the
/// meaning depends on `action`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tile: Option<Tile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sea: Option<Vec<Tile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    my_hand: Option<Vec<Tile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hand_counts: Option<[u32; SEAT_COUNT]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_melds: Option<[Vec<Tile>; SEAT_COUNT]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    my_index: Option<SeatIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    turn_index: Option<SeatIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nicknames: Option<[String; SEAT_COUNT]>,
}

impl GameUpdateData {
    fn take_snapshot(&mut self) -> Result<Snapshot, ProtocolError> {
        fn required<T>(
            field: Option<T>,
            name: &str,
        ) -> Result<T, ProtocolError> {
            field.ok_or_else(|| {
                ProtocolError::InvalidMessage(format!(
                    "STATE_UPDATE missing `{name}`"
                ))
            })
        }

        Ok(Snapshot {
            my_index: required(self.my_index.take(), "myIndex")?,
            turn_index: required(self.turn_index.take(), "turnIndex")?,
            sea: required(self.sea.take(), "sea")?,
            my_hand: required(self.my_hand.take(), "myHand")?,
            hand_counts: required(self.hand_counts.take(), "handCounts")?,
            all_melds: required(self.all_melds.take(), "allMelds")?,
            nicknames: self.nicknames.take(),
        })
    }
}

// ---------------------------------------------------------------------------
// ACTION_REQUEST
// ---------------------------------------------------------------------------

/// A claim offer from the server.
///
/// `choices` is exactly what the server offered; the client-side `SKIP` is
/// added by the presentation layer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub choices: Vec<ActionKind>,
    /// The tile that can be claimed, if the server names one.
    pub tile: Option<Tile>,
}

#[derive(Deserialize)]
struct ActionRequestData {
    action: String,
    choices: Vec<ActionKind>,
    #[serde(default)]
    tile: Option<Tile>,
}

impl ActionRequest {
    pub fn new(choices: impl IntoIterator<Item = ActionKind>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            tile: None,
        }
    }

    fn from_wire(wire: ActionRequestData) -> Result<Self, ProtocolError> {
        if wire.action != CHOOSE_ACTION {
            return Err(ProtocolError::InvalidMessage(format!(
                "unknown request action `{}`",
                wire.action
            )));
        }
        Ok(Self {
            choices: wire.choices,
            // The server sends "" when there is nothing to claim.
            tile: wire.tile.filter(|t| !t.as_str().is_empty()),
        })
    }

    fn into_wire(self) -> Value {
        let choices: Vec<Value> = self
            .choices
            .iter()
            .map(|c| Value::String(c.as_str().to_owned()))
            .collect();
        let mut data = Map::new();
        data.insert("action".into(), Value::String(CHOOSE_ACTION.into()));
        data.insert("choices".into(), Value::Array(choices));
        if let Some(tile) = self.tile {
            data.insert("tile".into(), Value::String(tile.as_str().to_owned()));
        }
        Value::Object(data)
    }
}

// =========================================================================
// Tests
// =========================================================================
