//! Ready-to-draw view-models.
//!
//! A [`TableView`] is rebuilt from scratch for every snapshot. Nothing in
//! it survives from the previous one, so drawing the same snapshot twice
//! yields the same view.

use serde::Serialize;
use tilewire_protocol::{ActionKind, ActionRequest, SeatIndex, Snapshot, Tile};

use crate::{Position, seat_at};

// ---------------------------------------------------------------------------
// HandView / SeatView
// ---------------------------------------------------------------------------

/// How a seat's concealed tiles are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandView {
    /// The local player's own tiles, faces visible. Clicking a tile is
    /// only meaningful when `clickable` is set.
    Revealed { tiles: Vec<Tile>, clickable: bool },
    /// An opponent's tiles: `count` face-down placeholders.
    Concealed { count: u32 },
}

impl HandView {
    /// Number of tiles drawn for this hand.
    pub fn len(&self) -> usize {
        match self {
            Self::Revealed { tiles, .. } => tiles.len(),
            Self::Concealed { count } => *count as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the player may click a tile in this hand.
    pub fn is_clickable(&self) -> bool {
        matches!(self, Self::Revealed { clickable: true, .. })
    }
}

/// One seat, placed on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub seat: SeatIndex,
    pub position: Position,
    pub nickname: Option<String>,
    /// Exposed tiles, verbatim from the snapshot.
    pub melds: Vec<Tile>,
    pub hand: HandView,
    pub has_turn: bool,
}

// ---------------------------------------------------------------------------
// ActionPrompt
// ---------------------------------------------------------------------------

/// The claim prompt shown to the local player.
///
/// Offers exactly the server's choices, in the server's order and with any
/// repeats kept, followed by `SKIP`. A `SKIP` the server listed itself is
/// moved to the end so it appears once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPrompt {
    pub options: Vec<ActionKind>,
    /// The tile up for claim, when the server names one.
    pub tile: Option<Tile>,
}

impl ActionPrompt {
    pub fn from_request(request: &ActionRequest) -> Self {
        let mut options: Vec<ActionKind> = request
            .choices
            .iter()
            .filter(|choice| !choice.is_skip())
            .cloned()
            .collect();
        options.push(ActionKind::skip());
        Self {
            options,
            tile: request.tile.clone(),
        }
    }

    /// Returns `true` if `kind` is one of the displayed options.
    pub fn offers(&self, kind: &ActionKind) -> bool {
        self.options.contains(kind)
    }
}

// ---------------------------------------------------------------------------
// TableView
// ---------------------------------------------------------------------------

/// Everything the renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Shared discard pool, oldest first.
    pub sea: Vec<Tile>,
    /// Indexed by [`Position`]: bottom (self), right, across, left.
    pub seats: [SeatView; 4],
    /// The claim prompt, if one is pending.
    pub prompt: Option<ActionPrompt>,
}

impl TableView {
    /// Lays out `snapshot` from the local player's point of view.
    ///
    /// `hand_armed` decides whether the local hand is clickable; the caller
    /// knows whether a play would be accepted right now.
    pub fn build(
        snapshot: &Snapshot,
        hand_armed: bool,
        prompt: Option<ActionPrompt>,
    ) -> Self {
        let my = snapshot.my_index;
        let seats = Position::ALL.map(|position| {
            let seat = seat_at(my, position);
            let hand = match position {
                Position::Bottom => HandView::Revealed {
                    tiles: snapshot.my_hand.clone(),
                    clickable: hand_armed,
                },
                _ => HandView::Concealed {
                    count: snapshot.hand_counts[seat.index()],
                },
            };
            SeatView {
                seat,
                position,
                nickname: snapshot
                    .nicknames
                    .as_ref()
                    .map(|names| names[seat.index()].clone()),
                melds: snapshot.all_melds[seat.index()].clone(),
                hand,
                has_turn: seat == snapshot.turn_index,
            }
        });

        Self {
            sea: snapshot.sea.clone(),
            seats,
            prompt,
        }
    }

    /// The seat drawn at `position`.
    pub fn seat(&self, position: Position) -> &SeatView {
        &self.seats[usize::from(position.offset())]
    }

    /// The local player's seat.
    pub fn me(&self) -> &SeatView {
        self.seat(Position::Bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: u8) -> SeatIndex {
        SeatIndex::new(i).unwrap()
    }

    fn tiles(faces: &[&str]) -> Vec<Tile> {
        faces.iter().map(|f| Tile::from(*f)).collect()
    }

    /// Seat 1 is local; seat 3 holds the turn.
    fn snapshot() -> Snapshot {
        Snapshot {
            my_index: seat(1),
            turn_index: seat(3),
            sea: tiles(&["1m"]),
            my_hand: tiles(&["2p", "3p"]),
            hand_counts: [10, 2, 11, 12],
            all_melds: [
                tiles(&["E", "E", "E"]),
                vec![],
                vec![],
                tiles(&["9s", "9s", "9s"]),
            ],
            nicknames: Some(["A".into(), "B".into(), "C".into(), "D".into()]),
        }
    }

    #[test]
    fn test_build_places_seats_relative_to_me() {
        let view = TableView::build(&snapshot(), false, None);

        assert_eq!(view.me().seat, seat(1));
        assert_eq!(view.seat(Position::Right).seat, seat(2));
        assert_eq!(view.seat(Position::Across).seat, seat(3));
        assert_eq!(view.seat(Position::Left).seat, seat(0));
    }

    #[test]
    fn test_build_reveals_only_my_hand() {
        let view = TableView::build(&snapshot(), true, None);

        assert_eq!(
            view.me().hand,
            HandView::Revealed {
                tiles: tiles(&["2p", "3p"]),
                clickable: true,
            }
        );
        assert_eq!(view.seat(Position::Right).hand, HandView::Concealed { count: 11 });
        assert_eq!(view.seat(Position::Left).hand, HandView::Concealed { count: 10 });
    }

    #[test]
    fn test_build_copies_melds_and_names_by_absolute_seat() {
        let view = TableView::build(&snapshot(), false, None);

        let left = view.seat(Position::Left);
        assert_eq!(left.melds, tiles(&["E", "E", "E"]));
        assert_eq!(left.nickname.as_deref(), Some("A"));

        let across = view.seat(Position::Across);
        assert_eq!(across.melds, tiles(&["9s", "9s", "9s"]));
        assert_eq!(across.nickname.as_deref(), Some("D"));
    }

    #[test]
    fn test_build_marks_exactly_one_turn_holder() {
        let view = TableView::build(&snapshot(), false, None);

        let holders: Vec<Position> = view
            .seats
            .iter()
            .filter(|s| s.has_turn)
            .map(|s| s.position)
            .collect();
        assert_eq!(holders, vec![Position::Across]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = TableView::build(&snapshot(), true, None);
        let b = TableView::build(&snapshot(), true, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_appends_skip() {
        let request = ActionRequest::new([ActionKind::from("PONG"), ActionKind::from("KONG")]);
        let prompt = ActionPrompt::from_request(&request);
        assert_eq!(
            prompt.options,
            vec![
                ActionKind::from("PONG"),
                ActionKind::from("KONG"),
                ActionKind::skip()
            ]
        );
    }

    #[test]
    fn test_prompt_does_not_repeat_server_skip() {
        let request = ActionRequest::new([ActionKind::from("HU"), ActionKind::skip()]);
        let prompt = ActionPrompt::from_request(&request);
        assert_eq!(prompt.options, vec![ActionKind::from("HU"), ActionKind::skip()]);
    }

    #[test]
    fn test_prompt_keeps_server_choices_as_sent() {
        let request = ActionRequest::new([
            ActionKind::from("CHOW"),
            ActionKind::skip(),
            ActionKind::from("CHOW"),
        ]);
        let prompt = ActionPrompt::from_request(&request);
        assert_eq!(
            prompt.options,
            vec![
                ActionKind::from("CHOW"),
                ActionKind::from("CHOW"),
                ActionKind::skip()
            ]
        );
    }

    #[test]
    fn test_prompt_with_no_choices_offers_only_skip() {
        let prompt = ActionPrompt::from_request(&ActionRequest::new([]));
        assert_eq!(prompt.options, vec![ActionKind::skip()]);
        assert!(prompt.offers(&ActionKind::skip()));
        assert!(!prompt.offers(&ActionKind::from("PONG")));
    }

    #[test]
    fn test_hand_view_len_and_clickable() {
        let concealed = HandView::Concealed { count: 13 };
        assert_eq!(concealed.len(), 13);
        assert!(!concealed.is_clickable());

        let mine = HandView::Revealed {
            tiles: tiles(&["1m"]),
            clickable: true,
        };
        assert_eq!(mine.len(), 1);
        assert!(mine.is_clickable());
    }
}
