//! Absolute seat → screen position.
//!
//! The local player is always drawn at the bottom. The seat that acts
//! after them sits on the right, the one after that across, the last one
//! on the left.

use std::fmt;

use serde::{Deserialize, Serialize};
use tilewire_protocol::SeatIndex;

/// Where a seat is drawn, relative to the local player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    /// The local player.
    Bottom,
    Right,
    Across,
    Left,
}

impl Position {
    /// All positions in drawing order, self first.
    pub const ALL: [Position; 4] =
        [Self::Bottom, Self::Right, Self::Across, Self::Left];

    /// Seats after the local player in turn order.
    pub fn offset(self) -> u8 {
        match self {
            Self::Bottom => 0,
            Self::Right => 1,
            Self::Across => 2,
            Self::Left => 3,
        }
    }

    fn from_offset(offset: u8) -> Self {
        match offset % 4 {
            0 => Self::Bottom,
            1 => Self::Right,
            2 => Self::Across,
            _ => Self::Left,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => write!(f, "BOTTOM"),
            Self::Right => write!(f, "RIGHT"),
            Self::Across => write!(f, "ACROSS"),
            Self::Left => write!(f, "LEFT"),
        }
    }
}

/// Returns where `target` is drawn when the local player sits at `my`.
///
/// Computed as `(target - my + 4) mod 4`: offsets 1, 2, 3 map to
/// `Right`, `Across`, `Left`; offset 0 is the local player, `Bottom`.
pub fn position_of(my: SeatIndex, target: SeatIndex) -> Position {
    Position::from_offset((target.get() + 4 - my.get()) % 4)
}

/// Returns the absolute seat drawn at `position`. Inverse of
/// [`position_of`].
pub fn seat_at(my: SeatIndex, position: Position) -> SeatIndex {
    my.offset(position.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(i: u8) -> SeatIndex {
        SeatIndex::new(i).unwrap()
    }

    #[test]
    fn test_self_is_always_bottom() {
        for my in SeatIndex::ALL {
            assert_eq!(position_of(my, my), Position::Bottom);
        }
    }

    #[test]
    fn test_opponents_map_bijectively_to_right_across_left() {
        // For every seat, the three other seats land on exactly the three
        // opponent positions, each once, in offset order.
        for my in SeatIndex::ALL {
            let positions: Vec<Position> = (1..4)
                .map(|offset| position_of(my, my.offset(offset)))
                .collect();
            assert_eq!(
                positions,
                vec![Position::Right, Position::Across, Position::Left],
                "my = {my}"
            );
        }
    }

    #[test]
    fn test_position_of_wraps_below_zero() {
        // target < my: (0 - 3 + 4) mod 4 = 1 → Right.
        assert_eq!(position_of(seat(3), seat(0)), Position::Right);
        assert_eq!(position_of(seat(2), seat(0)), Position::Across);
        assert_eq!(position_of(seat(1), seat(0)), Position::Left);
    }

    #[test]
    fn test_seat_at_inverts_position_of() {
        for my in SeatIndex::ALL {
            for target in SeatIndex::ALL {
                assert_eq!(seat_at(my, position_of(my, target)), target);
            }
        }
    }

    #[test]
    fn test_position_serializes_screaming_case() {
        let json = serde_json::to_string(&Position::Across).unwrap();
        assert_eq!(json, "\"ACROSS\"");
        assert_eq!(Position::Left.to_string(), "LEFT");
    }
}
