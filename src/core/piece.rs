//! Cell values, colours and rotation directions.
//!
//! All three are closed enumerations. The numeric ids (`0` empty, `1` and `2`
//! for the two colours, `1` clockwise and `0` counter-clockwise) only exist at
//! the boundary with host bindings.

use serde::{Deserialize, Serialize};

use super::error::{PentagoError, PentagoResult};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    PlayerA,
    PlayerB,
}

impl Colour {
    /// Both colours, in id order.
    pub const ALL: [Colour; 2] = [Colour::PlayerA, Colour::PlayerB];

    /// The other colour.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Colour {
        match self {
            Colour::PlayerA => Colour::PlayerB,
            Colour::PlayerB => Colour::PlayerA,
        }
    }

    /// Host-facing identifier: `1` for `PlayerA`, `2` for `PlayerB`.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Colour::PlayerA => 1,
            Colour::PlayerB => 2,
        }
    }

    /// Parse a host-facing identifier.
    pub fn from_id(id: i64) -> PentagoResult<Colour> {
        match id {
            1 => Ok(Colour::PlayerA),
            2 => Ok(Colour::PlayerB),
            other => Err(PentagoError::InvalidPlayerId(other)),
        }
    }

    /// Index into per-colour arrays (`0` or `1`).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Colour::PlayerA => 0,
            Colour::PlayerB => 1,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::PlayerA => write!(f, "PlayerA"),
            Colour::PlayerB => write!(f, "PlayerB"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The colour occupying this cell, if any.
    #[inline]
    #[must_use]
    pub const fn colour(self) -> Option<Colour> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Colour::PlayerA),
            Cell::PlayerB => Some(Colour::PlayerB),
        }
    }

    /// Host-facing identifier: `0` empty, otherwise the colour id.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerA => 1,
            Cell::PlayerB => 2,
        }
    }

    /// Parse a host-facing cell identifier (`0`, `1` or `2`).
    pub fn from_id(id: i64) -> PentagoResult<Cell> {
        match id {
            0 => Ok(Cell::Empty),
            other => Colour::from_id(other).map(Cell::from),
        }
    }
}

impl From<Colour> for Cell {
    #[inline]
    fn from(colour: Colour) -> Self {
        match colour {
            Colour::PlayerA => Cell::PlayerA,
            Colour::PlayerB => Cell::PlayerB,
        }
    }
}

/// Direction of a quadrant rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Enumeration order used by the search: clockwise first.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// The rotation that undoes this one.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Host-facing token: `1` clockwise, `0` counter-clockwise.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 0,
        }
    }

    /// Parse a host-facing direction token.
    pub fn from_id(id: i64) -> Option<Direction> {
        match id {
            1 => Some(Direction::Clockwise),
            0 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_opponent() {
        assert_eq!(Colour::PlayerA.opponent(), Colour::PlayerB);
        assert_eq!(Colour::PlayerB.opponent(), Colour::PlayerA);
    }

    #[test]
    fn test_colour_ids() {
        for colour in Colour::ALL {
            assert_eq!(Colour::from_id(colour.id() as i64), Ok(colour));
        }
        assert_eq!(Colour::from_id(0), Err(PentagoError::InvalidPlayerId(0)));
        assert_eq!(Colour::from_id(3), Err(PentagoError::InvalidPlayerId(3)));
    }

    #[test]
    fn test_cell_conversions() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::from(Colour::PlayerB).colour(), Some(Colour::PlayerB));
        assert_eq!(Cell::from_id(0), Ok(Cell::Empty));
        assert_eq!(Cell::from_id(1), Ok(Cell::PlayerA));
        assert!(Cell::from_id(5).is_err());
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Clockwise.reverse(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.reverse(), Direction::Clockwise);
        assert_eq!(Direction::from_id(1), Some(Direction::Clockwise));
        assert_eq!(Direction::from_id(2), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Colour::PlayerB).unwrap();
        let colour: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(colour, Colour::PlayerB);
    }
}
