//! Turn representation and compact notation.
//!
//! A turn places one stone and then rotates one quadrant:
//! - a placement cell (global row and column, `0..6` each)
//! - the quadrant to rotate (`0..4`)
//! - the rotation direction
//!
//! ## Notation
//!
//! Turns have a five-character text form: placement quadrant `A`..`D`, local
//! row `a`..`c`, local column `1`..`3`, `R` (clockwise) or `L`
//! (counter-clockwise), rotated quadrant `A`..`D`.
//!
//! ```
//! use pentago::core::{Direction, Turn};
//!
//! let turn: Turn = "Bc2RD".parse().unwrap();
//! assert_eq!((turn.row(), turn.col()), (2, 4));
//! assert_eq!(turn.quadrant().id(), 3);
//! assert_eq!(turn.direction(), Direction::Clockwise);
//! assert_eq!(turn.to_string(), "Bc2RD");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::{check_coordinate, Quadrant, QUADRANT_SIZE};
use super::error::{PentagoError, PentagoResult};
use super::piece::Direction;

/// A validated turn: placement cell plus quadrant rotation.
///
/// Turn identity is the four fields only; search scores travel separately
/// in `ScoredTurn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TurnRepr", into = "TurnRepr")]
pub struct Turn {
    row: u8,
    col: u8,
    quadrant: Quadrant,
    direction: Direction,
}

impl Turn {
    /// Create a turn from global placement coordinates.
    pub fn new(row: usize, col: usize, quadrant: u8, direction: Direction) -> PentagoResult<Self> {
        check_coordinate(row, col)?;
        let quadrant = Quadrant::new(quadrant)?;
        Ok(Self {
            row: row as u8,
            col: col as u8,
            quadrant,
            direction,
        })
    }

    /// Create a turn from a quadrant-local placement, the form host bindings
    /// use: `(placement quadrant, local row, local col, direction, rotated quadrant)`.
    pub fn from_quadrant_local(
        placement: u8,
        local_row: usize,
        local_col: usize,
        direction: Direction,
        quadrant: u8,
    ) -> PentagoResult<Self> {
        let (row, col) = Quadrant::new(placement)?.to_global(local_row, local_col)?;
        Self::new(row, col, quadrant, direction)
    }

    /// Build from parts already known to be valid.
    #[inline]
    pub(crate) fn from_parts(row: usize, col: usize, quadrant: Quadrant, direction: Direction) -> Self {
        debug_assert!(check_coordinate(row, col).is_ok());
        Self {
            row: row as u8,
            col: col as u8,
            quadrant,
            direction,
        }
    }

    /// Global placement row.
    #[inline]
    #[must_use]
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Global placement column.
    #[inline]
    #[must_use]
    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Quadrant that gets rotated.
    #[inline]
    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[derive(Serialize, Deserialize)]
struct TurnRepr {
    row: u8,
    col: u8,
    quadrant: u8,
    direction: Direction,
}

impl TryFrom<TurnRepr> for Turn {
    type Error = PentagoError;

    fn try_from(repr: TurnRepr) -> Result<Self, Self::Error> {
        Turn::new(repr.row as usize, repr.col as usize, repr.quadrant, repr.direction)
    }
}

impl From<Turn> for TurnRepr {
    fn from(turn: Turn) -> Self {
        Self {
            row: turn.row,
            col: turn.col,
            quadrant: turn.quadrant.id(),
            direction: turn.direction,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = self.row();
        let col = self.col();
        let placement = Quadrant::containing(row, col);
        let local_row = row - placement.row_offset();
        let local_col = col - placement.col_offset();
        let direction = match self.direction {
            Direction::Clockwise => 'R',
            Direction::CounterClockwise => 'L',
        };
        write!(
            f,
            "{}{}{}{}{}",
            (b'A' + placement.id()) as char,
            (b'a' + local_row as u8) as char,
            local_col + 1,
            direction,
            (b'A' + self.quadrant.id()) as char,
        )
    }
}

impl FromStr for Turn {
    type Err = PentagoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PentagoError::InvalidNotation(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(invalid());
        }

        let letter = |b: u8, base: u8, count: u8| -> Option<u8> {
            b.checked_sub(base).filter(|v| *v < count)
        };

        let placement = letter(bytes[0], b'A', 4).ok_or_else(invalid)?;
        let local_row = letter(bytes[1], b'a', QUADRANT_SIZE as u8).ok_or_else(invalid)?;
        let local_col = letter(bytes[2], b'1', QUADRANT_SIZE as u8).ok_or_else(invalid)?;
        let direction = match bytes[3] {
            b'R' => Direction::Clockwise,
            b'L' => Direction::CounterClockwise,
            _ => return Err(invalid()),
        };
        let quadrant = letter(bytes[4], b'A', 4).ok_or_else(invalid)?;

        Turn::from_quadrant_local(
            placement,
            local_row as usize,
            local_col as usize,
            direction,
            quadrant,
        )
    }
}
