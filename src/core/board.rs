//! Board representation.
//!
//! ## Layout
//!
//! A 6×6 row-major grid split into four 3×3 quadrants:
//!
//! ```text
//!   0 | 1
//!  ---+---
//!   2 | 3
//! ```
//!
//! The board also carries a piece counter (always equal to the number of
//! non-empty cells) and the colour that moves next.
//!
//! ## Mutation
//!
//! The search mutates one board in place and restores it after every
//! candidate, so a board must not be shared across concurrent searches.
//! `Clone` produces an exact field-for-field copy when a non-destructive
//! variant is needed.

use serde::{Deserialize, Serialize};

use super::error::{PentagoError, PentagoResult};
use super::piece::{Cell, Colour, Direction};

/// Side length of the board.
pub const BOARD_SIZE: usize = 6;

/// Number of cells on the board.
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Side length of a quadrant.
pub const QUADRANT_SIZE: usize = 3;

/// Quadrant identifier, guaranteed to be in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quadrant(u8);

impl Quadrant {
    /// All quadrants in enumeration order.
    pub const ALL: [Quadrant; 4] = [Quadrant(0), Quadrant(1), Quadrant(2), Quadrant(3)];

    /// Validate a quadrant id.
    pub fn new(id: u8) -> PentagoResult<Self> {
        if id < 4 {
            Ok(Self(id))
        } else {
            Err(PentagoError::InvalidQuadrant(id as i64))
        }
    }

    /// Raw id (`0..4`).
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Global row of the quadrant's top-left cell.
    #[inline]
    #[must_use]
    pub const fn row_offset(self) -> usize {
        if self.0 >= 2 {
            QUADRANT_SIZE
        } else {
            0
        }
    }

    /// Global column of the quadrant's top-left cell.
    #[inline]
    #[must_use]
    pub const fn col_offset(self) -> usize {
        if self.0 == 1 || self.0 == 3 {
            QUADRANT_SIZE
        } else {
            0
        }
    }

    /// Map quadrant-local coordinates (`0..3` each) to global board coordinates.
    pub fn to_global(self, local_row: usize, local_col: usize) -> PentagoResult<(usize, usize)> {
        if local_row >= QUADRANT_SIZE || local_col >= QUADRANT_SIZE {
            return Err(PentagoError::InvalidCoordinate {
                row: local_row as i64,
                col: local_col as i64,
            });
        }
        Ok((self.row_offset() + local_row, self.col_offset() + local_col))
    }

    /// The quadrant containing a global cell. Coordinates must be on the board.
    #[must_use]
    pub fn containing(row: usize, col: usize) -> Quadrant {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        let id = 2 * (row / QUADRANT_SIZE) + col / QUADRANT_SIZE;
        Quadrant(id as u8)
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = PentagoError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Quadrant::new(id)
    }
}

impl From<Quadrant> for u8 {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.0
    }
}

/// Stable encoding of a position: two bits per cell plus the active colour.
///
/// Bits `2i..2i+2` hold the cell id of row-major cell `i`; bit 72 is set when
/// `PlayerB` is to move. Equal keys mean equal positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey(pub u128);

/// Check that `(row, col)` lies on the board.
pub(crate) fn check_coordinate(row: usize, col: usize) -> PentagoResult<()> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Ok(())
    } else {
        Err(PentagoError::InvalidCoordinate {
            row: row as i64,
            col: col as i64,
        })
    }
}

/// Pentago board: cells, piece counter and active colour.
///
/// Deserialization recomputes the piece counter from the cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BoardRepr")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    filled: u8,
    active: Colour,
}

impl Board {
    /// Empty board with `beginner` to move.
    #[must_use]
    pub fn new(beginner: Colour) -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            filled: 0,
            active: beginner,
        }
    }

    /// Build a board from explicit rows. The piece counter is derived.
    #[must_use]
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE], active: Colour) -> Self {
        let filled = cells.iter().flatten().filter(|c| !c.is_empty()).count() as u8;
        Self {
            cells,
            filled,
            active,
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, row: usize, col: usize) -> PentagoResult<Cell> {
        check_coordinate(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Bounds-checked write. Keeps the piece counter in step with the grid.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> PentagoResult<()> {
        check_coordinate(row, col)?;
        self.put(row, col, value);
        Ok(())
    }

    /// Write through quadrant-local coordinates.
    pub fn set_local(
        &mut self,
        quadrant: Quadrant,
        local_row: usize,
        local_col: usize,
        value: Cell,
    ) -> PentagoResult<()> {
        let (row, col) = quadrant.to_global(local_row, local_col)?;
        self.put(row, col, value);
        Ok(())
    }

    /// Read through quadrant-local coordinates.
    pub fn get_local(&self, quadrant: Quadrant, local_row: usize, local_col: usize) -> PentagoResult<Cell> {
        let (row, col) = quadrant.to_global(local_row, local_col)?;
        Ok(self.cells[row][col])
    }

    /// Unchecked read for hot paths; coordinates must be on the board.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Cell) {
        let old = self.cells[row][col];
        match (old.is_empty(), value.is_empty()) {
            (true, false) => self.filled += 1,
            (false, true) => self.filled -= 1,
            _ => {}
        }
        self.cells[row][col] = value;
    }

    /// Rotate one quadrant by 90° in place.
    ///
    /// Clockwise moves local `(r, c)` to `(c, 2 - r)`. Counter-clockwise is
    /// its exact inverse; four rotations in one direction are the identity.
    pub fn rotate(&mut self, quadrant: Quadrant, direction: Direction) {
        let ro = quadrant.row_offset();
        let co = quadrant.col_offset();

        let mut old = [[Cell::Empty; QUADRANT_SIZE]; QUADRANT_SIZE];
        for (r, row) in old.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[ro + r][co..co + QUADRANT_SIZE]);
        }

        for r in 0..QUADRANT_SIZE {
            for c in 0..QUADRANT_SIZE {
                self.cells[ro + c][co + 2 - r] = match direction {
                    Direction::Clockwise => old[r][c],
                    Direction::CounterClockwise => old[2 - r][2 - c],
                };
            }
        }
    }

    /// The colour that moves next.
    #[inline]
    #[must_use]
    pub fn active_colour(&self) -> Colour {
        self.active
    }

    /// Override the colour that moves next.
    pub fn set_active_colour(&mut self, colour: Colour) {
        self.active = colour;
    }

    #[inline]
    pub(crate) fn toggle_active(&mut self) {
        self.active = self.active.opponent();
    }

    /// Number of stones on the board (`0..=36`).
    #[inline]
    #[must_use]
    pub fn filled(&self) -> u8 {
        self.filled
    }

    /// True once every cell holds a stone.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled as usize == TOTAL_CELLS
    }

    /// True when no stone has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Row-major iterator over the empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells[row][col].is_empty())
    }

    /// The grid, row-major.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Canonical key of the full board contents plus active colour.
    #[must_use]
    pub fn key(&self) -> PositionKey {
        let mut bits: u128 = 0;
        for (i, cell) in self.cells.iter().flatten().enumerate() {
            bits |= (cell.id() as u128) << (2 * i);
        }
        if self.active == Colour::PlayerB {
            bits |= 1u128 << (2 * TOTAL_CELLS);
        }
        PositionKey(bits)
    }
}

#[derive(Deserialize)]
struct BoardRepr {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    active: Colour,
}

impl From<BoardRepr> for Board {
    fn from(repr: BoardRepr) -> Self {
        Board::from_rows(repr.cells, repr.active)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Colour::PlayerA)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r == QUADRANT_SIZE {
                writeln!(f)?;
            }
            let left: Vec<String> = row[..QUADRANT_SIZE].iter().map(|c| c.id().to_string()).collect();
            let right: Vec<String> = row[QUADRANT_SIZE..].iter().map(|c| c.id().to_string()).collect();
            writeln!(f, "{}  {}", left.join(" "), right.join(" "))?;
        }
        Ok(())
    }
}
