//! Turn application, reversal and legal-turn enumeration.
//!
//! ## Stack discipline
//!
//! `undo_turn` reverses the most recently applied, not-yet-undone turn and
//! nothing else. Callers that cannot guarantee this ordering by construction
//! should use `TurnGuard`, which undoes its turn when dropped.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Colour, Direction, PentagoError, PentagoResult, Quadrant, Turn, BOARD_SIZE};

use super::win::line_owners;

/// Upper bound on legal turns in any position: 36 cells × 4 quadrants × 2 directions.
pub const MAX_TURNS: usize = BOARD_SIZE * BOARD_SIZE * 4 * 2;

/// Legal turns, stored inline.
pub type TurnList = SmallVec<[Turn; MAX_TURNS]>;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one colour owns a qualifying line.
    Winner(Colour),
    /// Both colours own a line, or the board filled up without one.
    Draw,
}

impl GameResult {
    /// Check if a colour won.
    #[must_use]
    pub fn is_winner(&self, colour: Colour) -> bool {
        matches!(self, GameResult::Winner(c) if *c == colour)
    }
}

/// Final result of the position, or `None` while the game continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    match line_owners(board) {
        [true, true] => Some(GameResult::Draw),
        [true, false] => Some(GameResult::Winner(Colour::PlayerA)),
        [false, true] => Some(GameResult::Winner(Colour::PlayerB)),
        [false, false] if board.is_full() => Some(GameResult::Draw),
        [false, false] => None,
    }
}

/// Every legal turn in enumeration order: empty cells row-major, then
/// quadrants `0..4`, then clockwise before counter-clockwise.
#[must_use]
pub fn legal_turns(board: &Board) -> TurnList {
    let mut turns = TurnList::new();
    for (row, col) in board.empty_cells() {
        for quadrant in Quadrant::ALL {
            for direction in Direction::ALL {
                turns.push(Turn::from_parts(row, col, quadrant, direction));
            }
        }
    }
    turns
}

impl Board {
    /// Place the active colour at the turn's cell, rotate the turn's
    /// quadrant, then pass the move to the opponent.
    ///
    /// Rejects an occupied cell before any mutation.
    pub fn apply_turn(&mut self, turn: &Turn) -> PentagoResult<()> {
        if !self.at(turn.row(), turn.col()).is_empty() {
            return Err(PentagoError::CellOccupied {
                row: turn.row() as u8,
                col: turn.col() as u8,
            });
        }
        self.apply_legal(turn);
        Ok(())
    }

    #[inline]
    pub(crate) fn apply_legal(&mut self, turn: &Turn) {
        debug_assert!(self.at(turn.row(), turn.col()).is_empty());
        let stone = Cell::from(self.active_colour());
        self.put(turn.row(), turn.col(), stone);
        self.rotate(turn.quadrant(), turn.direction());
        self.toggle_active();
    }

    /// Reverse `turn`: hand the move back, rotate the quadrant the other
    /// way, then clear the placement cell.
    ///
    /// `turn` must be the most recently applied turn that has not been undone.
    pub fn undo_turn(&mut self, turn: &Turn) {
        self.toggle_active();
        self.rotate(turn.quadrant(), turn.direction().reverse());
        debug_assert_eq!(
            self.at(turn.row(), turn.col()),
            Cell::from(self.active_colour()),
            "undo_turn called out of order"
        );
        self.put(turn.row(), turn.col(), Cell::Empty);
    }

    /// Every legal turn for the active colour, in enumeration order.
    #[must_use]
    pub fn legal_turns(&self) -> TurnList {
        legal_turns(self)
    }
}

/// A turn applied for the lifetime of the guard.
///
/// Dropping the guard undoes the turn, so every exit path (normal return,
/// early return, `?`, unwinding) restores the board. Mutations made through
/// `DerefMut` must themselves be balanced before the guard drops.
///
/// ```
/// use pentago::core::{Board, Colour, Direction, Turn};
/// use pentago::rules::TurnGuard;
///
/// let mut board = Board::new(Colour::PlayerA);
/// let turn = Turn::new(0, 0, 0, Direction::Clockwise).unwrap();
/// {
///     let guard = TurnGuard::apply(&mut board, turn).unwrap();
///     assert_eq!(guard.filled(), 1);
/// }
/// assert!(board.is_empty());
/// ```
pub struct TurnGuard<'a> {
    board: &'a mut Board,
    turn: Turn,
}

impl<'a> TurnGuard<'a> {
    /// Apply `turn`, failing without mutation if its cell is occupied.
    pub fn apply(board: &'a mut Board, turn: Turn) -> PentagoResult<Self> {
        board.apply_turn(&turn)?;
        Ok(Self { board, turn })
    }

    /// Apply a turn taken from `legal_turns` for this exact position.
    #[inline]
    pub(crate) fn apply_legal(board: &'a mut Board, turn: Turn) -> Self {
        board.apply_legal(&turn);
        Self { board, turn }
    }

    /// The guarded turn.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }
}

impl Deref for TurnGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TurnGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_turn(&self.turn);
    }
}
