//! Win detection.
//!
//! A colour wins with five or six consecutive stones along a row, a column,
//! or one of the three tracked diagonals: the main diagonal and the two
//! diagonals offset from it by one cell.
//!
//! Any five-stone run in a six-cell line covers cells `1..=4` plus one of the
//! two boundary cells, so checking the run length is equivalent to checking
//! the inner four cells and a boundary cell.
//!
//! Lines are scanned as all rows, then all columns, then the diagonals. `won`
//! reports the first qualifying line in that order.

use crate::core::{Board, Colour, BOARD_SIZE};

/// Minimum run length that wins.
pub const WINNING_RUN: usize = 5;

/// A straight line of cells on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    start: (usize, usize),
    step: (usize, usize),
    len: usize,
}

impl Line {
    const fn new(start: (usize, usize), step: (usize, usize), len: usize) -> Self {
        Self { start, step, len }
    }

    /// Number of cells on the line.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Coordinates of the `i`-th cell.
    #[inline]
    #[must_use]
    pub const fn cell(&self, i: usize) -> (usize, usize) {
        (self.start.0 + i * self.step.0, self.start.1 + i * self.step.1)
    }

    /// Coordinates of every cell, in order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.len).map(move |i| self.cell(i))
    }
}

const fn build_lines() -> [Line; 15] {
    let mut lines = [Line::new((0, 0), (0, 1), BOARD_SIZE); 15];
    let mut i = 0;
    while i < BOARD_SIZE {
        lines[i] = Line::new((i, 0), (0, 1), BOARD_SIZE);
        lines[BOARD_SIZE + i] = Line::new((0, i), (1, 0), BOARD_SIZE);
        i += 1;
    }
    lines[12] = Line::new((0, 0), (1, 1), BOARD_SIZE);
    lines[13] = Line::new((0, 1), (1, 1), BOARD_SIZE - 1);
    lines[14] = Line::new((1, 0), (1, 1), BOARD_SIZE - 1);
    lines
}

/// Every scanned line: six rows, six columns, then the three diagonals.
pub const LINES: [Line; 15] = build_lines();

/// Longest run of `colour` along `line`.
#[must_use]
pub fn longest_run(board: &Board, line: Line, colour: Colour) -> usize {
    let mut run = 0;
    let mut longest = 0;
    for (row, col) in line.cells() {
        if board.at(row, col).colour() == Some(colour) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// The colour owning a winning run on `line`, if any.
///
/// Every qualifying run passes through cell 1, so only that colour is checked.
fn line_owner(board: &Board, line: Line) -> Option<Colour> {
    let (row, col) = line.cell(1);
    let colour = board.at(row, col).colour()?;
    (longest_run(board, line, colour) >= WINNING_RUN).then_some(colour)
}

/// Colour of the first qualifying line in scan order, or `None`.
///
/// `None` does not distinguish an ongoing game from a full board; check
/// `Board::is_full` for that.
#[must_use]
pub fn won(board: &Board) -> Option<Colour> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Whether `colour` owns at least one qualifying line.
#[must_use]
pub fn has_line(board: &Board, colour: Colour) -> bool {
    LINES
        .iter()
        .any(|&line| line_owner(board, line) == Some(colour))
}

/// Per-colour line ownership, indexed by `Colour::index`.
///
/// A single rotation can complete lines for both colours at once.
#[must_use]
pub fn line_owners(board: &Board) -> [bool; 2] {
    let mut owners = [false; 2];
    for &line in &LINES {
        if let Some(colour) = line_owner(board, line) {
            owners[colour.index()] = true;
        }
    }
    owners
}
