//! Longest-line heuristic.
//!
//! A decided position scores `±INFINITY`. Otherwise the score is the active
//! colour's longest run minus the opponent's, over every scanned line.
//!
//! The clipping to `±INFINITY` means the score is not a plain negation
//! between perspectives near decided positions: when both colours own a line
//! the active colour sees `+INFINITY` from either side.

use crate::core::{Board, Colour};
use crate::rules::win::{longest_run, LINES, WINNING_RUN};

/// Score of a won position.
pub const INFINITY: f32 = f32::INFINITY;

/// Longest same-colour run of `colour` over all scanned lines.
///
/// Stops scanning as soon as a winning run is found.
#[must_use]
pub fn longest_line(board: &Board, colour: Colour) -> usize {
    let mut longest = 0;
    for &line in &LINES {
        longest = longest.max(longest_run(board, line, colour));
        if longest >= WINNING_RUN {
            break;
        }
    }
    longest
}

/// Score `board` for the colour to move.
#[must_use]
pub fn rate(board: &Board) -> f32 {
    let own = longest_line(board, board.active_colour());
    if own >= WINNING_RUN {
        return INFINITY;
    }
    let other = longest_line(board, board.active_colour().opponent());
    if other >= WINNING_RUN {
        return -INFINITY;
    }
    own as f32 - other as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_empty_board_is_even() {
        assert_eq!(rate(&Board::default()), 0.0);
        assert_eq!(longest_line(&Board::default(), Colour::PlayerA), 0);
    }

    #[test]
    fn test_difference_of_longest_runs() {
        let mut board = Board::new(Colour::PlayerA);
        for col in 0..3 {
            board.set(1, col, Cell::PlayerA).unwrap();
        }
        board.set(4, 4, Cell::PlayerB).unwrap();

        assert_eq!(rate(&board), 2.0);
        board.set_active_colour(Colour::PlayerB);
        assert_eq!(rate(&board), -2.0);
    }

    #[test]
    fn test_runs_count_on_columns_and_diagonals() {
        let mut board = Board::new(Colour::PlayerB);
        for i in 0..4 {
            board.set(i + 1, i, Cell::PlayerB).unwrap();
        }
        for row in 2..5 {
            board.set(row, 5, Cell::PlayerA).unwrap();
        }
        assert_eq!(longest_line(&board, Colour::PlayerB), 4);
        assert_eq!(longest_line(&board, Colour::PlayerA), 3);
        assert_eq!(rate(&board), 1.0);
    }

    #[test]
    fn test_decided_positions_are_infinite() {
        let mut board = Board::new(Colour::PlayerA);
        for row in 0..5 {
            board.set(row, 0, Cell::PlayerA).unwrap();
        }
        assert_eq!(rate(&board), INFINITY);

        board.set_active_colour(Colour::PlayerB);
        assert_eq!(rate(&board), -INFINITY);
    }

    #[test]
    fn test_double_line_favours_mover() {
        let mut board = Board::new(Colour::PlayerA);
        for col in 0..5 {
            board.set(0, col, Cell::PlayerA).unwrap();
            board.set(5, col, Cell::PlayerB).unwrap();
        }
        assert_eq!(rate(&board), INFINITY);
        board.set_active_colour(Colour::PlayerB);
        assert_eq!(rate(&board), INFINITY);
    }
}
