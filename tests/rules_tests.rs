//! Rule engine integration tests: turns, rotation and win detection.

use pentago::core::{Board, Cell, Colour, Direction, Quadrant, Turn, BOARD_SIZE};
use pentago::eval::rate;
use pentago::rules::{legal_turns, line_owners, outcome, won, GameResult, TurnGuard};

fn board_from(rows: [&str; BOARD_SIZE], active: Colour) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'A' => Cell::PlayerA,
                'B' => Cell::PlayerB,
                _ => Cell::Empty,
            };
        }
    }
    Board::from_rows(cells, active)
}

/// Same position with the colour labels exchanged.
fn swap_colours(board: &Board) -> Board {
    let mut cells = *board.rows();
    for cell in cells.iter_mut().flatten() {
        *cell = match *cell {
            Cell::PlayerA => Cell::PlayerB,
            Cell::PlayerB => Cell::PlayerA,
            Cell::Empty => Cell::Empty,
        };
    }
    Board::from_rows(cells, board.active_colour().opponent())
}

// =============================================================================
// Turn Application
// =============================================================================

#[test]
fn test_place_then_rotate_moves_stone() {
    let mut board = Board::new(Colour::PlayerA);
    let turn = Turn::from_quadrant_local(0, 0, 0, Direction::Clockwise, 0).unwrap();
    board.apply_turn(&turn).unwrap();

    let q0 = Quadrant::new(0).unwrap();
    assert_eq!(board.get_local(q0, 0, 2), Ok(Cell::PlayerA));
    assert_eq!(board.get_local(q0, 0, 0), Ok(Cell::Empty));
    assert_eq!(board.active_colour(), Colour::PlayerB);
}

#[test]
fn test_rotation_leaves_other_quadrants_alone() {
    let mut board = board_from(
        ["AB.B..", "..A...", "B.....", "...AB.", "...B.A", ".A...B"],
        Colour::PlayerA,
    );
    let before = board.clone();
    board.rotate(Quadrant::new(1).unwrap(), Direction::CounterClockwise);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if Quadrant::containing(row, col) != Quadrant::new(1).unwrap() {
                assert_eq!(board.get(row, col), before.get(row, col));
            }
        }
    }
    // Local (0, 0) of quadrant 1 moves to local (2, 0) counter-clockwise.
    assert_eq!(board.get(2, 3), Ok(Cell::PlayerB));
    assert_eq!(board.filled(), before.filled());
}

#[test]
fn test_notation_turn_applies() {
    let mut board = Board::new(Colour::PlayerB);
    let turn: Turn = "Dc3LB".parse().unwrap();
    assert_eq!((turn.row(), turn.col()), (5, 5));

    board.apply_turn(&turn).unwrap();
    assert_eq!(board.get(5, 5), Ok(Cell::PlayerB));
    assert_eq!(board.active_colour(), Colour::PlayerA);
}

#[test]
fn test_guard_restores_after_deep_nesting() {
    let mut board = Board::new(Colour::PlayerA);
    let before = board.clone();
    let turns = legal_turns(&board);
    {
        let mut first = TurnGuard::apply(&mut board, turns[0]).unwrap();
        let second_turn = legal_turns(&first)[17];
        let mut second = TurnGuard::apply(&mut first, second_turn).unwrap();
        let third_turn = *legal_turns(&second).last().unwrap();
        let third = TurnGuard::apply(&mut second, third_turn).unwrap();
        assert_eq!(third.filled(), 3);
    }
    assert_eq!(board, before);
}

#[test]
fn test_legal_turn_count_shrinks_with_stones() {
    let board = Board::new(Colour::PlayerA);
    assert_eq!(legal_turns(&board).len(), 36 * 8);

    let board = board_from(
        ["A.....", ".B....", "......", "......", "......", "....AB"],
        Colour::PlayerA,
    );
    assert_eq!(legal_turns(&board).len(), 32 * 8);
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_row_of_five_touching_left_edge() {
    let board = board_from(
        ["AAAAA.", "......", "......", "......", "......", "......"],
        Colour::PlayerB,
    );
    assert_eq!(won(&board), Some(Colour::PlayerA));
    assert_eq!(outcome(&board), Some(GameResult::Winner(Colour::PlayerA)));
}

#[test]
fn test_rotation_can_complete_a_line() {
    let mut board = board_from(
        ["AAA...", "...A..", "......", "......", "......", "......"],
        Colour::PlayerA,
    );
    // Clockwise, local column 0 of quadrant 1 becomes its top row.
    let turn = Turn::new(2, 3, 1, Direction::Clockwise).unwrap();
    board.apply_turn(&turn).unwrap();

    assert_eq!(board.get(0, 3), Ok(Cell::PlayerA));
    assert_eq!(board.get(0, 4), Ok(Cell::PlayerA));
    assert_eq!(board.get(0, 5), Ok(Cell::Empty));
    assert_eq!(won(&board), Some(Colour::PlayerA));
}

#[test]
fn test_simultaneous_lines_are_a_draw() {
    let board = board_from(
        ["AAAAA.", "......", "......", "......", "......", ".BBBBB"],
        Colour::PlayerB,
    );
    assert_eq!(line_owners(&board), [true, true]);
    assert_eq!(outcome(&board), Some(GameResult::Draw));
    // The colour to move owns a line, so it rates as a win for it.
    assert_eq!(rate(&board), f32::INFINITY);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let board = board_from(
        ["AABBAA", "BBAABB", "AABBAA", "BBAABB", "AABBAA", "BBAABB"],
        Colour::PlayerA,
    );
    assert!(board.is_full());
    assert_eq!(won(&board), None);
    assert_eq!(outcome(&board), Some(GameResult::Draw));
}

#[test]
fn test_win_detection_ignores_colour_labels() {
    let boards = [
        board_from(
            ["AAAAA.", "......", "......", "......", "......", ".BBBBB"],
            Colour::PlayerA,
        ),
        board_from(
            ["B.....", ".B....", "..B...", "...B..", "....B.", "......"],
            Colour::PlayerB,
        ),
        board_from(
            [".A....", "..A...", "...A..", "....A.", ".....A", "......"],
            Colour::PlayerA,
        ),
        board_from(
            ["AB....", "AB....", "AB....", "AB....", ".B....", "......"],
            Colour::PlayerB,
        ),
        board_from(
            ["AABBAA", "BB.ABB", "AABBAA", "BBAABB", "AAB.AA", "BBAABB"],
            Colour::PlayerA,
        ),
    ];

    for board in &boards {
        let swapped = swap_colours(board);
        assert_eq!(won(&swapped), won(board).map(Colour::opponent), "{board}");
        assert_eq!(rate(&swapped), rate(board), "{board}");
    }
}
