//! Board bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, Colour, Direction, PentagoError, PentagoResult, Quadrant, Turn, BOARD_SIZE, QUADRANT_SIZE};
use crate::game::{Game, GameConfig};
use crate::rules::GameResult;
use crate::search::SearchConfig;

/// Turn in binding form: `(quad, row, col, rot_dir, rot_quad)` with a
/// quadrant-local placement.
type TurnTuple = (i64, i64, i64, i64, i64);

fn quadrant(id: i64) -> PentagoResult<Quadrant> {
    u8::try_from(id)
        .map_err(|_| PentagoError::InvalidQuadrant(id))
        .and_then(Quadrant::new)
}

fn in_range(value: i64, bound: usize) -> bool {
    (0..bound as i64).contains(&value)
}

/// Global coordinates of a quadrant-local cell.
fn local_cell(quad: i64, row: i64, col: i64) -> PentagoResult<(usize, usize)> {
    let quadrant = quadrant(quad)?;
    if !in_range(row, QUADRANT_SIZE) || !in_range(col, QUADRANT_SIZE) {
        return Err(PentagoError::InvalidCoordinate { row, col });
    }
    quadrant.to_global(row as usize, col as usize)
}

fn global_cell(row: i64, col: i64) -> PentagoResult<(usize, usize)> {
    if !in_range(row, BOARD_SIZE) || !in_range(col, BOARD_SIZE) {
        return Err(PentagoError::InvalidCoordinate { row, col });
    }
    Ok((row as usize, col as usize))
}

fn direction(id: i64) -> PyResult<Direction> {
    Direction::from_id(id)
        .ok_or_else(|| PyValueError::new_err(format!("invalid rotation {id}: expected CW or CCW")))
}

fn parse_turn((quad, row, col, rot_dir, rot_quad): TurnTuple) -> PyResult<Turn> {
    let (row, col) = local_cell(quad, row, col)?;
    let rotated = quadrant(rot_quad)?;
    Ok(Turn::new(row, col, rotated.id(), direction(rot_dir)?)?)
}

fn turn_tuple(turn: Turn) -> (u8, u8, u8, u8, u8) {
    let placement = Quadrant::containing(turn.row(), turn.col());
    (
        placement.id(),
        (turn.row() - placement.row_offset()) as u8,
        (turn.col() - placement.col_offset()) as u8,
        turn.direction().id(),
        turn.quadrant().id(),
    )
}

/// Python wrapper for a game session.
///
/// Cell values are `NONE` (0), `WHITE` (1) and `BLACK` (2); players are
/// `WHITE` or `BLACK`.
#[pyclass(name = "Board", unsendable)]
pub struct PyBoard {
    game: Game,
}

#[pymethods]
impl PyBoard {
    /// Create an empty board.
    ///
    /// # Arguments
    /// - beginner: Player that moves first
    /// - strict: Enforce turn order and reject turns after the game ended
    /// - cache: Use a transposition table during engine search
    #[new]
    #[pyo3(signature = (beginner = 1, strict = false, cache = false))]
    fn new(beginner: i64, strict: bool, cache: bool) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_beginner(Colour::from_id(beginner)?)
            .strict(strict)
            .with_search(SearchConfig::default().with_cache(cache));
        Ok(Self {
            game: Game::new(config),
        })
    }

    /// Play `turn` for `player`.
    ///
    /// Raises `SquareNotEmpty` if the placement cell is occupied.
    fn apply_turn(&mut self, player: i64, turn: TurnTuple) -> PyResult<()> {
        let turn = parse_turn(turn)?;
        self.game.apply_turn(player, turn)?;
        Ok(())
    }

    /// Let the engine play for `player`, searching `depth` plies.
    ///
    /// Returns the turn played, or None if the board is full.
    #[pyo3(signature = (player, depth = 4))]
    fn do_best(&mut self, player: i64, depth: u8) -> PyResult<Option<(u8, u8, u8, u8, u8)>> {
        Ok(self.game.do_best(player, depth)?.map(turn_tuple))
    }

    /// Winner id, or 0 while nobody owns a line.
    fn win(&self) -> u8 {
        self.game.win()
    }

    /// Final result: winner id, 0 for a draw, None while the game continues.
    fn result(&self) -> Option<u8> {
        self.game.result().map(|result| match result {
            GameResult::Winner(colour) => colour.id(),
            GameResult::Draw => Cell::Empty.id(),
        })
    }

    /// Value of a quadrant-local cell.
    fn get_pos(&self, quad: i64, row: i64, col: i64) -> PyResult<u8> {
        let (row, col) = local_cell(quad, row, col)?;
        Ok(self.game.board().get(row, col)?.id())
    }

    /// Put a stone of `player` on an empty quadrant-local cell without
    /// rotating. The opponent becomes the player to move.
    fn set_pos(&mut self, player: i64, quad: i64, row: i64, col: i64) -> PyResult<()> {
        let colour = Colour::from_id(player)?;
        let (row, col) = local_cell(quad, row, col)?;
        if !self.game.board().get(row, col)?.is_empty() {
            return Err(PentagoError::CellOccupied {
                row: row as u8,
                col: col as u8,
            }
            .into());
        }
        self.game.set_cell(row, col, colour.into())?;
        self.game.set_active_colour(colour.opponent());
        Ok(())
    }

    /// Overwrite a quadrant-local cell with any value, including `NONE`.
    fn set_value(&mut self, value: i64, quad: i64, row: i64, col: i64) -> PyResult<()> {
        let value = Cell::from_id(value)?;
        let (row, col) = local_cell(quad, row, col)?;
        self.game.set_cell(row, col, value)?;
        Ok(())
    }

    /// Rotate a quadrant clockwise outside of a turn.
    fn rotate_cw(&mut self, quad: i64) -> PyResult<()> {
        self.game.rotate(quadrant(quad)?, Direction::Clockwise);
        Ok(())
    }

    /// Rotate a quadrant counter-clockwise outside of a turn.
    fn rotate_ccw(&mut self, quad: i64) -> PyResult<()> {
        self.game.rotate(quadrant(quad)?, Direction::CounterClockwise);
        Ok(())
    }

    /// Take back the last turn. Returns False if there is none.
    fn undo(&mut self) -> bool {
        self.game.undo().is_some()
    }

    /// Player to move.
    #[getter]
    fn active(&self) -> u8 {
        self.game.board().active_colour().id()
    }

    /// Number of stones on the board.
    #[getter]
    fn filled(&self) -> u8 {
        self.game.board().filled()
    }

    /// Accepted turns in compact notation, oldest first.
    fn history(&self) -> Vec<String> {
        self.game
            .history()
            .iter()
            .map(|(_, turn)| turn.to_string())
            .collect()
    }

    /// Copy the board for analysis.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __getitem__(&self, index: (i64, i64)) -> PyResult<u8> {
        let (row, col) = global_cell(index.0, index.1)?;
        Ok(self.game.board().get(row, col)?.id())
    }

    fn __setitem__(&mut self, index: (i64, i64), value: i64) -> PyResult<()> {
        let (row, col) = global_cell(index.0, index.1)?;
        self.game.set_cell(row, col, Cell::from_id(value)?)?;
        Ok(())
    }

    fn __str__(&self) -> String {
        self.game.board().to_string()
    }

    fn __repr__(&self) -> String {
        let status = match self.game.result() {
            Some(GameResult::Winner(colour)) => format!("won by {colour}"),
            Some(GameResult::Draw) => "draw".to_string(),
            None => "ongoing".to_string(),
        };
        format!(
            "Board(filled={}, active={}, status={})",
            self.game.board().filled(),
            self.game.board().active_colour(),
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_tuple_round_trip() {
        let turn = parse_turn((3, 1, 2, 0, 1)).unwrap();
        assert_eq!((turn.row(), turn.col()), (4, 5));
        assert_eq!(turn.direction(), Direction::CounterClockwise);
        assert_eq!(turn_tuple(turn), (3, 1, 2, 0, 1));
    }

    #[test]
    fn test_local_cell_rejects_out_of_range() {
        assert_eq!(local_cell(4, 0, 0), Err(PentagoError::InvalidQuadrant(4)));
        assert_eq!(local_cell(-1, 0, 0), Err(PentagoError::InvalidQuadrant(-1)));
        assert_eq!(
            local_cell(0, 3, 0),
            Err(PentagoError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(local_cell(1, 2, 2), Ok((2, 5)));
    }

    #[test]
    fn test_global_cell() {
        assert_eq!(global_cell(5, 5), Ok((5, 5)));
        assert!(global_cell(6, 0).is_err());
        assert!(global_cell(0, -1).is_err());
    }
}
