//! Python bindings for the Pentago engine.
//!
//! # Quick Start
//!
//! ```python
//! import pentago
//!
//! board = pentago.Board(beginner=pentago.WHITE)
//!
//! # (placement quadrant, local row, local col, rotation, rotated quadrant)
//! board.apply_turn(pentago.WHITE, (0, 1, 1, pentago.CW, 3))
//!
//! # Let the engine answer with a depth-3 search
//! board.do_best(pentago.BLACK, 3)
//! print(board.win())
//! ```

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyMemoryError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Cell, Direction, PentagoError};

mod py_board;

pub use py_board::PyBoard;

create_exception!(pentago, SquareNotEmpty, PyException, "The target square already holds a stone.");

impl From<PentagoError> for PyErr {
    fn from(err: PentagoError) -> PyErr {
        match err {
            PentagoError::CellOccupied { .. } => SquareNotEmpty::new_err(err.to_string()),
            PentagoError::InvalidCoordinate { .. }
            | PentagoError::InvalidQuadrant(_)
            | PentagoError::InvalidPlayerId(_)
            | PentagoError::InvalidNotation(_) => PyValueError::new_err(err.to_string()),
            PentagoError::NotYourTurn(_) | PentagoError::GameOver => {
                PyRuntimeError::new_err(err.to_string())
            }
            PentagoError::AllocationFailure => PyMemoryError::new_err(err.to_string()),
        }
    }
}

/// pentago: a Pentago board with an alpha-beta engine.
///
/// This module provides:
/// - `Board`, a game session with rule checking and engine turns
/// - Rotation tokens `CW` and `CCW`
/// - Cell values `NONE`, `WHITE` and `BLACK`
/// - The `SquareNotEmpty` exception
#[pymodule]
fn pentago(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;

    m.add("CW", Direction::Clockwise.id())?;
    m.add("CCW", Direction::CounterClockwise.id())?;
    m.add("NONE", Cell::Empty.id())?;
    m.add("WHITE", Cell::PlayerA.id())?;
    m.add("BLACK", Cell::PlayerB.id())?;

    m.add("SquareNotEmpty", m.py().get_type_bound::<SquareNotEmpty>())?;

    Ok(())
}
