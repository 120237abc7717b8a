//! Core types: cells, colours, the board, turns and errors.
//!
//! Everything here is free of game-flow logic. Turn application, win
//! detection and search build on these types in `rules`, `eval` and `search`.

pub mod board;
pub mod error;
pub mod piece;
pub mod turn;

pub use board::{Board, PositionKey, Quadrant, BOARD_SIZE, QUADRANT_SIZE, TOTAL_CELLS};
pub use error::{PentagoError, PentagoResult};
pub use piece::{Cell, Colour, Direction};
pub use turn::Turn;
