//! # pentago
//!
//! A Pentago rule engine and alpha-beta game engine.
//!
//! Pentago is played on a 6×6 board split into four rotatable 3×3
//! quadrants. A turn places a stone on an empty cell and then rotates one
//! quadrant a quarter turn. Five in a row wins.
//!
//! ## Design Principles
//!
//! 1. **One Mutable Board**: The search applies and undoes turns in place.
//!    `TurnGuard` ties each undo to a scope so the board is always restored.
//!
//! 2. **Deterministic**: Legal turns are enumerated in a fixed order and ties
//!    keep the first turn, so equal inputs give equal answers.
//!
//! 3. **Validate Then Mutate**: Boundary operations reject bad input with a
//!    `PentagoError` before touching any state.
//!
//! ## Modules
//!
//! - `core`: Cells, colours, quadrants, the board, turns and errors
//! - `rules`: Applying and undoing turns, legal turns, win detection
//! - `eval`: Static evaluation of a position
//! - `search`: Negamax alpha-beta with iterative deepening and a position cache
//! - `game`: Game sessions as used by host bindings
//!
//! ## Example
//!
//! ```rust
//! use pentago::{Board, Colour, SearchConfig, SearchEngine};
//!
//! let mut board = Board::new(Colour::PlayerA);
//! let mut engine = SearchEngine::new(SearchConfig::default().with_max_depth(2));
//!
//! let best = engine.search(&mut board).unwrap();
//! board.apply_turn(&best.turn).unwrap();
//! assert_eq!(board.active_colour(), Colour::PlayerB);
//! ```

pub mod core;
pub mod rules;
pub mod eval;
pub mod search;
pub mod game;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Colour, Direction, Quadrant, PositionKey, Turn,
    PentagoError, PentagoResult,
    BOARD_SIZE, QUADRANT_SIZE, TOTAL_CELLS,
};

pub use crate::rules::{legal_turns, outcome, won, GameResult, TurnGuard, TurnList};

pub use crate::eval::{rate, INFINITY};

pub use crate::search::{
    SearchConfig, SearchEngine, SearchStats, ScoredTurn,
    PositionCache, NoCache, TranspositionTable, CacheStats,
};

pub use crate::game::{Game, GameConfig};
