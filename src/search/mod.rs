//! Adversarial search for the engine's turn.
//!
//! ## Overview
//!
//! Depth-limited negamax with alpha-beta pruning over the single mutable
//! board, driven by iterative deepening:
//!
//! - **In-place**: every candidate is applied, searched and undone through a
//!   `TurnGuard`, so nothing is copied per node
//! - **Deterministic**: candidates are enumerated in a fixed order and ties
//!   keep the first turn found
//! - **Pluggable cache**: a `PositionCache` can short-circuit repeated
//!   positions; the default `NoCache` never hits
//!
//! ## Usage
//!
//! ```rust
//! use pentago::core::{Board, Colour};
//! use pentago::search::{SearchConfig, SearchEngine};
//!
//! let mut board = Board::new(Colour::PlayerA);
//! let mut engine = SearchEngine::new(SearchConfig::default().with_max_depth(1));
//!
//! let best = engine.find_best(&mut board, 1).unwrap();
//! println!("{} scores {}", best.turn, best.value);
//! assert!(board.is_empty());
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod stats;

pub use cache::{CacheStats, NoCache, PositionCache, TranspositionTable};
pub use config::SearchConfig;
pub use engine::{ScoredTurn, SearchEngine};
pub use stats::SearchStats;
