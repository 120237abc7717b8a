//! Game facade: the operations host bindings call.
//!
//! `Game` owns one board and one search engine. It validates host-facing
//! identifiers, applies turns atomically, runs the engine's turn and reports
//! the winner. Strict games also enforce turn order and refuse turns after
//! the game ended.

pub mod config;
pub mod session;

pub use config::GameConfig;
pub use session::Game;
