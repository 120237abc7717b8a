//! Pentago rules: turn application and reversal, legal-turn enumeration and
//! win detection.
//!
//! Turns are applied to a single board in place. Every applied turn must be
//! undone in reverse order; `TurnGuard` ties the undo to scope exit so early
//! returns cannot skip it.

pub mod engine;
pub mod win;

pub use engine::{legal_turns, outcome, GameResult, TurnGuard, TurnList, MAX_TURNS};
pub use win::{has_line, line_owners, longest_run, won, Line, LINES};
