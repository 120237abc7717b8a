//! Position evaluation.
//!
//! Scores are always from the perspective of the colour to move.

pub mod heuristic;

pub use heuristic::{longest_line, rate, INFINITY};
