//! Negamax alpha-beta search with iterative deepening.
//!
//! Node values are from the perspective of the colour to move. A node is
//! terminal when a colour owns a qualifying line, the board is full, or no
//! depth remains; terminal nodes score `rate(board)`.

use std::time::Instant;

use tracing::{debug, info};

use crate::core::{Board, Turn};
use crate::eval::{rate, INFINITY};
use crate::rules::{legal_turns, won, TurnGuard};

use super::cache::{NoCache, PositionCache, TranspositionTable};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// A candidate turn with the score the search assigned to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredTurn {
    pub turn: Turn,
    /// Negamax value for the colour that plays `turn`.
    pub value: f32,
}

/// Search context: configuration, position cache and statistics.
///
/// The board is borrowed mutably for the duration of each call and is
/// returned exactly as it was passed in.
pub struct SearchEngine {
    config: SearchConfig,
    cache: Box<dyn PositionCache>,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a search engine. The cache is a `TranspositionTable` when
    /// `config.use_cache` is set and `NoCache` otherwise.
    pub fn new(config: SearchConfig) -> Self {
        let cache: Box<dyn PositionCache> = if config.use_cache {
            Box::new(TranspositionTable::new(config.cache_capacity))
        } else {
            Box::new(NoCache)
        };
        Self {
            config,
            cache,
            stats: SearchStats::default(),
        }
    }

    /// Replace the position cache.
    pub fn with_cache<C: PositionCache + 'static>(mut self, cache: C) -> Self {
        self.cache = Box::new(cache);
        self
    }

    /// Negamax value of `board` searched `depth` plies deep, within the
    /// `(alpha, beta)` window.
    ///
    /// Returns `alpha` unchanged when every child fails low, and a value
    /// `>= beta` on a cutoff (exactly `beta` when answered from the cache).
    pub fn alpha_beta(&mut self, board: &mut Board, depth: u8, mut alpha: f32, beta: f32) -> f32 {
        self.stats.nodes += 1;

        if depth == 0 || board.is_full() || won(board).is_some() {
            return rate(board);
        }

        let key = board.key();
        if let Some(score) = self.cache.get(key, depth) {
            self.stats.cache_hits += 1;
            // An exact score seen through this window.
            return score.max(alpha).min(beta);
        }

        let window_floor = alpha;
        for turn in legal_turns(board) {
            let value = {
                let mut guard = TurnGuard::apply_legal(board, turn);
                -self.alpha_beta(&mut guard, depth - 1, -beta, -alpha)
            };
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return alpha;
            }
        }

        // Only scores strictly inside the window are exact.
        if alpha > window_floor {
            self.cache.put(key, depth, alpha);
        }
        alpha
    }

    /// Best turn for the colour to move at a fixed depth.
    ///
    /// Ties keep the turn found first in enumeration order. Returns `None`
    /// when the board has no empty cell. A `depth` of 0 searches like 1.
    pub fn best_turn(&mut self, board: &mut Board, depth: u8) -> Option<ScoredTurn> {
        let child_depth = depth.saturating_sub(1);
        let beta = INFINITY;
        let mut alpha = -INFINITY;
        let mut best: Option<ScoredTurn> = None;

        for turn in legal_turns(board) {
            let value = {
                let mut guard = TurnGuard::apply_legal(board, turn);
                -self.alpha_beta(&mut guard, child_depth, -beta, -alpha)
            };
            if best.map_or(true, |b| value > b.value) {
                best = Some(ScoredTurn { turn, value });
            }
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Iterative deepening from depth 1 to `max_depth`.
    ///
    /// Each completed depth replaces the running best, so the result is the
    /// deepest completed depth's choice. Budgets from the configuration are
    /// checked only between depths.
    pub fn find_best(&mut self, board: &mut Board, max_depth: u8) -> Option<ScoredTurn> {
        let start = Instant::now();
        self.stats.reset();

        let mut best = None;
        for depth in 1..=max_depth.max(1) {
            if depth > 1 && self.budget_exhausted(start) {
                info!(
                    completed = self.stats.completed_depth,
                    nodes = self.stats.nodes,
                    "search budget exhausted"
                );
                break;
            }

            let Some(found) = self.best_turn(board, depth) else {
                break;
            };
            debug!(
                depth,
                turn = %found.turn,
                value = found.value,
                nodes = self.stats.nodes,
                elapsed_us = start.elapsed().as_micros() as u64,
                "depth completed"
            );
            best = Some(found);
            self.stats.completed_depth = depth;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// `find_best` to the configured maximum depth.
    pub fn search(&mut self, board: &mut Board) -> Option<ScoredTurn> {
        self.find_best(board, self.config.max_depth)
    }

    fn budget_exhausted(&self, start: Instant) -> bool {
        let out_of_time = self
            .config
            .time_budget()
            .is_some_and(|budget| start.elapsed() >= budget);
        let out_of_nodes = self
            .config
            .node_budget
            .is_some_and(|budget| self.stats.nodes >= budget);
        out_of_time || out_of_nodes
    }

    /// Drop everything the position cache holds.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Statistics of the last `find_best` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
