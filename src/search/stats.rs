//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `find_best` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited by `alpha_beta`.
    pub nodes: u64,

    /// Nodes answered from the position cache.
    pub cache_hits: u64,

    /// Beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest iteration that completed.
    pub completed_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes answered from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes as f64
        }
    }
}
