//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Deepest iteration `search` runs (default: 4).
    pub max_depth: u8,

    /// Wall-clock budget in milliseconds, checked between depths.
    /// The first depth always completes.
    pub time_budget_ms: Option<u64>,

    /// Node budget, checked between depths like the time budget.
    pub node_budget: Option<u64>,

    /// Back the search with an in-memory `TranspositionTable`.
    /// When false the search uses `NoCache`.
    pub use_cache: bool,

    /// Entry limit for the transposition table.
    pub cache_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            time_budget_ms: None,
            node_budget: None,
            use_cache: false,
            cache_capacity: 1 << 20,
        }
    }
}

impl SearchConfig {
    /// Set the deepest iteration.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set a wall-clock budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = Some(budget.as_millis() as u64);
        self
    }

    /// Set a node budget.
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Enable or disable the transposition table.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    /// Set the transposition table's entry limit.
    pub fn with_cache_capacity(mut self, entries: usize) -> Self {
        self.cache_capacity = entries;
        self
    }

    /// The time budget as a `Duration`.
    #[must_use]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}
