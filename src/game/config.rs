//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::core::Colour;
use crate::search::SearchConfig;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Colour that moves first.
    pub beginner: Colour,

    /// Reject turns from the colour not to move and turns after the game ended.
    /// When false, the requesting player simply becomes the active colour.
    pub strict: bool,

    /// Engine settings used by `do_best`.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            beginner: Colour::PlayerA,
            strict: false,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_beginner(mut self, beginner: Colour) -> Self {
        self.beginner = beginner;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
