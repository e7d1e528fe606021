//! Computer player configuration.

use serde::{Deserialize, Serialize};

/// Settings for [`ComputerPlayer`](super::ComputerPlayer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Cells added on each side of the bounding rectangle when searching
    /// (default: 1). Smaller values can miss every legal placement.
    pub search_margin: i32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: None,
            search_margin: 1,
        }
    }
}

impl AgentConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search_margin(mut self, margin: i32) -> Self {
        assert!(margin >= 0, "Search margin must not be negative");
        self.search_margin = margin;
        self
    }
}
