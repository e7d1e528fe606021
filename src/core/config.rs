//! Table configuration.
//!
//! A `GameConfig` fixes the table size, the hand size, how many copies of each
//! tile go into the bag, and the seed the bag is shuffled with.

use serde::{Deserialize, Serialize};

use crate::tiles::{DEFAULT_COPIES, HAND_SIZE};

/// Table-wide settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1-8).
    pub player_count: usize,

    /// Tiles each player holds after drawing (1-6).
    pub hand_size: usize,

    /// Copies of each of the 36 tiles in the bag.
    pub copies_per_tile: usize,

    /// Seed the bag's RNG is forked from. Computer players carry their own
    /// seed in `AgentConfig`.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: HAND_SIZE,
            copies_per_tile: DEFAULT_COPIES,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!((1..=8).contains(&count), "Player count must be 1-8");
        self.player_count = count;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!((1..=HAND_SIZE).contains(&size), "Hand size must be 1-{HAND_SIZE}");
        self.hand_size = size;
        self
    }

    pub fn with_copies_per_tile(mut self, copies: usize) -> Self {
        assert!(copies > 0, "Bag needs at least one copy of each tile");
        self.copies_per_tile = copies;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
