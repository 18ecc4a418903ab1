//! Simulated game parameters.

use serde::{Deserialize, Serialize};

use crate::core::MAX_INVEST_LEVEL;

/// Parameters for a locally simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Cards in hand (N).
    pub hand_size: usize,

    /// Concurrent projects (M).
    pub project_count: usize,

    /// Offers per turn (K). Offer 0 is always a free basic work card.
    pub offer_count: usize,

    /// Turns to play (T).
    pub turns: u32,

    /// RNG seed. Same seed produces the same game.
    pub seed: u64,

    /// Investment cap the simulator respects when offering Invest cards.
    pub max_invest_level: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            project_count: 5,
            offer_count: 4,
            turns: 1000,
            seed: 42,
            max_invest_level: MAX_INVEST_LEVEL,
        }
    }
}

impl SimConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set hand size.
    pub fn with_hand_size(mut self, n: usize) -> Self {
        self.hand_size = n;
        self
    }

    /// Set project count.
    pub fn with_project_count(mut self, m: usize) -> Self {
        self.project_count = m;
        self
    }

    /// Set offers per turn.
    pub fn with_offer_count(mut self, k: usize) -> Self {
        self.offer_count = k;
        self
    }

    /// Set number of turns.
    pub fn with_turns(mut self, t: u32) -> Self {
        self.turns = t;
        self
    }

    /// Set RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the investment cap. Should match the engine's cap.
    pub fn with_max_invest_level(mut self, cap: u32) -> Self {
        self.max_invest_level = cap;
        self
    }
}
