//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Settings for a single match.
///
/// Board size, queen count and starting layout are fixed; only the opening
/// side and the seed for random play vary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side that moves first.
    pub first_player: Player,

    /// Seed for the engine's random fallback.
    /// Same seed and same providers produce the same match.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Player::First,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the side that moves first.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the seed for random play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
