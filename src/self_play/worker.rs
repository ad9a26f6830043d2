//! Batch self-play: many independent random-vs-random matches.
//!
//! Match `i` is fully determined by its seed (`seed_offset + i`) and first
//! player, so results do not depend on how matches are spread over threads.
//! Each thread owns the `Game` values it plays; nothing is shared.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::stats::SelfPlayStats;
use crate::core::Player;
use crate::error::GameError;
use crate::game::{Game, GameConfig, LogEntry};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of matches to play.
    pub games: usize,

    /// Seed of match 0; match `i` uses `seed_offset + i`.
    pub seed_offset: u64,

    /// Worker threads (1 = play on the calling thread).
    pub threads: usize,

    /// Side that moves first in match 0.
    pub first_player: Player,

    /// Swap the first player on every odd-numbered match.
    pub alternate_first_player: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
            threads: 1,
            first_player: Player::First,
            alternate_first_player: true,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of matches.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Set worker thread count. Values below 1 are treated as 1.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Set the first player of match 0.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Enable or disable alternating the first player.
    pub fn with_alternation(mut self, alternate: bool) -> Self {
        self.alternate_first_player = alternate;
        self
    }

    /// Match configuration for match `index`.
    pub fn game_config(&self, index: usize) -> GameConfig {
        let first_player = if self.alternate_first_player && index % 2 == 1 {
            self.first_player.opponent()
        } else {
            self.first_player
        };
        GameConfig::default()
            .with_first_player(first_player)
            .with_seed(self.seed_offset.wrapping_add(index as u64))
    }
}

/// Result of one finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Position of the match in the batch.
    pub index: usize,
    pub seed: u64,
    pub first_player: Player,
    pub winner: Player,
    /// Plies played before the loser got stuck.
    pub plies: usize,
}

/// Runs batches of self-play matches.
#[derive(Clone, Debug, Default)]
pub struct SelfPlayWorker {
    config: SelfPlayConfig,
}

impl SelfPlayWorker {
    /// Create a new self-play worker.
    pub fn new(config: SelfPlayConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }

    /// Play match `index` to the end.
    pub fn play_match(&self, index: usize) -> Result<MatchSummary, GameError> {
        let config = self.config.game_config(index);
        let (seed, first_player) = (config.seed, config.first_player);

        let mut game = Game::with_config(config);
        let winner = game.play_out()?;
        let plies = game.state().ply();

        debug!(index, %winner, plies, "self-play match done");
        Ok(MatchSummary {
            index,
            seed,
            first_player,
            winner,
            plies,
        })
    }

    /// Play match `index` and return its full log.
    ///
    /// Replays exactly the match summarized by [`SelfPlayWorker::play_match`].
    pub fn play_match_log(&self, index: usize) -> Result<Vec<LogEntry>, GameError> {
        Game::with_config(self.config.game_config(index)).start()
    }

    /// Play every match in the batch, in index order.
    pub fn play_games(&self) -> Result<Vec<MatchSummary>, GameError> {
        let games = self.config.games;
        let threads = self.config.threads.clamp(1, games.max(1));
        info!(games, threads, seed_offset = self.config.seed_offset, "self-play started");

        let summaries = if threads == 1 {
            (0..games)
                .map(|i| self.play_match(i))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            self.play_parallel(games, threads)?
        };

        info!(games = summaries.len(), "self-play finished");
        Ok(summaries)
    }

    /// Play the batch and aggregate the results.
    pub fn run(&self) -> Result<SelfPlayStats, GameError> {
        Ok(SelfPlayStats::from_summaries(&self.play_games()?))
    }

    fn play_parallel(&self, games: usize, threads: usize) -> Result<Vec<MatchSummary>, GameError> {
        let results: Vec<Result<MatchSummary, GameError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    scope.spawn(move || {
                        (t..games)
                            .step_by(threads)
                            .map(|i| self.play_match(i))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(results) => results,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut summaries = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        summaries.sort_by_key(|summary| summary.index);
        Ok(summaries)
    }
}
