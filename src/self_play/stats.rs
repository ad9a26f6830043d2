//! Aggregate statistics over a batch of self-play matches.

use serde::{Deserialize, Serialize};

use super::worker::MatchSummary;
use crate::core::{Player, PlayerMap};

/// Win and length statistics for a batch of matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    /// Matches recorded.
    pub games: usize,

    /// Wins per side.
    pub wins: PlayerMap<usize>,

    /// Matches won by the side that moved first.
    pub first_mover_wins: usize,

    /// Sum of match lengths in plies.
    pub total_plies: usize,

    /// Shortest match in plies (0 when empty).
    pub min_plies: usize,

    /// Longest match in plies.
    pub max_plies: usize,
}

impl Default for SelfPlayStats {
    fn default() -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(0),
            first_mover_wins: 0,
            total_plies: 0,
            min_plies: 0,
            max_plies: 0,
        }
    }
}

impl SelfPlayStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build statistics from match summaries.
    pub fn from_summaries<'a>(summaries: impl IntoIterator<Item = &'a MatchSummary>) -> Self {
        let mut stats = Self::new();
        for summary in summaries {
            stats.record(summary);
        }
        stats
    }

    /// Add one finished match.
    pub fn record(&mut self, summary: &MatchSummary) {
        self.min_plies = if self.games == 0 {
            summary.plies
        } else {
            self.min_plies.min(summary.plies)
        };
        self.max_plies = self.max_plies.max(summary.plies);
        self.games += 1;
        self.wins[summary.winner] += 1;
        if summary.winner == summary.first_player {
            self.first_mover_wins += 1;
        }
        self.total_plies += summary.plies;
    }

    /// Average match length in plies.
    #[must_use]
    pub fn mean_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games as f64
        }
    }

    /// Fraction of matches won by the side that moved first.
    #[must_use]
    pub fn first_mover_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.first_mover_wins as f64 / self.games as f64
        }
    }

    /// Fraction of matches won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.games as f64
        }
    }
}
