//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Amazons is strictly two-sided. On the wire a side is its sign code:
//! `First` is `-1` and `Second` is `1`; `0` means "nobody" in log entries.
//!
//! ## PlayerMap
//!
//! One value per side, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::error::RulesError;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Player {
    /// Wire code `-1`. Starts on rows 0 and 3.
    First,
    /// Wire code `1`. Starts on rows 6 and 9.
    Second,
}

impl Player {
    /// Both sides, `First` then `Second`.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// The sign code used in logs and on the command line.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Player::First => -1,
            Player::Second => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Dense 0-based index, for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl TryFrom<i8> for Player {
    type Error = RulesError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Player::First),
            1 => Ok(Player::Second),
            other => Err(RulesError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> Self {
        player.code()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "blue (-1)"),
            Player::Second => write!(f, "red (1)"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use amazons::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_default();
/// wins[Player::Second] += 1;
/// assert_eq!(wins[Player::First], 0);
/// assert_eq!(wins[Player::Second], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::First), factory(Player::Second)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_codes() {
        assert_eq!(Player::First.code(), -1);
        assert_eq!(Player::Second.code(), 1);
        assert_eq!(Player::try_from(-1), Ok(Player::First));
        assert_eq!(Player::try_from(1), Ok(Player::Second));
    }

    #[test]
    fn test_invalid_player_codes() {
        for code in [0, 2, -2, i8::MAX, i8::MIN] {
            assert_eq!(Player::try_from(code), Err(RulesError::InvalidPlayer(code)));
        }
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        for player in Player::ALL {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Player::First).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<Player>("1").unwrap(), Player::Second);
        assert!(serde_json::from_str::<Player>("0").is_err());
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.code() as i32 * 10);
        assert_eq!(map[Player::First], -10);
        assert_eq!(map[Player::Second], 10);

        map[Player::First] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::First, &5), (Player::Second, &10)]);
    }
}
