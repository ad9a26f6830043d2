//! Per-ply match log entries.
//!
//! Each entry is a snapshot of the position plus the match status. The JSON
//! form is `{"game_state":{...},"status":0|1,"winner":0|-1|1}`; `status` is
//! `1` and `winner` is set only on the final entry.

use serde::{Deserialize, Serialize};

use crate::core::{Player, State};
use crate::error::ParseError;

/// Whether the match was still running at a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchStatus {
    Ongoing,
    Finished,
}

impl From<MatchStatus> for u8 {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Ongoing => 0,
            MatchStatus::Finished => 1,
        }
    }
}

impl TryFrom<u8> for MatchStatus {
    type Error = ParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MatchStatus::Ongoing),
            1 => Ok(MatchStatus::Finished),
            other => Err(ParseError::BadStatusCode(other)),
        }
    }
}

/// One write-once snapshot in a match log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub game_state: State,
    pub status: MatchStatus,
    #[serde(with = "winner_code")]
    pub winner: Option<Player>,
}

impl LogEntry {
    /// Snapshot of a position where the side to move can still play.
    #[must_use]
    pub fn ongoing(state: &State) -> Self {
        Self {
            game_state: *state,
            status: MatchStatus::Ongoing,
            winner: None,
        }
    }

    /// Snapshot of the terminal position.
    #[must_use]
    pub fn finished(state: &State, winner: Player) -> Self {
        Self {
            game_state: *state,
            status: MatchStatus::Finished,
            winner: Some(winner),
        }
    }

    /// Snapshot of any position, deriving status from the rules.
    #[must_use]
    pub fn snapshot(state: &State) -> Self {
        match state.game_over() {
            Some(winner) => Self::finished(state, winner),
            None => Self::ongoing(state),
        }
    }

    #[must_use]
    pub fn is_final(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Serialize to a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `Option<Player>` as `0` / player code.
mod winner_code {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::Player;

    pub fn serialize<S: Serializer>(winner: &Option<Player>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(winner.map_or(0, Player::code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Player>, D::Error> {
        match i8::deserialize(deserializer)? {
            0 => Ok(None),
            code => Player::try_from(code).map(Some).map_err(D::Error::custom),
        }
    }
}
