//! Error types for the rules engine, the text formats and match play.
//!
//! `RulesError` is what rule queries return. `GameError` wraps it when a
//! match cannot continue. `ParseError` covers board text, move notation and
//! wire codes.

use std::num::ParseIntError;

use crate::core::{CellIndex, Move, Player};

/// Why a queen or arrow cannot travel between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("start and destination are the same cell")]
    Stationary,

    #[error("cells do not share a row, column or diagonal")]
    NotAligned,

    #[error("cell {0} is not empty")]
    Obstructed(CellIndex),
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("cell {0} is off the board")]
    OffBoard(CellIndex),

    #[error("no queen on cell {0}")]
    NoQueen(CellIndex),

    #[error("queen on cell {cell} belongs to {owner}")]
    WrongOwner { cell: CellIndex, owner: Player },

    #[error("queen path blocked: {0}")]
    QueenPath(PathError),

    #[error("arrow path blocked: {0}")]
    ArrowPath(PathError),
}

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("invalid player {0} (need -1 or 1)")]
    InvalidPlayer(i8),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalMove },

    #[error("{0} has no legal moves")]
    NoLegalMoves(Player),
}

/// Errors raised while parsing boards, cells and moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty string")]
    EmptyString,

    #[error("expected 10 rows, found {0}")]
    BadLineCount(usize),

    #[error("expected 10 cells per row, found {0}")]
    BadLineLen(usize),

    #[error("unexpected character {0:?}")]
    BadChar(char),

    #[error("expected 100 cells, found {0}")]
    BadCellCount(usize),

    #[error("unknown cell code {0}")]
    BadCellCode(i8),

    #[error("unknown match status {0}")]
    BadStatusCode(u8),

    #[error("{player} has {found} queens, expected 4")]
    QueenCount { player: Player, found: usize },

    #[error("bad square {0:?}")]
    BadSquare(String),

    #[error("bad move {0:?}")]
    BadMove(String),

    #[error("bad integer: {0}")]
    BadInt(#[from] ParseIntError),
}

/// Errors that end a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("move provider for {player} broke its contract: {source}")]
    ProviderViolation { player: Player, source: RulesError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_error_display() {
        let err = RulesError::IllegalMove {
            mv: Move::new(3, 33, 3),
            reason: IllegalMove::QueenPath(PathError::Obstructed(23)),
        };
        assert_eq!(
            err.to_string(),
            "illegal move d1-d4/d1: queen path blocked: cell 23 is not empty"
        );
        assert_eq!(
            RulesError::InvalidPlayer(0).to_string(),
            "invalid player 0 (need -1 or 1)"
        );
    }

    #[test]
    fn test_provider_violation_display() {
        let err = GameError::ProviderViolation {
            player: Player::Second,
            source: RulesError::IllegalMove {
                mv: Move::new(60, 60, 61),
                reason: IllegalMove::QueenPath(PathError::Stationary),
            },
        };
        assert_eq!(
            err.to_string(),
            "move provider for red (1) broke its contract: illegal move a7-a7/b7: \
             queen path blocked: start and destination are the same cell"
        );
    }

    #[test]
    fn test_rules_error_converts_into_game_error() {
        let err: GameError = RulesError::NoLegalMoves(Player::First).into();
        assert_eq!(err, GameError::Rules(RulesError::NoLegalMoves(Player::First)));
        assert_eq!(err.to_string(), RulesError::NoLegalMoves(Player::First).to_string());
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::QueenCount {
            player: Player::First,
            found: 3,
        };
        assert_eq!(err.to_string(), "blue (-1) has 3 queens, expected 4");
    }
}
