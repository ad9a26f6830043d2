//! # amazons
//!
//! Rules engine and random self-play driver for the Game of the Amazons on
//! a 10x10 board.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: A `State` is a small `Copy` value. Applying a
//!    move returns a new state; enumeration and validation never mutate.
//!
//! 2. **Deterministic Randomness**: All random choices go through a seeded
//!    `GameRng`, so a match is reproducible from its seed and first player.
//!
//! 3. **Pluggable Seats**: Each side is driven by a `MoveProvider`, which may
//!    play a move or defer to the engine's uniform random choice.
//!
//! ## Modules
//!
//! - `core`: Geometry, players, board, moves, state, RNG
//! - `error`: Error types for rules, parsing and match orchestration
//! - `game`: Match driver, move providers, per-ply log
//! - `self_play`: Batch random-vs-random matches and statistics

pub mod core;
pub mod error;
pub mod game;
pub mod self_play;

// Re-export commonly used types
pub use crate::core::{Board, Cell, CellIndex, GameRng, Move, Player, PlayerMap, State};

pub use crate::error::{GameError, IllegalMove, ParseError, PathError, RulesError};

pub use crate::game::{
    DeferToEngine, Game, GameConfig, LogEntry, MatchStatus, MoveProvider, ProviderMove,
    RandomPlayer, RenderHook, ScriptedPlayer,
};

pub use crate::self_play::{MatchSummary, SelfPlayConfig, SelfPlayStats, SelfPlayWorker};
