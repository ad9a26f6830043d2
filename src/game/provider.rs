//! Move providers: who picks the move for each seat.
//!
//! A provider sees the current `State` and either returns a move or defers
//! to the engine's uniform random choice. Seats without an explicit
//! provider use [`DeferToEngine`], so the match loop never special-cases a
//! missing provider.
//!
//! Any `FnMut(&State) -> ProviderMove` closure is a provider.

use std::collections::VecDeque;

use crate::core::{GameRng, Move, State};

/// A provider's answer for one ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderMove {
    /// Play this move. It must be legal; an illegal move ends the match.
    Play(Move),
    /// Let the engine pick a uniformly random legal move.
    DeferToRandom,
}

/// Source of moves for one seat.
///
/// Providers must not assume they are called on every ply of a match, only
/// on plies where their seat is to move.
pub trait MoveProvider {
    /// Choose a move for the side to move in `state`.
    fn choose_move(&mut self, state: &State) -> ProviderMove;
}

impl<F> MoveProvider for F
where
    F: FnMut(&State) -> ProviderMove,
{
    fn choose_move(&mut self, state: &State) -> ProviderMove {
        self(state)
    }
}

/// Always defers to the engine. Default for unconfigured seats.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferToEngine;

impl MoveProvider for DeferToEngine {
    fn choose_move(&mut self, _state: &State) -> ProviderMove {
        ProviderMove::DeferToRandom
    }
}

/// Picks uniformly among legal moves with its own RNG stream.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveProvider for RandomPlayer {
    fn choose_move(&mut self, state: &State) -> ProviderMove {
        state
            .random_legal_move(&mut self.rng)
            .map_or(ProviderMove::DeferToRandom, ProviderMove::Play)
    }
}

/// Replays a fixed list of moves, then defers to the engine.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveProvider for ScriptedPlayer {
    fn choose_move(&mut self, _state: &State) -> ProviderMove {
        self.moves
            .pop_front()
            .map_or(ProviderMove::DeferToRandom, ProviderMove::Play)
    }
}
