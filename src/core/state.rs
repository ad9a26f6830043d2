//! Game state: board contents plus the side to move.
//!
//! ## Value semantics
//!
//! A `State` is never mutated by the rules. `apply_move` validates a move
//! completely and only then builds a new `State`, so a rejected move leaves
//! the input untouched and a match history is a plain sequence of values.
//!
//! ## Move generation
//!
//! A move is a queen slide followed by an arrow shot from the landing cell.
//! Both legs use the same sliding rule: any empty cell along one of the 8
//! queen lines, up to the first non-empty cell. The vacated origin counts as
//! empty for the arrow leg.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::board::{Board, Cell, Reach};
use super::geometry::{self, CellIndex};
use super::moves::Move;
use super::player::Player;
use super::rng::GameRng;
use crate::error::{IllegalMove, PathError, RulesError};

/// Board plus side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    board: Board,
    current_player: Player,
}

impl State {
    /// Create a state from an arbitrary position.
    #[must_use]
    pub fn new(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// The canonical starting position with `first_player` to move.
    #[must_use]
    pub fn initial(first_player: Player) -> Self {
        Self::new(Board::standard(), first_player)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Plies played so far. Every ply burns exactly one cell.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.board.burned_count()
    }

    // === Move generation ===

    /// Legal queen destinations from `from`.
    ///
    /// Empty unless `from` holds a queen of the side to move.
    #[must_use]
    pub fn queen_destinations(&self, from: CellIndex) -> Reach {
        match self.board.try_get(from) {
            Some(Cell::Queen(owner)) if owner == self.current_player => {
                self.board.reachable_from(from)
            }
            _ => Reach::new(),
        }
    }

    /// Legal arrow destinations after the queen on `from` lands on `to`.
    ///
    /// Empty unless `from` to `to` is a legal queen leg for the side to move.
    #[must_use]
    pub fn arrow_destinations(&self, from: CellIndex, to: CellIndex) -> Reach {
        if !self.queen_destinations(from).contains(&to) {
            return Reach::new();
        }
        self.relocated(from, to).reachable_from(to)
    }

    /// Every legal move for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.board.queens(self.current_player) {
            for to in self.board.reachable_from(from) {
                let after = self.relocated(from, to);
                moves.extend(
                    after
                        .reachable_from(to)
                        .into_iter()
                        .map(|arrow| Move::new(from, to, arrow)),
                );
            }
        }
        trace!(player = %self.current_player, count = moves.len(), "enumerated legal moves");
        moves
    }

    /// Number of legal moves, without materializing them.
    #[must_use]
    pub fn legal_move_count(&self) -> usize {
        self.board
            .queens(self.current_player)
            .map(|from| {
                self.board
                    .reachable_from(from)
                    .into_iter()
                    .map(|to| self.relocated(from, to).reachable_from(to).len())
                    .sum::<usize>()
            })
            .sum()
    }

    /// Check whether the side to move has at least one legal move.
    ///
    /// A queen that can slide at all can always shoot back at the cell it
    /// left, so one open neighbour of any own queen is enough.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.board
            .queens(self.current_player)
            .any(|from| self.board.has_reach(from))
    }

    // === Terminal detection ===

    /// The winner, if the game is over.
    ///
    /// The side to move loses as soon as it has no legal move; there are no
    /// draws. Returns `None` while the side to move can still play.
    #[must_use]
    pub fn game_over(&self) -> Option<Player> {
        (!self.has_legal_move()).then(|| self.current_player.opponent())
    }

    /// [`State::game_over`] as a wire code: `0` while ongoing, otherwise the
    /// winner's code (`-1` or `1`).
    #[must_use]
    pub fn game_over_code(&self) -> i8 {
        self.game_over().map_or(0, Player::code)
    }

    // === Validation and application ===

    /// Check a move against the rules without applying it.
    pub fn validate(&self, mv: Move) -> Result<(), RulesError> {
        self.check(mv)
            .map(|_| ())
            .map_err(|reason| RulesError::IllegalMove { mv, reason })
    }

    /// Check whether a move is legal.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check(mv).is_ok()
    }

    /// Apply a move, producing the next state.
    ///
    /// Fails with [`RulesError::IllegalMove`] if any leg of the move is
    /// illegal; `self` is never modified.
    pub fn apply_move(&self, mv: Move) -> Result<State, RulesError> {
        let mut board = self
            .check(mv)
            .map_err(|reason| RulesError::IllegalMove { mv, reason })?;
        board.set(mv.arrow_to, Cell::Burned);
        Ok(State::new(board, self.current_player.opponent()))
    }

    // === Random play ===

    /// A uniformly random legal move, or `None` if there is none.
    pub fn random_legal_move(&self, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&self.legal_moves()).copied()
    }

    /// Apply a uniformly random legal move.
    ///
    /// Fails with [`RulesError::NoLegalMoves`] on a terminal state.
    pub fn random_move(&self, rng: &mut GameRng) -> Result<State, RulesError> {
        let mv = self
            .random_legal_move(rng)
            .ok_or(RulesError::NoLegalMoves(self.current_player))?;
        self.apply_move(mv)
    }

    // === Internals ===

    /// Board with the queen on `from` moved to `to`, no checks.
    fn relocated(&self, from: CellIndex, to: CellIndex) -> Board {
        let mut board = self.board;
        let queen = board.get(from);
        board.set(from, Cell::Empty);
        board.set(to, queen);
        board
    }

    /// Validate every leg of `mv` and return the board after the queen leg.
    fn check(&self, mv: Move) -> Result<Board, IllegalMove> {
        for cell in [mv.queen_from, mv.queen_to, mv.arrow_to] {
            if !geometry::is_valid_cell(cell) {
                return Err(IllegalMove::OffBoard(cell));
            }
        }

        match self.board.get(mv.queen_from) {
            Cell::Queen(owner) if owner == self.current_player => {}
            Cell::Queen(owner) => {
                return Err(IllegalMove::WrongOwner {
                    cell: mv.queen_from,
                    owner,
                })
            }
            _ => return Err(IllegalMove::NoQueen(mv.queen_from)),
        }

        check_path(&self.board, mv.queen_from, mv.queen_to).map_err(IllegalMove::QueenPath)?;

        let after = self.relocated(mv.queen_from, mv.queen_to);
        check_path(&after, mv.queen_to, mv.arrow_to).map_err(IllegalMove::ArrowPath)?;

        Ok(after)
    }
}

/// Check that every cell from `from` (exclusive) to `to` (inclusive) is
/// empty and lies on one queen line.
fn check_path(board: &Board, from: CellIndex, to: CellIndex) -> Result<(), PathError> {
    if from == to {
        return Err(PathError::Stationary);
    }
    let dir = geometry::direction_between(from, to).ok_or(PathError::NotAligned)?;
    for cell in geometry::ray(from, dir) {
        if !board.get(cell).is_empty() {
            return Err(PathError::Obstructed(cell));
        }
        if cell == to {
            break;
        }
    }
    Ok(())
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "ply {}, {} to move", self.ply(), self.current_player)
    }
}
