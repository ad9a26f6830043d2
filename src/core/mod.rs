//! Core rules types: geometry, players, board, moves, state, RNG.
//!
//! Everything here is pure and synchronous. A `State` never changes once
//! built; applying a move returns a new one.

pub mod board;
pub mod geometry;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Cell, Reach};
pub use geometry::{CellIndex, Direction, BOARD_SIZE, CELL_COUNT, DIRECTIONS, QUEENS_PER_PLAYER};
pub use moves::Move;
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::State;
