//! Match orchestration.
//!
//! - **Game**: drives one match from the starting position to a win
//! - **MoveProvider**: per-seat source of moves, or deferral to random play
//! - **LogEntry**: one snapshot per ply, plus the final position
//! - **GameConfig**: first player and RNG seed
//!
//! ## Usage
//!
//! ```
//! use amazons::core::{Player, State};
//! use amazons::game::{Game, ProviderMove, RandomPlayer};
//!
//! let mut game = Game::new(-1)
//!     .unwrap()
//!     .with_provider(Player::First, RandomPlayer::new(7))
//!     .with_provider(Player::Second, |state: &State| {
//!         // Always the first legal move, in enumeration order.
//!         state
//!             .legal_moves()
//!             .first()
//!             .map_or(ProviderMove::DeferToRandom, |mv| ProviderMove::Play(*mv))
//!     });
//!
//! let log = game.start().unwrap();
//! assert!(log.last().unwrap().is_final());
//! ```

pub mod config;
pub mod log;
pub mod provider;
pub mod runner;

pub use config::GameConfig;
pub use log::{LogEntry, MatchStatus};
pub use provider::{DeferToEngine, MoveProvider, ProviderMove, RandomPlayer, ScriptedPlayer};
pub use runner::{Game, RenderHook};
