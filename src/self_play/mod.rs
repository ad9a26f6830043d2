//! Batch self-play for random-vs-random matches.
//!
//! ## Overview
//!
//! - **SelfPlayWorker**: plays a batch of independent matches, optionally
//!   spread over scoped threads
//! - **MatchSummary**: winner and length of one match
//! - **SelfPlayStats**: aggregate win rates and match lengths
//!
//! ## Usage
//!
//! ```
//! use amazons::self_play::{SelfPlayConfig, SelfPlayWorker};
//!
//! let config = SelfPlayConfig::new()
//!     .with_games(4)
//!     .with_threads(2)
//!     .with_seed_offset(100);
//!
//! let stats = SelfPlayWorker::new(config).run().unwrap();
//! assert_eq!(stats.games, 4);
//! ```

pub mod stats;
pub mod worker;

pub use stats::SelfPlayStats;
pub use worker::{MatchSummary, SelfPlayConfig, SelfPlayWorker};
