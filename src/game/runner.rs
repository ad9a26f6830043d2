//! Match driver: alternates seats until one side cannot move.

use std::io;

use tracing::{debug, error, info, warn};

use super::config::GameConfig;
use super::log::LogEntry;
use super::provider::{DeferToEngine, MoveProvider, ProviderMove};
use crate::core::{GameRng, Move, Player, PlayerMap, State};
use crate::error::{GameError, RulesError};

/// Display callback run after every applied ply.
///
/// It only sees the state by shared reference; an `Err` is logged and
/// otherwise ignored.
pub type RenderHook = Box<dyn FnMut(&State) -> io::Result<()>>;

/// A single match between two move providers.
///
/// ## Example
///
/// ```
/// use amazons::game::Game;
///
/// let mut game = Game::new(-1).unwrap();
/// let log = game.start().unwrap();
///
/// let last = log.last().unwrap();
/// assert!(last.is_final());
/// assert_eq!(last.winner, game.winner());
/// ```
pub struct Game {
    config: GameConfig,
    state: State,
    rng: GameRng,
    providers: PlayerMap<Box<dyn MoveProvider>>,
    render_hook: Option<RenderHook>,
    winner: Option<Player>,
}

impl Game {
    /// Create a match with `first_player` (`-1` or `1`) to move first.
    ///
    /// Both seats defer to the engine's random choice until providers are
    /// installed.
    pub fn new(first_player: i8) -> Result<Self, RulesError> {
        let first_player = Player::try_from(first_player)?;
        Ok(Self::with_config(
            GameConfig::default().with_first_player(first_player),
        ))
    }

    /// Create a match from a full configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: State::initial(config.first_player),
            rng: GameRng::new(config.seed),
            providers: PlayerMap::new(|_| Box::new(DeferToEngine) as Box<dyn MoveProvider>),
            render_hook: None,
            winner: None,
            config,
        }
    }

    /// Re-initialize to the starting position with a new first player.
    ///
    /// Providers and the render hook are kept; the RNG is re-seeded, so a
    /// reset match with the same providers replays identically.
    pub fn reset(&mut self, first_player: i8) -> Result<(), RulesError> {
        self.config.first_player = Player::try_from(first_player)?;
        self.rng = GameRng::new(self.config.seed);
        self.restart();
        Ok(())
    }

    /// Install the move provider for one seat.
    pub fn set_provider(&mut self, player: Player, provider: impl MoveProvider + 'static) {
        self.providers[player] = Box::new(provider);
    }

    /// Builder form of [`Game::set_provider`].
    #[must_use]
    pub fn with_provider(mut self, player: Player, provider: impl MoveProvider + 'static) -> Self {
        self.set_provider(player, provider);
        self
    }

    /// Install a callback run with the new state after every ply.
    pub fn set_render_hook(&mut self, hook: impl FnMut(&State) -> io::Result<()> + 'static) {
        self.render_hook = Some(Box::new(hook));
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Winner of the last completed match, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Play a full match from the starting position.
    ///
    /// Returns one entry per position before each ply, then the terminal
    /// entry carrying the winner. An illegal move from a provider halts the
    /// match with [`GameError::ProviderViolation`].
    pub fn start(&mut self) -> Result<Vec<LogEntry>, GameError> {
        self.restart();
        info!(
            first_player = %self.config.first_player,
            seed = self.config.seed,
            "match started"
        );

        let mut log = Vec::new();
        let winner = self.run_until_over(Some(&mut log))?;
        log.push(LogEntry::finished(&self.state, winner));
        info!(%winner, plies = self.state.ply(), "match finished");
        Ok(log)
    }

    /// Play on from the current position until one side is stuck.
    ///
    /// Keeps no log; returns the winner.
    pub fn play_out(&mut self) -> Result<Player, GameError> {
        self.run_until_over(None)
    }

    /// Ask the side to move for a move and apply it.
    ///
    /// Returns the move that was played.
    pub fn play_ply(&mut self) -> Result<Move, GameError> {
        let player = self.state.current_player();

        let mv = match self.providers[player].choose_move(&self.state) {
            ProviderMove::Play(mv) => mv,
            ProviderMove::DeferToRandom => self
                .state
                .random_legal_move(&mut self.rng)
                .ok_or(RulesError::NoLegalMoves(player))?,
        };

        self.state = self.state.apply_move(mv).map_err(|source| {
            error!(%player, %mv, %source, "move provider supplied an illegal move");
            GameError::ProviderViolation { player, source }
        })?;
        debug!(%player, %mv, ply = self.state.ply(), "applied move");

        if let Some(hook) = self.render_hook.as_mut() {
            if let Err(err) = hook(&self.state) {
                warn!(%err, "render hook failed");
            }
        }
        Ok(mv)
    }

    fn run_until_over(&mut self, mut log: Option<&mut Vec<LogEntry>>) -> Result<Player, GameError> {
        let winner = loop {
            if let Some(winner) = self.state.game_over() {
                break winner;
            }
            if let Some(log) = log.as_deref_mut() {
                log.push(LogEntry::ongoing(&self.state));
            }
            self.play_ply()?;
        };
        self.winner = Some(winner);
        Ok(winner)
    }

    fn restart(&mut self) {
        self.state = State::initial(self.config.first_player);
        self.winner = None;
    }
}
