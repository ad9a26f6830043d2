use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amazons::{Game, GameConfig, Player, SelfPlayConfig, SelfPlayWorker, State};

/// Play the Game of the Amazons between two random players.
#[derive(Parser)]
#[command(name = "amazons", about = "Random self-play for the Game of the Amazons")]
struct Cli {
    /// Side that moves first: -1 (blue) or 1 (red)
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    first_player: i8,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of matches to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Worker threads for batches of matches
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print the board after every ply (single match only)
    #[arg(long)]
    show: bool,

    /// Print every log entry as a JSON line (single match only)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let first_player = Player::try_from(cli.first_player).context("parsing --first-player")?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    if cli.games <= 1 {
        play_single(&cli, first_player, seed)
    } else {
        play_batch(&cli, first_player, seed)
    }
}

fn play_single(cli: &Cli, first_player: Player, seed: u64) -> Result<()> {
    let config = GameConfig::default()
        .with_first_player(first_player)
        .with_seed(seed);
    let mut game = Game::with_config(config);

    if cli.show {
        game.set_render_hook(|state: &State| {
            let mut out = io::stdout().lock();
            writeln!(out, "{state}")?;
            writeln!(out)
        });
    }

    let log = game.start().context("playing match")?;

    let mut out = io::stdout().lock();
    if cli.json {
        for entry in &log {
            writeln!(out, "{}", entry.to_json()?)?;
        }
    }
    if let Some(winner) = game.winner() {
        writeln!(
            out,
            "seed {seed}: {winner} wins after {} plies",
            game.state().ply()
        )?;
    }
    Ok(())
}

fn play_batch(cli: &Cli, first_player: Player, seed: u64) -> Result<()> {
    let config = SelfPlayConfig::new()
        .with_games(cli.games)
        .with_threads(cli.threads)
        .with_seed_offset(seed)
        .with_first_player(first_player);
    let stats = SelfPlayWorker::new(config).run().context("running self-play")?;

    let mut out = io::stdout().lock();
    writeln!(out, "games:          {}", stats.games)?;
    for player in Player::ALL {
        writeln!(
            out,
            "{:<15} {} ({:.1}%)",
            format!("{player} wins:"),
            stats.wins[player],
            stats.win_rate(player) * 100.0
        )?;
    }
    writeln!(
        out,
        "first mover:    {} ({:.1}%)",
        stats.first_mover_wins,
        stats.first_mover_win_rate() * 100.0
    )?;
    writeln!(
        out,
        "plies:          mean {:.1}, min {}, max {}",
        stats.mean_plies(),
        stats.min_plies,
        stats.max_plies
    )?;
    Ok(())
}
