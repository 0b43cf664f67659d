//! Dots-and-squares command line.
//!
//! ## Usage
//!
//! - `dots-and-squares` - Show a demo
//! - `dots-and-squares play` - Start the text protocol loop on stdin/stdout
//! - `dots-and-squares demo` - Play a random game and print the result
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dots_and_squares::board::{Board, TurnPolicy};
use dots_and_squares::config::GameConfig;
use dots_and_squares::constants::{DEFAULT_COLS, DEFAULT_PLAYERS, DEFAULT_ROWS, DEMO_SEED};
use dots_and_squares::playout::random_playout;
use dots_and_squares::protocol::ProtocolEngine;

/// Dots-and-squares rules engine
#[derive(Parser)]
#[command(name = "dots-and-squares")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct GameArgs {
    /// Number of square rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of square columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    /// Number of players
    #[arg(long, default_value_t = DEFAULT_PLAYERS)]
    players: usize,
    /// Reject claims from anyone but the player to move
    #[arg(long)]
    strict: bool,
}

impl Default for GameArgs {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            players: DEFAULT_PLAYERS,
            strict: false,
        }
    }
}

impl GameArgs {
    fn config(self) -> GameConfig {
        let policy = if self.strict {
            TurnPolicy::Strict
        } else {
            TurnPolicy::Lenient
        };
        GameConfig::new(self.rows, self.cols, self.players).with_policy(policy)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Read protocol commands from stdin and answer on stdout
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play a random game and print the final board
    Demo {
        #[command(flatten)]
        game: GameArgs,
        /// Seed for the random playout
        #[arg(long, default_value_t = DEMO_SEED)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { game }) => {
            let mut engine =
                ProtocolEngine::with_config(game.config()).context("cannot start game")?;
            engine.run().context("protocol loop failed")
        }
        Some(Commands::Demo { game, seed }) => run_demo(game, seed),
        None => run_demo(GameArgs::default(), DEMO_SEED),
    }
}

fn run_demo(game: GameArgs, seed: u64) -> Result<()> {
    let config = game.config();
    let mut board = Board::from_config(&config).context("cannot start game")?;
    let mut rng = fastrand::Rng::with_seed(seed);

    println!("Dots and squares: random playout (seed {seed})\n");
    let moves = random_playout(&mut board, &mut rng);
    println!("{board}");
    println!("Moves played: {moves}");
    for (player, score) in board.scores().iter().enumerate() {
        println!("Player {player} ({}): {score}", config.colors[player]);
    }
    let leaders = board.leaders();
    if leaders.len() == 1 {
        println!("Winner: player {}", leaders[0]);
    } else {
        println!("Tie between players {leaders:?}");
    }
    Ok(())
}
