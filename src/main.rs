//! Gomoku-Rust: a connect-five engine for two or three players.
//!
//! ## Usage
//!
//! - `gomoku-rust` - Start the text protocol on stdin/stdout
//! - `gomoku-rust play` - Same as above
//! - `gomoku-rust demo` - Let agents play a match against each other

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku_rust::config::{MatchConfig, PlayerKind};
use gomoku_rust::constants::DEFAULT_SIDE;
use gomoku_rust::game::{Match, Outcome};
use gomoku_rust::protocol::TextEngine;

/// Gomoku-Rust: a rule-table connect-five engine
#[derive(Parser)]
#[command(name = "gomoku-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for agent tie-breaks (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Play,
    /// Play an agent-only match and print the final board
    Demo {
        #[arg(long, default_value_t = DEFAULT_SIDE)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_SIDE)]
        cols: usize,
        /// Number of agents (2 or 3)
        #[arg(long, default_value_t = 2)]
        players: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries protocol responses.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let game = match cli.seed {
        Some(seed) => Match::with_seed(seed),
        None => Match::new(),
    };

    match cli.command {
        Some(Commands::Demo {
            rows,
            cols,
            players,
        }) => run_demo(game, rows, cols, players),
        Some(Commands::Play) | None => TextEngine::with_match(game).run(),
    }
}

fn run_demo(mut game: Match, rows: usize, cols: usize, players: usize) -> anyhow::Result<()> {
    let config = MatchConfig::new(rows, cols, vec![PlayerKind::Agent; players])?;

    println!("Gomoku-Rust: {players} agents on {rows}x{cols}\n");
    game.start_with(&config);

    if let Some(board) = game.board() {
        println!("{board}");
    }
    match game.outcome() {
        Some(Outcome::Win { symbol, line }) => println!(
            "Player {} wins after {} moves, {:?} to {:?}",
            symbol.number(),
            game.moves().len(),
            line[0],
            line[1]
        ),
        Some(Outcome::Draw) => println!("Draw after {} moves", game.moves().len()),
        None => println!("Match still running"),
    }
    Ok(())
}
