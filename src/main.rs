//! Plays one game of Fifty between four named players and prints the trace.

use clap::Parser;
use colored::Colorize;
use enum_iterator::all;
use fifty_rs::games::fifty::{Game, GameOptions, Suit};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fifty")]
#[command(about = "Simulate a four player game of Fifty to the end")]
struct Args {
    /// The four player names, in seating order
    #[arg(default_values = ["John", "Jane", "Jan", "Otto"])]
    names: Vec<String>,

    /// Seed for the shuffles and random plays (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Seat (0-3) that leads the first round, random when omitted
    #[arg(long)]
    start: Option<usize>,

    /// Stop with an error after this many rounds without a loser
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Print the final game state as JSON
    #[arg(long)]
    snapshot: bool,

    /// Disable coloured suit symbols
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Diagnostics go to stderr so the trace on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut game = Game::new(
        &args.names,
        GameOptions {
            starting_index: args.start,
            seed: args.seed,
            round_limit: args.max_rounds,
            sink: Some(Box::new(|line: &str| println!("{}", colorize(line)))),
            ..Default::default()
        },
    )?;

    let loser = game.run()?.name().to_string();
    info!(loser = %loser, rounds = game.round_count(), "game finished");

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }
    Ok(())
}

fn colorize(line: &str) -> String {
    if line.ends_with(" loses the game!") {
        return line.bold().to_string();
    }
    let mut line = line.to_string();
    for suit in all::<Suit>().filter(Suit::is_red) {
        line = line.replace(suit.symbol(), &suit.symbol().red().to_string());
    }
    line
}
