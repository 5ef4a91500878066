//! noughts - play and analyze perfect-play tic-tac-toe
//!
//! Subcommands:
//! - `play`: interactive games against the computer
//! - `best`: the computer's reply to a given position
//! - `analyze`: whole-game checks of the search
//! - `bench`: the search against random play

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-tac-toe with a perfect-play opponent", long_about = None)]
struct Cli {
    /// Log search and game events to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(noughts::cli::commands::play::PlayArgs),

    /// Show the computer's reply to a position
    Best(noughts::cli::commands::best::BestArgs),

    /// Check the search over every reachable position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Benchmark the search against random play
    Bench(noughts::cli::commands::bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::logging::init(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Best(args) => noughts::cli::commands::best::execute(args),
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Bench(args) => noughts::cli::commands::bench::execute(args),
    }
}
