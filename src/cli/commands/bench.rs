//! Bench command - play the search against a random mover

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{load_config, parse_player_token},
    config::{DrawScore, MatchConfig},
    pipeline::{
        MatchResult, MatchRunner, ProgressObserver, RandomSelector, SearchSelector, TraceObserver,
    },
    search::Searcher,
};

#[derive(Parser, Debug)]
#[command(about = "Benchmark the search against random play")]
pub struct BenchArgs {
    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side the search plays in the first game (`x` or `o`)
    #[arg(long)]
    pub subject: Option<String>,

    /// Keep the search on the same side every game
    #[arg(long)]
    pub no_alternate: bool,

    /// Score draws as 0
    #[arg(long)]
    pub neutral: bool,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: BenchArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(games) = args.games {
        anyhow::ensure!(games > 0, "--games must be at least 1");
        config.matches.games = games;
    }
    if args.seed.is_some() {
        config.matches.seed = args.seed;
    }
    if let Some(ref value) = args.subject {
        config.matches.subject = parse_player_token(value, "--subject")?;
    }
    if args.no_alternate {
        config.matches.alternate = false;
    }
    if args.neutral {
        config.search.draw_score = DrawScore::Neutral;
    }

    let matches = config.matches;
    println!("\n=== Benchmark Configuration ===");
    println!("Draw scoring: {:?}", config.search.draw_score);
    println!(
        "Search plays: {}{}",
        matches.subject,
        if matches.alternate { " (alternating)" } else { "" }
    );
    println!("Games: {}", matches.games);
    if let Some(seed) = matches.seed {
        println!("Seed: {seed}");
    }

    let mut subject = SearchSelector::new("Search".to_string(), Searcher::new(config.search));
    let mut opponent = RandomSelector::new("Random".to_string());
    let mut runner = MatchRunner::new(matches)
        .with_observer(Box::new(ProgressObserver::new()))
        .with_observer(Box::new(TraceObserver));

    println!("\n=== Running Benchmark ===");
    let result = runner.run(&mut subject, &mut opponent)?;

    println!("\n=== Benchmark Results ===");
    println!("Total games: {}", result.total_games);
    println!("Wins: {} ({:.1}%)", result.wins, result.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", result.draws, result.draw_rate * 100.0);
    println!(
        "Losses: {} ({:.1}%)",
        result.losses,
        result.loss_rate * 100.0
    );

    if let Some(export_path) = &args.export {
        export_results(&result, &matches, config.search.draw_score, export_path)?;
        println!("\nResults exported to: {}", export_path.display());
    }

    Ok(())
}

/// Export benchmark results to JSON
fn export_results(
    result: &MatchResult,
    matches: &MatchConfig,
    draw_score: DrawScore,
    path: &Path,
) -> Result<()> {
    #[derive(Serialize)]
    struct BenchExport<'a> {
        draw_score: DrawScore,
        settings: &'a MatchConfig,
        result: &'a MatchResult,
    }

    let export = BenchExport {
        draw_score,
        settings: matches,
        result,
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating export file {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
