//! Best command - search a single position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        output::{format_number, print_kv, render_board},
        parse_player_token,
    },
    config::SearchConfig,
    search::{SCORE_CEILING, SCORE_FLOOR, Searcher},
    tictactoe::{Board, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Show the computer's reply to a position")]
pub struct BestArgs {
    /// Board as 9 cells (`X`, `O`, `.`), optionally suffixed with `_X`/`_O`
    pub board: String,

    /// Side the human plays (`x` or `o`); decides how draws are scored
    #[arg(long, default_value = "x")]
    pub human: String,

    /// Score draws as 0
    #[arg(long)]
    pub neutral: bool,
}

pub fn execute(args: BestArgs) -> Result<()> {
    let human = parse_player_token(&args.human, "--human")?;
    let board = Board::from_string(&args.board, human)?;
    let searcher = if args.neutral {
        Searcher::new(SearchConfig::neutral())
    } else {
        Searcher::default()
    };

    println!("{}\n", render_board(&board, false));
    print_kv("To move", &board.next_to_move().to_string());
    print_kv("Human", &human.to_string());

    if let Some(outcome) = GameOutcome::of(&board) {
        let result = match outcome {
            GameOutcome::Win(player) => format!("{player} won"),
            GameOutcome::Draw => "draw".to_string(),
        };
        print_kv("Result", &result);
        print_kv("Value", &format!("{:+.1}", searcher.evaluate(&board)));
        return Ok(());
    }

    let outcome = searcher.search(&board, SCORE_FLOOR, SCORE_CEILING);
    let Some(reply) = outcome.best else {
        anyhow::bail!("search returned no move for {}", board.encode());
    };
    let cell = board
        .move_to(&reply)
        .ok_or_else(|| anyhow::anyhow!("search reply is not a child of {}", board.encode()))?;

    print_kv("Value", &format!("{:+.1}", outcome.value));
    print_kv("Best cell", &cell.to_string());
    print_kv("Nodes searched", &format_number(outcome.nodes));
    println!("\n{}", render_board(&reply, false));
    Ok(())
}
