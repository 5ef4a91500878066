//! Play command - interactive game against the search

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    cli::{load_config, output::render_board, parse_player_token},
    config::{DrawScore, SessionConfig},
    search::Searcher,
    tictactoe::{GameOutcome, Player, Session},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Side you play in the first game (`x` or `o`)
    #[arg(long)]
    pub human: Option<String>,

    /// Keep the same side after a restart instead of swapping
    #[arg(long)]
    pub no_swap: bool,

    /// Score draws as 0 instead of leaning towards one side
    #[arg(long)]
    pub neutral: bool,

    /// Number cells 1-9 instead of 0-8
    #[arg(long)]
    pub one_based: bool,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ref value) = args.human {
        config.session.human = parse_player_token(value, "--human")?;
    }
    if args.no_swap {
        config.session.swap_on_restart = false;
    }
    if args.neutral {
        config.search.draw_score = DrawScore::Neutral;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(
        config.session,
        Searcher::new(config.search),
        args.one_based,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Drive a session from line-based input until `q` or end of input.
///
/// A number fills that cell, `r` restarts, and any input after a game has
/// ended starts the next one.
pub fn run<R: BufRead, W: Write>(
    config: SessionConfig,
    searcher: Searcher,
    one_based: bool,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut session = Session::new(config, searcher)?;
    announce_game(&session, one_based, &mut out)?;

    let mut lines = input.lines();
    loop {
        if session.outcome().is_none() {
            write!(out, "Your move ({}): ", session.human())?;
        } else {
            write!(out, "Enter to play again, q to quit: ")?;
        }
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let command = line.trim();

        if command.eq_ignore_ascii_case("q") {
            break;
        }
        if session.outcome().is_some() || command.eq_ignore_ascii_case("r") {
            session.restart()?;
            announce_game(&session, one_based, &mut out)?;
            continue;
        }

        let Some(cell) = parse_cell(command, one_based) else {
            writeln!(out, "Enter a cell number or q.")?;
            continue;
        };

        match session.play(cell) {
            Ok(exchange) => {
                if let Some(reply) = exchange.computer {
                    writeln!(out, "Computer plays {}.", reply + usize::from(one_based))?;
                }
                writeln!(out, "{}", render_board(session.board(), one_based))?;
                if let Some(outcome) = exchange.outcome {
                    writeln!(out, "{}", describe(outcome, session.human()))?;
                }
            }
            Err(err @ Error::InvalidMove { .. }) => writeln!(out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn announce_game<W: Write>(session: &Session, one_based: bool, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\nGame {}: you play {}.",
        session.games_started(),
        session.human()
    )?;
    if let Some(opening) = session.moves().first() {
        writeln!(
            out,
            "Computer opens with {}.",
            opening.position + usize::from(one_based)
        )?;
    }
    writeln!(out, "{}", render_board(session.board(), one_based))?;
    Ok(())
}

fn parse_cell(text: &str, one_based: bool) -> Option<usize> {
    let value: usize = text.parse().ok()?;
    if one_based { value.checked_sub(1) } else { Some(value) }
}

fn describe(outcome: GameOutcome, human: Player) -> &'static str {
    match outcome {
        GameOutcome::Draw => "Tie game.",
        GameOutcome::Win(winner) if winner == human => "You win!",
        GameOutcome::Win(_) => "Computer wins.",
    }
}
