//! Analyze command - whole-game checks of the search
//!
//! Enumerates every position reachable from the empty board, checks that
//! alpha-beta agrees with plain minimax on each of them, and reports how much
//! of the tree pruning skips.

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        output::{create_spinner, format_number, print_kv, print_section, print_subsection},
        parse_player_token,
    },
    config::SearchConfig,
    search::{SCORE_CEILING, SCORE_FLOOR, Searcher, tree_size},
    tictactoe::{Board, Player, PositionCounts, reachable_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Verify the search over every reachable position")]
pub struct AnalyzeArgs {
    /// Only check this human side (`x` or `o`); both plus neutral scoring otherwise
    #[arg(long)]
    pub human: Option<String>,

    /// Skip the pruned-versus-unpruned comparison
    #[arg(long)]
    pub skip_equivalence: bool,
}

/// A scoring setup to analyze under
struct Scenario {
    label: String,
    human: Player,
    searcher: Searcher,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let scenarios = match args.human {
        Some(ref value) => {
            let human = parse_player_token(value, "--human")?;
            vec![Scenario {
                label: format!("human {human}"),
                human,
                searcher: Searcher::default(),
            }]
        }
        None => vec![
            Scenario {
                label: "human X".to_string(),
                human: Player::X,
                searcher: Searcher::default(),
            },
            Scenario {
                label: "human O".to_string(),
                human: Player::O,
                searcher: Searcher::default(),
            },
            Scenario {
                label: "neutral draws".to_string(),
                human: Player::X,
                searcher: Searcher::new(SearchConfig::neutral()),
            },
        ],
    };

    print_section("Position Space");
    let spinner = create_spinner("Enumerating reachable positions...")?;
    let boards = reachable_boards(Player::X);
    spinner.finish_and_clear();

    let counts = PositionCounts::of(&boards);
    print_kv("Reachable", &format_number(counts.total));
    print_kv("Terminal", &format_number(counts.terminal));
    print_kv("X wins", &format_number(counts.x_wins));
    print_kv("O wins", &format_number(counts.o_wins));
    print_kv("Draws", &format_number(counts.draws));

    let start = Board::initial(Player::X);
    let full_tree = tree_size(&start);
    print_kv("Full game tree", &format_number(full_tree));

    for scenario in &scenarios {
        print_section(&format!("Search ({})", scenario.label));
        let root = scenario.human_board(&start);
        let outcome = scenario.searcher.search(&root, SCORE_FLOOR, SCORE_CEILING);

        print_kv("Empty-board value", &format!("{:+.1}", outcome.value));
        if let Some(cell) = outcome.best.and_then(|best| root.move_to(&best)) {
            print_kv("Opening move", &cell.to_string());
        }
        print_kv(
            "Nodes searched",
            &format!(
                "{} of {} ({:.1}%)",
                format_number(outcome.nodes),
                format_number(full_tree),
                100.0 * outcome.nodes as f64 / full_tree as f64
            ),
        );

        print_subsection("Opening replies");
        for first in root.children() {
            let reply = scenario.searcher.search(&first, SCORE_FLOOR, SCORE_CEILING);
            let opened = root.move_to(&first).unwrap_or_default();
            let answered = reply
                .best
                .and_then(|best| first.move_to(&best))
                .map_or_else(|| "-".to_string(), |cell| cell.to_string());
            println!(
                "  X at {opened}: O answers {answered:>2}, value {:+.1}",
                reply.value
            );
        }

        if !args.skip_equivalence {
            print_subsection("Pruning equivalence");
            let spinner = create_spinner("Comparing alpha-beta with full minimax...")?;
            let mismatches = scenario.mismatches(&boards);
            spinner.finish_and_clear();

            if let Some(board) = mismatches.first() {
                bail!(
                    "alpha-beta disagrees with minimax on {} position(s), first {}",
                    mismatches.len(),
                    board.encode()
                );
            }
            print_kv("Positions checked", &format_number(boards.len()));
            print_kv("Mismatches", "0");
        }
    }

    Ok(())
}

impl Scenario {
    fn human_board(&self, board: &Board) -> Board {
        board.with_human(self.human)
    }

    /// Positions whose pruned value differs from the unpruned one
    fn mismatches(&self, boards: &[Board]) -> Vec<Board> {
        boards
            .iter()
            .map(|board| self.human_board(board))
            .filter(|board| {
                let pruned = self.searcher.search(board, SCORE_FLOOR, SCORE_CEILING);
                pruned.value != self.searcher.minimax(board)
            })
            .collect()
    }
}
