//! Output formatting and progress spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell, LineAnalyzer};

/// Create a spinner for analysis tasks
pub fn create_spinner(message: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Draw the grid. Empty cells show the number to type for them; cells of
/// every completed line are wrapped in brackets.
pub fn render_board(board: &Board, one_based: bool) -> String {
    let lines = LineAnalyzer::completed_lines(board.cells());
    let offset = usize::from(one_based);

    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                match board.get(idx) {
                    Cell::Empty => format!(" {} ", idx + offset),
                    mark if lines.iter().any(|line| line.contains(&idx)) => {
                        format!("[{}]", mark.to_char())
                    }
                    mark => format!(" {} ", mark.to_char()),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(549_946), "549,946");
        assert_eq!(format_number(1_000_000), "1,000,000");
    }

    #[test]
    fn render_open_board() {
        let board = Board::from_string("X...O....", Player::X).unwrap();
        assert_eq!(
            render_board(&board, false),
            " X | 1 | 2 \n---+---+---\n 3 | O | 5 \n---+---+---\n 6 | 7 | 8 "
        );
        assert!(render_board(&board, true).starts_with(" X | 2 | 3 "));
    }

    #[test]
    fn render_highlights_winning_line() {
        let board = Board::from_string("XXXOO....", Player::X).unwrap();
        let text = render_board(&board, false);
        assert!(text.starts_with("[X]|[X]|[X]"), "got {text}");
        assert!(text.contains(" O | O "));
    }

    #[test]
    fn render_highlights_both_lines_of_a_double_win() {
        // XXX
        // XOO
        // XOO
        let board = Board::from_string("XXXXOOXOO", Player::X).unwrap();
        let text = render_board(&board, false);
        assert_eq!(
            text,
            "[X]|[X]|[X]\n---+---+---\n[X]| O | O \n---+---+---\n[X]| O | O "
        );
        assert_eq!(text.matches("[X]").count(), 5);
    }
}
