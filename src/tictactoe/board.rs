//! Board snapshots and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::{Error, MoveRejection, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse `x`/`o` in either case
    pub fn parse(token: &str) -> Result<Player> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
                context: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Immutable snapshot of a 3x3 grid.
///
/// A board is never changed after construction; moves produce new boards.
/// Besides the marks it records whose turn it is and which side the human
/// controls, the latter only mattering for how a draw is scored.
///
/// Constructors validate the piece counts, so a value of this type always
/// satisfies: X and O counts differ by at most one, and the side with more
/// marks on the board is never the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [Cell; 9],
    next_to_move: Player,
    human: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl PieceCount {
    fn of(cells: &[Cell; 9]) -> Self {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    fn inferred_turn(self) -> Result<Player> {
        if self.x == self.o || self.o == self.x + 1 {
            Ok(Player::X)
        } else if self.x == self.o + 1 {
            Ok(Player::O)
        } else {
            Err(Error::InvalidPieceCounts {
                x_count: self.x,
                o_count: self.o,
            })
        }
    }

    fn allows(self, to_move: Player) -> bool {
        match to_move {
            Player::X => self.x == self.o || self.o == self.x + 1,
            Player::O => self.x == self.o || self.x == self.o + 1,
        }
    }
}

impl Board {
    /// Empty starting position with X to move
    pub fn initial(human: Player) -> Self {
        Board {
            cells: [Cell::Empty; 9],
            next_to_move: Player::X,
            human,
        }
    }

    /// Build a board from explicit cells.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts differ by more than one, if
    /// `next_to_move` is the side that already has the extra mark, or if both
    /// players own a completed line.
    pub fn from_cells(cells: [Cell; 9], next_to_move: Player, human: Player) -> Result<Self> {
        let count = PieceCount::of(&cells);
        count.inferred_turn()?;

        if !count.allows(next_to_move) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {next_to_move} to move",
                    count.x, count.o
                ),
            });
        }

        if LineAnalyzer::has_won(&cells, Player::X) && LineAnalyzer::has_won(&cells, Player::O) {
            return Err(Error::InvalidConfiguration {
                message: "both players cannot have winning lines".to_string(),
            });
        }

        Ok(Board {
            cells,
            next_to_move,
            human,
        })
    }

    /// Parse a board from text.
    ///
    /// The text holds 9 cell characters (whitespace is ignored) and may end
    /// with `_X` or `_O` to name the side to move. Without the suffix the side
    /// to move is inferred from the piece counts, X when they are equal.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given, a character is not a
    /// cell, or the resulting position fails [`Board::from_cells`].
    pub fn from_string(s: &str, human: Player) -> Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(suffix)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let next_to_move = match suffix {
            Some(token) => Player::parse(token).map_err(|_| Error::InvalidPlayerString {
                player: token.to_string(),
                context: s.to_string(),
            })?,
            None => PieceCount::of(&cells).inferred_turn()?,
        };

        Self::from_cells(cells, next_to_move, human)
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more; [`Board::apply_move`] is the checked way
    /// to address a cell from user input.
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn next_to_move(&self) -> Player {
        self.next_to_move
    }

    pub fn human(&self) -> Player {
        self.human
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// The player owning a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        if LineAnalyzer::has_won(&self.cells, Player::X) {
            Some(Player::X)
        } else if LineAnalyzer::has_won(&self.cells, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// The line completed by the winner, for highlighting
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner()
            .and_then(|player| LineAnalyzer::winning_line(&self.cells, player))
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// All cells filled and nobody won
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Place the side to move's mark on `pos` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the board is terminal, the index is
    /// outside 0..9, or the cell is occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, pos: usize) -> Result<Board> {
        if self.is_terminal() {
            return Err(Error::invalid_move(pos, MoveRejection::GameFinished));
        }
        if pos >= 9 {
            return Err(Error::invalid_move(pos, MoveRejection::OutOfBounds));
        }
        if self.cells[pos] != Cell::Empty {
            return Err(Error::invalid_move(pos, MoveRejection::Occupied));
        }
        Ok(self.place(pos))
    }

    /// One child per empty cell, in ascending cell order. Terminal boards have
    /// no children.
    pub fn children(&self) -> Vec<Board> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
            .into_iter()
            .map(|pos| self.place(pos))
            .collect()
    }

    /// The cell filled between `self` and `child`, if exactly one was
    pub fn move_to(&self, child: &Board) -> Option<usize> {
        let mut changed = self
            .cells
            .iter()
            .zip(child.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);
        let first = changed.next()?;
        changed.next().is_none().then_some(first)
    }

    /// Same position with the other side assigned to the human
    #[must_use]
    pub fn with_human(&self, human: Player) -> Board {
        Board { human, ..*self }
    }

    /// Compact key such as `XO......._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.next_to_move
        )
    }

    fn place(&self, pos: usize) -> Board {
        let mut next = *self;
        next.cells[pos] = self.next_to_move.to_cell();
        next.next_to_move = self.next_to_move.opponent();
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
