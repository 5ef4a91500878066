//! Move selector port - anything that can pick a cell for the side to move

use crate::{Result, tictactoe::Board};

/// A source of moves: the search, a random baseline, a scripted line.
///
/// # Examples
///
/// ```
/// use noughts::{ports::MoveSelector, tictactoe::Board};
///
/// struct FirstEmpty;
///
/// impl MoveSelector for FirstEmpty {
///     fn select_move(&mut self, board: &Board) -> noughts::Result<usize> {
///         board
///             .empty_positions()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait MoveSelector: Send {
    /// Pick the cell (0-8) to fill on a non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board has no legal moves.
    fn select_move(&mut self, board: &Board) -> Result<usize>;

    /// Reseed any internal randomness. Deterministic selectors ignore this.
    fn set_seed(&mut self, _seed: u64) {}

    /// Display name used in reports
    fn name(&self) -> &str;
}
