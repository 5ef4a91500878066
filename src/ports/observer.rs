//! Observer port - hooks into a running match

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Verdict},
};

/// Observer trait for monitoring matches.
///
/// Methods are called in this order: `on_match_start` once, then for each
/// game `on_move` per ply followed by `on_game_end`, and finally
/// `on_match_end`. Every method defaults to doing nothing.
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen, with the board it was played on
    fn on_move(&mut self, _game_num: usize, _board: &Board, _cell: usize) -> Result<()> {
        Ok(())
    }

    /// Called once a game is over. `verdict` is from the evaluated side's view.
    fn on_game_end(
        &mut self,
        _game_num: usize,
        _outcome: GameOutcome,
        _verdict: Verdict,
    ) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
