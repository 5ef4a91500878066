//! Static scoring of finished games

use super::{DRAW_BIAS, O_WIN, Score, Searcher, X_WIN};
use crate::{
    config::DrawScore,
    tictactoe::{Board, Player},
};

impl Searcher {
    /// Score a terminal board.
    ///
    /// X wins score `+1`, O wins `-1`. A draw is not neutral: with
    /// [`DrawScore::HumanBiased`] it leans to the computer's side, scoring
    /// `-1.5` when the human plays X and `+1.5` when the human plays O, so the
    /// computer ranks a draw above any decisive result.
    ///
    /// # Panics
    ///
    /// Panics if the board is not terminal.
    pub fn evaluate(&self, board: &Board) -> Score {
        assert!(
            board.is_terminal(),
            "evaluate called on non-terminal board {}",
            board.encode()
        );

        match board.winner() {
            Some(Player::X) => X_WIN,
            Some(Player::O) => O_WIN,
            None => self.draw_score(board.human()),
        }
    }

    /// Score of a drawn game for the given human side
    pub fn draw_score(&self, human: Player) -> Score {
        match self.config.draw_score {
            DrawScore::HumanBiased => match human {
                Player::X => -DRAW_BIAS,
                Player::O => DRAW_BIAS,
            },
            DrawScore::Neutral => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn board(s: &str, human: Player) -> Board {
        Board::from_string(s, human).unwrap()
    }

    #[test]
    fn x_win_scores_plus_one() {
        let searcher = Searcher::default();
        assert_eq!(searcher.evaluate(&board("XXXOO....", Player::X)), 1.0);
        assert_eq!(searcher.evaluate(&board("XXXOO....", Player::O)), 1.0);
    }

    #[test]
    fn o_win_scores_minus_one() {
        let searcher = Searcher::default();
        assert_eq!(searcher.evaluate(&board("XX.OOOX..", Player::X)), -1.0);
    }

    #[test]
    fn draw_leans_to_the_computer() {
        let searcher = Searcher::default();
        // computer plays O, the minimizer
        assert_eq!(searcher.evaluate(&board("XOXOXOOXO", Player::X)), -1.5);
        // computer plays X, the maximizer
        assert_eq!(searcher.evaluate(&board("XOXOXOOXO", Player::O)), 1.5);
    }

    #[test]
    fn computer_prefers_draw_to_any_decisive_result() {
        let searcher = Searcher::default();
        let draw = searcher.draw_score(Player::X);
        assert!(draw < O_WIN && O_WIN < X_WIN);
        let draw = searcher.draw_score(Player::O);
        assert!(draw > X_WIN && X_WIN > O_WIN);
    }

    #[test]
    fn neutral_draw_scores_zero() {
        let searcher = Searcher::new(SearchConfig::neutral());
        assert_eq!(searcher.evaluate(&board("XOXOXOOXO", Player::X)), 0.0);
        assert_eq!(searcher.evaluate(&board("XOXOXOOXO", Player::O)), 0.0);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn evaluate_rejects_open_board() {
        Searcher::default().evaluate(&Board::initial(Player::X));
    }
}
