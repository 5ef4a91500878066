//! Unpruned minimax, used to cross-check alpha-beta

use super::{Score, Searcher};
use crate::tictactoe::{Board, Player};

impl Searcher {
    /// Full minimax value of `board` with no pruning.
    ///
    /// Visits every position below `board`; only practical because the game
    /// tree is tiny.
    pub fn minimax(&self, board: &Board) -> Score {
        if board.is_terminal() {
            return self.evaluate(board);
        }

        let values = board.children().into_iter().map(|child| self.minimax(&child));
        match board.next_to_move() {
            Player::X => values.fold(Score::NEG_INFINITY, Score::max),
            Player::O => values.fold(Score::INFINITY, Score::min),
        }
    }
}

/// Number of positions in the full game tree below `board`, `board` included
pub fn tree_size(board: &Board) -> usize {
    1 + board.children().iter().map(tree_size).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SearchConfig,
        search::{SCORE_CEILING, SCORE_FLOOR},
    };

    #[test]
    fn matches_alpha_beta_on_opening_replies() {
        let searcher = Searcher::default();
        let start = Board::initial(Player::X);
        for child in start.children() {
            let pruned = searcher.search(&child, SCORE_FLOOR, SCORE_CEILING).value;
            assert_eq!(searcher.minimax(&child), pruned, "mismatch on {}", child.encode());
        }
    }

    #[test]
    fn full_tree_size() {
        assert_eq!(tree_size(&Board::initial(Player::X)), 549_946);
        let won = Board::from_string("XXXOO....", Player::X).unwrap();
        assert_eq!(tree_size(&won), 1);
    }

    #[test]
    fn neutral_corner_opening_is_drawn() {
        let searcher = Searcher::new(SearchConfig::neutral());
        let corner = Board::initial(Player::X).apply_move(0).unwrap();
        assert_eq!(searcher.minimax(&corner), 0.0);
    }
}
