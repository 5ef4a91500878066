//! Move selector implementations

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::MoveSelector,
    search::Searcher,
    tictactoe::Board,
};

/// Plays the alpha-beta search's choice
#[derive(Debug, Clone)]
pub struct SearchSelector {
    name: String,
    searcher: Searcher,
}

impl SearchSelector {
    pub fn new(name: String, searcher: Searcher) -> Self {
        Self { name, searcher }
    }
}

impl MoveSelector for SearchSelector {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        let child = self.searcher.best_move(board)?;
        Ok(board
            .move_to(&child)
            .expect("search reply differs from its parent by one cell"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal moves
#[derive(Debug, Clone)]
pub struct RandomSelector {
    name: String,
    rng: StdRng,
}

impl RandomSelector {
    /// Create a new random selector
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random selector with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        let moves = board.empty_positions();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
