//! Human-versus-computer game sessions

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, Player};
use crate::{Error, Result, config::SessionConfig, search::Searcher};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while the game is running
    pub fn of(board: &Board) -> Option<Self> {
        if !board.is_terminal() {
            return None;
        }
        Some(match board.winner() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }

    /// How the game went for `player`
    pub fn verdict_for(self, player: Player) -> Verdict {
        match self {
            GameOutcome::Win(winner) if winner == player => Verdict::Win,
            GameOutcome::Win(_) => Verdict::Loss,
            GameOutcome::Draw => Verdict::Draw,
        }
    }
}

/// A game outcome seen from one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Win,
    Draw,
    Loss,
}

/// What happened in response to one human move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// Cell the human filled
    pub human: usize,
    /// Cell the computer answered with, if the game was still running
    pub computer: Option<usize>,
    /// Set once the game is over
    pub outcome: Option<GameOutcome>,
}

/// One human playing a series of games against the search.
///
/// The session owns the current board and the move history of the running
/// game. When the computer holds X it opens immediately.
#[derive(Debug, Clone)]
pub struct Session {
    searcher: Searcher,
    config: SessionConfig,
    board: Board,
    moves: Vec<Move>,
    games_started: usize,
}

impl Session {
    /// Start the first game.
    ///
    /// # Errors
    ///
    /// Propagates search failures from the computer's opening move.
    pub fn new(config: SessionConfig, searcher: Searcher) -> Result<Self> {
        let mut session = Session {
            searcher,
            config,
            board: Board::initial(config.human),
            moves: Vec::new(),
            games_started: 0,
        };
        session.start(config.human)?;
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn human(&self) -> Player {
        self.board.human()
    }

    /// Number of games started so far, the current one included
    pub fn games_started(&self) -> usize {
        self.games_started
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        GameOutcome::of(&self.board)
    }

    /// Play the human's move at `cell` and let the computer answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has finished and
    /// [`Error::InvalidMove`] for an occupied or out-of-range cell. The board
    /// is unchanged on error.
    pub fn play(&mut self, cell: usize) -> Result<Exchange> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }

        self.advance(self.board.apply_move(cell)?, cell);
        let computer = self.computer_turn()?;

        let outcome = self.outcome();
        if let Some(outcome) = outcome {
            info!(?outcome, moves = self.moves.len(), "game finished");
        }

        Ok(Exchange {
            human: cell,
            computer,
            outcome,
        })
    }

    /// Begin a new game, handing the human the other side when configured to.
    /// Returns the computer's opening cell when it moves first.
    pub fn restart(&mut self) -> Result<Option<usize>> {
        let human = if self.config.swap_on_restart {
            self.human().opponent()
        } else {
            self.human()
        };
        self.start(human)
    }

    fn start(&mut self, human: Player) -> Result<Option<usize>> {
        self.board = Board::initial(human);
        self.moves.clear();
        self.games_started += 1;
        info!(game = self.games_started, %human, "new game");
        self.computer_turn()
    }

    fn computer_turn(&mut self) -> Result<Option<usize>> {
        if self.board.is_terminal() || self.board.next_to_move() == self.human() {
            return Ok(None);
        }

        let reply = self.searcher.best_move(&self.board)?;
        let cell = self
            .board
            .move_to(&reply)
            .expect("search reply differs from its parent by one cell");
        debug!(cell, player = %self.board.next_to_move(), "computer move");
        self.advance(reply, cell);
        Ok(Some(cell))
    }

    fn advance(&mut self, next: Board, position: usize) {
        self.moves.push(Move {
            position,
            player: self.board.next_to_move(),
        });
        self.board = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SearchConfig, tictactoe::Cell};

    fn session(human: Player) -> Session {
        let config = SessionConfig {
            human,
            ..SessionConfig::default()
        };
        Session::new(config, Searcher::default()).unwrap()
    }

    #[test]
    fn human_x_moves_first() {
        let session = session(Player::X);
        assert!(session.moves().is_empty());
        assert_eq!(session.board().empty_count(), 9);
        assert_eq!(session.games_started(), 1);
    }

    #[test]
    fn computer_opens_when_human_plays_o() {
        let session = session(Player::O);
        assert_eq!(session.moves().len(), 1);
        assert_eq!(session.moves()[0].player, Player::X);
        assert_eq!(session.board().next_to_move(), Player::O);
    }

    #[test]
    fn play_records_both_moves() {
        let mut session = session(Player::X);
        let exchange = session.play(4).unwrap();
        assert_eq!(exchange.human, 4);
        let reply = exchange.computer.expect("computer should answer");
        assert_ne!(reply, 4);
        assert_eq!(session.board().get(4), Cell::X);
        assert_eq!(session.board().get(reply), Cell::O);
        assert_eq!(
            session.moves(),
            &[
                Move {
                    position: 4,
                    player: Player::X
                },
                Move {
                    position: reply,
                    player: Player::O
                },
            ]
        );
    }

    #[test]
    fn occupied_cell_leaves_board_unchanged() {
        let mut session = session(Player::X);
        let exchange = session.play(0).unwrap();
        let before = *session.board();
        let taken = exchange.computer.unwrap();
        assert!(matches!(
            session.play(taken),
            Err(Error::InvalidMove { .. })
        ));
        assert_eq!(*session.board(), before);
    }

    #[test]
    fn finished_game_rejects_moves_and_restart_swaps_sides() {
        let config = SessionConfig {
            human: Player::X,
            swap_on_restart: true,
        };
        let mut session = Session::new(config, Searcher::new(SearchConfig::neutral())).unwrap();

        while session.outcome().is_none() {
            let cell = session.board().empty_positions()[0];
            session.play(cell).unwrap();
        }
        assert!(matches!(session.play(0), Err(Error::GameOver)));

        let opening = session.restart().unwrap();
        assert_eq!(session.human(), Player::O);
        assert!(opening.is_some());
        assert_eq!(session.games_started(), 2);

        session.restart().unwrap();
        assert_eq!(session.human(), Player::X);
        assert!(session.moves().is_empty());
    }

    #[test]
    fn restart_keeps_side_when_not_swapping() {
        let config = SessionConfig {
            human: Player::O,
            swap_on_restart: false,
        };
        let mut session = Session::new(config, Searcher::default()).unwrap();
        session.restart().unwrap();
        assert_eq!(session.human(), Player::O);
        assert_eq!(session.moves().len(), 1);
    }

    #[test]
    fn outcome_of_finished_boards() {
        let won = Board::from_string("XXXOO....", Player::X).unwrap();
        assert_eq!(GameOutcome::of(&won), Some(GameOutcome::Win(Player::X)));
        let drawn = Board::from_string("XOXOXOOXO", Player::X).unwrap();
        assert_eq!(GameOutcome::of(&drawn), Some(GameOutcome::Draw));
        assert_eq!(GameOutcome::of(&Board::initial(Player::X)), None);
    }

    #[test]
    fn verdict_depends_on_side() {
        let x_won = GameOutcome::Win(Player::X);
        assert_eq!(x_won.verdict_for(Player::X), Verdict::Win);
        assert_eq!(x_won.verdict_for(Player::O), Verdict::Loss);
        assert_eq!(GameOutcome::Draw.verdict_for(Player::O), Verdict::Draw);
    }
}
