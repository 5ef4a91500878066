//! Repeated games between two move selectors

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    config::MatchConfig,
    ports::{MoveSelector, Observer},
    tictactoe::{Board, GameOutcome, Player, Verdict},
};

/// Tally of a finished match, from the subject's point of view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Total games played
    pub total_games: usize,

    pub wins: usize,
    pub draws: usize,
    pub losses: usize,

    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

/// Plays a subject selector against an opponent for a configured number of
/// games. The board's human side is always the opponent's, so the search
/// scores draws exactly as it would against a person.
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Side the subject plays in game `game_num`
    pub fn subject_side(&self, game_num: usize) -> Player {
        if self.config.alternate && game_num % 2 == 1 {
            self.config.subject.opponent()
        } else {
            self.config.subject
        }
    }

    pub fn run(
        &mut self,
        subject: &mut dyn MoveSelector,
        opponent: &mut dyn MoveSelector,
    ) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            subject.set_seed(seed);
            opponent.set_seed(seed.wrapping_add(1));
        }

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        let (mut wins, mut draws, mut losses) = (0, 0, 0);
        for game_num in 0..self.config.games {
            let side = self.subject_side(game_num);
            let outcome = self.play_game(game_num, side, subject, opponent)?;
            let verdict = outcome.verdict_for(side);
            match verdict {
                Verdict::Win => wins += 1,
                Verdict::Draw => draws += 1,
                Verdict::Loss => losses += 1,
            }
            debug!(game_num, %side, ?outcome, "game over");

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome, verdict)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(self.config.games, wins, draws, losses);
        info!(
            subject = subject.name(),
            opponent = opponent.name(),
            wins,
            draws,
            losses,
            "match finished"
        );
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        side: Player,
        subject: &mut dyn MoveSelector,
        opponent: &mut dyn MoveSelector,
    ) -> Result<GameOutcome> {
        let mut board = Board::initial(side.opponent());

        loop {
            if let Some(outcome) = GameOutcome::of(&board) {
                return Ok(outcome);
            }

            let selector: &mut dyn MoveSelector = if board.next_to_move() == side {
                &mut *subject
            } else {
                &mut *opponent
            };
            let cell = selector.select_move(&board)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, &board, cell)?;
            }
            board = board.apply_move(cell)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SearchConfig,
        pipeline::{RandomSelector, SearchSelector},
        search::Searcher,
    };

    #[derive(Default)]
    struct Counting {
        moves: usize,
        games: usize,
        started: Option<usize>,
        ended: bool,
    }

    impl Observer for Counting {
        fn on_match_start(&mut self, total_games: usize) -> Result<()> {
            self.started = Some(total_games);
            Ok(())
        }

        fn on_move(&mut self, _game_num: usize, _board: &Board, _cell: usize) -> Result<()> {
            self.moves += 1;
            Ok(())
        }

        fn on_game_end(&mut self, _: usize, _: GameOutcome, _: Verdict) -> Result<()> {
            self.games += 1;
            Ok(())
        }

        fn on_match_end(&mut self) -> Result<()> {
            self.ended = true;
            Ok(())
        }
    }

    #[test]
    fn result_rates() {
        let result = MatchResult::new(4, 1, 2, 1);
        assert_eq!(result.win_rate, 0.25);
        assert_eq!(result.draw_rate, 0.5);
        assert_eq!(result.loss_rate, 0.25);
        assert_eq!(MatchResult::new(0, 0, 0, 0).win_rate, 0.0);
    }

    #[test]
    fn sides_alternate() {
        let runner = MatchRunner::new(MatchConfig {
            subject: Player::X,
            alternate: true,
            ..MatchConfig::default()
        });
        assert_eq!(runner.subject_side(0), Player::X);
        assert_eq!(runner.subject_side(1), Player::O);
        assert_eq!(runner.subject_side(2), Player::X);

        let fixed = MatchRunner::new(MatchConfig {
            subject: Player::O,
            alternate: false,
            ..MatchConfig::default()
        });
        assert_eq!(fixed.subject_side(1), Player::O);
    }

    #[test]
    fn neutral_search_never_loses_to_random() {
        let config = MatchConfig {
            games: 20,
            seed: Some(11),
            ..MatchConfig::default()
        };
        let mut runner = MatchRunner::new(config);
        let mut search =
            SearchSelector::new("search".to_string(), Searcher::new(SearchConfig::neutral()));
        let mut random = RandomSelector::new("random".to_string());

        let result = runner.run(&mut search, &mut random).unwrap();
        assert_eq!(result.total_games, 20);
        assert_eq!(result.losses, 0);
        assert_eq!(result.wins + result.draws, 20);
    }

    #[test]
    fn default_search_never_loses_to_random() {
        let config = MatchConfig {
            games: 20,
            seed: Some(23),
            ..MatchConfig::default()
        };
        let mut search = SearchSelector::new("search".to_string(), Searcher::default());
        let mut random = RandomSelector::new("random".to_string());

        let result = MatchRunner::new(config).run(&mut search, &mut random).unwrap();
        assert_eq!(result.losses, 0);
    }

    #[test]
    fn search_mirror_match_is_deterministic() {
        let config = MatchConfig {
            games: 4,
            ..MatchConfig::default()
        };
        let mut first = SearchSelector::new("a".to_string(), Searcher::default());
        let mut second = SearchSelector::new("b".to_string(), Searcher::default());

        let a = MatchRunner::new(config).run(&mut first, &mut second).unwrap();
        let b = MatchRunner::new(config).run(&mut first, &mut second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn observers_see_every_move_and_game() {
        struct Shared(std::sync::Arc<std::sync::Mutex<Counting>>);
        impl Observer for Shared {
            fn on_match_start(&mut self, total: usize) -> Result<()> {
                self.0.lock().unwrap().on_match_start(total)
            }
            fn on_move(&mut self, game: usize, board: &Board, cell: usize) -> Result<()> {
                self.0.lock().unwrap().on_move(game, board, cell)
            }
            fn on_game_end(&mut self, game: usize, o: GameOutcome, v: Verdict) -> Result<()> {
                self.0.lock().unwrap().on_game_end(game, o, v)
            }
            fn on_match_end(&mut self) -> Result<()> {
                self.0.lock().unwrap().on_match_end()
            }
        }

        let counts = std::sync::Arc::new(std::sync::Mutex::new(Counting::default()));
        let config = MatchConfig {
            games: 3,
            seed: Some(5),
            ..MatchConfig::default()
        };
        let mut runner =
            MatchRunner::new(config).with_observer(Box::new(Shared(counts.clone())));
        let mut a = RandomSelector::new("a".to_string());
        let mut b = RandomSelector::new("b".to_string());
        runner.run(&mut a, &mut b).unwrap();

        let counts = counts.lock().unwrap();
        assert_eq!(counts.started, Some(3));
        assert_eq!(counts.games, 3);
        assert!(counts.moves >= 3 * 5, "each game needs at least five moves");
        assert!(counts.ended);
    }
}
