//! Observer implementations for matches

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Verdict},
};

/// Progress bar observer - shows match progress with a running W/D/L tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} L:{}", self.wins, self.draws, self.losses)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(
        &mut self,
        game_num: usize,
        _outcome: GameOutcome,
        verdict: Verdict,
    ) -> Result<()> {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Draw => self.draws += 1,
            Verdict::Loss => self.losses += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Emits a `tracing` event for every move
#[derive(Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_move(&mut self, game_num: usize, board: &Board, cell: usize) -> Result<()> {
        debug!(
            game_num,
            board = %board.encode(),
            cell,
            player = %board.next_to_move(),
            "move"
        );
        Ok(())
    }
}
