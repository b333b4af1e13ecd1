use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Countdown, DurationMs, GameError, GameRng, Result, Score, TickOutcome};

pub const GRID_CELLS: usize = 9;
pub const WHACK_SECS: u32 = 30;

/// Target dwell window, uniform over [min, max).
pub const MIN_DWELL_MS: DurationMs = 500;
pub const MAX_DWELL_MS: DurationMs = 1100;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WhackPhase {
    Idle,
    Playing,
    TimedOut,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WhackOutcome {
    Hit,
    Miss,
    Ignored,
}

impl WhackOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Timed target acquisition on a fixed 9-cell grid. The target is always
/// exactly one cell or none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WhackAGrid {
    score: Score,
    countdown: Countdown,
    target: Option<usize>,
    phase: WhackPhase,
}

impl WhackAGrid {
    pub fn new() -> Self {
        Self {
            score: 0,
            countdown: Countdown::new(WHACK_SECS),
            target: None,
            phase: WhackPhase::Idle,
        }
    }

    pub fn phase(&self) -> WhackPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn start(&mut self, rng: &mut GameRng) {
        self.score = 0;
        self.countdown = Countdown::new(WHACK_SECS);
        self.phase = WhackPhase::Playing;
        self.target = Some(rng.random_range(0..GRID_CELLS));
    }

    /// Move the target to a fresh random cell. A stale relocation timer
    /// firing after the game ended changes nothing.
    pub fn relocate(&mut self, rng: &mut GameRng) {
        if matches!(self.phase, WhackPhase::Playing) {
            self.target = Some(rng.random_range(0..GRID_CELLS));
        }
    }

    /// Draw the next dwell time for the caller to schedule a relocation with.
    pub fn roll_dwell(rng: &mut GameRng) -> DurationMs {
        rng.random_range(MIN_DWELL_MS..MAX_DWELL_MS)
    }

    /// A hit scores and relocates the target in one step; the caller must
    /// replace its pending relocation timer with a fresh dwell. Misses
    /// change nothing.
    pub fn whack(&mut self, idx: usize, rng: &mut GameRng) -> Result<WhackOutcome> {
        if idx >= GRID_CELLS {
            return Err(GameError::InvalidCell);
        }

        if !matches!(self.phase, WhackPhase::Playing) {
            return Ok(WhackOutcome::Ignored);
        }

        if self.target == Some(idx) {
            self.score += 1;
            self.relocate(rng);
            log::debug!("hit cell {}, score {}", idx, self.score);
            Ok(WhackOutcome::Hit)
        } else {
            Ok(WhackOutcome::Miss)
        }
    }

    /// One whole-second countdown step; expiry ends the game and clears
    /// the target.
    pub fn tick(&mut self) -> TickOutcome {
        if !matches!(self.phase, WhackPhase::Playing) {
            return TickOutcome::Expired;
        }

        let outcome = self.countdown.tick();
        if outcome.is_expired() {
            self.phase = WhackPhase::TimedOut;
            self.target = None;
            log::debug!("time up, final score {}", self.score);
        }
        outcome
    }
}

impl Default for WhackAGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    #[test]
    fn start_places_the_target_on_the_grid() {
        let mut rng = rng_from_seed(1);
        let mut game = WhackAGrid::new();

        game.start(&mut rng);

        assert_eq!(game.phase(), WhackPhase::Playing);
        assert_eq!(game.time_left(), WHACK_SECS);
        assert!(game.target().is_some_and(|idx| idx < GRID_CELLS));
    }

    #[test]
    fn hitting_the_target_scores_and_relocates() {
        let mut rng = rng_from_seed(2);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);
        let target = game.target().unwrap();

        assert_eq!(game.whack(target, &mut rng).unwrap(), WhackOutcome::Hit);
        assert_eq!(game.score(), 1);
        assert!(game.target().is_some_and(|idx| idx < GRID_CELLS));
    }

    #[test]
    fn missing_changes_nothing() {
        let mut rng = rng_from_seed(3);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);
        let target = game.target().unwrap();
        let miss = (target + 1) % GRID_CELLS;
        let before = game.clone();

        assert_eq!(game.whack(miss, &mut rng).unwrap(), WhackOutcome::Miss);
        assert_eq!(game, before);
    }

    #[test]
    fn countdown_expiry_ends_the_game_and_clears_the_target() {
        let mut rng = rng_from_seed(4);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);

        for _ in 0..WHACK_SECS - 1 {
            assert!(!game.tick().is_expired());
        }
        assert!(game.tick().is_expired());

        assert_eq!(game.phase(), WhackPhase::TimedOut);
        assert_eq!(game.target(), None);
    }

    #[test]
    fn whacks_after_the_game_ended_are_ignored() {
        let mut rng = rng_from_seed(5);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);
        while !game.tick().is_expired() {}
        let score = game.score();

        assert_eq!(game.whack(0, &mut rng).unwrap(), WhackOutcome::Ignored);
        assert_eq!(game.score(), score);
    }

    #[test]
    fn stale_relocation_after_the_game_ended_changes_nothing() {
        let mut rng = rng_from_seed(6);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);
        while !game.tick().is_expired() {}

        game.relocate(&mut rng);

        assert_eq!(game.target(), None);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut rng = rng_from_seed(7);
        let mut game = WhackAGrid::new();
        game.start(&mut rng);

        assert_eq!(
            game.whack(GRID_CELLS, &mut rng),
            Err(GameError::InvalidCell)
        );
    }

    #[test]
    fn dwell_times_stay_in_the_window() {
        let mut rng = rng_from_seed(8);

        for _ in 0..100 {
            let dwell = WhackAGrid::roll_dwell(&mut rng);
            assert!((MIN_DWELL_MS..MAX_DWELL_MS).contains(&dwell));
        }
    }
}
