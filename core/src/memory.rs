use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{GameRng, Score};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LightColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl LightColor {
    pub const ALL: [LightColor; 4] = [
        LightColor::Red,
        LightColor::Green,
        LightColor::Blue,
        LightColor::Yellow,
    ];
}

/// Valid transitions:
/// - Idle/GameOver -> Showing (start)
/// - Showing -> Awaiting (playback finished)
/// - Awaiting -> Showing (sequence reproduced, next round)
/// - Awaiting -> GameOver (wrong light)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MemoryPhase {
    Idle,
    Showing,
    Awaiting,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    Advanced,
    RoundComplete,
    GameOver,
    Ignored,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Growing-sequence recall. The score counts fully reproduced sequences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryLights {
    sequence: Vec<LightColor>,
    cursor: usize,
    score: Score,
    phase: MemoryPhase,
}

impl MemoryLights {
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            cursor: 0,
            score: 0,
            phase: MemoryPhase::Idle,
        }
    }

    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn sequence(&self) -> &[LightColor] {
        &self.sequence
    }

    /// Start a fresh game with a one-element sequence. Also the retry
    /// operation from game over.
    pub fn start(&mut self, rng: &mut GameRng) {
        self.sequence.clear();
        self.cursor = 0;
        self.score = 0;
        self.extend_sequence(rng);
        self.phase = MemoryPhase::Showing;
    }

    /// The playback animation finished; the player may answer now.
    pub fn playback_done(&mut self) {
        if matches!(self.phase, MemoryPhase::Showing) {
            self.phase = MemoryPhase::Awaiting;
        }
    }

    pub fn press(&mut self, color: LightColor, rng: &mut GameRng) -> GuessOutcome {
        if !matches!(self.phase, MemoryPhase::Awaiting) {
            return GuessOutcome::Ignored;
        }

        if self.sequence.get(self.cursor) != Some(&color) {
            self.phase = MemoryPhase::GameOver;
            log::debug!(
                "wrong light at position {}, final score {}",
                self.cursor,
                self.score
            );
            return GuessOutcome::GameOver;
        }

        self.cursor += 1;
        if self.cursor < self.sequence.len() {
            return GuessOutcome::Advanced;
        }

        // full sequence reproduced, grow it and show again
        self.score += 1;
        self.cursor = 0;
        self.extend_sequence(rng);
        self.phase = MemoryPhase::Showing;
        log::debug!("round complete, sequence length {}", self.sequence.len());
        GuessOutcome::RoundComplete
    }

    fn extend_sequence(&mut self, rng: &mut GameRng) {
        let color = LightColor::ALL[rng.random_range(0..LightColor::ALL.len())];
        self.sequence.push(color);
    }
}

impl Default for MemoryLights {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    fn replay_round(game: &mut MemoryLights, rng: &mut GameRng) -> GuessOutcome {
        game.playback_done();
        let sequence: Vec<_> = game.sequence().to_vec();
        let mut last = GuessOutcome::Ignored;
        for color in sequence {
            last = game.press(color, rng);
        }
        last
    }

    #[test]
    fn start_shows_a_single_light() {
        let mut rng = rng_from_seed(1);
        let mut game = MemoryLights::new();

        game.start(&mut rng);

        assert_eq!(game.sequence().len(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), MemoryPhase::Showing);
    }

    #[test]
    fn sequence_grows_by_one_per_completed_round() {
        let mut rng = rng_from_seed(2);
        let mut game = MemoryLights::new();
        game.start(&mut rng);

        for round in 0..5 {
            assert_eq!(
                replay_round(&mut game, &mut rng),
                GuessOutcome::RoundComplete
            );
            assert_eq!(game.score(), round + 1);
            assert_eq!(game.sequence().len(), round as usize + 2);
            assert_eq!(game.phase(), MemoryPhase::Showing);
        }
    }

    #[test]
    fn wrong_light_ends_the_game_with_the_completed_round_count() {
        let mut rng = rng_from_seed(3);
        let mut game = MemoryLights::new();
        game.start(&mut rng);
        replay_round(&mut game, &mut rng);
        replay_round(&mut game, &mut rng);

        game.playback_done();
        let first = game.sequence()[0];
        let wrong = LightColor::ALL
            .into_iter()
            .find(|&c| c != first)
            .unwrap();

        assert_eq!(game.press(wrong, &mut rng), GuessOutcome::GameOver);
        assert_eq!(game.phase(), MemoryPhase::GameOver);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn presses_during_playback_are_ignored() {
        let mut rng = rng_from_seed(4);
        let mut game = MemoryLights::new();
        game.start(&mut rng);

        let before = game.clone();
        assert_eq!(
            game.press(LightColor::Red, &mut rng),
            GuessOutcome::Ignored
        );
        assert_eq!(game, before);
    }

    #[test]
    fn mid_sequence_correct_press_advances_without_scoring() {
        let mut rng = rng_from_seed(5);
        let mut game = MemoryLights::new();
        game.start(&mut rng);
        replay_round(&mut game, &mut rng);

        game.playback_done();
        let first = game.sequence()[0];

        assert_eq!(game.press(first, &mut rng), GuessOutcome::Advanced);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn retry_from_game_over_behaves_like_start() {
        let mut rng = rng_from_seed(6);
        let mut game = MemoryLights::new();
        game.start(&mut rng);
        game.playback_done();
        let first = game.sequence()[0];
        let wrong = LightColor::ALL.into_iter().find(|&c| c != first).unwrap();
        game.press(wrong, &mut rng);

        game.start(&mut rng);

        assert_eq!(game.sequence().len(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), MemoryPhase::Showing);
    }
}
