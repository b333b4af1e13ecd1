use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{DurationMs, GameRng, TimestampMs};

/// Stimulus delay window, uniform over [min, max).
pub const MIN_DELAY_MS: DurationMs = 2000;
pub const MAX_DELAY_MS: DurationMs = 5000;

/// Valid transitions:
/// - Idle/Finished/TooEarly -> Waiting (arm)
/// - Waiting -> Ready (scheduled stimulus fires)
/// - Waiting -> TooEarly (press before the stimulus)
/// - Ready -> Finished (press after the stimulus)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReactionState {
    Idle,
    Waiting,
    Ready { since: TimestampMs },
    Finished { millis: DurationMs },
    TooEarly,
}

impl Default for ReactionState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    TooEarly,
    Measured(DurationMs),
    Ignored,
}

impl PressOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionTest {
    state: ReactionState,
}

impl ReactionTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReactionState {
        self.state
    }

    /// Enter the waiting phase and draw the delay the caller must schedule
    /// the stimulus with. `None` while a round is already underway.
    pub fn arm(&mut self, rng: &mut GameRng) -> Option<DurationMs> {
        use ReactionState::*;

        match self.state {
            Waiting | Ready { .. } => None,
            Idle | Finished { .. } | TooEarly => {
                self.state = Waiting;
                Some(rng.random_range(MIN_DELAY_MS..MAX_DELAY_MS))
            }
        }
    }

    /// The scheduled stimulus fired. A stale firing after a reset or an
    /// early press lands outside `Waiting` and changes nothing.
    pub fn stimulus(&mut self, now: TimestampMs) {
        if matches!(self.state, ReactionState::Waiting) {
            log::debug!("stimulus shown at {}", now);
            self.state = ReactionState::Ready { since: now };
        }
    }

    pub fn press(&mut self, now: TimestampMs) -> PressOutcome {
        use ReactionState::*;

        match self.state {
            Waiting => {
                self.state = TooEarly;
                PressOutcome::TooEarly
            }
            Ready { since } => {
                let millis =
                    now.saturating_sub(since).min(DurationMs::MAX as TimestampMs) as DurationMs;
                self.state = Finished { millis };
                log::debug!("measured {} ms", millis);
                PressOutcome::Measured(millis)
            }
            Idle | Finished { .. } | TooEarly => PressOutcome::Ignored,
        }
    }
}
