use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Millisecond timestamp as reported by the host environment.
pub type TimestampMs = u64;

/// Millisecond duration, used for delays and measured times.
pub type DurationMs = u32;

/// Per-game score counter.
pub type Score = u32;

/// RNG handed into every operation that draws randomness.
pub type GameRng = SmallRng;

pub fn rng_from_seed(seed: u64) -> GameRng {
    SmallRng::seed_from_u64(seed)
}

/// Whole-second countdown driving the timed games.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub const fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    pub const fn remaining_secs(self) -> u32 {
        self.remaining
    }

    pub const fn is_expired(self) -> bool {
        self.remaining == 0
    }

    /// One whole-second step, saturating at zero.
    pub fn tick(&mut self) -> TickOutcome {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Running(u32),
    Expired,
}

impl TickOutcome {
    pub const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_expires_exactly_once_and_saturates() {
        let mut countdown = Countdown::new(2);

        assert_eq!(countdown.tick(), TickOutcome::Running(1));
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn seeded_rngs_are_reproducible() {
        use rand::prelude::*;

        let mut a = rng_from_seed(7);
        let mut b = rng_from_seed(7);

        for _ in 0..16 {
            assert_eq!(
                a.random_range(0..1000_u32),
                b.random_range(0..1000_u32)
            );
        }
    }
}
