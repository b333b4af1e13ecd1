use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{GameRng, Score};

/// Round wins needed to take the match.
pub const WIN_TARGET: Score = 3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HandShape {
    Rock,
    Paper,
    Scissors,
}

impl HandShape {
    pub const ALL: [HandShape; 3] = [HandShape::Rock, HandShape::Paper, HandShape::Scissors];

    /// The shape this one defeats.
    pub const fn beats(self) -> HandShape {
        match self {
            HandShape::Rock => HandShape::Scissors,
            HandShape::Scissors => HandShape::Paper,
            HandShape::Paper => HandShape::Rock,
        }
    }

    /// Round outcome from the player's side.
    pub fn versus(self, other: HandShape) -> RoundOutcome {
        if self == other {
            RoundOutcome::Draw
        } else if self.beats() == other {
            RoundOutcome::Win
        } else {
            RoundOutcome::Lose
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandShape::Rock => "Rock",
            HandShape::Paper => "Paper",
            HandShape::Scissors => "Scissors",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Victory,
    Defeat,
}

/// One resolved throw.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub player: HandShape,
    pub cpu: HandShape,
    pub outcome: RoundOutcome,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    Resolved(Round),
    Ignored,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// First to three round wins; draws count toward neither side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpsMatch {
    player_score: Score,
    cpu_score: Score,
    last_round: Option<Round>,
    outcome: Option<MatchOutcome>,
}

impl RpsMatch {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            cpu_score: 0,
            last_round: None,
            outcome: None,
        }
    }

    pub fn player_score(&self) -> Score {
        self.player_score
    }

    pub fn cpu_score(&self) -> Score {
        self.cpu_score
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Resolve one round against a uniformly random CPU throw. Ignored once
    /// the match is decided.
    pub fn play(&mut self, choice: HandShape, rng: &mut GameRng) -> PlayOutcome {
        if self.outcome.is_some() {
            return PlayOutcome::Ignored;
        }

        let cpu = HandShape::ALL[rng.random_range(0..HandShape::ALL.len())];
        let outcome = choice.versus(cpu);

        match outcome {
            RoundOutcome::Win => {
                self.player_score += 1;
                if self.player_score >= WIN_TARGET {
                    self.outcome = Some(MatchOutcome::Victory);
                }
            }
            RoundOutcome::Lose => {
                self.cpu_score += 1;
                if self.cpu_score >= WIN_TARGET {
                    self.outcome = Some(MatchOutcome::Defeat);
                }
            }
            RoundOutcome::Draw => {}
        }

        let round = Round {
            player: choice,
            cpu,
            outcome,
        };
        self.last_round = Some(round);
        log::debug!(
            "{} vs {}: {:?} ({}-{})",
            choice.label(),
            cpu.label(),
            outcome,
            self.player_score,
            self.cpu_score
        );
        PlayOutcome::Resolved(round)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RpsMatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    #[test]
    fn the_relation_is_cyclic_with_draws_only_on_equal_shapes() {
        use HandShape::*;
        use RoundOutcome::*;

        for player in HandShape::ALL {
            for cpu in HandShape::ALL {
                let expected = if player == cpu {
                    Draw
                } else {
                    match (player, cpu) {
                        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Win,
                        _ => Lose,
                    }
                };
                assert_eq!(player.versus(cpu), expected);
            }
        }
    }

    #[test]
    fn the_match_ends_the_instant_a_counter_reaches_three() {
        let mut rng = rng_from_seed(1);
        let mut game = RpsMatch::new();

        while game.outcome().is_none() {
            game.play(HandShape::Rock, &mut rng);
        }

        let winner = game.player_score().max(game.cpu_score());
        let loser = game.player_score().min(game.cpu_score());
        assert_eq!(winner, WIN_TARGET);
        assert!(loser < WIN_TARGET);
        match game.outcome().unwrap() {
            MatchOutcome::Victory => assert_eq!(game.player_score(), WIN_TARGET),
            MatchOutcome::Defeat => assert_eq!(game.cpu_score(), WIN_TARGET),
        }
    }

    #[test]
    fn play_after_the_match_ended_is_ignored() {
        let mut rng = rng_from_seed(2);
        let mut game = RpsMatch::new();
        while game.outcome().is_none() {
            game.play(HandShape::Paper, &mut rng);
        }
        let before = game.clone();

        assert_eq!(game.play(HandShape::Rock, &mut rng), PlayOutcome::Ignored);
        assert_eq!(game, before);
    }

    #[test]
    fn draws_increment_neither_counter() {
        let mut rng = rng_from_seed(3);
        let mut game = RpsMatch::new();

        let PlayOutcome::Resolved(round) = game.play(HandShape::Scissors, &mut rng) else {
            panic!("fresh match must resolve a round");
        };

        if round.outcome == RoundOutcome::Draw {
            assert_eq!(game.player_score(), 0);
            assert_eq!(game.cpu_score(), 0);
        } else {
            assert_eq!(game.player_score() + game.cpu_score(), 1);
        }
    }

    #[test]
    fn reset_clears_scores_and_round_state() {
        let mut rng = rng_from_seed(4);
        let mut game = RpsMatch::new();
        game.play(HandShape::Rock, &mut rng);

        game.reset();

        assert_eq!(game, RpsMatch::new());
    }
}
