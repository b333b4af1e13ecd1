use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Countdown, GameRng, Score, TickOutcome};

pub const QUIZ_SECS: u32 = 30;

/// Multiplication joins the operator pool once the score passes this.
pub const MUL_UNLOCK_SCORE: Score = 10;

pub const OPTION_COUNT: usize = 4;

/// Distractors are drawn from answer ± this spread.
const DISTRACTOR_SPREAD: i32 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
}

impl MathOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "×",
        }
    }

    pub const fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            MathOp::Add => a + b,
            MathOp::Sub => a - b,
            MathOp::Mul => a * b,
        }
    }
}

/// One quiz question: operands, operator, answer and a shuffled set of
/// four unique non-negative options containing the answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub a: i32,
    pub b: i32,
    pub op: MathOp,
    pub answer: i32,
    pub options: [i32; OPTION_COUNT],
}

impl Question {
    pub fn generate(rng: &mut GameRng, score: Score) -> Self {
        let op = match rng.random_range(0..if score > MUL_UNLOCK_SCORE { 3 } else { 2 }) {
            0 => MathOp::Add,
            1 => MathOp::Sub,
            _ => MathOp::Mul,
        };

        let (a, b) = match op {
            MathOp::Mul => (rng.random_range(1..=6), rng.random_range(1..=6)),
            MathOp::Add | MathOp::Sub => {
                let a = rng.random_range(1..=10);
                let b = rng.random_range(1..=10);
                // keep subtraction results non-negative
                if matches!(op, MathOp::Sub) && a < b {
                    (b, a)
                } else {
                    (a, b)
                }
            }
        };

        let answer = op.apply(a, b);

        let mut options = [answer; OPTION_COUNT];
        let mut filled = 1;
        while filled < OPTION_COUNT {
            let offset = rng.random_range(-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD);
            let candidate = answer + offset;
            if candidate < 0 || options[..filled].contains(&candidate) {
                continue;
            }
            options[filled] = candidate;
            filled += 1;
        }
        options.shuffle(rng);

        Self {
            a,
            b,
            op,
            answer,
            options,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuizPhase {
    Idle,
    Playing,
    TimedOut,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
    Ignored,
}

impl AnswerOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Timed multiple-choice arithmetic. Expiry freezes the current question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedMath {
    score: Score,
    countdown: Countdown,
    question: Option<Question>,
    phase: QuizPhase,
}

impl SpeedMath {
    pub fn new() -> Self {
        Self {
            score: 0,
            countdown: Countdown::new(QUIZ_SECS),
            question: None,
            phase: QuizPhase::Idle,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn start(&mut self, rng: &mut GameRng) {
        self.score = 0;
        self.countdown = Countdown::new(QUIZ_SECS);
        self.phase = QuizPhase::Playing;
        self.question = Some(Question::generate(rng, 0));
    }

    /// Check a submitted value against the current question. Only a correct
    /// answer moves the score; the question itself stays until `advance`.
    pub fn answer(&mut self, value: i32) -> AnswerOutcome {
        if !matches!(self.phase, QuizPhase::Playing) {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = &self.question else {
            return AnswerOutcome::Ignored;
        };

        if value == question.answer {
            self.score += 1;
            log::debug!("correct, score {}", self.score);
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Wrong
        }
    }

    /// Install the next question; refused once the quiz is over so a stale
    /// feedback timer cannot thaw a frozen board.
    pub fn advance(&mut self, rng: &mut GameRng) {
        if matches!(self.phase, QuizPhase::Playing) {
            self.question = Some(Question::generate(rng, self.score));
        }
    }

    /// One whole-second countdown step; expiry freezes the question state.
    pub fn tick(&mut self) -> TickOutcome {
        if !matches!(self.phase, QuizPhase::Playing) {
            return TickOutcome::Expired;
        }

        let outcome = self.countdown.tick();
        if outcome.is_expired() {
            self.phase = QuizPhase::TimedOut;
            log::debug!("time up, final score {}", self.score);
        }
        outcome
    }
}

impl Default for SpeedMath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng_from_seed;

    #[test]
    fn options_are_four_unique_non_negative_values_including_the_answer() {
        let mut rng = rng_from_seed(1);

        for score in [0, 5, 11, 50] {
            for _ in 0..50 {
                let question = Question::generate(&mut rng, score);

                assert!(question.options.contains(&question.answer));
                for (i, a) in question.options.iter().enumerate() {
                    assert!(*a >= 0);
                    for b in &question.options[i + 1..] {
                        assert_ne!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = rng_from_seed(2);

        for _ in 0..200 {
            let question = Question::generate(&mut rng, 0);
            assert!(question.answer >= 0);
            assert_eq!(question.answer, question.op.apply(question.a, question.b));
        }
    }

    #[test]
    fn multiplication_stays_locked_until_the_score_threshold() {
        let mut rng = rng_from_seed(3);

        for _ in 0..200 {
            let question = Question::generate(&mut rng, MUL_UNLOCK_SCORE);
            assert!(!matches!(question.op, MathOp::Mul));
        }

        let unlocked = (0..200)
            .map(|_| Question::generate(&mut rng, MUL_UNLOCK_SCORE + 1))
            .any(|q| matches!(q.op, MathOp::Mul));
        assert!(unlocked);
    }

    #[test]
    fn only_a_correct_answer_increments_the_score() {
        let mut rng = rng_from_seed(4);
        let mut game = SpeedMath::new();
        game.start(&mut rng);
        let answer = game.question().unwrap().answer;

        assert_eq!(game.answer(answer + 1), AnswerOutcome::Wrong);
        assert_eq!(game.score(), 0);

        assert_eq!(game.answer(answer), AnswerOutcome::Correct);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn a_wrong_answer_keeps_the_same_question() {
        let mut rng = rng_from_seed(5);
        let mut game = SpeedMath::new();
        game.start(&mut rng);
        let question = game.question().unwrap().clone();

        game.answer(question.answer + 1);

        assert_eq!(game.question(), Some(&question));
    }

    #[test]
    fn advance_swaps_in_a_fresh_question_while_playing() {
        let mut rng = rng_from_seed(6);
        let mut game = SpeedMath::new();
        game.start(&mut rng);
        let answer = game.question().unwrap().answer;
        game.answer(answer);

        game.advance(&mut rng);

        assert_eq!(game.score(), 1);
        assert!(game.question().is_some());
    }

    #[test]
    fn expiry_freezes_question_generation_and_answers() {
        let mut rng = rng_from_seed(7);
        let mut game = SpeedMath::new();
        game.start(&mut rng);
        while !game.tick().is_expired() {}
        let frozen = game.question().unwrap().clone();

        game.advance(&mut rng);
        assert_eq!(game.question(), Some(&frozen));

        assert_eq!(game.answer(frozen.answer), AnswerOutcome::Ignored);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), QuizPhase::TimedOut);
    }
}
