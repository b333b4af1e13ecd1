use arcadita_core as game;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

/// Feedback beats: a correct answer swaps the question in quickly, a wrong
/// one lingers a little longer.
const CORRECT_MS: u32 = 150;
const WRONG_MS: u32 = 300;

/// Seconds left below which the clock gets the warning style.
const LOW_TIME_SECS: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    const fn css_class(self) -> &'static str {
        match self {
            Feedback::Correct => "correct",
            Feedback::Wrong => "wrong",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Tick,
    Answer(i32),
    ClearFeedback,
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MathProps {
    pub seed: u64,
    pub on_back: Callback<()>,
}

pub(crate) struct MathView {
    game: game::SpeedMath,
    rng: game::GameRng,
    feedback: Option<Feedback>,
    // per-second countdown; dropping cancels
    _countdown: Option<Interval>,
    // pending feedback clear; dropping cancels
    _feedback_timer: Option<Timeout>,
}

impl MathView {
    fn create_countdown(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1000, move || link.send_message(Msg::Tick))
    }

    fn set_feedback(&mut self, ctx: &Context<Self>, feedback: Feedback, delay: u32) {
        self.feedback = Some(feedback);
        let link = ctx.link().clone();
        self._feedback_timer = Some(Timeout::new(delay, move || {
            link.send_message(Msg::ClearFeedback)
        }));
    }
}

impl Component for MathView {
    type Message = Msg;
    type Properties = MathProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: game::SpeedMath::new(),
            rng: game::rng_from_seed(ctx.props().seed),
            feedback: None,
            _countdown: None,
            _feedback_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                self.game.start(&mut self.rng);
                self.feedback = None;
                self._feedback_timer = None;
                self._countdown = Some(Self::create_countdown(ctx));
                true
            }
            Msg::Tick => {
                if self.game.tick().is_expired() {
                    self._countdown = None;
                    self._feedback_timer = None;
                    self.feedback = None;
                }
                true
            }
            Msg::Answer(value) => {
                // one answer per feedback beat
                if self.feedback.is_some() {
                    return false;
                }
                match self.game.answer(value) {
                    game::AnswerOutcome::Correct => {
                        self.set_feedback(ctx, Feedback::Correct, CORRECT_MS);
                        true
                    }
                    game::AnswerOutcome::Wrong => {
                        self.set_feedback(ctx, Feedback::Wrong, WRONG_MS);
                        true
                    }
                    game::AnswerOutcome::Ignored => false,
                }
            }
            Msg::ClearFeedback => {
                self._feedback_timer = None;
                let was_correct = matches!(self.feedback.take(), Some(Feedback::Correct));
                if was_correct {
                    self.game.advance(&mut self.rng);
                }
                true
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::QuizPhase::*;

        let phase = self.game.phase();
        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_start = ctx.link().callback(|_| Msg::Start);

        let overlay = match phase {
            Idle => html! {
                <div class="overlay">
                    <h2>{"Speed Math"}</h2>
                    <p>{format!("Solve as many problems as you can in {} seconds.", game::QUIZ_SECS)}</p>
                    <button onclick={cb_start}>{"Start game"}</button>
                </div>
            },
            TimedOut => html! {
                <div class="overlay">
                    <h2>{"Time's up!"}</h2>
                    <p>{format!("Final score: {}", self.game.score())}</p>
                    <button onclick={cb_start}>{"Play again"}</button>
                </div>
            },
            Playing => html! {},
        };

        let time_class = classes!(
            "time",
            (self.game.time_left() < LOW_TIME_SECS).then_some("low")
        );
        let panel_class = classes!(
            "question",
            self.feedback.map(Feedback::css_class)
        );

        let question_text = self
            .game
            .question()
            .map(|q| format!("{} {} {}", q.a, q.op.symbol(), q.b))
            .unwrap_or_else(|| "…".to_string());

        let locked = !matches!(phase, Playing) || self.feedback.is_some();

        html! {
            <div class="math">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                    <span>{format!("Score: {}", self.game.score())}</span>
                    <span class={time_class}>{format!("Time: {}s", self.game.time_left())}</span>
                </nav>
                { overlay }
                <div class={panel_class}>
                    <span>{question_text}</span>
                </div>
                <div class="options">
                    {
                        for self.game.question().into_iter().flat_map(|q| q.options).map(|value| {
                            let onclick = ctx.link().callback(move |_| Msg::Answer(value));
                            html! {
                                <button disabled={locked} {onclick}>{value}</button>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
