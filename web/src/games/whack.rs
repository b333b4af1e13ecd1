use arcadita_core as game;
use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::HasUpdate;

/// Seconds left below which the clock gets the warning style.
const LOW_TIME_SECS: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Tick,
    Relocate,
    Whack(usize),
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct WhackProps {
    pub seed: u64,
    pub on_back: Callback<()>,
}

pub(crate) struct WhackView {
    game: game::WhackAGrid,
    rng: game::GameRng,
    // per-second countdown; dropping cancels
    _countdown: Option<Interval>,
    // pending target relocation; dropping cancels
    _relocation: Option<Timeout>,
}

impl WhackView {
    fn create_countdown(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(1000, move || link.send_message(Msg::Tick))
    }

    /// Replace the pending relocation with a fresh random dwell.
    fn schedule_relocation(&mut self, ctx: &Context<Self>) {
        let dwell = game::WhackAGrid::roll_dwell(&mut self.rng);
        let link = ctx.link().clone();
        self._relocation = Some(Timeout::new(dwell, move || {
            link.send_message(Msg::Relocate)
        }));
    }
}

impl Component for WhackView {
    type Message = Msg;
    type Properties = WhackProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: game::WhackAGrid::new(),
            rng: game::rng_from_seed(ctx.props().seed),
            _countdown: None,
            _relocation: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                self.game.start(&mut self.rng);
                self._countdown = Some(Self::create_countdown(ctx));
                self.schedule_relocation(ctx);
                true
            }
            Msg::Tick => {
                if self.game.tick().is_expired() {
                    // both timers die with the game
                    self._countdown = None;
                    self._relocation = None;
                }
                true
            }
            Msg::Relocate => {
                self.game.relocate(&mut self.rng);
                self.schedule_relocation(ctx);
                true
            }
            Msg::Whack(idx) => {
                let outcome = self.game.whack(idx, &mut self.rng);
                if matches!(outcome, Ok(game::WhackOutcome::Hit)) {
                    // reward accuracy with a fresh dwell right away
                    self.schedule_relocation(ctx);
                }
                outcome.has_update()
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::WhackPhase::*;

        let phase = self.game.phase();
        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_start = ctx.link().callback(|_| Msg::Start);

        let overlay = match phase {
            Idle => html! {
                <div class="overlay">
                    <h2>{"Whack-A-Grid"}</h2>
                    <p>{"Tap the blue dots before they disappear!"}</p>
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

        html! {
            <div class="whack">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                    <span>{format!("Score: {}", self.game.score())}</span>
                    <span class={time_class}>{format!("Time: {}s", self.game.time_left())}</span>
                </nav>
                { overlay }
                <table class={matches!(phase, Playing).then_some("playable")}>
                    {
                        for (0..3).map(|row| html! {
                            <tr>
                                {
                                    for (0..3).map(|col| {
                                        let idx = row * 3 + col;
                                        let active = self.game.target() == Some(idx);
                                        let class = classes!("cell", active.then_some("active"));
                                        let onmousedown =
                                            ctx.link().callback(move |_| Msg::Whack(idx));
                                        html! {
                                            <td {class} {onmousedown}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}
