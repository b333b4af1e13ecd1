use arcadita_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::now_ms;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Arm,
    Stimulus,
    Press,
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ReactionProps {
    pub seed: u64,
    pub on_back: Callback<()>,
}

pub(crate) struct ReactionView {
    test: game::ReactionTest,
    rng: game::GameRng,
    // pending stimulus; dropping the handle cancels it
    _stimulus: Option<Timeout>,
}

impl Component for ReactionView {
    type Message = Msg;
    type Properties = ReactionProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            test: game::ReactionTest::new(),
            rng: game::rng_from_seed(ctx.props().seed),
            _stimulus: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Arm => match self.test.arm(&mut self.rng) {
                Some(delay) => {
                    log::debug!("stimulus in {} ms", delay);
                    let link = ctx.link().clone();
                    self._stimulus =
                        Some(Timeout::new(delay, move || link.send_message(Msg::Stimulus)));
                    true
                }
                None => false,
            },
            Msg::Stimulus => {
                self._stimulus = None;
                self.test.stimulus(now_ms());
                true
            }
            Msg::Press => {
                let outcome = self.test.press(now_ms());
                if matches!(outcome, game::PressOutcome::TooEarly) {
                    // the scheduled stimulus must never fire now
                    self._stimulus = None;
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
        use game::ReactionState::*;

        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_press = ctx.link().callback(|_| Msg::Press);
        let cb_arm = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Arm
        });

        let (area_class, content) = match self.test.state() {
            Idle => (
                "idle",
                html! {
                    <>
                        <h3>{"Reaction Time"}</h3>
                        <p>{"Click as fast as you can when the panel turns green."}</p>
                        <button onclick={cb_arm}>{"Start"}</button>
                    </>
                },
            ),
            Waiting => ("waiting", html! { <h3>{"Wait for green…"}</h3> }),
            Ready { .. } => ("ready", html! { <h3>{"Click now!"}</h3> }),
            Finished { millis } => (
                "finished",
                html! {
                    <>
                        <h3>{format!("{} ms", millis)}</h3>
                        <p>{"Great reaction!"}</p>
                        <button onclick={cb_arm}>{"Try again"}</button>
                    </>
                },
            ),
            TooEarly => (
                "early",
                html! {
                    <>
                        <h3>{"Too early!"}</h3>
                        <p>{"Wait for the green panel."}</p>
                        <button onclick={cb_arm}>{"Try again"}</button>
                    </>
                },
            ),
        };

        html! {
            <div class="reaction">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                </nav>
                <div class={classes!("area", area_class)} onmousedown={cb_press}>
                    { content }
                </div>
            </div>
        }
    }
}
