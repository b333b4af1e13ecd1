use arcadita_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Playback pacing.
const LEAD_IN_MS: u32 = 500;
const LIGHT_MS: u32 = 600;
const GAP_MS: u32 = 200;
const NEXT_ROUND_PAUSE_MS: u32 = 1000;
const FLASH_MS: u32 = 200;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    StepOn,
    StepOff,
    FlashOff,
    Press(game::LightColor),
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MemoryProps {
    pub seed: u64,
    pub on_back: Callback<()>,
}

fn pad_class(color: game::LightColor) -> &'static str {
    use game::LightColor::*;
    match color {
        Red => "red",
        Green => "green",
        Blue => "blue",
        Yellow => "yellow",
    }
}

pub(crate) struct MemoryView {
    game: game::MemoryLights,
    rng: game::GameRng,
    /// Pad currently lit, either by playback or by a press flash.
    lit: Option<game::LightColor>,
    /// Next sequence element to light during playback.
    playback_pos: usize,
    // pending playback step or round pause; dropping cancels
    _step: Option<Timeout>,
    // pending press-flash clear
    _flash: Option<Timeout>,
}

impl MemoryView {
    fn schedule(ctx: &Context<Self>, delay: u32, msg: Msg) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(delay, move || link.send_message(msg))
    }

    /// Begin showing the whole sequence after `delay`.
    fn begin_playback(&mut self, ctx: &Context<Self>, delay: u32) {
        self.playback_pos = 0;
        self.lit = None;
        self._step = Some(Self::schedule(ctx, delay, Msg::StepOn));
    }
}

impl Component for MemoryView {
    type Message = Msg;
    type Properties = MemoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: game::MemoryLights::new(),
            rng: game::rng_from_seed(ctx.props().seed),
            lit: None,
            playback_pos: 0,
            _step: None,
            _flash: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                self.game.start(&mut self.rng);
                self._flash = None;
                self.begin_playback(ctx, LEAD_IN_MS);
                true
            }
            Msg::StepOn => {
                match self.game.sequence().get(self.playback_pos) {
                    Some(&color) => {
                        self.lit = Some(color);
                        self._step = Some(Self::schedule(ctx, LIGHT_MS, Msg::StepOff));
                    }
                    None => {
                        // whole sequence shown
                        self._step = None;
                        self.game.playback_done();
                    }
                }
                true
            }
            Msg::StepOff => {
                self.lit = None;
                self.playback_pos += 1;
                if self.playback_pos < self.game.sequence().len() {
                    self._step = Some(Self::schedule(ctx, GAP_MS, Msg::StepOn));
                } else {
                    self._step = None;
                    self.game.playback_done();
                }
                true
            }
            Msg::FlashOff => {
                self._flash = None;
                self.lit.take().is_some()
            }
            Msg::Press(color) => {
                let outcome = self.game.press(color, &mut self.rng);
                match outcome {
                    game::GuessOutcome::Ignored => false,
                    game::GuessOutcome::Advanced | game::GuessOutcome::GameOver => {
                        self.lit = Some(color);
                        self._flash = Some(Self::schedule(ctx, FLASH_MS, Msg::FlashOff));
                        true
                    }
                    game::GuessOutcome::RoundComplete => {
                        self.begin_playback(ctx, NEXT_ROUND_PAUSE_MS);
                        // flash the pressed pad during the pause
                        self.lit = Some(color);
                        self._flash = Some(Self::schedule(ctx, FLASH_MS, Msg::FlashOff));
                        true
                    }
                }
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::MemoryPhase::*;

        let phase = self.game.phase();
        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_start = ctx.link().callback(|_| Msg::Start);

        let overlay = match phase {
            Idle => html! {
                <div class="overlay">
                    <h2>{"Memory Lights"}</h2>
                    <p>{"Watch the pattern of lights and repeat it."}</p>
                    <button onclick={cb_start}>{"Start game"}</button>
                </div>
            },
            GameOver => html! {
                <div class="overlay">
                    <h2>{"Game Over!"}</h2>
                    <p>{format!("You reached level {}", self.game.score() + 1)}</p>
                    <button onclick={cb_start}>{"Try again"}</button>
                </div>
            },
            Showing | Awaiting => html! {},
        };

        let status = match phase {
            Showing => html! { <span class="watch">{"Watch…"}</span> },
            Awaiting => html! { <span class="your-turn">{"Your turn!"}</span> },
            Idle | GameOver => html! {},
        };

        html! {
            <div class="memory">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                    <span>{format!("Score: {}", self.game.score())}</span>
                </nav>
                { overlay }
                <table class={matches!(phase, Awaiting).then_some("playable")}>
                    {
                        for game::LightColor::ALL.chunks(2).map(|pair| html! {
                            <tr>
                                {
                                    for pair.iter().map(|&color| {
                                        let class = classes!(
                                            "pad",
                                            pad_class(color),
                                            (self.lit == Some(color)).then_some("lit")
                                        );
                                        let onclick = ctx.link().callback(move |_| Msg::Press(color));
                                        html! {
                                            <td {class} {onclick}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class="status">{ status }</p>
            </div>
        }
    }
}
