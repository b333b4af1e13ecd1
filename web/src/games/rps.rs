use arcadita_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Both throws stay hidden this long while the round "fights".
const REVEAL_MS: u32 = 600;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Choose(game::HandShape),
    Reveal,
    Reset,
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct RpsProps {
    pub seed: u64,
    pub on_back: Callback<()>,
}

fn shape_glyph(shape: game::HandShape) -> &'static str {
    use game::HandShape::*;
    match shape {
        Rock => "✊",
        Paper => "✋",
        Scissors => "✌",
    }
}

pub(crate) struct RpsView {
    game: game::RpsMatch,
    rng: game::GameRng,
    /// Choice waiting on the reveal animation.
    pending: Option<game::HandShape>,
    // pending reveal; dropping cancels
    _reveal: Option<Timeout>,
}

impl Component for RpsView {
    type Message = Msg;
    type Properties = RpsProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: game::RpsMatch::new(),
            rng: game::rng_from_seed(ctx.props().seed),
            pending: None,
            _reveal: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Choose(shape) => {
                // reject input mid-animation or after the match is decided
                if self.pending.is_some() || self.game.outcome().is_some() {
                    return false;
                }
                self.pending = Some(shape);
                let link = ctx.link().clone();
                self._reveal = Some(Timeout::new(REVEAL_MS, move || {
                    link.send_message(Msg::Reveal)
                }));
                true
            }
            Msg::Reveal => {
                self._reveal = None;
                match self.pending.take() {
                    Some(shape) => self.game.play(shape, &mut self.rng).has_update(),
                    None => false,
                }
            }
            Msg::Reset => {
                self.pending = None;
                self._reveal = None;
                self.game.reset();
                true
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let fighting = self.pending.is_some();
        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_reset = ctx.link().callback(|_| Msg::Reset);

        let overlay = match self.game.outcome() {
            Some(outcome) if !fighting => {
                let (title, note) = match outcome {
                    game::MatchOutcome::Victory => ("Victory!", "You won the match!"),
                    game::MatchOutcome::Defeat => ("Defeat", "Better luck next time."),
                };
                html! {
                    <div class="overlay">
                        <h2>{title}</h2>
                        <p>{note}</p>
                        <p class="totals">
                            {format!("{} - {}", self.game.player_score(), self.game.cpu_score())}
                        </p>
                        <button onclick={ctx.link().callback(|_| Msg::Reset)}>{"Play again"}</button>
                    </div>
                }
            }
            _ => html! {},
        };

        let hands = match (fighting, self.game.last_round()) {
            (true, _) => html! {
                <div class="hands fighting">
                    <span class="hand">{"…"}</span>
                    <span class="vs">{"VS"}</span>
                    <span class="hand">{"…"}</span>
                </div>
            },
            (false, Some(round)) => html! {
                <div class="hands">
                    <span class="hand you">{shape_glyph(round.player)}</span>
                    <span class="vs">{"VS"}</span>
                    <span class="hand cpu">{shape_glyph(round.cpu)}</span>
                </div>
            },
            (false, None) => html! {
                <div class="hands">
                    <span class="hand"/>
                    <span class="vs">{"VS"}</span>
                    <span class="hand"/>
                </div>
            },
        };

        let result_line = if fighting {
            html! { <span class="fighting">{"Fighting…"}</span> }
        } else {
            match self.game.last_round() {
                Some(round) => {
                    let (class, text) = match round.outcome {
                        game::RoundOutcome::Win => ("win", "You win!"),
                        game::RoundOutcome::Lose => ("lose", "You lose!"),
                        game::RoundOutcome::Draw => ("draw", "Draw!"),
                    };
                    html! { <span class={class}>{text}</span> }
                }
                None => html! { <span class="idle">{"Make your move"}</span> },
            }
        };

        let locked = fighting || self.game.outcome().is_some();

        html! {
            <div class="rps">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                    <span>
                        {format!("You: {} | CPU: {}",
                            self.game.player_score(), self.game.cpu_score())}
                    </span>
                    <button class="reset" onclick={cb_reset}>{"↺"}</button>
                </nav>
                { overlay }
                <p class="target">{format!("First to {} wins", game::WIN_TARGET)}</p>
                { hands }
                <p class="result">{ result_line }</p>
                <div class="choices">
                    {
                        for game::HandShape::ALL.into_iter().map(|shape| {
                            let onclick = ctx.link().callback(move |_| Msg::Choose(shape));
                            html! {
                                <button disabled={locked} {onclick}>
                                    <span class="glyph">{shape_glyph(shape)}</span>
                                    <span class="label">{shape.label()}</span>
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}
