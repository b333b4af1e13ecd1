use yew::prelude::*;

use crate::games::*;
use crate::theme::Theme;
use crate::utils::js_random_seed;

/// The six mini-games offered on the menu.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum GameKind {
    TicTacToe,
    Reaction,
    Memory,
    Whack,
    Rps,
    Math,
}

impl GameKind {
    pub(crate) const ALL: [GameKind; 6] = [
        GameKind::TicTacToe,
        GameKind::Reaction,
        GameKind::Memory,
        GameKind::Whack,
        GameKind::Rps,
        GameKind::Math,
    ];

    pub(crate) const fn title(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic Tac Toe",
            GameKind::Reaction => "Reaction",
            GameKind::Memory => "Memory",
            GameKind::Whack => "Whack-A-Grid",
            GameKind::Rps => "R-P-S",
            GameKind::Math => "Speed Math",
        }
    }

    pub(crate) const fn tagline(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Classic strategy.",
            GameKind::Reaction => "Test your reflexes.",
            GameKind::Memory => "Follow the pattern.",
            GameKind::Whack => "Catch the blue dots.",
            GameKind::Rps => "Man vs machine.",
            GameKind::Math => "Solve fast.",
        }
    }

    pub(crate) const fn css_class(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::Reaction => "reaction",
            GameKind::Memory => "memory",
            GameKind::Whack => "whack",
            GameKind::Rps => "rps",
            GameKind::Math => "math",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Launch(GameKind),
    BackToMenu,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ArcadeProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    kind: GameKind,
    onlaunch: Callback<GameKind>,
}

#[function_component(CardView)]
fn card_view(props: &CardProps) -> Html {
    let CardProps { kind, onlaunch } = props.clone();
    let onclick = Callback::from(move |_: MouseEvent| onlaunch.emit(kind));

    html! {
        <button class={classes!("card", kind.css_class())} {onclick}>
            <h3>{kind.title()}</h3>
            <p>{kind.tagline()}</p>
            <small>{"Click to start"}</small>
        </button>
    }
}

/// Shell: tracks which game is active and mounts it with a single
/// back-to-menu callback. Nothing else flows between host and game.
pub(crate) struct ArcadeView {
    active: Option<GameKind>,
    forced_seed: Option<u64>,
    theme: Theme,
}

impl ArcadeView {
    /// Seed for the next game instance; a forced session seed makes every
    /// launch reproducible.
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }

    fn game_view(&self, kind: GameKind, on_back: Callback<()>) -> Html {
        let seed = self.next_seed();
        match kind {
            GameKind::TicTacToe => html! { <TicTacToeView {on_back}/> },
            GameKind::Reaction => html! { <ReactionView {seed} {on_back}/> },
            GameKind::Memory => html! { <MemoryView {seed} {on_back}/> },
            GameKind::Whack => html! { <WhackView {seed} {on_back}/> },
            GameKind::Rps => html! { <RpsView {seed} {on_back}/> },
            GameKind::Math => html! { <MathView {seed} {on_back}/> },
        }
    }
}

impl Component for ArcadeView {
    type Message = Msg;
    type Properties = ArcadeProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            active: None,
            forced_seed: ctx.props().seed,
            theme: Theme::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Launch(kind) => {
                log::debug!("launch {:?}", kind);
                self.active = Some(kind);
                true
            }
            Msg::BackToMenu => self.active.take().is_some(),
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(kind) = self.active {
            let on_back = ctx.link().callback(|()| Msg::BackToMenu);
            return html! {
                <main class={classes!("arcadita", "screen", kind.css_class())}>
                    { self.game_view(kind, on_back) }
                </main>
            };
        }

        let onlaunch = ctx.link().callback(Msg::Launch);
        let cb_theme = ctx.link().callback(|_| Msg::ToggleTheme);

        html! {
            <div class={classes!("arcadita", "menu")}>
                <header>
                    <button class="theme-switch" onclick={cb_theme}>{"◐"}</button>
                    <h1>{"GAME IT ON"}</h1>
                    <p>{"Just for you. Just for now. 30 seconds of flow."}</p>
                </header>
                <section class="cards">
                    {
                        for GameKind::ALL.into_iter().map(|kind| html! {
                            <CardView {kind} onlaunch={onlaunch.clone()}/>
                        })
                    }
                </section>
                <footer>
                    <small>{"No data saved • Press play • Reset anytime"}</small>
                </footer>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_menu_lists_six_distinct_games() {
        assert_eq!(GameKind::ALL.len(), 6);

        for (i, a) in GameKind::ALL.iter().enumerate() {
            for b in &GameKind::ALL[i + 1..] {
                assert_ne!(a.title(), b.title());
                assert_ne!(a.css_class(), b.css_class());
            }
        }
    }
}
