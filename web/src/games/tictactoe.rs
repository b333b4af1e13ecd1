use arcadita_core as game;
use yew::prelude::*;

use super::HasUpdate;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Place(usize),
    Reset,
    Back,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct TicTacToeProps {
    pub on_back: Callback<()>,
}

fn status_line(status: game::Status) -> String {
    match status {
        game::Status::Won(mark) => format!("Player {} wins!", mark.as_str()),
        game::Status::Draw => "It's a draw!".to_string(),
        game::Status::Turn(mark) => format!("Current turn: {}", mark.as_str()),
    }
}

pub(crate) struct TicTacToeView {
    board: game::TicTacToe,
}

impl Component for TicTacToeView {
    type Message = Msg;
    type Properties = TicTacToeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            board: game::TicTacToe::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Place(idx) => self.board.place(idx).has_update(),
            Msg::Reset => {
                self.board.reset();
                true
            }
            Msg::Back => {
                ctx.props().on_back.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let status = self.board.status();
        let cb_back = ctx.link().callback(|_| Msg::Back);
        let cb_reset = ctx.link().callback(|_| Msg::Reset);

        html! {
            <div class="tictactoe">
                <nav>
                    <button class="back" onclick={cb_back}>{"Back"}</button>
                    <span>{"Tic Tac Toe"}</span>
                    <button class="reset" onclick={cb_reset}>{"↺"}</button>
                </nav>
                <table class={status.is_final().then_some("finished")}>
                    {
                        for (0..3).map(|row| html! {
                            <tr>
                                {
                                    for (0..3).map(|col| {
                                        let idx = row * 3 + col;
                                        let cell = self.board.cell_at(idx);
                                        let class = classes!(
                                            "cell",
                                            cell.map(|mark| match mark {
                                                game::Mark::X => "x",
                                                game::Mark::O => "o",
                                            })
                                        );
                                        let onclick = ctx.link().callback(move |_| Msg::Place(idx));
                                        html! {
                                            <td {class} {onclick}>
                                                { cell.map(game::Mark::as_str).unwrap_or("") }
                                            </td>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class={classes!("status", status.is_final().then_some("final"))}>
                    { status_line(status) }
                </p>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_covers_every_phase() {
        use game::{Mark, Status};

        assert_eq!(status_line(Status::Turn(Mark::X)), "Current turn: X");
        assert_eq!(status_line(Status::Won(Mark::O)), "Player O wins!");
        assert_eq!(status_line(Status::Draw), "It's a draw!");
    }
}
