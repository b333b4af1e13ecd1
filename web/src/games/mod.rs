use arcadita_core as game;

pub(crate) use math::MathView;
pub(crate) use memory::MemoryView;
pub(crate) use reaction::ReactionView;
pub(crate) use rps::RpsView;
pub(crate) use tictactoe::TicTacToeView;
pub(crate) use whack::WhackView;

mod math;
mod memory;
mod reaction;
mod rps;
mod tictactoe;
mod whack;

/// Fold an operation result into a "does the view need a re-render"
/// decision; errors can only come from indices the UI never produces.
pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::PlaceOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome| outcome.has_update())
    }
}

impl<E> HasUpdate for Result<game::WhackOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome| outcome.has_update())
    }
}
