use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    /// A cell index outside the fixed grid, unreachable from the rendered UI
    #[error("invalid cell index")]
    InvalidCell,
}

pub type Result<T> = core::result::Result<T, GameError>;
