#![no_std]

extern crate alloc;

pub use error::*;
pub use math::*;
pub use memory::*;
pub use reaction::*;
pub use rps::*;
pub use tictactoe::*;
pub use types::*;
pub use whack::*;

mod error;
mod math;
mod memory;
mod reaction;
mod rps;
mod tictactoe;
mod types;
mod whack;
