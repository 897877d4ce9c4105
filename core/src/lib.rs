use serde::{Deserialize, Serialize};

pub use cell::*;
pub use clock::*;
pub use color::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use memory::*;
pub use sequence::*;
pub use types::*;

mod cell;
mod clock;
mod color;
mod error;
mod generator;
mod grid;
mod memory;
mod sequence;
mod types;

/// Phase of a running game. Quitting is an application concern and has no
/// mode of its own.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    WaitForPlayer,
    ShowPattern,
    GetClick,
    GameOver,
}

impl GameMode {
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::GetClick)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::WaitForPlayer
    }
}
