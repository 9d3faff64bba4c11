//! Errors raised by the engine.

use crate::{Cell, Position};
use derive_more::{Display, Error};

/// A command the engine refused. The game state is untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum OthelloError {
    /// The target is off the board or not currently playable for the player to move.
    #[display(fmt = "cannot place a stone at {}", position)]
    InvalidMove { position: Position },

    /// Two consecutive passes already ended the game.
    #[display(fmt = "the game is already finished")]
    GameFinished,

    /// Boards must have an even edge length of at least four.
    #[display(fmt = "unsupported board size {}", size)]
    InvalidSize { size: usize },
}

/// A cell that holds no stone was asked for its opponent.
///
/// This only happens when an invariant inside the engine is broken,
/// so it is kept apart from [`OthelloError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{:?} is not a stone", cell)]
pub struct InvalidStoneValue {
    pub cell: Cell,
}
