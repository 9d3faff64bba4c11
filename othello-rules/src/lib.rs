//! `othello-rules` is a small, safe Othello rules engine for UIs and shells.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`grid`] contains the board storage and the raw line routines
//!    ([`grid::exist_line`], [`grid::flip_line`], [`grid::mark_playable`]).
//!    These are pure functions over a [`Grid`] and do not know whose turn it is.
//!  - [`Othello`] is the stateful game: it owns the grid, the player to move,
//!    the pass counter and the result, and only changes through its commands.
//!
//! A turn is driven from the outside: check [`Othello::verify_move`], call
//! [`Othello::put`], then [`Othello::end_turn`]. When the player to move has no
//! playable cell, call [`Othello::pass`] instead. Two passes in a row end the game.

pub mod grid;
pub mod test_utils;

mod cell;
mod error;
mod game;
mod position;

pub use cell::*;
pub use error::*;
pub use game::*;
pub use grid::Grid;
pub use position::*;

/// The number of spaces on one edge of a standard Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The smallest edge length that fits the starting layout with room to play.
pub const MIN_EDGE_LENGTH: usize = 4;
