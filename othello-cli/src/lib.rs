//! A line-based terminal front-end for `othello-rules`.
//!
//! [`session::run`] drives a game through a [`connectors::Connector`], which is
//! how the game talks to the outside world.

pub mod connectors;
pub mod render;
pub mod session;
