use async_trait::async_trait;
use othello_rules::{Othello, Position, Stone};
use std::io;

/// An abstract interface between a game session and "the outside world".
#[async_trait]
pub trait Connector {
    /// Show the board before asking for a move.
    fn show_board(&mut self, game: &Othello);

    /// `stone` had no playable cell and passed.
    fn announce_pass(&mut self, stone: Stone);

    /// `stone` placed at `position`.
    fn announce_move(&mut self, stone: Stone, position: Position);

    /// The last line could not be parsed or was not a legal move.
    fn reject_input(&mut self);

    /// Ask the player with `stone` for a move. Returns `None` once input is exhausted.
    async fn request_move(&mut self, stone: Stone) -> io::Result<Option<String>>;

    /// Show the finished game.
    fn show_result(&mut self, game: &Othello);
}
