//! The turn loop between an [`Othello`] game and a [`Connector`].

use crate::connectors::Connector;
use anyhow::{bail, Result};
use othello_rules::{Othello, Position};
use tracing::{info, warn};

/// Play `game` to the end through `connector` and return the finished game.
///
/// A player with no playable cell passes automatically. Otherwise the player is
/// asked for a 1-based "column row" pair until a legal one arrives.
pub async fn run<C: Connector + Send>(mut game: Othello, connector: &mut C) -> Result<Othello> {
    info!(size = game.board().size(), "game started");

    while !game.is_finished() {
        if !game.has_playable_move() {
            connector.announce_pass(game.turn());
            game.pass()?;
            continue;
        }

        let position = read_move(&game, connector).await?;
        let stone = game.turn();
        game.put(position)?;
        connector.announce_move(stone, position);
        game.end_turn()?;
    }

    let score = game.score();
    info!(black = score.black, white = score.white, "game over");
    connector.show_result(&game);
    Ok(game)
}

async fn read_move<C: Connector + Send>(game: &Othello, connector: &mut C) -> Result<Position> {
    loop {
        connector.show_board(game);
        let line = match connector.request_move(game.turn()).await? {
            Some(line) => line,
            None => bail!("input closed before the game finished"),
        };

        match line.parse::<Position>() {
            Ok(position) if game.verify_move(position) => return Ok(position),
            Ok(position) => warn!(%position, "rejected illegal move"),
            Err(err) => warn!(input = line.trim(), %err, "rejected input"),
        }
        connector.reject_input();
    }
}
