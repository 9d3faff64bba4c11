//! [`Connector`] for two people sharing one terminal.

use super::Connector;
use crate::render::{self, GlyphSet};
use async_std::io::{self, prelude::*};
use async_trait::async_trait;
use othello_rules::{Othello, Position, Stone};

pub struct TerminalConnector {
    glyphs: GlyphSet,
}

impl TerminalConnector {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self { glyphs }
    }
}

#[async_trait]
impl Connector for TerminalConnector {
    fn show_board(&mut self, game: &Othello) {
        println!("{}\n", render::board(game.board(), self.glyphs));
    }

    fn announce_pass(&mut self, stone: Stone) {
        println!("{} passed.\n", self.glyphs.stone(stone));
    }

    fn announce_move(&mut self, stone: Stone, position: Position) {
        println!("\n{} was put at {}\n", self.glyphs.stone(stone), position);
    }

    fn reject_input(&mut self) {
        println!("\nInput error\n");
    }

    async fn request_move(&mut self, stone: Stone) -> std::io::Result<Option<String>> {
        print!("Where do you put {}? > ", self.glyphs.stone(stone));
        io::stdout().flush().await?;

        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer).await? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }

    fn show_result(&mut self, game: &Othello) {
        println!("--- Result ---\n");
        println!("{}\n", render::board(game.board(), self.glyphs));
        println!("{}\n", render::result(game, self.glyphs));
    }
}
