//! Text rendering of boards and results.

use itertools::Itertools;
use othello_rules::{Cell, Grid, Othello, Stone};
use std::iter;

/// Which characters to draw cells with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GlyphSet {
    /// Full-width symbols.
    Unicode,
    /// Plain ASCII, for terminals without wide-character support.
    Ascii,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::Unicode
    }
}

impl GlyphSet {
    /// The two-column text for one cell.
    pub fn glyph(self, cell: Cell) -> &'static str {
        match (self, cell) {
            (GlyphSet::Unicode, Cell::Empty) => "・",
            (GlyphSet::Unicode, Cell::Black) => "●",
            (GlyphSet::Unicode, Cell::White) => "○",
            (GlyphSet::Unicode, Cell::Playable) => "☆",
            (GlyphSet::Ascii, Cell::Empty) => " .",
            (GlyphSet::Ascii, Cell::Black) => " #",
            (GlyphSet::Ascii, Cell::White) => " O",
            (GlyphSet::Ascii, Cell::Playable) => " *",
        }
    }

    pub fn stone(self, stone: Stone) -> &'static str {
        self.glyph(stone.into()).trim_start()
    }
}

/// Draw `grid` with 1-based column numbers across the top and row numbers down the side.
pub fn board(grid: &Grid, glyphs: GlyphSet) -> String {
    let header = iter::once("  ".to_string())
        .chain((1..=grid.size()).map(|column| format!("{:>2}", column)))
        .join("");

    let rows = grid.rows().enumerate().map(|(row, cells)| {
        format!(
            "{:>2}{}",
            row + 1,
            cells.iter().map(|&cell| glyphs.glyph(cell)).join("")
        )
    });

    iter::once(header).chain(rows).join("\n")
}

/// The final tally: both stone counts and the winner.
pub fn result(game: &Othello, glyphs: GlyphSet) -> String {
    let score = game.score();
    let verdict = match game.winner() {
        Some(stone) => format!("{} won!!", glyphs.stone(stone)),
        None => "Draw!!".to_string(),
    };

    format!(
        "{}: {}\n{}: {}\n\n{}",
        glyphs.stone(Stone::Black),
        score.black,
        glyphs.stone(Stone::White),
        score.white,
        verdict
    )
}
