//! Implements game-level Othello logic.
//!
//! [`Othello`] is the only way to change a game: every command either applies
//! completely or returns an [`OthelloError`] before anything is written.

use crate::grid::{self, Grid};
use crate::{Cell, OthelloError, Position, Stone, DIRECTIONS, EDGE_LENGTH, MIN_EDGE_LENGTH};
use std::fmt;
use tracing::{debug, trace};

/// Consecutive passes that end the game.
const PASSES_TO_FINISH: u8 = 2;

/// Stone counts for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// The player with strictly more stones, if any.
    pub fn leader(self) -> Option<Stone> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Stone::Black),
            std::cmp::Ordering::Less => Some(Stone::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Othello {
    board: Grid,
    turn: Stone,
    finished: bool,
    winner: Option<Stone>,
    pass_count: u8,
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl Othello {
    /// A new game on a standard 8x8 board, Black to move.
    pub fn new() -> Self {
        Self::starting(EDGE_LENGTH)
    }

    /// A new game with `size` cells on each edge.
    /// The size must be even and at least [`MIN_EDGE_LENGTH`].
    pub fn with_size(size: usize) -> Result<Self, OthelloError> {
        if size < MIN_EDGE_LENGTH || size % 2 != 0 {
            return Err(OthelloError::InvalidSize { size });
        }
        Ok(Self::starting(size))
    }

    fn starting(size: usize) -> Self {
        let mut game = Self {
            board: Grid::starting(size),
            turn: Stone::default(),
            finished: false,
            winner: None,
            pass_count: 0,
        };
        game.recompute_available_moves();
        game
    }

    /// The board, including the [`Cell::Playable`] markers for the player to move.
    #[inline]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The player to move.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The winner of a finished game. `None` while the game runs and after a draw.
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Passes since the last placement.
    #[inline]
    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.board.count(Cell::Black),
            white: self.board.count(Cell::White),
        }
    }

    /// The result of a finished game, or `None` while it runs.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.finished {
            return None;
        }
        Some(self.winner.map_or(Outcome::Draw, Outcome::Win))
    }

    /// Cells where the player to move may place a stone.
    pub fn playable_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.board.playable()
    }

    pub fn has_playable_move(&self) -> bool {
        self.playable_moves().next().is_some()
    }

    /// Whether [`Othello::put`] would accept `position`: it must be on the board
    /// and currently playable. Always false once the game is finished.
    pub fn verify_move(&self, position: Position) -> bool {
        !self.finished && self.board.get(position) == Some(Cell::Playable)
    }

    /// Place a stone for the player to move and flip every outflanked run.
    /// Returns the number of flipped stones.
    ///
    /// The turn does not change; call [`Othello::end_turn`] afterwards.
    pub fn put(&mut self, position: Position) -> Result<usize, OthelloError> {
        if self.finished {
            return Err(OthelloError::GameFinished);
        }
        if !self.verify_move(position) {
            return Err(OthelloError::InvalidMove { position });
        }

        self.pass_count = 0;
        self.board.set(position, self.turn.into());

        // Every direction is tested against the board as it was before any flips.
        let lines: Vec<_> = DIRECTIONS
            .iter()
            .copied()
            .filter(|&direction| grid::exist_line(&self.board, position, direction, self.turn))
            .collect();
        let flipped: usize = lines
            .into_iter()
            .map(|direction| grid::flip_line(&mut self.board, position, direction, self.turn))
            .sum();

        debug!(stone = %self.turn, %position, flipped, "placed stone");
        Ok(flipped)
    }

    /// Hand the move to the opponent and mark their playable cells.
    pub fn end_turn(&mut self) -> Result<(), OthelloError> {
        if self.finished {
            return Err(OthelloError::GameFinished);
        }
        self.advance_turn();
        Ok(())
    }

    /// Give up the turn without placing. The second pass in a row ends the game
    /// and decides the winner by stone count.
    pub fn pass(&mut self) -> Result<(), OthelloError> {
        if self.finished {
            return Err(OthelloError::GameFinished);
        }

        self.pass_count += 1;
        debug!(stone = %self.turn, pass_count = self.pass_count, "passed");

        if self.pass_count >= PASSES_TO_FINISH {
            self.finish();
        } else {
            self.advance_turn();
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn = !self.turn;
        debug!(stone = %self.turn, "turn started");
        self.recompute_available_moves();
    }

    fn finish(&mut self) {
        let score = self.score();
        self.finished = true;
        self.winner = score.leader();
        debug!(
            black = score.black,
            white = score.white,
            winner = ?self.winner,
            "game finished"
        );
    }

    fn recompute_available_moves(&mut self) {
        let playable = grid::mark_playable(&mut self.board, self.turn);
        trace!(stone = %self.turn, playable, "recomputed available moves");
    }
}

impl fmt::Display for Othello {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.outcome() {
            None => write!(f, "{} to move", self.turn),
            Some(Outcome::Win(stone)) => write!(f, "{} wins", stone),
            Some(Outcome::Draw) => f.write_str("Draw"),
        }
    }
}
