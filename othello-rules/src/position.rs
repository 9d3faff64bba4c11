//! Code for working with [`Position`]s and [`Direction`]s on the board.

use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter};

/// A square on the board, possibly off its edge.
///
/// `x` is the column and `y` the row, both counted from 0 at the top-left.
/// Coordinates are signed so that walks and user input can step past the
/// edge and be rejected by a range check instead of wrapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, From, Into)]
pub struct Position {
    pub x: isize,
    pub y: isize,
}

/// A unit step towards one of the eight neighbours of a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

/// All eight neighbour directions, in row-major order.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: -1, dy: -1 },
    Direction { dx: 0, dy: -1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: 1, dy: 1 },
];

impl Position {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// The square `k` steps away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction, k: isize) -> Self {
        Self {
            x: self.x + direction.dx * k,
            y: self.y + direction.dy * k,
        }
    }

    /// Convert from 1-indexed (column, row) coordinates, as a person types them.
    /// Returns None if either coordinate cannot be shifted down by one.
    #[inline]
    pub fn from_one_based(column: isize, row: isize) -> Option<Self> {
        Some(Self::new(column.checked_sub(1)?, row.checked_sub(1)?))
    }
}

/// Renders 1-indexed "(column, row)", matching what a player enters.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x + 1, self.y + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected two numbers: column and row")]
pub struct ParsePositionError;

/// Build a [`Position`] from 1-indexed "column row" text ("3 4").
/// The result is not range-checked; that is the engine's job.
impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let column = parts
            .next()
            .ok_or(ParsePositionError)?
            .parse()
            .or(Err(ParsePositionError))?;
        let row = parts
            .next()
            .ok_or(ParsePositionError)?
            .parse()
            .or(Err(ParsePositionError))?;

        if parts.next().is_some() {
            return Err(ParsePositionError);
        }

        Self::from_one_based(column, row).ok_or(ParsePositionError)
    }
}
