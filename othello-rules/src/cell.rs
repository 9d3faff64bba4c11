//! The values a board square can hold.

use crate::InvalidStoneValue;
use std::fmt;

/// One of the two colors of stone, and so one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Default for Stone {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Stone {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

impl std::ops::Not for Stone {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single board square.
///
/// `Playable` is not a stone: the engine writes it onto empty squares where
/// the player to move may place, and clears it again before every sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Playable,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    /// Whether this square holds no stone (empty or playable).
    #[inline]
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Empty | Cell::Playable)
    }

    /// The stone in this square, if there is one.
    #[inline]
    pub fn stone(self) -> Option<Stone> {
        Stone::try_from(self).ok()
    }

    /// Gets the color that opposes the stone in this square.
    pub fn opponent(self) -> Result<Stone, InvalidStoneValue> {
        Stone::try_from(self).map(Stone::opponent)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '#',
            Cell::White => 'O',
            Cell::Playable => '*',
        }
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Stone {
    type Error = InvalidStoneValue;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Stone::Black),
            Cell::White => Ok(Stone::White),
            Cell::Empty | Cell::Playable => Err(InvalidStoneValue { cell }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stone_opponent() {
        assert_eq!(!Stone::Black, Stone::White);
        assert_eq!(!Stone::White, Stone::Black);
        assert_eq!(Stone::default(), Stone::Black);
    }

    #[test]
    fn cell_opponent() {
        assert_eq!(Cell::Black.opponent(), Ok(Stone::White));
        assert_eq!(Cell::White.opponent(), Ok(Stone::Black));
        assert_eq!(
            Cell::Empty.opponent(),
            Err(InvalidStoneValue { cell: Cell::Empty })
        );
        assert_eq!(
            Cell::Playable.opponent(),
            Err(InvalidStoneValue {
                cell: Cell::Playable
            })
        );
    }

    #[test]
    fn cell_stone_conversion() {
        assert_eq!(Cell::from(Stone::White), Cell::White);
        assert_eq!(Cell::Black.stone(), Some(Stone::Black));
        assert_eq!(Cell::Playable.stone(), None);
        assert!(Cell::Playable.is_vacant());
        assert!(!Cell::White.is_vacant());
    }

    #[test]
    fn cell_to_str() {
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Cell::Black.to_string(), "#");
        assert_eq!(Cell::White.to_string(), "O");
        assert_eq!(Cell::Playable.to_string(), "*");
        assert_eq!(Stone::White.to_string(), "White");
    }
}
