//! Board storage and the raw line operations of Othello.
//!
//! These functions are unchecked with respect to game flow: they never look at
//! whose turn it is or whether the game is over, and take the moving [`Stone`]
//! as an argument. [`crate::Othello`] wraps them with those checks.
//!
//! Cells are stored in row-major order with (0, 0) in the upper-left.

use crate::{Cell, Direction, Position, Stone, DIRECTIONS};
use std::fmt::{self, Display, Formatter};

/// A square grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty grid with `size` cells on each edge.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// The starting layout: the centre 2x2 holds White on the main diagonal
    /// and Black on the anti-diagonal. Playable markers are not set.
    pub fn starting(size: usize) -> Self {
        let mut grid = Self::new(size);
        let low = (size / 2) as isize - 1;
        let high = low + 1;

        grid.set(Position::new(low, low), Cell::White);
        grid.set(Position::new(high, high), Cell::White);
        grid.set(Position::new(high, low), Cell::Black);
        grid.set(Position::new(low, high), Cell::Black);
        grid
    }

    /// Number of cells on one edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board.
    #[inline]
    pub fn in_range(&self, pos: Position) -> bool {
        let size = self.size as isize;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    /// The cell at `pos`, or `None` when `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// Overwrite the cell at `pos`. Positions off the board are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = cell;
        }
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_range(pos) {
            Some(pos.y as usize * self.size + pos.x as usize)
        } else {
            None
        }
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as isize;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Count the cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions currently marked [`Cell::Playable`].
    pub fn playable(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |&pos| self.get(pos) == Some(Cell::Playable))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for column in 1..=self.size {
            write!(f, " {}", column)?;
        }
        for (row, cells) in self.rows().enumerate() {
            write!(f, "\n{:>2}", row + 1)?;
            for cell in cells {
                write!(f, " {}", cell)?;
            }
        }
        Ok(())
    }
}

/// Cells outward from `origin` (which is not included) until the edge.
pub fn walk(
    grid: &Grid,
    origin: Position,
    direction: Direction,
) -> impl Iterator<Item = (Position, Cell)> + '_ {
    (1..)
        .map(move |k| origin.step(direction, k))
        .map_while(move |pos| grid.get(pos).map(|cell| (pos, cell)))
}

/// Whether `stone` at `origin` would outflank a run of opponent stones in `direction`.
///
/// The walk fails on a gap or the edge, and on the mover's own stone before
/// any opponent stone was passed.
pub fn exist_line(grid: &Grid, origin: Position, direction: Direction, stone: Stone) -> bool {
    let own = Cell::from(stone);
    let mut line_length = 0;

    for (_, cell) in walk(grid, origin, direction) {
        if cell.is_vacant() {
            return false;
        }
        if cell == own {
            return line_length > 0;
        }
        line_length += 1;
    }
    false
}

/// Turn the opponent run next to `origin` in `direction` into `stone`.
/// Returns the number of flipped stones.
///
/// Callers must check [`exist_line`] first; an unclosed run is flipped all the same.
pub fn flip_line(grid: &mut Grid, origin: Position, direction: Direction, stone: Stone) -> usize {
    let opponent = Cell::from(!stone);
    let run: Vec<Position> = walk(grid, origin, direction)
        .take_while(|&(_, cell)| cell == opponent)
        .map(|(pos, _)| pos)
        .collect();

    for &pos in &run {
        grid.set(pos, Cell::from(stone));
    }
    run.len()
}

/// Whether an empty cell at `pos` is a legal placement for `stone`.
pub fn is_legal(grid: &Grid, pos: Position, stone: Stone) -> bool {
    grid.get(pos).map_or(false, Cell::is_vacant)
        && DIRECTIONS
            .iter()
            .any(|&direction| exist_line(grid, pos, direction, stone))
}

/// Clear every stale [`Cell::Playable`] marker, then mark each empty cell where
/// `stone` may legally be placed. Returns the number of playable cells.
pub fn mark_playable(grid: &mut Grid, stone: Stone) -> usize {
    for cell in grid.cells.iter_mut() {
        if *cell == Cell::Playable {
            *cell = Cell::Empty;
        }
    }

    let legal: Vec<Position> = grid
        .positions()
        .filter(|&pos| grid.get(pos) == Some(Cell::Empty) && is_legal(grid, pos, stone))
        .collect();

    for &pos in &legal {
        grid.set(pos, Cell::Playable);
    }
    legal.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EAST: Direction = Direction { dx: 1, dy: 0 };
    const WEST: Direction = Direction { dx: -1, dy: 0 };

    /// Build a grid from rows of glyphs: `.` empty, `#` black, `O` white, `*` playable.
    /// The edge length is the width of the first row; missing rows stay empty.
    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.first().map_or(0, |row| row.len()));
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let cell = match glyph {
                    '#' => Cell::Black,
                    'O' => Cell::White,
                    '*' => Cell::Playable,
                    _ => Cell::Empty,
                };
                grid.set(Position::new(x as isize, y as isize), cell);
            }
        }
        grid
    }

    #[test]
    fn starting_layout() {
        let grid = Grid::starting(8);
        assert_eq!(grid.get(Position::new(3, 3)), Some(Cell::White));
        assert_eq!(grid.get(Position::new(4, 4)), Some(Cell::White));
        assert_eq!(grid.get(Position::new(4, 3)), Some(Cell::Black));
        assert_eq!(grid.get(Position::new(3, 4)), Some(Cell::Black));
        assert_eq!(grid.count(Cell::Empty), 60);
    }

    #[test]
    fn in_range() {
        let grid = Grid::new(8);
        assert!(grid.in_range(Position::new(0, 0)));
        assert!(grid.in_range(Position::new(7, 7)));
        assert!(!grid.in_range(Position::new(-1, 0)));
        assert!(!grid.in_range(Position::new(0, 8)));
        assert_eq!(grid.get(Position::new(8, 0)), None);
    }

    #[test]
    fn walk_stops_at_edge() {
        let grid = Grid::new(4);
        let cells: Vec<_> = walk(&grid, Position::new(1, 2), EAST).collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(2, 2), Cell::Empty),
                (Position::new(3, 2), Cell::Empty)
            ]
        );
        assert_eq!(walk(&grid, Position::new(0, 0), WEST).count(), 0);
    }

    #[test]
    fn exist_line_cases() {
        let grid = grid_from(&["..O#", ".#..", "OO.*", "...."]);

        // Opponent run closed by own stone.
        assert!(exist_line(&grid, Position::new(1, 0), EAST, Stone::Black));
        // Own stone right next to origin.
        assert!(!exist_line(&grid, Position::new(0, 1), EAST, Stone::Black));
        // Run reaches the edge without closing.
        assert!(!exist_line(&grid, Position::new(2, 2), WEST, Stone::Black));
        // Own stone right next to origin, for White.
        assert!(!exist_line(&grid, Position::new(0, 2), EAST, Stone::White));
    }

    #[test]
    fn exist_line_gap_breaks_run() {
        let grid = grid_from(&["O#*#", "O#.#", "O##O", "...."]);
        assert!(!exist_line(&grid, Position::new(0, 0), EAST, Stone::White));
        assert!(!exist_line(&grid, Position::new(0, 1), EAST, Stone::White));
        assert!(exist_line(&grid, Position::new(0, 2), EAST, Stone::White));
    }

    #[test]
    fn flip_line_stops_at_own_stone() {
        let mut grid = grid_from(&["#OO#O...", "........"]);
        let flipped = flip_line(&mut grid, Position::new(0, 0), EAST, Stone::Black);
        assert_eq!(flipped, 2);
        assert_eq!(grid, grid_from(&["####O...", "........"]));
    }

    #[test]
    fn mark_playable_starting_layout() {
        let mut grid = Grid::starting(8);
        assert_eq!(mark_playable(&mut grid, Stone::Black), 4);

        let mut marked: Vec<_> = grid.playable().collect();
        marked.sort();
        let mut expected = vec![
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(4, 5),
            Position::new(5, 4),
        ];
        expected.sort();
        assert_eq!(marked, expected);
    }

    #[test]
    fn mark_playable_clears_stale_markers() {
        let mut grid = grid_from(&["****", ".O#.", ".#O.", "...."]);
        assert_eq!(mark_playable(&mut grid, Stone::White), 4);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Cell::Empty));
        assert_eq!(grid.get(Position::new(2, 0)), Some(Cell::Playable));
        assert_eq!(grid.count(Cell::Playable), 4);
    }

    #[test]
    fn grid_to_str() {
        let grid = Grid::starting(4);
        assert_eq!(
            grid.to_string(),
            "   1 2 3 4\n 1 . . . .\n 2 . O # .\n 3 . # O .\n 4 . . . ."
        );
    }
}
