pub mod cell;
pub mod grid;
mod text;

use std::fmt;

pub use cell::Cell;
pub use grid::Grid;
pub use text::{DEFAULT_MAZE_FILE, ParseMazeError};

use crate::solvers::Solution;

/// A `(row, column)` position in the grid, 0-indexed from the top-left corner.
pub type Coord = (u16, u16);

/// A single step between orthogonally adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Returns the coordinate reached by taking this action from `coord`.
    /// Returns `None` if the step would leave the representable coordinate range.
    pub fn apply(self, (row, col): Coord) -> Option<Coord> {
        match self {
            Action::Up => Some((row.checked_sub(1)?, col)),
            Action::Down => Some((row.checked_add(1)?, col)),
            Action::Left => Some((row, col.checked_sub(1)?)),
            Action::Right => Some((row, col.checked_add(1)?)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
        }
    }
}

/// A grid with exactly one start and one goal cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    goal: Coord,
}

impl Maze {
    /// Wraps a grid whose start and goal cells are already placed.
    pub(crate) fn from_parts(grid: Grid, start: Coord, goal: Coord) -> Self {
        debug_assert_eq!(grid[start], Cell::Start);
        debug_assert_eq!(grid[goal], Cell::Goal);
        Maze { grid, start, goal }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Marks every cell of `solution` except start and goal as [`Cell::OnSolutionPath`].
    pub fn mark_solution(&mut self, solution: &Solution) {
        for &coord in solution.cells() {
            if coord != self.start && coord != self.goal && self.grid.is_in_bounds(coord) {
                self.grid.set(coord, Cell::OnSolutionPath);
            }
        }
    }

    /// Turns every solution marker back into a plain passage.
    pub fn clear_solution(&mut self) {
        let marked = self
            .grid
            .positions_of(Cell::OnSolutionPath)
            .collect::<Vec<_>>();
        for coord in marked {
            self.grid.set(coord, Cell::Passage);
        }
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

/// Renders the maze with coloured terminal symbols, one row per line.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Get the traversable neighbors of a cell, paired with the action that reaches them.
/// Neighbors are enumerated in the fixed order up, down, left, right, which decides
/// tie-breaking during search.
pub fn neighbors(grid: &Grid, (row, col): Coord) -> Vec<(Action, Coord)> {
    // NOTE: This way of handling underflow/overflow is overflow-safe.
    // When row or col is 0, wrap the decrement to u16::MAX and filter it out with the bounds
    // check. An increment past u16::MAX saturates, and u16::MAX is never a valid index.
    [
        (Action::Up, (row.wrapping_sub(1), col)),
        (Action::Down, (row.saturating_add(1), col)),
        (Action::Left, (row, col.wrapping_sub(1))),
        (Action::Right, (row, col.saturating_add(1))),
    ]
    .into_iter()
    .filter(|&(_, c)| grid.get(c).is_some_and(Cell::is_traversable))
    .collect()
}
