//! Perfect maze generation and uninformed graph-search solving.
//!
//! [`generators::generate_maze`] carves a maze with a randomized depth-first walk,
//! [`solvers::solve_maze`] searches it with a stack (depth-first) or queue
//! (breadth-first) frontier, and [`Maze::parse`] / [`Maze::to_text`] move mazes in and
//! out of the plain-text format.

pub mod generators;
pub mod maze;
pub mod solvers;

pub use generators::{GenerateError, generate_maze, generate_maze_seeded, get_rng};
pub use maze::{Action, Cell, Coord, Grid, Maze, ParseMazeError};
pub use solvers::{Solution, SolveError, Solver, solve, solve_maze};
