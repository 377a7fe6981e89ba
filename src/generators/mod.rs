use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use thiserror::Error;

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::maze::{Cell, Coord, Grid, Maze};

/// Default maze size used by the binaries.
pub const DEFAULT_WIDTH: u16 = 101;
pub const DEFAULT_HEIGHT: u16 = 71;

/// Smallest width and height a maze can be generated with.
pub const MIN_DIMENSION: u16 = 3;

/// How many random interior cells are tried for the goal before falling back to picking
/// directly among the carved passages.
pub const MAX_GOAL_RESAMPLES: usize = 10_000;

/// Where carving starts and the start cell is placed.
pub const START: Coord = (1, 1);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid maze size {width}x{height}, both dimensions must be at least {min}", min = MIN_DIMENSION)]
    InvalidSize { width: u16, height: u16 },
    #[error("a {width}x{height} maze has no passage cell to place the goal on")]
    NoGoalCandidate { width: u16, height: u16 },
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `width` x `height` cells.
///
/// The outer border is always wall. The start sits at row 1, column 1 and passages are
/// carved from there with [`recursive_backtrack`], so every open cell is connected to the
/// start through exactly one path. The goal goes in the bottom-right interior corner when
/// that cell was carved, and on a random passage otherwise.
///
/// Mazes that are at most 4 cells in both dimensions leave no room to carve, and fail
/// with [`GenerateError::NoGoalCandidate`].
pub fn generate_maze<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, GenerateError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(GenerateError::InvalidSize { width, height });
    }

    let mut grid = Grid::new(width, height, Cell::Wall);
    grid.set(START, Cell::Start);

    let carved = recursive_backtrack(&mut grid, START, rng);
    tracing::debug!("[generate] Carved {} cells in a {}x{} grid", carved, width, height);

    let goal = place_goal(&grid, START, rng)?;
    grid.set(goal, Cell::Goal);

    tracing::info!(
        "[generate] Generated {}x{} maze, start at {:?}, goal at {:?}",
        width,
        height,
        START,
        goal
    );
    Ok(Maze::from_parts(grid, START, goal))
}

/// Same as [`generate_maze`], drawing randomness from [`get_rng`].
pub fn generate_maze_seeded(
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Maze, GenerateError> {
    generate_maze(width, height, &mut get_rng(seed))
}

/// Picks the goal cell of a carved grid.
fn place_goal<R: Rng + ?Sized>(
    grid: &Grid,
    start: Coord,
    rng: &mut R,
) -> Result<Coord, GenerateError> {
    let (width, height) = (grid.width(), grid.height());
    let candidates = grid
        .positions_of(Cell::Passage)
        .filter(|&c| c != start)
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        return Err(GenerateError::NoGoalCandidate { width, height });
    }

    let mut goal = (height - 2, width - 2);
    let mut attempts = 0;
    while grid[goal] != Cell::Passage || goal == start {
        if attempts == MAX_GOAL_RESAMPLES {
            tracing::warn!(
                "[generate] No goal found after {} random picks, choosing among {} passages",
                attempts,
                candidates.len()
            );
            return candidates
                .choose(rng)
                .copied()
                .ok_or(GenerateError::NoGoalCandidate { width, height });
        }
        let col = rng.random_range(1..=width - 2);
        let row = rng.random_range(1..=height - 2);
        goal = (row, col);
        attempts += 1;
    }

    if attempts > 0 {
        tracing::debug!("[generate] Goal resampled {} times", attempts);
    }
    Ok(goal)
}
