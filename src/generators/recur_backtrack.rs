use rand::{Rng, seq::SliceRandom};

use crate::maze::{Cell, Coord, Grid};

/// Two-cell steps as `(row, col)` offsets. Carving only ever lands on cells an even number
/// of steps away from the start, so the cell in between is always a wall to knock down.
const CARVE_STEPS: [(i32, i32); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// Carves passages into a walled grid with a randomized depth-first walk from `start`.
///
/// The grid is expected to be all walls except for `start`. The outer border is never
/// carved. Each round the step directions are reshuffled and the first one landing on an
/// interior wall wins; when none does the walk backtracks. Returns the number of cells
/// turned into passages.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Coord,
    rng: &mut R,
) -> usize {
    let (height, width) = (grid.height() as i32, grid.width() as i32);
    let mut directions = CARVE_STEPS;
    let mut carved = 0;

    // The stack holds the current carving path, the top being the cell to extend
    let mut stack = vec![start];

    while let Some(&(row, col)) = stack.last() {
        directions.shuffle(rng);

        let next = directions.iter().find_map(|&(dr, dc)| {
            let (nr, nc) = (row as i32 + dr, col as i32 + dc);
            let inside = 0 < nr && nr < height - 1 && 0 < nc && nc < width - 1;
            let dest = (nr as u16, nc as u16);
            (inside && grid[dest] == Cell::Wall).then(|| {
                let between = ((row as i32 + dr / 2) as u16, (col as i32 + dc / 2) as u16);
                (dest, between)
            })
        });

        match next {
            Some((dest, between)) => {
                grid.set(dest, Cell::Passage);
                grid.set(between, Cell::Passage);
                carved += 2;
                stack.push(dest);
            }
            // Dead end, step back along the path
            None => {
                stack.pop();
            }
        }
    }

    carved
}
