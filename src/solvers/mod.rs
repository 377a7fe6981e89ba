mod frontier;
mod node;

use std::collections::HashSet;

use thiserror::Error;

pub use frontier::{Discipline, Frontier};
pub use node::{Node, NodeId, SearchTree};

use crate::maze::{Action, Coord, Grid, Maze, neighbors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no solution: the goal is not reachable from the start")]
    NoSolution,
    #[error("empty frontier")]
    EmptyFrontier,
    #[error("coordinate {0:?} lies outside the maze")]
    OutOfBounds(Coord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl Solver {
    pub fn discipline(self) -> Discipline {
        match self {
            Solver::Dfs => Discipline::Stack,
            Solver::Bfs => Discipline::Queue,
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// A route from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    actions: Vec<Action>,
    cells: Vec<Coord>,
    explored: usize,
}

impl Solution {
    /// Actions to take from the start, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Cells visited after each action, ending at the goal. The start is not included.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of steps in the route.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of nodes taken off the frontier before the goal was reached.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Iterates over `(action, cell)` steps in order.
    pub fn steps(&self) -> impl Iterator<Item = (Action, Coord)> + '_ {
        self.actions.iter().copied().zip(self.cells.iter().copied())
    }
}

/// Solves the maze from its own start to its own goal.
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<Solution, SolveError> {
    solve(maze.grid(), maze.start(), maze.goal(), solver)
}

/// Searches `grid` from `start` to `goal`, expanding nodes in the order given by the
/// solver's frontier discipline. Every call starts from a fresh frontier, explored set
/// and search tree, so repeated calls on the same grid give the same result.
///
/// The path found is not guaranteed to be the shortest one unless the grid is a perfect
/// maze, where only one path exists.
pub fn solve(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    solver: Solver,
) -> Result<Solution, SolveError> {
    for coord in [start, goal] {
        if !grid.is_in_bounds(coord) {
            return Err(SolveError::OutOfBounds(coord));
        }
    }

    let cell_count = grid.width() as usize * grid.height() as usize;
    let mut tree = SearchTree::with_capacity(cell_count);
    let mut frontier = Frontier::new(solver.discipline());
    let mut explored: HashSet<Coord> = HashSet::with_capacity(cell_count);
    let mut num_explored = 0usize;

    let root = tree.root(start);
    frontier.add(&tree, root);

    loop {
        if frontier.is_empty() {
            tracing::debug!(
                "[solve] {} exhausted the frontier after {} expansions",
                solver,
                num_explored
            );
            return Err(SolveError::NoSolution);
        }

        let id = frontier.remove()?;
        num_explored += 1;
        let state = tree.get(id).state;

        if state == goal {
            let (actions, cells) = tree.path_to(id);
            tracing::debug!(
                "[solve] {} reached the goal in {} steps after {} expansions",
                solver,
                actions.len(),
                num_explored
            );
            return Ok(Solution {
                actions,
                cells,
                explored: num_explored,
            });
        }

        explored.insert(state);

        for (action, next) in neighbors(grid, state) {
            if !frontier.contains_state(next) && !explored.contains(&next) {
                let child = tree.child(id, action, next);
                frontier.add(&tree, child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    /// Replays the solution's actions from `start` and checks they produce its cells.
    fn assert_replays(solution: &Solution, start: Coord, goal: Coord) {
        let mut current = start;
        for (action, cell) in solution.steps() {
            current = action.apply(current).unwrap();
            assert_eq!(current, cell);
        }
        assert_eq!(current, goal);
    }

    // Two routes from S to G: straight right along the top, or down and around.
    const LOOPED: &str = "\
#######
#S   G#
# ### #
#     #
#######
";

    #[test]
    fn test_solve_corridor() {
        let maze = Maze::parse("#####\n#S G#\n#####\n").unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let solution = solve_maze(&maze, solver).unwrap();
            assert_eq!(solution.actions(), &[Action::Right, Action::Right]);
            assert_eq!(solution.cells(), &[(1, 2), (1, 3)]);
        }
    }

    #[test]
    fn test_bfs_finds_shortest_route() {
        let maze = Maze::parse(LOOPED).unwrap();
        let solution = solve_maze(&maze, Solver::Bfs).unwrap();
        assert_eq!(solution.len(), 4);
        assert_eq!(solution.actions(), &[Action::Right; 4]);
        assert_replays(&solution, maze.start(), maze.goal());
    }

    #[test]
    fn test_dfs_follows_last_discovered_neighbor() {
        // From S, Down is discovered before Right, so the stack expands Right first
        let maze = Maze::parse(LOOPED).unwrap();
        let solution = solve_maze(&maze, Solver::Dfs).unwrap();
        assert_eq!(solution.actions(), &[Action::Right; 4]);

        // With the top corridor blocked the only route is the long way round
        let blocked = LOOPED.replacen("#S   G#", "#S # G#", 1);
        let maze = Maze::parse(&blocked).unwrap();
        let dfs = solve_maze(&maze, Solver::Dfs).unwrap();
        let bfs = solve_maze(&maze, Solver::Bfs).unwrap();
        assert_eq!(dfs.cells(), bfs.cells());
        assert_eq!(dfs.len(), 8);
        assert_replays(&dfs, maze.start(), maze.goal());
    }

    #[test]
    fn test_no_solution() {
        let maze = Maze::parse("#####\n#S#G#\n#####\n").unwrap();
        assert_eq!(
            solve_maze(&maze, Solver::Dfs),
            Err(SolveError::NoSolution)
        );
        assert_eq!(
            solve_maze(&maze, Solver::Bfs),
            Err(SolveError::NoSolution)
        );
    }

    #[test]
    fn test_start_equals_goal() {
        let mut grid = Grid::new(3, 3, Cell::Wall);
        grid.set((1, 1), Cell::Start);
        let solution = solve(&grid, (1, 1), (1, 1), Solver::Bfs).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.explored(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(3, 3, Cell::Passage);
        assert_eq!(
            solve(&grid, (1, 1), (3, 1), Solver::Dfs),
            Err(SolveError::OutOfBounds((3, 1)))
        );
    }

    #[test]
    fn test_solve_is_repeatable() {
        let maze = Maze::parse(LOOPED).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let first = solve_maze(&maze, solver).unwrap();
            let second = solve_maze(&maze, solver).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_solve_ignores_solution_markers() {
        let mut maze = Maze::parse(LOOPED).unwrap();
        let solution = solve_maze(&maze, Solver::Bfs).unwrap();
        maze.mark_solution(&solution);
        assert_eq!(solve_maze(&maze, Solver::Bfs).unwrap(), solution);
    }
}
