use std::time::{Duration, Instant};

use mazepath::{
    generators::{DEFAULT_HEIGHT, DEFAULT_WIDTH, generate_maze, get_rng},
    solvers::{Solver, solve_maze},
};

const DEFAULT_ITERS: usize = 100;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERS);

    let mut rng = get_rng(Some(0));
    let mut generate_time = Duration::ZERO;
    let mut solve_time = [Duration::ZERO; 2];
    let mut explored = [0usize; 2];

    for _ in 0..num_iters {
        let now = Instant::now();
        let maze = generate_maze(DEFAULT_WIDTH, DEFAULT_HEIGHT, &mut rng)?;
        generate_time += now.elapsed();

        for (i, solver) in [Solver::Dfs, Solver::Bfs].into_iter().enumerate() {
            let now = Instant::now();
            let solution = solve_maze(&maze, solver)?;
            solve_time[i] += now.elapsed();
            explored[i] += solution.explored();
        }
    }

    let iters = num_iters.max(1) as u32;
    println!(
        "{} iterations on a {}x{} maze",
        num_iters, DEFAULT_WIDTH, DEFAULT_HEIGHT
    );
    println!("generate: {:?} avg", generate_time / iters);
    for (i, solver) in [Solver::Dfs, Solver::Bfs].into_iter().enumerate() {
        println!(
            "{}: {:?} avg, {} cells explored avg",
            solver,
            solve_time[i] / iters,
            explored[i] / num_iters.max(1)
        );
    }
    Ok(())
}
