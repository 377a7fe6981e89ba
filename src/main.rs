use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::EnvFilter;

use mazepath::{
    Maze, Solution,
    generators::{DEFAULT_HEIGHT, DEFAULT_WIDTH, generate_maze_seeded},
    maze::DEFAULT_MAZE_FILE,
    solvers::{Solver, solve_maze},
};

const LOG_FILE_NAME: &str = "mazepath.log";

#[derive(ValueEnum, Default, Debug, Clone, Copy, PartialEq, Eq)]
enum SolverArg {
    #[default]
    Dfs,
    Bfs,
}

impl From<SolverArg> for Solver {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Dfs => Solver::Dfs,
            SolverArg::Bfs => Solver::Bfs,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazepath")]
struct Args {
    #[clap(long, global = true, help = "Write logs to <DIR>/mazepath.log instead of stderr")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and write it to a file
    Generate {
        #[clap(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: u16,
        #[clap(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,
        #[clap(short, long, help = "Seed for reproducible mazes")]
        seed: Option<u64>,
        #[clap(short, long, default_value = DEFAULT_MAZE_FILE)]
        output: PathBuf,
    },
    /// Load a maze file, solve it and print the route
    Solve {
        #[clap(default_value = DEFAULT_MAZE_FILE)]
        file: PathBuf,
        #[clap(long, value_enum, default_value_t = Default::default())]
        solver: SolverArg,
        #[clap(long, requires = "height", help = "Reject mazes that are not this wide")]
        width: Option<u16>,
        #[clap(long, requires = "width", help = "Reject mazes that are not this tall")]
        height: Option<u16>,
        #[clap(short, long, action, help = "Print the list of actions")]
        actions: bool,
    },
    /// Generate a maze in memory, solve it and print the result
    Run {
        #[clap(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
        width: u16,
        #[clap(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
        height: u16,
        #[clap(short, long, help = "Seed for reproducible mazes")]
        seed: Option<u64>,
        #[clap(long, value_enum, default_value_t = Default::default())]
        solver: SolverArg,
        #[clap(short, long, action, help = "Print the list of actions")]
        actions: bool,
    },
}

/// Opens `<dir>/mazepath.log` for appending, creating `dir` if needed.
fn log_file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))
}

/// Sets up the global subscriber. The returned guard flushes the log file on drop.
fn init_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));

    match log_dir {
        Some(dir) => {
            let appender = log_file_appender(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn print_solution(maze: &mut Maze, solution: &Solution, solver: Solver, show_actions: bool) {
    maze.mark_solution(solution);
    print!("{}", maze);
    println!(
        "{}: {} steps, {} cells explored",
        solver,
        solution.len(),
        solution.explored()
    );
    if show_actions {
        let actions = solution
            .actions()
            .iter()
            .map(|action| action.to_string())
            .collect::<Vec<_>>();
        println!("{}", actions.join(" "));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging(args.log_dir.as_deref())?;

    match args.command {
        Command::Generate {
            width,
            height,
            seed,
            output,
        } => {
            let maze = generate_maze_seeded(width, height, seed)?;
            maze.save(&output)
                .with_context(|| format!("failed to write maze to {}", output.display()))?;
            println!("Wrote {}x{} maze to {}", width, height, output.display());
        }
        Command::Solve {
            file,
            solver,
            width,
            height,
            actions,
        } => {
            let mut maze = match (width, height) {
                (Some(width), Some(height)) => Maze::load_with_dimensions(&file, width, height),
                _ => Maze::load(&file),
            }
            .with_context(|| format!("failed to load maze from {}", file.display()))?;
            let solver = Solver::from(solver);
            let solution = solve_maze(&maze, solver)?;
            print_solution(&mut maze, &solution, solver, actions);
        }
        Command::Run {
            width,
            height,
            seed,
            solver,
            actions,
        } => {
            let mut maze = generate_maze_seeded(width, height, seed)?;
            let solver = Solver::from(solver);
            let solution = solve_maze(&maze, solver)?;
            print_solution(&mut maze, &solution, solver, actions);
        }
    }

    Ok(())
}
