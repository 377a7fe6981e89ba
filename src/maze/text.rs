//! Plain-text maze format.
//!
//! A maze file holds `height` lines of exactly `width` characters each, one per cell:
//! `#` for a wall, a space for a passage, `S` for the start and `G` for the goal.
//! Every line is newline-terminated when written. Solution markers are written as
//! passages, so saved files only ever contain those four symbols.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use thiserror::Error;

use super::{Cell, Coord, Grid, Maze};

/// File name used when no maze path is given.
pub const DEFAULT_MAZE_FILE: &str = "maze.txt";

#[derive(Debug, Error)]
pub enum ParseMazeError {
    #[error("Maze must have exactly one start point (found {0})")]
    StartCount(usize),
    #[error("Maze must have exactly one goal (found {0})")]
    GoalCount(usize),
    #[error("Maze text contains no rows")]
    Empty,
    #[error(
        "Maze dimensions do not match expected size: expected {expected_width}x{expected_height}, found {width}x{height}"
    )]
    DimensionMismatch {
        expected_width: u16,
        expected_height: u16,
        width: usize,
        height: usize,
    },
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Maze of {width}x{height} cells exceeds the maximum of {max}x{max}", max = u16::MAX)]
    TooLarge { width: usize, height: usize },
    #[error("Invalid character {symbol:?} at row {row}, column {col}")]
    InvalidCharacter { symbol: char, row: usize, col: usize },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Maze {
    /// Parses a maze from its text form, taking the dimensions from the text itself.
    pub fn parse(text: &str) -> Result<Maze, ParseMazeError> {
        parse_text(text, None)
    }

    /// Parses a maze from its text form and checks it has exactly `width` x `height` cells.
    pub fn parse_with_dimensions(
        text: &str,
        width: u16,
        height: u16,
    ) -> Result<Maze, ParseMazeError> {
        parse_text(text, Some((width, height)))
    }

    /// Reads and parses a maze file.
    pub fn load(path: impl AsRef<Path>) -> Result<Maze, ParseMazeError> {
        load_file(path.as_ref(), None)
    }

    /// Reads and parses a maze file, checking it has exactly `width` x `height` cells.
    pub fn load_with_dimensions(
        path: impl AsRef<Path>,
        width: u16,
        height: u16,
    ) -> Result<Maze, ParseMazeError> {
        load_file(path.as_ref(), Some((width, height)))
    }

    /// Writes the maze to `path` in the text format, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = io::BufWriter::new(fs::File::create(path.as_ref())?);
        self.write_text(&mut file)?;
        file.flush()
    }

    /// Writes the text form of the maze, one newline-terminated line per row.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut line = String::with_capacity(self.width() as usize + 1);
        for row in self.grid.rows() {
            line.clear();
            line.extend(row.iter().map(|cell| cell.symbol()));
            line.push('\n');
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Returns the text form of the maze.
    pub fn to_text(&self) -> String {
        self.grid
            .rows()
            .flat_map(|row| row.iter().map(|cell| cell.symbol()).chain(['\n']))
            .collect()
    }
}

impl FromStr for Maze {
    type Err = ParseMazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

fn load_file(path: &Path, expected: Option<(u16, u16)>) -> Result<Maze, ParseMazeError> {
    let text = fs::read_to_string(path)?;
    let maze = parse_text(&text, expected)?;
    tracing::debug!(
        "[load] Loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.display()
    );
    Ok(maze)
}

fn parse_text(text: &str, expected: Option<(u16, u16)>) -> Result<Maze, ParseMazeError> {
    let start_count = text.matches('S').count();
    if start_count != 1 {
        return Err(ParseMazeError::StartCount(start_count));
    }
    let goal_count = text.matches('G').count();
    if goal_count != 1 {
        return Err(ParseMazeError::GoalCount(goal_count));
    }

    let lines = text.lines().collect::<Vec<_>>();
    let Some(first) = lines.first() else {
        return Err(ParseMazeError::Empty);
    };
    let height = lines.len();
    let width = first.chars().count();

    if let Some((expected_width, expected_height)) = expected {
        let matches = height == expected_height as usize
            && lines
                .iter()
                .all(|line| line.chars().count() == expected_width as usize);
        if !matches {
            return Err(ParseMazeError::DimensionMismatch {
                expected_width,
                expected_height,
                width,
                height,
            });
        }
    }

    if width > u16::MAX as usize || height > u16::MAX as usize {
        return Err(ParseMazeError::TooLarge { width, height });
    }

    let mut grid = Grid::new(width as u16, height as u16, Cell::Wall);
    let mut start: Option<Coord> = None;
    let mut goal: Option<Coord> = None;

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(ParseMazeError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (col, symbol) in line.chars().enumerate() {
            let cell = Cell::from_symbol(symbol)
                .ok_or(ParseMazeError::InvalidCharacter { symbol, row, col })?;
            let coord = (row as u16, col as u16);
            match cell {
                Cell::Start => start = Some(coord),
                Cell::Goal => goal = Some(coord),
                _ => {}
            }
            grid.set(coord, cell);
        }
    }

    // Both symbols were counted exactly once above, and every line has been placed.
    match (start, goal) {
        (Some(start), Some(goal)) => Ok(Maze::from_parts(grid, start, goal)),
        (None, _) => Err(ParseMazeError::StartCount(0)),
        (_, None) => Err(ParseMazeError::GoalCount(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_maze() {
        let maze = Maze::parse("###\n#S#\n#G#\n").unwrap();
        assert_eq!(maze.width(), 3);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.goal(), (2, 1));
        assert_eq!(maze[(0, 0)], Cell::Wall);
    }

    #[test]
    fn test_parse_single_corridor() {
        let maze = Maze::parse("#####\n#S G#\n#####").unwrap();
        assert_eq!((maze.width(), maze.height()), (5, 3));
        assert_eq!(maze[(1, 2)], Cell::Passage);
        assert_eq!(maze.goal(), (1, 3));
    }

    #[test]
    fn test_duplicate_start() {
        let err = Maze::parse("#####\n#S S#\n# G #\n#####\n").unwrap_err();
        assert!(matches!(err, ParseMazeError::StartCount(2)));
        assert!(
            err.to_string()
                .contains("must have exactly one start point")
        );
    }

    #[test]
    fn test_missing_goal() {
        let err = Maze::parse("###\n#S#\n###\n").unwrap_err();
        assert!(matches!(err, ParseMazeError::GoalCount(0)));
    }

    #[test]
    fn test_start_checked_before_dimensions() {
        // Ragged and without a start: the start count is reported first
        let err = Maze::parse("####\n# G#\n##\n").unwrap_err();
        assert!(matches!(err, ParseMazeError::StartCount(0)));
    }

    #[test]
    fn test_ragged_row() {
        let err = Maze::parse("#####\n#S G\n#####\n").unwrap_err();
        assert!(matches!(
            err,
            ParseMazeError::RaggedRow {
                row: 1,
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn test_expected_dimensions() {
        let text = "#####\n#S G#\n#####\n";
        assert!(Maze::parse_with_dimensions(text, 5, 3).is_ok());
        let err = Maze::parse_with_dimensions(text, 5, 5).unwrap_err();
        assert!(matches!(
            err,
            ParseMazeError::DimensionMismatch {
                expected_width: 5,
                expected_height: 5,
                width: 5,
                height: 3
            }
        ));
    }

    #[test]
    fn test_invalid_character() {
        let err = Maze::parse("#####\n#S.G#\n#####\n").unwrap_err();
        assert!(matches!(
            err,
            ParseMazeError::InvalidCharacter {
                symbol: '.',
                row: 1,
                col: 2
            }
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let maze = Maze::parse("#####\r\n#S G#\r\n#####\r\n").unwrap();
        assert_eq!((maze.width(), maze.height()), (5, 3));
    }

    #[test]
    fn test_text_is_preserved() {
        let text = "#######\n#S    #\n# ### #\n#   #G#\n#######\n";
        let maze = Maze::parse(text).unwrap();
        assert_eq!(maze.to_text(), text);

        let mut written = Vec::new();
        maze.write_text(&mut written).unwrap();
        assert_eq!(written, text.as_bytes());
    }

    #[test]
    fn test_save_and_load() {
        let text = "#####\n#S  #\n### #\n#G  #\n#####\n";
        let maze = Maze::parse(text).unwrap();
        let path = std::env::temp_dir().join(format!("mazepath-test-{}.txt", std::process::id()));
        maze.save(&path).unwrap();
        let loaded = Maze::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, maze);
    }

    #[test]
    fn test_load_with_dimensions() {
        let text = "#####\n#S  #\n### #\n#G  #\n#####\n";
        let path = std::env::temp_dir().join(format!("mazepath-dims-{}.txt", std::process::id()));
        std::fs::write(&path, text).unwrap();
        let matching = Maze::load_with_dimensions(&path, 5, 5);
        let mismatched = Maze::load_with_dimensions(&path, 7, 5);
        std::fs::remove_file(&path).ok();

        assert_eq!(matching.unwrap(), Maze::parse(text).unwrap());
        assert!(matches!(
            mismatched,
            Err(ParseMazeError::DimensionMismatch {
                expected_width: 7,
                width: 5,
                ..
            })
        ));
        assert!(matches!(
            Maze::load_with_dimensions("/nonexistent/mazepath/maze.txt", 5, 5),
            Err(ParseMazeError::Io(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Maze::load("/nonexistent/mazepath/maze.txt").unwrap_err();
        assert!(matches!(err, ParseMazeError::Io(_)));
    }
}
