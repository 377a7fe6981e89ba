use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single maze cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Passage,
    Start,
    Goal,
    /// Marks a cell as part of a found solution route. Never written to maze files.
    OnSolutionPath,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether a search may step onto this cell.
    pub fn is_traversable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Character used for this cell in the maze text format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Passage | Cell::OnSolutionPath => ' ',
            Cell::Start => 'S',
            Cell::Goal => 'G',
        }
    }

    /// Parses a maze text character.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Passage),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }

    /// Coloured terminal symbol, [`Cell::CELL_WIDTH`] columns wide.
    fn styled(self) -> StyledContent<&'static str> {
        match self {
            Cell::Wall => "██".with(Color::DarkGrey),
            Cell::Passage => "  ".with(Color::Reset),
            Cell::Start => "SS".with(Color::Green),
            Cell::Goal => "GG".with(Color::Red),
            Cell::OnSolutionPath => "* ".with(Color::Yellow),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for cell in [Cell::Wall, Cell::Passage, Cell::Start, Cell::Goal] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        // The solution marker is written out as a plain passage
        assert_eq!(Cell::OnSolutionPath.symbol(), ' ');
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn test_display_width() {
        use unicode_width::UnicodeWidthStr;

        for cell in [
            Cell::Wall,
            Cell::Passage,
            Cell::Start,
            Cell::Goal,
            Cell::OnSolutionPath,
        ] {
            assert_eq!(
                cell.styled().content().width(),
                Cell::CELL_WIDTH as usize,
                "{cell:?} has the wrong width"
            );
            // Rendering goes through the same width assertion in debug builds
            assert!(cell.to_string().contains(cell.styled().content()));
        }
    }

    #[test]
    fn test_traversable() {
        assert!(!Cell::Wall.is_traversable());
        assert!(Cell::Passage.is_traversable());
        assert!(Cell::Start.is_traversable());
        assert!(Cell::Goal.is_traversable());
        assert!(Cell::OnSolutionPath.is_traversable());
    }
}
