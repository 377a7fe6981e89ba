use super::{Coord, cell::Cell};

/// Fixed-size, row-major storage of maze cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn is_in_bounds(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    pub fn is_boundary(&self, (row, col): Coord) -> bool {
        row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1
    }

    /// Returns the cell at `coord`, or `None` when it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord)])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.ravel_index(coord);
        self.data[idx] = cell;
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    /// Iterates over every coordinate holding `cell`, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width as usize;
        self.data
            .iter()
            .enumerate()
            .filter(move |&(_, c)| *c == cell)
            .map(move |(i, _)| ((i / width) as u16, (i % width) as u16))
    }

    fn ravel_index(&self, (row, col): Coord) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        row as usize * self.width as usize + col as usize
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
