use crate::config::{CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

pub const GRID_WIDTH: i32 = cell_count(WINDOW_WIDTH, CELL_SIZE);
pub const GRID_HEIGHT: i32 = cell_count(WINDOW_HEIGHT, CELL_SIZE);

/// A grid position, in cells. Signed so that a head which stepped off the
/// grid can still be represented and rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Number of whole cells that fit in `extent` pixels.
pub const fn cell_count(extent: i32, cell_size: i32) -> i32 {
    extent / cell_size
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub const fn from_pixels(window_width: i32, window_height: i32, cell_size: i32) -> Self {
        Grid::new(cell_count(window_width, cell_size), cell_count(window_height, cell_size))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::from_pixels(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE)
    }
}
