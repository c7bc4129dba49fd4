//! Symbol grid a level is described by.
//!
//! Rows are stored as written and may be ragged. Every lookup outside a row
//! (negative index, past the last row, past the end of a short row) yields `None`,
//! so callers never index out of bounds.

use glam::Vec2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: Vec<Vec<char>>,
}

impl TileGrid {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.as_ref().chars().collect()).collect(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row. This is the width corner lookups use.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Longest row length.
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every row has the same length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.width();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Symbol at (row, col), or None when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Symbol at a signed position, for neighbour lookups that may step off the grid.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Symbol in the cell directly above (row, col).
    pub fn above(&self, row: usize, col: usize) -> Option<char> {
        self.get_signed(row as isize - 1, col as isize)
    }

    /// Iterate over every cell as (row, col, symbol).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &s)| (r, c, s)))
    }

    /// Convert grid coordinates to the world position of the cell's top-left corner.
    pub fn cell_to_world(row: usize, col: usize, cell_size: f32) -> Vec2 {
        Vec2::new(col as f32 * cell_size, row as f32 * cell_size)
    }

    /// World-space size covered by the grid (first-row width by height).
    pub fn world_size(&self, cell_size: f32) -> Vec2 {
        Vec2::new(
            self.width() as f32 * cell_size,
            self.height() as f32 * cell_size,
        )
    }
}
