//! Board module - manages the block-packing grid
//!
//! The grid is a fixed rows x cols matrix where each cell is empty or filled with a color.
//! Uses flat row-major storage; dimensions never change after construction.
//! Coordinates: (row, col) where row grows downwards and col grows to the right.
//!
//! Unlike a falling-block board, cleared lines are simply emptied: nothing shifts.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::shapes::Shape;
use crate::types::{Cell, Color, MAX_GRID_DIM};

/// Row and column indices cleared by one [`Grid::clear_full_lines`] pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinesCleared {
    pub rows: ArrayVec<u8, { MAX_GRID_DIM as usize }>,
    pub cols: ArrayVec<u8, { MAX_GRID_DIM as usize }>,
}

impl LinesCleared {
    /// Rows plus columns cleared
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Block-packing grid with flat cell storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Dimensions are clamped to `1..=MAX_GRID_DIM`.
    pub fn new(rows: u8, cols: u8) -> Self {
        let rows = rows.clamp(1, MAX_GRID_DIM);
        let cols = cols.clamp(1, MAX_GRID_DIM);
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i8 || col >= self.cols as i8 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_free(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= self.rows {
            return false;
        }
        let width = self.cols as usize;
        let start = row as usize * width;
        self.cells[start..start + width].iter().all(Option::is_some)
    }

    pub fn is_col_full(&self, col: u8) -> bool {
        if col >= self.cols {
            return false;
        }
        self.cells
            .iter()
            .skip(col as usize)
            .step_by(self.cols as usize)
            .all(Option::is_some)
    }

    fn clear_row(&mut self, row: u8) {
        let width = self.cols as usize;
        let start = row as usize * width;
        for cell in &mut self.cells[start..start + width] {
            *cell = None;
        }
    }

    fn clear_col(&mut self, col: u8) {
        let width = self.cols as usize;
        for cell in self.cells.iter_mut().skip(col as usize).step_by(width) {
            *cell = None;
        }
    }

    /// Whether every cell of `shape`, anchored at (row, col), is in bounds and empty.
    pub fn can_place(&self, shape: &Shape, row: i8, col: i8) -> bool {
        shape.offsets().iter().all(|&(dr, dc)| {
            match (row.checked_add(dr), col.checked_add(dc)) {
                (Some(r), Some(c)) => self.is_free(r, c),
                _ => false,
            }
        })
    }

    /// Write the shape's color into every covered cell.
    ///
    /// The caller must have checked [`Grid::can_place`]; out-of-bounds cells are skipped,
    /// occupied ones overwritten.
    pub fn place(&mut self, shape: &Shape, row: i8, col: i8) {
        let color = shape.color();
        for &(dr, dc) in shape.offsets() {
            self.set(row.wrapping_add(dr), col.wrapping_add(dc), Some(color));
        }
    }

    /// Clear every full row, then every full column of the updated grid.
    ///
    /// Rows are committed before columns are scanned: a column that crosses a cleared
    /// row is no longer full and stays put.
    pub fn clear_full_lines(&mut self) -> LinesCleared {
        let mut cleared = LinesCleared::default();

        for row in 0..self.rows {
            if self.is_row_full(row) {
                cleared.rows.push(row);
            }
        }
        for &row in &cleared.rows {
            self.clear_row(row);
        }

        for col in 0..self.cols {
            if self.is_col_full(col) {
                cleared.cols.push(col);
            }
        }
        for &col in &cleared.cols {
            self.clear_col(col);
        }

        cleared
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Fill an entire row with `color`
    pub fn fill_row(&mut self, row: u8, color: Color) {
        if row >= self.rows {
            return;
        }
        for col in 0..self.cols {
            self.set(row as i8, col as i8, Some(color));
        }
    }

    /// Build a grid from text rows, `#` for filled and `.` for empty (testing aid)
    #[cfg(test)]
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut grid = Grid::new(rows.len() as u8, rows[0].len() as u8);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.set(r as i8, c as i8, Some(Color::Blue));
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRID_ROWS, crate::types::DEFAULT_GRID_COLS)
    }
}
