use super::{Cell, GridError};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Toroidal board of `rows x cols` cells stored row-major.
/// Generations are produced as fresh grids; a grid is never advanced in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid with every cell dead
    pub fn create_empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Grid where each cell is independently alive with probability 1/8.
    /// The same seed always yields the same grid.
    pub fn create_random(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random_ratio(1, 8)))
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid from a row-major cell buffer
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != rows * cols {
            return Err(GridError::InvalidDimensions {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Parse a picture of the grid: one line per row, `#` or `O` alive, anything else dead.
    /// Blank lines are skipped and every row must have the same width.
    pub fn parse(picture: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let cells: Vec<Cell> = lines
            .iter()
            .flat_map(|line| line.chars())
            .map(|ch| Cell::from(matches!(ch, '#' | 'O')))
            .collect();

        if lines.iter().any(|line| line.chars().count() != cols) {
            return Err(GridError::InvalidDimensions {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Self::from_cells(rows, cols, cells)
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at (row, col), `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Number of live cells among the 8 wrapped neighbors of (row, col).
    ///
    /// On grids narrower than 3 in either direction several offsets land on
    /// the same cell, and on a 1x1 grid all eight land on the cell itself,
    /// so a lone live cell counts as 8 neighbors of itself.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.live_neighbors(row, col))
    }

    /// Unchecked neighbor sum; callers guarantee (row, col) is inside the grid.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = self.rows as isize;
        let cols = self.cols as isize;

        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(rows) as usize;
                let c = (col as isize + dc).rem_euclid(cols) as usize;
                self.cells[self.index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)].evolve(self.live_neighbors(row, col))
    }

    /// Next generation, computed entirely from `self`
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Same result as [`Grid::step`], rows computed on the rayon pool.
    /// Worth it once the grid has a few thousand cells.
    pub fn step_parallel(&self) -> Self {
        let mut cells = vec![Cell::Dead; self.rows * self.cols];

        if self.cols > 0 {
            cells
                .par_chunks_mut(self.cols)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, slot) in out.iter_mut().enumerate() {
                        *slot = self.next_cell(row, col);
                    }
                });
        }

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Flip a single cell in place. Out-of-range coordinates leave the grid untouched.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells as (row, col, cell), row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
