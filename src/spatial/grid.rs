//! Fixed-size 2D grid container with signed coordinate bounds testing
//!
//! Positions are `[row, col]` pairs of signed integers so that neighbour
//! arithmetic near the edges never wraps; any position outside the grid is
//! simply reported as not inside.

use ndarray::Array2;

/// A fixed-size 2D container mapping `[row, col]` positions to values
///
/// Unlike a raw array, lookups take signed coordinates and return `None`
/// for anything out of bounds, which keeps neighbour traversal free of
/// explicit edge special cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to the given value
    pub fn new(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), value),
        }
    }
}

impl<T> Grid<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Test whether a position lies inside the grid
    pub fn inside(&self, position: [i32; 2]) -> bool {
        position[0] >= 0
            && position[1] >= 0
            && (position[0] as usize) < self.rows()
            && (position[1] as usize) < self.cols()
    }

    /// Look up the value at a position, `None` if outside the grid
    pub fn get(&self, position: [i32; 2]) -> Option<&T> {
        if self.inside(position) {
            self.cells
                .get((position[0] as usize, position[1] as usize))
        } else {
            None
        }
    }

    /// Mutable lookup, `None` if outside the grid
    pub fn get_mut(&mut self, position: [i32; 2]) -> Option<&mut T> {
        if self.inside(position) {
            self.cells
                .get_mut((position[0] as usize, position[1] as usize))
        } else {
            None
        }
    }

    /// Store a value at a position, ignoring positions outside the grid
    pub fn set(&mut self, position: [i32; 2], value: T) {
        if let Some(cell) = self.get_mut(position) {
            *cell = value;
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [i32; 2]> + use<T> {
        let rows = self.rows() as i32;
        let cols = self.cols() as i32;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// All values in row-major order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}
