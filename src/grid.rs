//! Fixed-size two-dimensional storage.
//!
//! [`Grid`] stores `R × C` values in row-major order. The flat index of a cell
//! is `row * C + column`, which is also the index carried by picking colliders,
//! so a ray hit can be turned back into board coordinates with [`Grid::coords_of`].
//!
//! # Example
//!
//! ```
//! use tictactoe3d::Grid;
//!
//! let mut grid: Grid<u8, 2, 3> = Grid::default();
//! *grid.get_mut(1, 2).unwrap() = 7;
//!
//! assert_eq!(grid.index_of(1, 2), Some(5));
//! assert_eq!(grid.get_index(5), Some(&7));
//! assert_eq!(grid.coords_of(5), Some((1, 2)));
//! ```

/// A fixed-size, row-major grid of `R` rows and `C` columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, const R: usize, const C: usize> {
    cells: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Grid<T, R, C> {
    /// Builds a grid by calling `f(row, column)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            cells: std::array::from_fn(|row| std::array::from_fn(|column| f(row, column))),
        }
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Number of columns.
    pub const fn columns(&self) -> usize {
        C
    }

    /// Total number of cells.
    pub const fn len(&self) -> usize {
        R * C
    }

    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Flat row-major index of `(row, column)`, or `None` when out of range.
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < R && column < C).then_some(row * C + column)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < R * C).then_some((index / C, index % C))
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.cells.get(row)?.get(column)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(column)
    }

    /// Looks up a cell by its flat index.
    pub fn get_index(&self, index: usize) -> Option<&T> {
        let (row, column) = self.coords_of(index)?;
        self.get(row, column)
    }

    /// Mutable lookup by flat index.
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut T> {
        let (row, column) = self.coords_of(index)?;
        self.get_mut(row, column)
    }

    /// Replaces every cell with the value produced by `f`.
    pub fn fill_with(&mut self, mut f: impl FnMut() -> T) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = f();
        }
    }

    /// Iterates `(row, column, &value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(column, cell)| (row, column, cell))
        })
    }

    /// Iterates `(row, column, &mut value)` in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        self.cells.iter_mut().enumerate().flat_map(|(row, line)| {
            line.iter_mut()
                .enumerate()
                .map(move |(column, cell)| (row, column, cell))
        })
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}
