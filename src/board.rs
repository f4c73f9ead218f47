//! The 3×3 board: cell marks, world-space layout, and win checks.
//!
//! Cells are laid out on the `z = 0` plane facing a camera on the +Z axis.
//! Row 0 is the top row and column 0 the left column, so with a spacing of
//! `offset` the top-left cell sits at `(-offset, offset, 0)` and the center
//! cell at the origin.

use derive_more::Display;
use glam::Vec3;

use crate::grid::Grid;

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// Coordinates of three cells forming a completed line.
pub type Line = [(usize, usize); BOARD_SIZE];

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Mark {
    /// Always moves first.
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cell {
    /// `None` while the square is free.
    pub mark: Option<Mark>,
    /// World-space center of the square.
    pub position: Vec3,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    /// Removes the mark, keeping the position.
    pub fn clear(&mut self) {
        self.mark = None;
    }
}

/// A 3×3 grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Grid<Cell, BOARD_SIZE, BOARD_SIZE>,
}

impl Board {
    /// Creates an empty board with cells spaced `offset` units apart.
    pub fn new(offset: f32) -> Self {
        let mut board = Self {
            cells: Grid::default(),
        };
        board.init(offset);
        board
    }

    /// Lays the cells out around the origin, `offset` units apart.
    pub fn init(&mut self, offset: f32) {
        for (row, column, cell) in self.cells.iter_mut() {
            cell.position = Vec3::new(
                -offset + column as f32 * offset,
                offset - row as f32 * offset,
                0.0,
            );
        }
    }

    /// Clears every mark. Positions are kept.
    pub fn reset(&mut self) {
        for (_, _, cell) in self.cells.iter_mut() {
            cell.clear();
        }
    }

    pub fn grid(&self) -> &Grid<Cell, BOARD_SIZE, BOARD_SIZE> {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row, column)
    }

    /// The mark at `(row, column)`, if any.
    pub fn mark_at(&self, row: usize, column: usize) -> Option<Mark> {
        self.cell(row, column).and_then(|cell| cell.mark)
    }

    /// Writes `mark` into an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the coordinates are
    /// out of range or the cell is already taken.
    pub fn place(&mut self, row: usize, column: usize, mark: Mark) -> bool {
        match self.cells.get_mut(row, column) {
            Some(cell) if cell.is_empty() => {
                cell.mark = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|(_, _, cell)| !cell.is_empty())
    }

    /// Checks whether the mark just placed at `(row, column)` completed a line.
    pub fn check_win(&self, row: usize, column: usize, mark: Mark) -> bool {
        self.check_row(row, mark) || self.check_column(column, mark) || self.check_diagonals(mark)
    }

    /// Like [`check_win`](Self::check_win), but returns the completed line.
    ///
    /// Rows are reported before columns, columns before diagonals.
    pub fn winning_line(&self, row: usize, column: usize, mark: Mark) -> Option<Line> {
        let row_line: Line = std::array::from_fn(|c| (row, c));
        let column_line: Line = std::array::from_fn(|r| (r, column));
        let main_diagonal: Line = std::array::from_fn(|i| (i, i));
        let anti_diagonal: Line = std::array::from_fn(|i| (i, BOARD_SIZE - 1 - i));

        [row_line, column_line, main_diagonal, anti_diagonal]
            .into_iter()
            .find(|line| self.line_is(line, mark))
    }

    fn check_row(&self, row: usize, mark: Mark) -> bool {
        (0..self.columns()).all(|column| self.mark_at(row, column) == Some(mark))
    }

    fn check_column(&self, column: usize, mark: Mark) -> bool {
        (0..self.rows()).all(|row| self.mark_at(row, column) == Some(mark))
    }

    fn check_diagonals(&self, mark: Mark) -> bool {
        let main = (0..BOARD_SIZE).all(|i| self.mark_at(i, i) == Some(mark));
        let anti = (0..BOARD_SIZE).all(|i| self.mark_at(i, BOARD_SIZE - 1 - i) == Some(mark));
        main || anti
    }

    fn line_is(&self, line: &Line, mark: Mark) -> bool {
        line.iter()
            .all(|&(row, column)| self.mark_at(row, column) == Some(mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(3.0);
        for &(row, column, mark) in marks {
            assert!(board.place(row, column, mark));
        }
        board
    }

    #[test]
    fn layout_matches_screen_orientation() {
        let board = Board::new(3.0);
        assert_eq!(board.cell(0, 0).unwrap().position, Vec3::new(-3.0, 3.0, 0.0));
        assert_eq!(board.cell(0, 2).unwrap().position, Vec3::new(3.0, 3.0, 0.0));
        assert_eq!(board.cell(1, 1).unwrap().position, Vec3::ZERO);
        assert_eq!(board.cell(2, 0).unwrap().position, Vec3::new(-3.0, -3.0, 0.0));
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::default();
        assert!(board.grid().iter().all(|(_, _, cell)| cell.is_empty()));
        assert!(!board.is_full());
    }

    #[test]
    fn place_rejects_occupied_and_out_of_range() {
        let mut board = Board::default();
        assert!(board.place(1, 1, Mark::X));
        assert!(!board.place(1, 1, Mark::O));
        assert_eq!(board.mark_at(1, 1), Some(Mark::X));
        assert!(!board.place(3, 0, Mark::O));
    }

    #[test]
    fn reset_keeps_positions() {
        let mut board = board_with(&[(0, 0, Mark::X), (2, 2, Mark::O)]);
        let before: Vec<_> = board.grid().iter().map(|(_, _, c)| c.position).collect();
        board.reset();
        let after: Vec<_> = board.grid().iter().map(|(_, _, c)| c.position).collect();
        assert_eq!(before, after);
        assert!(board.grid().iter().all(|(_, _, cell)| cell.is_empty()));
    }

    #[test]
    fn detects_every_row() {
        for row in 0..3 {
            let board = board_with(&[(row, 0, Mark::X), (row, 1, Mark::X), (row, 2, Mark::X)]);
            assert!(board.check_win(row, 1, Mark::X));
            assert!(!board.check_win(row, 1, Mark::O));
        }
    }

    #[test]
    fn detects_every_column() {
        for column in 0..3 {
            let board = board_with(&[
                (0, column, Mark::O),
                (1, column, Mark::O),
                (2, column, Mark::O),
            ]);
            assert!(board.check_win(2, column, Mark::O));
        }
    }

    #[test]
    fn detects_both_diagonals() {
        let main = board_with(&[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)]);
        assert!(main.check_win(2, 2, Mark::X));

        let anti = board_with(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        assert!(anti.check_win(2, 0, Mark::O));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert!(!board.check_win(0, 2, Mark::X));
    }

    #[test]
    fn winning_line_reports_cells() {
        let board = board_with(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        assert_eq!(
            board.winning_line(1, 1, Mark::O),
            Some([(0, 2), (1, 1), (2, 0)])
        );
        assert_eq!(board.winning_line(1, 1, Mark::X), None);
    }

    #[test]
    fn full_board_is_full() {
        let mut board = Board::default();
        for row in 0..3 {
            for column in 0..3 {
                board.place(row, column, Mark::X);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.to_string(), "X");
    }
}
