//! Turn order and game results on top of [`Board`].
//!
//! X always opens. After every accepted move the board is checked for a line
//! through the placed cell; a win or a full board ends the game until
//! [`Game::reset`] is called.
//!
//! # Example
//!
//! ```
//! use tictactoe3d::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new(3.0);
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.place(row, column).unwrap();
//! }
//! assert!(matches!(game.status(), GameStatus::Won { mark: Mark::X, .. }));
//! ```

use crate::board::{Board, Line, Mark};
use crate::error::MoveError;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// `mark` completed `line`.
    Won { mark: Mark, line: Line },
    /// The board filled up with no line.
    Draw,
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub column: usize,
    pub mark: Mark,
    /// Status right after the move.
    pub status: GameStatus,
}

/// A game of tic-tac-toe.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    moves: usize,
}

impl Game {
    /// Starts a game on a fresh board with cells `offset` units apart.
    pub fn new(offset: f32) -> Self {
        Self {
            board: Board::new(offset),
            turn: Mark::X,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that plays next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Number of marks placed since the last reset.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Places the current player's mark at `(row, column)`.
    pub fn place(&mut self, row: usize, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let cell = self
            .board
            .cell(row, column)
            .ok_or(MoveError::OutOfBounds { row, column })?;
        if !cell.is_empty() {
            return Err(MoveError::Occupied { row, column });
        }

        let mark = self.turn;
        let placed = self.board.place(row, column, mark);
        debug_assert!(placed, "cell ({row}, {column}) was checked empty");
        self.moves += 1;

        let line = self.board.winning_line(row, column, mark);
        debug_assert_eq!(line.is_some(), self.board.check_win(row, column, mark));
        match line {
            Some(line) => self.status = GameStatus::Won { mark, line },
            None if self.board.is_full() => self.status = GameStatus::Draw,
            None => {}
        }

        self.turn = mark.opponent();

        Ok(MoveOutcome {
            row,
            column,
            mark,
            status: self.status,
        })
    }

    /// Places a mark using a flat row-major cell index, as carried by picking colliders.
    pub fn place_index(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let columns = self.board.columns();
        let (row, column) = self
            .board
            .grid()
            .coords_of(index)
            .ok_or(MoveError::OutOfBounds {
                row: index / columns,
                column: index % columns,
            })?;
        self.place(row, column)
    }

    /// Clears the board and hands the first move back to X.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
        self.moves = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(3.0)
    }
}
