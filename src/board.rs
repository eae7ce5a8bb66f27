//! The game board and the two sides that play on it

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::{HEIGHT, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// The player number shown to users, 1 or 2
    pub fn number(self) -> usize {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_side(&self, side: Side) -> bool {
        *self == Cell::from(side)
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::One => Cell::PlayerOne,
            Side::Two => Cell::PlayerTwo,
        }
    }
}

/// The operations a strategy may perform on a board
///
/// Moves are reversible: every `play` made during a search must be undone by
/// a matching `unplay` in LIFO order, so a single board can be shared by the
/// whole game tree without copying.
pub trait GameBoard {
    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// The occupant of a cell, row 0 being the bottom row
    fn get(&self, row: usize, col: usize) -> Cell;

    /// Whether a piece can be dropped into `col`. Out of range columns are never valid.
    fn is_valid_move(&self, col: usize) -> bool;

    fn is_full(&self) -> bool {
        self.num_empty_cells() == 0
    }

    fn num_empty_cells(&self) -> usize;

    /// Drops a piece for `side` into the lowest empty cell of `col`
    fn play(&mut self, col: usize, side: Side);

    /// Removes the top piece of `col`, which must belong to `side`
    fn unplay(&mut self, col: usize, side: Side);
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrayBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    empty_cells: usize,
}

impl ArrayBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
            empty_cells: rows * cols,
        }
    }

    /// An empty board of the standard 6x7 size
    pub fn standard() -> Self {
        Self::new(HEIGHT, WIDTH)
    }

    /// Builds a board from a string of one-indexed column digits, sides alternating from `Side::One`
    pub fn from_moves<S: AsRef<str>>(rows: usize, cols: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(rows, cols);
        let mut side = Side::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    board.play_checked(column as usize, side)?;
                    side = side.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Plays a user supplied, one-indexed column after validating it
    pub fn play_checked(&mut self, column_one_indexed: usize, side: Side) -> Result<()> {
        if column_one_indexed < 1 || column_one_indexed > self.cols {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.cols
            ));
        }
        let column = column_one_indexed - 1;
        if !self.is_valid_move(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }
        self.play(column, side);
        Ok(())
    }

    /// The number of pieces in a column
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        col + self.cols * row
    }
}

impl Default for ArrayBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameBoard for ArrayBoard {
    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.heights[col] < self.rows
    }

    fn num_empty_cells(&self) -> usize {
        self.empty_cells
    }

    fn play(&mut self, col: usize, side: Side) {
        debug_assert!(self.is_valid_move(col), "play into full column {}", col);
        let index = self.index(self.heights[col], col);
        self.cells[index] = Cell::from(side);
        self.heights[col] += 1;
        self.empty_cells -= 1;
    }

    fn unplay(&mut self, col: usize, side: Side) {
        debug_assert!(self.heights[col] > 0, "unplay from empty column {}", col);
        let index = self.index(self.heights[col] - 1, col);
        debug_assert!(
            self.cells[index].is_side(side),
            "unplay of column {} does not match side {:?}",
            col,
            side
        );
        self.cells[index] = Cell::Empty;
        self.heights[col] -= 1;
        self.empty_cells += 1;
    }
}
