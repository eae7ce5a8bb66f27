//! Static scoring of positions by counting completed alignments

use crate::board::{GameBoard, Side};

/// The number of pieces in a row that make a connection
pub const CONNECT_LENGTH: usize = 4;

// (row step, column step) for horizontal, vertical and both diagonal directions
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Counts every window of `CONNECT_LENGTH` cells, in any of the four
/// directions, that is entirely occupied by `side`.
///
/// Overlapping windows are each counted, so a run of five yields two.
pub fn count_alignments<B: GameBoard + ?Sized>(board: &B, side: Side) -> usize {
    let rows = board.num_rows() as isize;
    let cols = board.num_cols() as isize;
    let span = CONNECT_LENGTH as isize - 1;
    let mut count = 0;

    for &(dr, dc) in DIRECTIONS.iter() {
        for row in 0..rows {
            for col in 0..cols {
                // skip windows that would run off the board
                let (end_row, end_col) = (row + dr * span, col + dc * span);
                if end_row < 0 || end_row >= rows || end_col >= cols {
                    continue;
                }
                if (0..=span).all(|i| {
                    board
                        .get((row + dr * i) as usize, (col + dc * i) as usize)
                        .is_side(side)
                }) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// The alignment count of `side` minus that of its opponent
pub fn differential<B: GameBoard + ?Sized>(board: &B, side: Side) -> i32 {
    count_alignments(board, side) as i32 - count_alignments(board, side.other()) as i32
}

/// Whether `side` has at least one connection on the board
pub fn has_connection<B: GameBoard + ?Sized>(board: &B, side: Side) -> bool {
    count_alignments(board, side) > 0
}
