//! A one-ply strategy that only looks at its own alignments

use std::time::Duration;

use crate::{
    arbiter::Arbiter,
    board::{GameBoard, Side},
    error::PlayerError,
    evaluation::count_alignments,
    player::Player,
};

/// Plays the move that immediately completes the most alignments for itself.
///
/// Ties go to the lowest column. The opponent is ignored entirely.
pub struct GreedyPlayer {
    side: Side,
}

impl GreedyPlayer {
    pub fn new() -> Self {
        Self { side: Side::One }
    }

    /// Finds the best column without reporting it
    pub fn best_column<B: GameBoard + ?Sized>(&self, board: &mut B) -> Result<usize, PlayerError> {
        if board.is_full() {
            return Err(PlayerError::BoardFull);
        }

        let mut best: Option<(usize, usize)> = None;
        for column in 0..board.num_cols() {
            if board.is_valid_move(column) {
                board.play(column, self.side);
                let score = count_alignments(&*board, self.side);
                board.unplay(column, self.side);

                if best.map_or(true, |(best_score, _)| score > best_score) {
                    best = Some((score, column));
                }
            }
        }
        best.map(|(_, column)| column).ok_or(PlayerError::NoLegalMove)
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn init(&mut self, side: Side, _time_per_move: Duration, _rows: usize, _cols: usize) {
        self.side = side;
    }

    fn calc_move(
        &mut self,
        board: &mut dyn GameBoard,
        _opponent_move: Option<usize>,
        arbiter: &mut dyn Arbiter,
    ) -> Result<(), PlayerError> {
        let column = self.best_column(board)?;
        arbiter.set_move(column);
        Ok(())
    }
}
