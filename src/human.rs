//! A player controlled from a terminal

use std::io::{stdin, stdout, BufRead, BufReader, Stdin, Stdout, Write};
use std::time::Duration;

use crate::{
    arbiter::Arbiter,
    board::{GameBoard, Side},
    error::PlayerError,
    player::Player,
};

/// Reads one-indexed columns from `input`, prompting on `output`
pub struct HumanPlayer<R, W> {
    side: Side,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(stdin()), stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            side: Side::One,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "Human"
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
        if board.is_full() {
            return Err(PlayerError::BoardFull);
        }

        loop {
            write!(self.output, "Player {} move input > ", self.side.number())?;
            self.output.flush()?;

            let mut input_str = String::new();
            if self.input.read_line(&mut input_str)? == 0 {
                return Err(PlayerError::InputClosed);
            }

            match input_str.trim().parse::<usize>() {
                Err(_) => writeln!(self.output, "Invalid number: {}", input_str.trim())?,
                Ok(column) if column < 1 || column > board.num_cols() => writeln!(
                    self.output,
                    "Invalid move, column {} out of range. Columns must be between 1 and {}",
                    column,
                    board.num_cols()
                )?,
                Ok(column) if !board.is_valid_move(column - 1) => {
                    writeln!(self.output, "Invalid move, column {} full", column)?
                }
                Ok(column) => {
                    arbiter.set_move(column - 1);
                    return Ok(());
                }
            }
        }
    }

    fn is_time_limited(&self) -> bool {
        false
    }
}
