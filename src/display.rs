use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{ArrayBoard, Cell, GameBoard};

/// Draws the board below the current cursor position, column numbers on top
pub fn draw(board: &ArrayBoard) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.num_cols()).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..board.num_rows() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits one line below the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;
    let origin_y = origin_y.saturating_sub(1);

    for row in 0..board.num_rows() {
        for col in 0..board.num_cols() {
            let (pos_x, pos_y) = (origin_x + col as u16, origin_y.saturating_sub(row as u16));

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, col) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + board.num_cols() as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
