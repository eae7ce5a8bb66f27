//! Agents for playing the board game 'Connect 4' under a time limit
//!
//! Two strategies are provided: a greedy agent that looks a single move
//! ahead, and a minimax agent that searches as deep as its time allows
//! using iterative deepening. Both search a single board in place with
//! reversible moves.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{ArrayBoard, Clock, MinimaxPlayer, Player, Side};
//! use std::time::Duration;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player 1 has three in a row on the bottom, player 2 must block column 4
//! let mut board = ArrayBoard::from_moves(6, 7, "172736")?;
//! let mut clock = Clock::start(Duration::from_millis(200));
//!
//! let mut player = MinimaxPlayer::new().with_max_depth(2);
//! player.init(Side::Two, clock.budget(), 6, 7);
//! player.calc_move(&mut board, Some(2), &mut clock)?;
//!
//! assert_eq!(clock.reported_move(), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod arbiter;

pub mod board;

pub mod config;

pub mod error;

pub mod evaluation;

pub mod game;

pub mod greedy;

pub mod human;

pub mod minimax;

pub mod player;

pub mod series;

mod test;

pub use arbiter::{Arbiter, Clock};
pub use board::{ArrayBoard, Cell, GameBoard, Side};
pub use config::EngineConfig;
pub use error::{ConfigError, PlayerError};
pub use game::{ForfeitReason, Game, GameResult, TurnOutcome};
pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use player::{Player, PlayerKind};

/// The width of the standard game board in tiles
pub const WIDTH: usize = 7;

/// The height of the standard game board in tiles
pub const HEIGHT: usize = 6;

// the standard board must leave room for a connection in every direction
const_assert!(WIDTH >= evaluation::CONNECT_LENGTH && HEIGHT >= evaluation::CONNECT_LENGTH);

// strategies and boards are passed around as trait objects
assert_obj_safe!(GameBoard, Arbiter, Player);
