//! Turn orchestration between two players

use log::{debug, warn};

use std::fmt;
use std::time::Duration;

use crate::{
    arbiter::Clock,
    board::{ArrayBoard, GameBoard, Side},
    config::EngineConfig,
    error::{ConfigError, PlayerError},
    evaluation::has_connection,
    player::Player,
};

/// Why a player lost without being outplayed
#[derive(Debug)]
pub enum ForfeitReason {
    /// The player returned an error instead of a move
    Failed(PlayerError),
    /// The board was not restored after the player's search
    BoardCorrupted,
    NoMoveReported,
    IllegalMove(usize),
}

impl fmt::Display for ForfeitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForfeitReason::Failed(err) => write!(f, "{}", err),
            ForfeitReason::BoardCorrupted => write!(f, "left the board modified"),
            ForfeitReason::NoMoveReported => write!(f, "did not report a move"),
            ForfeitReason::IllegalMove(column) => write!(f, "chose illegal column {}", column + 1),
        }
    }
}

#[derive(Debug)]
pub enum GameResult {
    Win(Side),
    Draw,
    Forfeit { loser: Side, reason: ForfeitReason },
}

impl GameResult {
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::Win(side) => Some(*side),
            GameResult::Draw => None,
            GameResult::Forfeit { loser, .. } => Some(loser.other()),
        }
    }
}

#[derive(Debug)]
pub enum TurnOutcome {
    Continue { side: Side, column: usize },
    Finished(GameResult),
}

pub struct Game {
    board: ArrayBoard,
    players: [Box<dyn Player>; 2],
    to_move: Side,
    last_move: Option<usize>,
    time_per_move: Duration,
    grace: Duration,
    /// Moves played so far as one-indexed column digits
    pub record: String,
}

impl Game {
    /// Sets up an empty board and initializes both players, player 1 moving first
    pub fn new(
        config: &EngineConfig,
        mut players: [Box<dyn Player>; 2],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let time_per_move = config.time_per_move();
        for (player, side) in players.iter_mut().zip([Side::One, Side::Two].iter()) {
            player.init(*side, time_per_move, config.rows, config.cols);
        }

        Ok(Self {
            board: ArrayBoard::new(config.rows, config.cols),
            players,
            to_move: Side::One,
            last_move: None,
            time_per_move,
            grace: config.grace(),
            record: String::new(),
        })
    }

    pub fn board(&self) -> &ArrayBoard {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        &*self.players[side.number() - 1]
    }

    /// Asks the side to move for its decision and applies it
    pub fn play_turn(&mut self) -> TurnOutcome {
        let side = self.to_move;
        if self.board.is_full() {
            return TurnOutcome::Finished(GameResult::Draw);
        }

        let snapshot = self.board.clone();
        let mut clock = Clock::start(self.time_per_move);
        let player = &mut self.players[side.number() - 1];
        let result = player.calc_move(&mut self.board, self.last_move, &mut clock);
        let elapsed = clock.elapsed();

        if let Err(err) = result {
            return self.forfeit(side, ForfeitReason::Failed(err));
        }
        if self.board != snapshot {
            self.board = snapshot;
            return self.forfeit(side, ForfeitReason::BoardCorrupted);
        }
        if player.is_time_limited() && elapsed > self.time_per_move + self.grace {
            let err = PlayerError::TimeUp {
                elapsed,
                budget: self.time_per_move,
            };
            return self.forfeit(side, ForfeitReason::Failed(err));
        }
        let column = match clock.reported_move() {
            Some(column) => column,
            None => return self.forfeit(side, ForfeitReason::NoMoveReported),
        };
        if !self.board.is_valid_move(column) {
            return self.forfeit(side, ForfeitReason::IllegalMove(column));
        }

        self.board.play(column, side);
        self.record.push_str(&(column + 1).to_string());
        self.last_move = Some(column);
        self.to_move = side.other();
        debug!(
            "player {} ({}) plays column {} after {:.3}s",
            side.number(),
            player.name(),
            column + 1,
            elapsed.as_secs_f64()
        );

        if has_connection(&self.board, side) {
            TurnOutcome::Finished(GameResult::Win(side))
        } else if self.board.is_full() {
            TurnOutcome::Finished(GameResult::Draw)
        } else {
            TurnOutcome::Continue { side, column }
        }
    }

    /// Plays turns until the game is decided
    pub fn play_to_end(&mut self) -> GameResult {
        loop {
            if let TurnOutcome::Finished(result) = self.play_turn() {
                return result;
            }
        }
    }

    fn forfeit(&self, loser: Side, reason: ForfeitReason) -> TurnOutcome {
        warn!(
            "player {} ({}) forfeits: {}",
            loser.number(),
            self.player(loser).name(),
            reason
        );
        TurnOutcome::Finished(GameResult::Forfeit { loser, reason })
    }
}
