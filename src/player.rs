//! The interface every strategy exposes to the game orchestrator

use serde::{Deserialize, Serialize};

use std::time::Duration;

use crate::{
    arbiter::Arbiter,
    board::{GameBoard, Side},
    config::EngineConfig,
    error::PlayerError,
    greedy::GreedyPlayer,
    human::HumanPlayer,
    minimax::MinimaxPlayer,
};

pub trait Player {
    /// The display name of this strategy
    fn name(&self) -> &str;

    /// Called once before the game starts
    fn init(&mut self, side: Side, time_per_move: Duration, rows: usize, cols: usize);

    /// Chooses a column for this turn and reports it through `arbiter`.
    ///
    /// The board may be mutated while deciding but must be returned to its
    /// original state. `opponent_move` is `None` on the first move of the game.
    fn calc_move(
        &mut self,
        board: &mut dyn GameBoard,
        opponent_move: Option<usize>,
        arbiter: &mut dyn Arbiter,
    ) -> Result<(), PlayerError>;

    /// Whether the orchestrator enforces the move time limit on this player
    fn is_time_limited(&self) -> bool {
        true
    }
}

/// The available player implementations
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Greedy,
    Minimax,
}

impl PlayerKind {
    pub fn build(self, config: &EngineConfig) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio()),
            PlayerKind::Greedy => Box::new(GreedyPlayer::new()),
            PlayerKind::Minimax => {
                let mut player = MinimaxPlayer::new();
                if let Some(depth) = config.max_depth {
                    player = player.with_max_depth(depth);
                }
                Box::new(player)
            }
        }
    }

    pub fn is_ai(self) -> bool {
        self != PlayerKind::Human
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerKind::Human => "Human",
            PlayerKind::Greedy => "Greedy",
            PlayerKind::Minimax => "Minimax",
        };
        f.write_str(name)
    }
}
