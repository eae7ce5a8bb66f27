//! A time-bounded minimax search using iterative deepening

use log::debug;

use std::time::Duration;

use crate::{
    arbiter::Arbiter,
    board::{GameBoard, Side},
    error::PlayerError,
    evaluation::differential,
    player::Player,
};

/// A full-width minimax agent
///
/// # Notes
/// The search is repeated with an increasing depth limit until the time
/// budget runs out, the depth exceeds the number of empty cells, or the
/// optional depth cap is reached. The answer of the deepest depth that
/// completed without observing time expiry is the one reported.
///
/// # Position Scoring
/// Leaves are scored by the number of connections this player has minus the
/// number the opponent has, always from this player's point of view. Scores
/// are not weighted by depth, so an early connection is worth the same as a
/// late one.
pub struct MinimaxPlayer {
    side: Side,
    max_depth: Option<usize>,
    // set when a search node stopped early because the time ran out
    interrupted: bool,
    completed_depth: usize,

    /// The number of nodes searched during the last move (for diagnostics only)
    pub node_count: usize,
}

impl MinimaxPlayer {
    pub fn new() -> Self {
        Self {
            side: Side::One,
            max_depth: None,
            interrupted: false,
            completed_depth: 0,
            node_count: 0,
        }
    }

    /// Limits iterative deepening to at most `max_depth` plies
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The deepest depth fully searched during the last move
    pub fn completed_depth(&self) -> usize {
        self.completed_depth
    }

    fn depth_allowed(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max_depth| depth <= max_depth)
    }

    /// Performs the minimax search below a root move
    ///
    /// Returns the leaf differential backed up through `depth` plies
    fn search<B, A>(&mut self, board: &mut B, depth: usize, maximizing: bool, arbiter: &A) -> i32
    where
        B: GameBoard + ?Sized,
        A: Arbiter + ?Sized,
    {
        self.node_count += 1;

        if depth == 0 || board.is_full() {
            return differential(&*board, self.side);
        }
        if arbiter.is_time_up() {
            self.interrupted = true;
            return differential(&*board, self.side);
        }

        let mover = if maximizing { self.side } else { self.side.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in 0..board.num_cols() {
            if board.is_valid_move(column) {
                board.play(column, mover);
                let score = self.search(board, depth - 1, !maximizing, arbiter);
                board.unplay(column, mover);

                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    /// Searches every root move to `depth` plies
    ///
    /// Returns the best score and column, or `None` if no column is playable
    fn top_level_search<B, A>(&mut self, board: &mut B, depth: usize, arbiter: &A) -> Option<(i32, usize)>
    where
        B: GameBoard + ?Sized,
        A: Arbiter + ?Sized,
    {
        let mut best: Option<(i32, usize)> = None;
        for column in 0..board.num_cols() {
            if board.is_valid_move(column) {
                board.play(column, self.side);
                // the opponent replies next
                let score = self.search(board, depth - 1, false, arbiter);
                board.unplay(column, self.side);

                if best.map_or(true, |(best_score, _)| score > best_score) {
                    best = Some((score, column));
                }
            }
        }
        best
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &str {
        "Minimax"
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
        self.node_count = 0;
        self.completed_depth = 0;

        // always have an answer, even if no depth completes
        let fallback = (0..board.num_cols())
            .find(|&column| board.is_valid_move(column))
            .ok_or(PlayerError::NoLegalMove)?;
        arbiter.set_move(fallback);

        let mut max_depth = 1;
        while !arbiter.is_time_up()
            && max_depth <= board.num_empty_cells()
            && self.depth_allowed(max_depth)
        {
            self.interrupted = false;
            let result = self.top_level_search(board, max_depth, &*arbiter);

            // scores from a cut-short depth are not comparable, keep the last complete answer
            if self.interrupted {
                debug!("depth {} interrupted, keeping depth {}", max_depth, self.completed_depth);
                break;
            }
            if let Some((score, column)) = result {
                arbiter.set_move(column);
                self.completed_depth = max_depth;
                debug!(
                    "depth {}: best column {} score {} ({} nodes)",
                    max_depth,
                    column + 1,
                    score,
                    self.node_count
                );
            }
            max_depth += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arbiter::Clock, board::ArrayBoard};
    use anyhow::Result;
    use std::cell::Cell as Counter;

    /// Reports expiry once it has been polled more than `limit` times
    struct ScriptedArbiter {
        polls: Counter<usize>,
        limit: usize,
        moves: Vec<usize>,
    }

    impl ScriptedArbiter {
        fn expiring_after(limit: usize) -> Self {
            Self {
                polls: Counter::new(0),
                limit,
                moves: vec![],
            }
        }
    }

    impl Arbiter for ScriptedArbiter {
        fn is_time_up(&self) -> bool {
            self.polls.set(self.polls.get() + 1);
            self.polls.get() > self.limit
        }

        fn set_move(&mut self, col: usize) {
            self.moves.push(col);
        }
    }

    fn minimax(side: Side, max_depth: usize) -> MinimaxPlayer {
        let mut player = MinimaxPlayer::new().with_max_depth(max_depth);
        player.init(side, Duration::from_secs(60), 6, 7);
        player
    }

    // player 2 threatens the bottom row through column 4, player 1 has nothing
    fn threatened_board() -> Result<ArrayBoard> {
        ArrayBoard::from_moves(6, 7, "717263")
    }

    #[test]
    fn blocks_an_open_three() -> Result<()> {
        for &depth in [2, 3].iter() {
            let mut board = threatened_board()?;
            let before = board.clone();
            let mut arbiter = ScriptedArbiter::expiring_after(usize::MAX);

            let mut player = minimax(Side::One, depth);
            player.calc_move(&mut board, Some(2), &mut arbiter)?;

            assert_eq!(arbiter.moves.last(), Some(&3));
            assert_eq!(player.completed_depth(), depth);
            assert_eq!(board, before);
        }
        Ok(())
    }

    #[test]
    fn one_ply_does_not_see_the_threat() -> Result<()> {
        let mut board = threatened_board()?;
        let mut arbiter = ScriptedArbiter::expiring_after(usize::MAX);

        minimax(Side::One, 1).calc_move(&mut board, Some(2), &mut arbiter)?;
        assert_eq!(arbiter.moves.last(), Some(&0));
        Ok(())
    }

    #[test]
    fn takes_an_immediate_connection() -> Result<()> {
        // player 1 owns columns 1-3 on the bottom row
        let mut board = ArrayBoard::from_moves(6, 7, "172736")?;
        let mut arbiter = ScriptedArbiter::expiring_after(usize::MAX);

        minimax(Side::One, 2).calc_move(&mut board, Some(5), &mut arbiter)?;
        assert_eq!(arbiter.moves.last(), Some(&3));
        Ok(())
    }

    #[test]
    fn interrupted_depth_keeps_previous_answer() -> Result<()> {
        let mut board = threatened_board()?;
        let before = board.clone();
        // polls: depth 1 loop check, depth 2 loop check, then expiry inside depth 2
        let mut arbiter = ScriptedArbiter::expiring_after(2);

        let mut player = minimax(Side::One, 5);
        player.calc_move(&mut board, Some(2), &mut arbiter)?;

        // the fallback, then depth 1 only
        assert_eq!(arbiter.moves, vec![0, 0]);
        assert_eq!(player.completed_depth(), 1);
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn expired_before_start_reports_fallback() -> Result<()> {
        let mut board = ArrayBoard::from_moves(6, 7, "111111")?;
        let mut arbiter = ScriptedArbiter::expiring_after(0);

        let mut player = minimax(Side::One, 5);
        player.calc_move(&mut board, None, &mut arbiter)?;

        assert_eq!(arbiter.moves, vec![1]);
        assert_eq!(player.completed_depth(), 0);
        Ok(())
    }

    #[test]
    fn depth_is_bounded_by_empty_cells() -> Result<()> {
        let mut board = ArrayBoard::from_moves(2, 2, "121")?;
        let mut arbiter = ScriptedArbiter::expiring_after(usize::MAX);

        let mut player = MinimaxPlayer::new();
        player.init(Side::Two, Duration::from_secs(60), 2, 2);
        player.calc_move(&mut board, Some(0), &mut arbiter)?;

        assert_eq!(player.completed_depth(), 1);
        assert_eq!(arbiter.moves.last(), Some(&1));
        Ok(())
    }

    #[test]
    fn full_board_is_rejected() {
        let mut board = ArrayBoard::new(1, 1);
        board.play(0, Side::One);
        let mut arbiter = ScriptedArbiter::expiring_after(usize::MAX);

        match minimax(Side::Two, 3).calc_move(&mut board, Some(0), &mut arbiter) {
            Err(PlayerError::BoardFull) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(arbiter.moves.is_empty());
    }

    #[test]
    fn respects_a_real_clock() -> Result<()> {
        let mut board = ArrayBoard::standard();
        let before = board.clone();
        let mut clock = Clock::start(Duration::from_millis(50));

        let mut player = MinimaxPlayer::new();
        player.init(Side::One, clock.budget(), 6, 7);
        player.calc_move(&mut board, None, &mut clock)?;

        let column = clock.reported_move().expect("a move is always reported");
        assert!(board.is_valid_move(column));
        assert!(player.completed_depth() >= 1);
        assert_eq!(board, before);
        Ok(())
    }
}
