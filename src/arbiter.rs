//! Time keeping and move reporting for a single turn

use std::time::{Duration, Instant};

/// The handle a strategy uses to poll its time budget and report its decision
///
/// Polling is cooperative: nothing interrupts a strategy, so it must check
/// `is_time_up` often enough to stay within its allowance.
pub trait Arbiter {
    fn is_time_up(&self) -> bool;

    /// Reports `col` as this turn's decision, replacing any earlier report
    fn set_move(&mut self, col: usize);
}

/// An `Arbiter` backed by the system clock
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
    budget: Duration,
    reported: Option<usize>,
}

impl Clock {
    /// Starts the clock for a turn lasting `budget`
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
            reported: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The last column reported this turn, if any
    pub fn reported_move(&self) -> Option<usize> {
        self.reported
    }
}

impl Arbiter for Clock {
    fn is_time_up(&self) -> bool {
        self.elapsed() >= self.budget
    }

    fn set_move(&mut self, col: usize) {
        self.reported = Some(col);
    }
}
