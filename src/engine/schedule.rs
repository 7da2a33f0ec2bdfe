//! Deferred engine steps.
//!
//! Two phase transitions wait on a presentation delay: the enemy acting
//! after the player ends a turn (and the next player turn after that), and
//! the map reappearing after a safe room. The engine holds at most one of
//! these at a time. A zero delay runs the step immediately; otherwise the
//! host waits and calls `GameRun::resume`.

use std::time::Duration;

/// A step the engine will take once its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Continuation {
    /// Resolve the enemy's intent.
    EnemyTurn,
    /// Refresh AP/block and draw a new hand.
    PlayerTurn,
    /// Present the map again after a safe room.
    RevealMap,
}

/// The continuation currently waiting, with the delay the host should honor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub continuation: Continuation,
    pub delay: Duration,
}

impl Pending {
    #[must_use]
    pub fn new(continuation: Continuation, delay: Duration) -> Self {
        Self { continuation, delay }
    }

    /// Does this step fire without waiting?
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }
}
