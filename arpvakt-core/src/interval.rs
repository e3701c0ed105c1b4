//! Adaptive polling cadence.
//!
//! A two-state finite-state machine evaluated once at the end of every
//! cycle: any alarm during the cycle selects the shortened attack interval
//! for the upcoming sleep, a clean cycle selects the normal interval. The
//! alarm flag is cycle-scoped, so the switch lags the alarm by exactly one
//! cycle.

use std::time::Duration;

/// Current cadence of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalState {
    Normal,
    Attack,
}

#[derive(Debug)]
pub struct IntervalController {
    normal: Duration,
    attack: Duration,
    state: IntervalState,
}

impl IntervalController {
    pub fn new(normal: Duration, attack: Duration) -> Self {
        Self {
            normal,
            attack,
            state: IntervalState::Normal,
        }
    }

    /// Applies the transition rule for a finished cycle and returns the
    /// sleep duration to use before the next one.
    pub fn on_cycle_end(&mut self, alarmed: bool) -> Duration {
        self.state = if alarmed {
            IntervalState::Attack
        } else {
            IntervalState::Normal
        };
        match self.state {
            IntervalState::Normal => self.normal,
            IntervalState::Attack => self.attack,
        }
    }

    pub fn state(&self) -> IntervalState {
        self.state
    }
}
