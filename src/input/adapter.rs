//! Sources of the intended direction for each tick
//!
//! The step orchestrator does not care where steering comes from. Keyboard
//! play queues absolute headings, agent play queues relative turns, and both
//! hand the engine a [`Steer`] once per tick.

use crate::game::{Direction, Steer, Turn};

/// Produces the steering input for the next tick
pub trait InputAdapter {
    /// Consume the pending input, if any, for a snake heading `current`
    fn intended(&mut self, current: Direction) -> Steer;

    /// Drop pending input, e.g. when a new episode starts
    fn clear(&mut self);
}

/// Keyboard play: the latest unprocessed key press wins
#[derive(Debug, Default, Clone)]
pub struct KeyboardAdapter {
    pending: Option<Direction>,
}

impl KeyboardAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directional key press, replacing any earlier one this tick
    pub fn press(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}

impl InputAdapter for KeyboardAdapter {
    fn intended(&mut self, current: Direction) -> Steer {
        Steer::Absolute(self.pending.take().unwrap_or(current))
    }

    fn clear(&mut self) {
        self.pending = None;
    }
}

/// Agent play: one relative turn per step, straight when none was set
#[derive(Debug, Default, Clone)]
pub struct ActionAdapter {
    next: Option<Turn>,
}

impl ActionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, turn: Turn) {
        self.next = Some(turn);
    }
}

impl InputAdapter for ActionAdapter {
    fn intended(&mut self, _current: Direction) -> Steer {
        Steer::Relative(self.next.take().unwrap_or(Turn::Straight))
    }

    fn clear(&mut self) {
        self.next = None;
    }
}
