use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Clockwise ordering used to resolve relative turns
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn clockwise_index(&self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    /// Direction reached by applying a relative turn to this heading
    pub fn turned(&self, turn: Turn) -> Direction {
        let idx = self.clockwise_index();
        let next = match turn {
            Turn::Straight => idx,
            Turn::Right => (idx + 1) % 4,
            Turn::Left => (idx + 3) % 4,
        };
        Self::CLOCKWISE[next]
    }
}

/// A heading change relative to the current direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Straight,
    Right,
    Left,
}

impl Turn {
    /// All turns in action-index order
    pub const ALL: [Turn; 3] = [Turn::Straight, Turn::Right, Turn::Left];

    /// Decode the one-hot action triple used by agent frontends
    ///
    /// `[1, 0, 0]` is straight, `[0, 1, 0]` a right turn and `[0, 0, 1]` a
    /// left turn. Anything else is rejected.
    pub fn from_one_hot(action: &[u8]) -> Result<Self, ActionError> {
        match action {
            [1, 0, 0] => Ok(Turn::Straight),
            [0, 1, 0] => Ok(Turn::Right),
            [0, 0, 1] => Ok(Turn::Left),
            other => Err(ActionError::NotOneHot(other.to_vec())),
        }
    }

    /// Index of this turn in [`Turn::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Turn::Straight => 0,
            Turn::Right => 1,
            Turn::Left => 2,
        }
    }
}

impl TryFrom<usize> for Turn {
    type Error = ActionError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        Turn::ALL
            .get(idx)
            .copied()
            .ok_or(ActionError::OutOfRange(idx))
    }
}

/// Intended direction fed into one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Absolute compass heading (keyboard play); reversals are ignored
    Absolute(Direction),
    /// Turn relative to the current heading (agent play)
    Relative(Turn),
}

impl From<Direction> for Steer {
    fn from(direction: Direction) -> Self {
        Steer::Absolute(direction)
    }
}

impl From<Turn> for Steer {
    fn from(turn: Turn) -> Self {
        Steer::Relative(turn)
    }
}

/// Rejected agent action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("action index {0} is out of range (expected 0..3)")]
    OutOfRange(usize),
    #[error("action {0:?} is not a one-hot triple")]
    NotOneHot(Vec<u8>),
}
