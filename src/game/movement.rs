//! Turns an intended direction into the next heading and head cell

use super::action::{Direction, Steer};
use super::state::Position;

/// Resolve a steering input against the current heading
///
/// Absolute headings that would reverse the snake are ignored. Relative turns
/// step through [`Direction::CLOCKWISE`]. The returned head is a new value one
/// cell away from `head`.
pub fn resolve(steer: Steer, current: Direction, head: Position) -> (Direction, Position) {
    let direction = match steer {
        Steer::Absolute(requested) if current.is_opposite(requested) => current,
        Steer::Absolute(requested) => requested,
        Steer::Relative(turn) => current.turned(turn),
    };

    (direction, head.moved_in_direction(direction))
}
