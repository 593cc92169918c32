use super::state::{GameState, Position};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Check a cell for collisions, defaulting to the snake's head
///
/// Runs after the new head has been inserted, so only segments `1..` count as
/// body. A look-ahead cell that is not yet part of the snake is compared
/// against the same segments.
pub fn check_collision(state: &GameState, cell: Option<Position>) -> Option<CollisionType> {
    let pos = cell.unwrap_or_else(|| state.snake.head());

    if !state.is_in_bounds(pos) {
        return Some(CollisionType::Wall);
    }

    if state.snake.collides_with_body(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

pub fn is_collision(state: &GameState, cell: Option<Position>) -> bool {
    check_collision(state, cell).is_some()
}
