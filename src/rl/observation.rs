use crate::game::{is_collision, Direction, GameState, Turn};

/// Number of features in an [`Observation`]
pub const OBSERVATION_SIZE: usize = 11;

/// Compact state encoding for agents
///
/// Layout:
/// - 0..3: danger if going straight, turning right, turning left
/// - 3..7: current heading one-hot (left, right, up, down)
/// - 7..11: food is left, right, above, below the head
pub type Observation = [f32; OBSERVATION_SIZE];

/// Build the feature vector for the current state
pub fn create_observation(state: &GameState) -> Observation {
    let head = state.snake.head();
    let heading = state.direction();
    let food = state.food;

    let danger = |turn: Turn| {
        let cell = head.moved_in_direction(heading.turned(turn));
        flag(is_collision(state, Some(cell)))
    };

    [
        danger(Turn::Straight),
        danger(Turn::Right),
        danger(Turn::Left),
        flag(heading == Direction::Left),
        flag(heading == Direction::Right),
        flag(heading == Direction::Up),
        flag(heading == Direction::Down),
        flag(food.x < head.x),
        flag(food.x > head.x),
        flag(food.y < head.y),
        flag(food.y > head.y),
    ]
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}
