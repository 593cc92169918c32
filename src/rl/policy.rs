//! Built-in policies for driving agent play
//!
//! These stand in for a learned policy: anything that can map a game state to
//! a [`Turn`] plugs into the agent runner.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::game::{is_collision, GameState, Turn};

/// Chooses the next relative turn from the current state
pub trait Policy {
    fn name(&self) -> &'static str;

    fn act(&mut self, state: &GameState) -> Turn;
}

/// Uniformly random turns
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn act(&mut self, _state: &GameState) -> Turn {
        Turn::ALL[self.rng.gen_range(0..Turn::ALL.len())]
    }
}

/// Heads for the food along the Manhattan metric, avoiding immediate death
///
/// Ties go to the earlier turn in [`Turn::ALL`], so straight is preferred.
/// When every move is fatal it keeps going straight.
#[derive(Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn act(&mut self, state: &GameState) -> Turn {
        let head = state.snake.head();
        let heading = state.direction();

        Turn::ALL
            .into_iter()
            .filter_map(|turn| {
                let cell = head.moved_in_direction(heading.turned(turn));
                (!is_collision(state, Some(cell))).then(|| (turn, cell.distance_to(state.food)))
            })
            .min_by_key(|&(_, distance)| distance)
            .map(|(turn, _)| turn)
            .unwrap_or(Turn::Straight)
    }
}
