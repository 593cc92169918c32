use super::observation::{create_observation, Observation};
use crate::game::{ActionError, ConfigError, GameConfig, GameState, Turn};
use crate::session::AgentGame;

/// One environment transition
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub observation: Observation,
    pub reward: i32,
    pub done: bool,
    pub score: u32,
}

/// Snake environment for reinforcement learning
///
/// Wraps an agent-controlled game with the usual reset/step interface:
/// - feature observations (see [`create_observation`])
/// - discrete action space of three relative turns (straight, right, left)
/// - rewards +10 for food, -10 on death, 0 otherwise
///
/// Reset starts a new episode on the same engine, so a training loop can run
/// many episodes from one environment.
pub struct SnakeEnvironment {
    game: AgentGame,
}

impl SnakeEnvironment {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: AgentGame::with_config(config)?,
        })
    }

    /// Reset the environment and return initial observation
    pub fn reset(&mut self) -> Observation {
        self.game.reset();
        self.observation()
    }

    /// Step the environment with a relative turn
    pub fn step(&mut self, turn: Turn) -> Transition {
        let outcome = self.game.step(turn);
        Transition {
            observation: self.observation(),
            reward: outcome.reward,
            done: outcome.terminal,
            score: outcome.score,
        }
    }

    /// Step with a discrete action index
    ///
    /// - 0 → straight
    /// - 1 → turn right
    /// - 2 → turn left
    ///
    /// Other indices are rejected and the episode is left as it was.
    pub fn step_index(&mut self, action_idx: usize) -> Result<Transition, ActionError> {
        let turn = Turn::try_from(action_idx)?;
        Ok(self.step(turn))
    }

    /// Get current observation without stepping
    pub fn observation(&self) -> Observation {
        create_observation(self.game.state())
    }

    pub fn action_count(&self) -> usize {
        Turn::ALL.len()
    }

    /// Get reference to current game state (for testing/debugging)
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn game_mut(&mut self) -> &mut AgentGame {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Position, Termination};

    fn env() -> SnakeEnvironment {
        SnakeEnvironment::new(GameConfig::small().with_seed(21)).unwrap()
    }

    #[test]
    fn test_environment_creation() {
        let env = env();

        assert!(env.state().is_alive);
        assert_eq!(env.state().score, 0);
        assert_eq!(env.state().steps, 0);
        assert_eq!(env.action_count(), 3);
    }

    #[test]
    fn test_step_straight() {
        let mut env = env();
        env.game_mut().state_mut().food = Position::new(0, 0);

        let transition = env.step(Turn::Straight);

        assert_eq!(transition.reward, 0);
        assert!(!transition.done);
        assert_eq!(env.state().steps, 1);
        assert_eq!(transition.observation, env.observation());
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        let mut env = env();
        let before = env.state().clone();

        assert_eq!(env.step_index(7), Err(ActionError::OutOfRange(7)));
        assert_eq!(env.state(), &before);
        assert!(env.step_index(1).is_ok());
    }

    #[test]
    fn test_food_reward() {
        let mut env = env();
        let head = env.state().snake.head();
        env.game_mut().state_mut().food = head.moved_by(1, 0);

        let transition = env.step(Turn::Straight);

        assert_eq!(transition.reward, 10);
        assert_eq!(transition.score, 1);
    }

    #[test]
    fn test_wall_ends_episode() {
        let mut env = env();
        env.game_mut().state_mut().food = Position::new(0, 0);

        // Head starts at (5, 5) heading right on a 10x10 board
        let mut last = env.step(Turn::Straight);
        while !last.done {
            last = env.step(Turn::Straight);
        }

        assert_eq!(last.reward, -10);
        assert_eq!(env.state().termination, Some(Termination::Wall));
        assert_eq!(env.state().steps, 5);
    }

    #[test]
    fn test_multiple_episodes() {
        let mut env = env();

        for _ in 0..3 {
            env.reset();
            let mut steps = 0;
            let mut done = false;

            while !done && steps < 5000 {
                done = env.step(Turn::Right).done || env.step(Turn::Straight).done;
                steps += 1;
            }

            assert!(done);
        }
    }
}
