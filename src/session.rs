//! A game bound to one input source
//!
//! [`Game`] owns the engine, the state and an [`InputAdapter`]. Keyboard play
//! uses `Game<KeyboardAdapter>` and agent play `Game<ActionAdapter>`; both
//! advance through the same engine step.
//!
//! ```rust
//! use grid_snake::game::Turn;
//! use grid_snake::session::AgentGame;
//!
//! let mut game = AgentGame::new_game(32, 24).unwrap();
//! let outcome = game.step(Turn::Straight);
//! assert!(!outcome.terminal);
//! assert_eq!(game.view().snake.len() as u32, 3 + outcome.score);
//! ```

use crate::game::{
    ActionError, ConfigError, Direction, GameConfig, GameEngine, GameState, GameView, StepResult,
    Turn,
};
use crate::input::{ActionAdapter, InputAdapter, KeyboardAdapter};

/// Outcome of one agent step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStep {
    pub terminal: bool,
    pub reward: i32,
    pub score: u32,
}

/// Outcome of one keyboard step; human play has no reward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanStep {
    pub terminal: bool,
    pub score: u32,
}

pub type AgentGame = Game<ActionAdapter>;
pub type HumanGame = Game<KeyboardAdapter>;

pub struct Game<A: InputAdapter> {
    engine: GameEngine,
    state: GameState,
    input: A,
}

impl<A: InputAdapter + Default> Game<A> {
    /// Start a game on a `width` x `height` board with default rules
    ///
    /// Boards that cannot hold the initial snake plus one food cell are
    /// rejected.
    pub fn new_game(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new(width, height))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();
        Ok(Self {
            engine,
            state,
            input: A::default(),
        })
    }
}

impl<A: InputAdapter> Game<A> {
    /// Begin a new episode, keeping the engine and input adapter
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
        self.input.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn view(&self) -> GameView<'_> {
        self.state.view()
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn is_over(&self) -> bool {
        !self.state.is_alive
    }

    pub fn input_mut(&mut self) -> &mut A {
        &mut self.input
    }

    /// Advance one tick using whatever the adapter has queued
    pub fn advance(&mut self) -> StepResult {
        let steer = self.input.intended(self.state.direction());
        self.engine.step(&mut self.state, steer)
    }

    /// Direct access for scripted scenarios, e.g. pinning the food cell
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

impl Game<ActionAdapter> {
    pub fn step(&mut self, action: Turn) -> AgentStep {
        self.input.set(action);
        let result = self.advance();
        AgentStep {
            terminal: result.terminated,
            reward: result.reward,
            score: self.state.score,
        }
    }

    /// Step with a one-hot `[straight, right, left]` action
    ///
    /// Malformed actions are rejected before the state is touched.
    pub fn step_one_hot(&mut self, action: &[u8]) -> Result<AgentStep, ActionError> {
        let turn = Turn::from_one_hot(action)?;
        Ok(self.step(turn))
    }
}

impl Game<KeyboardAdapter> {
    /// Queue a directional key press for the next tick
    pub fn press(&mut self, direction: Direction) {
        self.input.press(direction);
    }

    pub fn step(&mut self) -> HumanStep {
        let result = self.advance();
        HumanStep {
            terminal: result.terminated,
            score: self.state.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_new_game_layout() {
        let game = AgentGame::new_game(32, 24).unwrap();
        let view = game.view();

        assert_eq!((view.width, view.height), (32, 24));
        assert_eq!(
            view.snake,
            &[
                Position::new(16, 12),
                Position::new(15, 12),
                Position::new(14, 12)
            ][..]
        );
        assert_eq!(view.score, 0);
    }

    #[test]
    fn test_with_config_rejects_small_board() {
        assert!(AgentGame::with_config(GameConfig::new(2, 2)).is_err());
    }

    #[test]
    fn test_new_game_rejects_small_board() {
        assert!(matches!(
            HumanGame::new_game(3, 3),
            Err(ConfigError::GridTooSmall { .. })
        ));
        assert!(HumanGame::new_game(4, 1).is_ok());
    }

    #[test]
    fn test_agent_step_reports_reward() {
        let mut game = AgentGame::with_config(GameConfig::default().with_seed(3)).unwrap();
        game.state_mut().food = Position::new(17, 12);

        let outcome = game.step(Turn::Straight);
        assert_eq!(
            outcome,
            AgentStep {
                terminal: false,
                reward: 10,
                score: 1
            }
        );
        assert_eq!(game.state().snake.len(), 4);
    }

    #[test]
    fn test_invalid_one_hot_leaves_state_alone() {
        let mut game = AgentGame::with_config(GameConfig::default().with_seed(3)).unwrap();
        let before = game.state().clone();

        assert!(game.step_one_hot(&[1, 1, 0]).is_err());
        assert_eq!(game.state(), &before);

        let outcome = game.step_one_hot(&[0, 1, 0]).unwrap();
        assert!(!outcome.terminal);
        assert_eq!(game.state().direction(), Direction::Down);
    }

    #[test]
    fn test_human_step_uses_key_press() {
        let mut game = HumanGame::with_config(GameConfig::default().with_seed(3)).unwrap();
        game.state_mut().food = Position::new(0, 0);

        game.press(Direction::Up);
        let outcome = game.step();
        assert!(!outcome.terminal);
        assert_eq!(game.state().snake.head(), Position::new(16, 11));

        // No key: keep going up
        game.step();
        assert_eq!(game.state().snake.head(), Position::new(16, 10));

        // Reversal is ignored
        game.press(Direction::Down);
        game.step();
        assert_eq!(game.state().snake.head(), Position::new(16, 9));
    }

    #[test]
    fn test_reset_clears_pending_input() {
        let mut game = HumanGame::with_config(GameConfig::default().with_seed(3)).unwrap();
        game.press(Direction::Up);
        game.reset();

        assert_eq!(game.input_mut().pending(), None);
        assert_eq!(game.state().steps, 0);
    }
}
