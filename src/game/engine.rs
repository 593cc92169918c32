use super::{
    action::{Direction, Steer},
    collision::check_collision,
    config::{ConfigError, GameConfig},
    food::place_food,
    movement::resolve,
    state::{GameState, Position, Snake, Termination},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Why the episode ended, if it ended on this step
    pub termination: Option<Termination>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step (agent play)
    pub reward: i32,
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn ongoing(reward: i32, ate_food: bool) -> Self {
        Self {
            reward,
            terminated: false,
            info: StepInfo {
                ate_food,
                termination: None,
            },
        }
    }

    fn ended(reward: i32, ate_food: bool, termination: Option<Termination>) -> Self {
        Self {
            reward,
            terminated: true,
            info: StepInfo {
                ate_food,
                termination,
            },
        }
    }
}

/// The game engine that handles all game logic
///
/// Each engine owns its RNG, so independent episodes can run side by side
/// without sharing anything.
pub struct GameEngine {
    config: GameConfig,
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    ///
    /// Configurations that fail [`GameConfig::validate`] are rejected.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    ///
    /// The head starts on the center cell (integer division) heading right,
    /// with the body trailing to the left.
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = place_food(
            &mut self.rng,
            &snake,
            self.config.grid_width,
            self.config.grid_height,
        );

        let mut state = GameState::new(
            snake,
            food.unwrap_or(Position::new(0, 0)),
            self.config.grid_width,
            self.config.grid_height,
        );
        if food.is_none() {
            state.is_alive = false;
            state.termination = Some(Termination::BoardFull);
        }
        state
    }

    /// Execute one step of the game
    ///
    /// A terminated state is left untouched and reports `terminated`, with no
    /// reward and its original termination, until it is reset.
    pub fn step(&mut self, state: &mut GameState, steer: Steer) -> StepResult {
        if !state.is_alive {
            return StepResult::ended(0, false, state.termination);
        }

        let (direction, new_head) = resolve(steer, state.snake.direction, state.snake.head());
        state.snake.direction = direction;
        state.snake.push_head(new_head);
        state.steps += 1;

        // The tail is still in place here, so it counts as body
        let idle_limit = state.snake.len() * self.config.idle_factor;
        let termination = check_collision(state, None)
            .map(Termination::from)
            .or_else(|| (state.steps_since_food > idle_limit).then_some(Termination::Starvation));

        if let Some(termination) = termination {
            return self.terminate(state, termination, self.config.death_penalty, false);
        }

        if new_head == state.food {
            state.score += 1;
            state.steps_since_food = 0;

            match place_food(
                &mut self.rng,
                &state.snake,
                state.grid_width,
                state.grid_height,
            ) {
                Some(food) => state.food = food,
                None => {
                    return self.terminate(
                        state,
                        Termination::BoardFull,
                        self.config.food_reward,
                        true,
                    );
                }
            }

            trace!(score = state.score, len = state.snake.len(), "ate food");
            return StepResult::ongoing(self.config.food_reward, true);
        }

        state.steps_since_food += 1;
        state.snake.pop_tail();
        trace!(head = ?new_head, idle = state.steps_since_food, "moved");

        StepResult::ongoing(0, false)
    }

    fn terminate(
        &self,
        state: &mut GameState,
        termination: Termination,
        reward: i32,
        ate_food: bool,
    ) -> StepResult {
        state.is_alive = false;
        state.termination = Some(termination);
        debug!(
            ?termination,
            score = state.score,
            steps = state.steps,
            "episode finished"
        );

        StepResult::ended(reward, ate_food, Some(termination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Turn;

    fn relative(turn: Turn) -> Steer {
        Steer::Relative(turn)
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(1)).unwrap();
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.steps_since_food, 0);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(
            state.snake.body,
            vec![
                Position::new(16, 12),
                Position::new(15, 12),
                Position::new(14, 12)
            ]
        );
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_odd_dimensions_floor_center() {
        let mut engine = GameEngine::new(GameConfig::new(9, 7).with_seed(1)).unwrap();
        let state = engine.reset();

        assert_eq!(state.snake.head(), Position::new(4, 3));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::small().with_seed(5)).unwrap();
        let mut state = engine.reset();
        state.food = Position::new(0, 0);
        let tail_before = state.snake.tail();

        let result = engine.step(&mut state, relative(Turn::Straight));

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(result.reward, 0);
        assert_eq!(state.steps, 1);
        assert_eq!(state.steps_since_food, 1);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert!(!state.snake.contains(tail_before));
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = GameEngine::new(GameConfig::small().with_seed(5)).unwrap();
        let mut state = engine.reset();

        // Place food directly in front of snake
        let head = state.snake.head();
        state.food = head.moved_in_direction(state.snake.direction);
        state.steps_since_food = 17;
        let tail_before = state.snake.tail();
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, relative(Turn::Straight));

        assert!(result.info.ate_food);
        assert_eq!(result.reward, 10);
        assert_eq!(state.score, 1);
        assert_eq!(state.steps_since_food, 0);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert_eq!(state.snake.tail(), tail_before);
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = GameEngine::new(GameConfig::small()).unwrap();
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Position::new(5, 5),
            10,
            10,
        );

        let result = engine.step(&mut state, relative(Turn::Straight));

        assert!(result.terminated);
        assert_eq!(result.reward, -10);
        assert!(!state.is_alive);
        assert_eq!(result.info.termination, Some(Termination::Wall));
        // Tail is left in place on the terminal step
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::small()).unwrap();

        // Body: (5,5), (4,5), (3,5), (2,5)
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        let mut state = GameState::new(snake, Position::new(8, 8), 10, 10);

        // Down: (5,6), (5,5), (4,5), (3,5)
        assert!(!engine.step(&mut state, relative(Turn::Right)).terminated);
        // Left: (4,6), (5,6), (5,5), (4,5)
        assert!(!engine.step(&mut state, relative(Turn::Right)).terminated);
        // Up: (4,5) is still occupied by the tail
        let result = engine.step(&mut state, relative(Turn::Right));

        assert!(result.terminated);
        assert_eq!(result.info.termination, Some(Termination::SelfCollision));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = GameEngine::new(GameConfig::small()).unwrap();
        let mut state = engine.reset();
        state.food = Position::new(0, 0);
        let head = state.snake.head();

        let result = engine.step(&mut state, Steer::Absolute(Direction::Left));

        assert!(!result.terminated);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), head.moved_by(1, 0));
    }

    #[test]
    fn test_idle_cutoff() {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(9)).unwrap();
        let mut state = engine.reset();
        // Unreachable from the 2x2 loop below
        state.food = Position::new(0, 0);

        // Length is 4 while the new head is in place, so the limit is 400
        for step in 1..=401 {
            let result = engine.step(&mut state, relative(Turn::Right));
            assert!(!result.terminated, "terminated early at step {step}");
        }
        assert_eq!(state.steps_since_food, 401);

        let result = engine.step(&mut state, relative(Turn::Right));
        assert!(result.terminated);
        assert_eq!(result.reward, -10);
        assert_eq!(result.info.termination, Some(Termination::Starvation));
    }

    #[test]
    fn test_board_full_terminates() {
        let mut engine = GameEngine::new(GameConfig::small()).unwrap();
        let snake = Snake::from_segments(
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)],
            Direction::Left,
        );
        let mut state = GameState::new(snake, Position::new(0, 1), 2, 2);

        let result = engine.step(&mut state, Steer::Absolute(Direction::Down));

        assert!(result.terminated);
        assert!(result.info.ate_food);
        assert_eq!(result.reward, 10);
        assert_eq!(result.info.termination, Some(Termination::BoardFull));
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = GameEngine::new(GameConfig::small()).unwrap();
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Position::new(5, 5),
            10,
            10,
        );
        assert!(engine.step(&mut state, relative(Turn::Straight)).terminated);
        let before = state.clone();

        let result = engine.step(&mut state, relative(Turn::Straight));

        assert!(result.terminated);
        assert_eq!(result.reward, 0);
        assert!(!result.info.ate_food);
        assert_eq!(result.info.termination, Some(Termination::Wall));
        assert_eq!(state, before);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let empty = GameConfig {
            initial_snake_length: 0,
            ..GameConfig::small()
        };
        assert!(matches!(GameEngine::new(empty), Err(ConfigError::EmptySnake)));
        assert!(matches!(
            GameEngine::new(GameConfig::new(2, 2)),
            Err(ConfigError::GridTooSmall { .. })
        ));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let config = GameConfig::default().with_seed(1234);
        let mut a = GameEngine::new(config.clone()).unwrap();
        let mut b = GameEngine::new(config).unwrap();

        assert_eq!(a.reset().food, b.reset().food);
    }
}
