//! Core simulation for grid snake
//!
//! Pure game logic with no I/O or rendering. The same engine drives keyboard
//! play and agent play; only the kind of [`Steer`] input differs.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod food;
pub mod movement;
pub mod state;

// Re-export commonly used types
pub use action::{ActionError, Direction, Steer, Turn};
pub use collision::{check_collision, is_collision, CollisionType};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::place_food;
pub use movement::resolve;
pub use state::{GameState, GameView, Position, Snake, Termination};
