//! Agent-facing side of the game
//!
//! Provides:
//! - 11-feature observations (danger, heading, food direction)
//! - a reset/step environment over relative turns
//! - pluggable policies for driving episodes

pub mod environment;
pub mod observation;
pub mod policy;

pub use environment::{SnakeEnvironment, Transition};
pub use observation::{create_observation, Observation, OBSERVATION_SIZE};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
