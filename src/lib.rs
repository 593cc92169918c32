//! Grid Snake - a snake simulation core with keyboard and agent control
//!
//! This library provides:
//! - Core game logic (game module)
//! - Input adapters for keyboard and agent steering (input module)
//! - A game session bound to one input source (session module)
//! - Agent environment, observations and policies (rl module)
//! - TUI rendering (render module)
//! - Session and episode metrics (metrics module)
//! - Human and agent execution modes (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
pub mod session;
