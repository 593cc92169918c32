//! Headless agent play
//!
//! Runs a policy for a number of episodes on one environment, resetting
//! between episodes, and reports rolling statistics as it goes.
//!
//! # Example
//!
//! ```rust
//! use grid_snake::game::GameConfig;
//! use grid_snake::modes::{AgentConfig, AgentMode, PolicyKind};
//!
//! let mut config = AgentConfig::new(5, PolicyKind::Greedy);
//! config.game_config = GameConfig::small().with_seed(1);
//!
//! let mut mode = AgentMode::new(config)?;
//! let stats = mode.run();
//! assert_eq!(stats.total_episodes(), 5);
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::{GameConfig, Termination};
use crate::metrics::EpisodeStats;
use crate::rl::{GreedyPolicy, Policy, RandomPolicy, SnakeEnvironment};

/// Built-in policies selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum PolicyKind {
    /// Uniformly random turns
    Random,
    /// Move toward the food, avoiding immediate collisions
    Greedy,
}

impl PolicyKind {
    pub fn build(&self, seed: u64) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        }
    }
}

/// Configuration for agent mode
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Number of episodes to run
    pub num_episodes: usize,

    /// Log progress every N episodes
    pub log_frequency: usize,

    /// Rolling window for episode statistics
    pub stats_window: usize,

    pub policy: PolicyKind,

    /// Game configuration (grid size, rewards, seed)
    pub game_config: GameConfig,
}

impl AgentConfig {
    pub fn new(num_episodes: usize, policy: PolicyKind) -> Self {
        Self {
            num_episodes,
            log_frequency: 100,
            stats_window: 100,
            policy,
            game_config: GameConfig::default(),
        }
    }
}

/// Outcome of a single episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub reward: i32,
    pub steps: usize,
    pub score: u32,
    pub termination: Option<Termination>,
}

pub struct AgentMode {
    env: SnakeEnvironment,
    policy: Box<dyn Policy>,
    stats: EpisodeStats,
    config: AgentConfig,
}

impl AgentMode {
    pub fn new(config: AgentConfig) -> Result<Self> {
        let env = SnakeEnvironment::new(config.game_config.clone())
            .context("Invalid game configuration")?;
        let policy_seed = config
            .game_config
            .seed
            .map_or_else(rand::random, |seed| seed.wrapping_add(1));

        Ok(Self {
            env,
            policy: config.policy.build(policy_seed),
            stats: EpisodeStats::new(config.stats_window),
            config,
        })
    }

    /// Run all episodes and return the accumulated statistics
    pub fn run(&mut self) -> &EpisodeStats {
        let game = &self.config.game_config;
        info!(
            episodes = self.config.num_episodes,
            policy = self.policy.name(),
            width = game.grid_width,
            height = game.grid_height,
            "starting agent run"
        );

        for episode in 0..self.config.num_episodes {
            let summary = self.run_episode();
            self.stats.record_episode(
                summary.reward,
                summary.steps,
                summary.score,
                summary.termination,
            );

            if self.config.log_frequency > 0 && (episode + 1) % self.config.log_frequency == 0 {
                info!(
                    "[Episode {}/{}] {}",
                    episode + 1,
                    self.config.num_episodes,
                    self.stats.format_summary()
                );
            }
        }

        info!("agent run complete: {}", self.stats.format_summary());
        &self.stats
    }

    /// Play one episode from a fresh reset until it terminates
    pub fn run_episode(&mut self) -> EpisodeSummary {
        self.env.reset();
        let mut reward = 0;
        let mut steps = 0;

        loop {
            let turn = self.policy.act(self.env.state());
            let transition = self.env.step(turn);
            reward += transition.reward;
            steps += 1;

            if transition.done {
                return EpisodeSummary {
                    reward,
                    steps,
                    score: transition.score,
                    termination: self.env.state().termination,
                };
            }
        }
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }
}
