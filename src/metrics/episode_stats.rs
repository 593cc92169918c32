//! Episode statistics for agent runs
//!
//! Tracks episode rewards, lengths and scores over a rolling window, plus
//! lifetime totals and how episodes ended.

use std::collections::{HashMap, VecDeque};

use crate::game::Termination;

/// Episode statistics tracker with rolling averages
///
/// # Example
///
/// ```rust
/// use grid_snake::game::Termination;
/// use grid_snake::metrics::EpisodeStats;
///
/// let mut stats = EpisodeStats::new(100);
/// stats.record_episode(20, 150, 3, Some(Termination::Wall));
///
/// assert_eq!(stats.total_episodes(), 1);
/// assert_eq!(stats.best_score(), 3);
/// println!("{}", stats.format_summary());
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeStats {
    /// Episode rewards (rolling window)
    episode_rewards: VecDeque<i32>,

    /// Episode lengths in steps (rolling window)
    episode_lengths: VecDeque<usize>,

    /// Episode scores (rolling window)
    episode_scores: VecDeque<u32>,

    /// How many episodes ended each way
    terminations: HashMap<Termination, usize>,

    total_episodes: usize,
    total_steps: usize,
    best_score: u32,

    /// Window size for rolling averages
    window_size: usize,
}

impl EpisodeStats {
    pub fn new(window_size: usize) -> Self {
        Self {
            episode_rewards: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            episode_scores: VecDeque::with_capacity(window_size),
            terminations: HashMap::new(),
            total_episodes: 0,
            total_steps: 0,
            best_score: 0,
            window_size,
        }
    }

    /// Record the completion of an episode
    pub fn record_episode(
        &mut self,
        reward: i32,
        length: usize,
        score: u32,
        termination: Option<Termination>,
    ) {
        Self::push_deque(&mut self.episode_rewards, reward, self.window_size);
        Self::push_deque(&mut self.episode_lengths, length, self.window_size);
        Self::push_deque(&mut self.episode_scores, score, self.window_size);
        if let Some(termination) = termination {
            *self.terminations.entry(termination).or_insert(0) += 1;
        }
        self.total_episodes += 1;
        self.total_steps += length;
        self.best_score = self.best_score.max(score);
    }

    /// Mean episode reward over the rolling window, 0.0 when empty
    pub fn mean_episode_reward(&self) -> f32 {
        Self::mean(self.episode_rewards.iter().map(|&r| r as f32))
    }

    pub fn mean_episode_length(&self) -> f32 {
        Self::mean(self.episode_lengths.iter().map(|&l| l as f32))
    }

    pub fn mean_episode_score(&self) -> f32 {
        Self::mean(self.episode_scores.iter().map(|&s| s as f32))
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Number of episodes that ended with `termination`
    pub fn terminations(&self, termination: Termination) -> usize {
        self.terminations.get(&termination).copied().unwrap_or(0)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// One-line summary of the current statistics
    pub fn format_summary(&self) -> String {
        format!(
            "Episodes: {} | Steps: {} | Reward: {:.2} | Score: {:.2} | Best: {} | Len: {:.1} | Wall: {} | Self: {} | Starved: {} | Full: {}",
            self.total_episodes,
            self.total_steps,
            self.mean_episode_reward(),
            self.mean_episode_score(),
            self.best_score,
            self.mean_episode_length(),
            self.terminations(Termination::Wall),
            self.terminations(Termination::SelfCollision),
            self.terminations(Termination::Starvation),
            self.terminations(Termination::BoardFull),
        )
    }

    fn mean(values: impl ExactSizeIterator<Item = f32>) -> f32 {
        let len = values.len();
        if len == 0 {
            0.0
        } else {
            values.sum::<f32>() / len as f32
        }
    }

    /// Helper function to push to a deque with size limit
    fn push_deque<T>(deque: &mut VecDeque<T>, value: T, window_size: usize) {
        if deque.len() >= window_size {
            deque.pop_front();
        }
        deque.push_back(value);
    }
}
