use std::time::{Duration, Instant};

/// Session metrics shown next to the board in human play
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Longest snake seen this session
    pub longest_snake: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            longest_snake: 0,
        }
    }

    /// Refresh the clock; time stops once the game is over
    pub fn update(&mut self, game_running: bool) {
        if game_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn observe_length(&mut self, length: usize) {
        self.longest_snake = self.longest_snake.max(length);
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
