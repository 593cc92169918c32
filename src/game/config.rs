use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid {width}x{height} cannot fit a snake of length {length}")]
    GridTooSmall {
        width: usize,
        height: usize,
        length: usize,
    },
    #[error("initial_snake_length must be at least 1")]
    EmptySnake,
    #[error("idle_factor must be positive")]
    ZeroIdleFactor,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Rewards (agent play)
    /// Reward for eating food
    pub food_reward: i32,
    /// Penalty for dying
    pub death_penalty: i32,

    /// An episode stalls once the steps since the last meal exceed
    /// `snake length * idle_factor`
    pub idle_factor: usize,
    /// Seed for food placement; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            initial_snake_length: 3,
            food_reward: 10,
            death_penalty: -10,
            idle_factor: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Same configuration with a fixed food-placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Check that the initial snake fits on the board left of the center cell
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.idle_factor == 0 {
            return Err(ConfigError::ZeroIdleFactor);
        }

        // The body trails to the left of the center, and food needs one free cell
        let fits_horizontally = self.grid_width / 2 + 1 >= self.initial_snake_length;
        let has_free_cell = self.grid_width * self.grid_height > self.initial_snake_length;
        if self.grid_height == 0 || !fits_horizontally || !has_free_cell {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                length: self.initial_snake_length,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 32);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_reward, 10);
        assert_eq!(config.death_penalty, -10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15).with_seed(7);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validation_rejects_tiny_grids() {
        assert!(matches!(
            GameConfig::new(3, 10).validate(),
            Err(ConfigError::GridTooSmall { .. })
        ));
        assert!(matches!(
            GameConfig::new(10, 0).validate(),
            Err(ConfigError::GridTooSmall { .. })
        ));
        assert!(GameConfig::new(4, 1).validate().is_ok());

        let config = GameConfig {
            idle_factor: 0,
            ..GameConfig::small()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroIdleFactor)));
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_width": 12, "seed": 99 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GameConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
