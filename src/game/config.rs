use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::food::{FoodSelection, FoodSpawner};
use super::state::Position;

/// Reasons a configuration cannot be used to start a game
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size must be at least {min}, got {got}")]
    GridTooSmall { min: usize, got: usize },

    #[error("grid size must be at most {max}, got {got}")]
    GridTooLarge { max: usize, got: usize },

    #[error("state is on a {state}x{state} grid but the config says {config}x{config}")]
    GridMismatch { config: usize, state: usize },

    #[error("initial snake length {length} does not fit a {grid_size}x{grid_size} grid")]
    SnakeDoesNotFit { length: usize, grid_size: usize },

    #[error("{name} chance must be within [0, 1], got {value}")]
    ChanceOutOfRange { name: &'static str, value: f64 },

    #[error("food chances add up to {0}, which is more than 1")]
    ChancesExceedOne(f64),

    #[error("tick interval must be positive")]
    ZeroTickInterval,

    #[error("max spawn attempts must be at least 1")]
    NoSpawnAttempts,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square game grid
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Period of the tick driver in milliseconds
    pub tick_interval_ms: u64,
    /// How food types are picked
    pub food_selection: FoodSelection,
    /// Minimum distance of teleport food and teleport landings from the snake
    pub teleport_clearance: usize,
    /// Bound on random placement attempts before falling back
    pub max_spawn_attempts: usize,
    /// Cell for the first piece of food, if it is free
    pub initial_food: Option<Position>,
    /// Seed for the random source; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_snake_length: 3,
            tick_interval_ms: 150,
            food_selection: FoodSelection::default(),
            teleport_clearance: 3,
            max_spawn_attempts: 100,
            initial_food: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub const MIN_GRID_SIZE: usize = 4;
    /// Keeps cell coordinates well inside `i32` and the free-cell scan small
    pub const MAX_GRID_SIZE: usize = 1000;

    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Create a large grid
    pub fn large() -> Self {
        Self::new(30)
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn spawner(&self) -> FoodSpawner {
        FoodSpawner {
            grid_size: self.grid_size,
            selection: self.food_selection,
            clearance: self.teleport_clearance,
            max_attempts: self.max_spawn_attempts,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < Self::MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                min: Self::MIN_GRID_SIZE,
                got: self.grid_size,
            });
        }
        if self.grid_size > Self::MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                max: Self::MAX_GRID_SIZE,
                got: self.grid_size,
            });
        }

        if self.initial_snake_length == 0 || self.initial_snake_length > self.grid_size / 2 + 1 {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_snake_length,
                grid_size: self.grid_size,
            });
        }

        if let FoodSelection::Weighted { teleport, reverse } = self.food_selection {
            for (name, value) in [("teleport", teleport), ("reverse", reverse)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::ChanceOutOfRange { name, value });
                }
            }
            if teleport + reverse > 1.0 {
                return Err(ConfigError::ChancesExceedOne(teleport + reverse));
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::NoSpawnAttempts);
        }

        Ok(())
    }
}
