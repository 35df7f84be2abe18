//! Rules engine for the snake game
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The presentation layer only reads `GameState` and forwards intents to `GameEngine`.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod random;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig};
pub use engine::{CollisionKind, GameEngine, TickOutcome};
pub use food::{Food, FoodSelection, FoodSpawner, FoodType};
pub use random::{RandomSource, SeededRandom};
pub use state::{GameState, GameStatus, Position, Snake};
