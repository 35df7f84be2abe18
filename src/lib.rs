//! Warp Snake - grid snake with teleport and reverse food
//!
//! This library provides:
//! - The rules engine (game module): state, tick and turn transitions, food spawning
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive terminal driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
