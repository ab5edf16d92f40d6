//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it one frame at a time through [`Game::update`].

pub mod action;
pub mod config;
pub mod difficulty;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, Grid};
pub use difficulty::Difficulty;
pub use engine::{Game, GameMode, Transition};
pub use food::place_food;
pub use state::{Cell, Snake, StepResult};
