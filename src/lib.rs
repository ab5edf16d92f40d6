//! Grid Snake - a fixed-grid snake arcade game for the terminal
//!
//! This library provides:
//! - Core game logic with the difficulty menu and win/lose states (game module)
//! - Key translation into game commands (input module)
//! - Pixel-space scene composition and terminal rasterization (render module)
//! - The interactive 60 fps frame loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
