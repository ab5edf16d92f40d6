use anyhow::{Result, ensure};
use std::time::Duration;

/// Discrete play field derived from the pixel resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the play area in pixels
    pub screen_width: u32,
    /// Height of the play area in pixels
    pub screen_height: u32,
    /// Edge length of one grid cell in pixels
    pub cell_size: u32,
    /// Rendered frames per second
    pub target_fps: u32,
    /// Score at which the run is won
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 20,
            target_fps: 60,
            win_score: 50,
        }
    }
}

impl GameConfig {
    /// Check that the pixel space splits evenly into cells
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.screen_width % self.cell_size == 0 && self.screen_height % self.cell_size == 0,
            "cell size {} does not divide screen {}x{}",
            self.cell_size,
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.screen_width >= 2 * self.cell_size,
            "screen must be at least two cells wide"
        );
        ensure!(
            self.screen_height >= self.cell_size,
            "screen must be at least one cell tall"
        );
        // Two starting segments plus one free cell for food
        ensure!(
            self.grid().cell_count() > 2,
            "grid needs room for the snake and its food"
        );
        ensure!(self.target_fps > 0, "target fps must be positive");
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(
            (self.screen_width / self.cell_size) as i32,
            (self.screen_height / self.cell_size) as i32,
        )
    }

    /// Wall-clock time between two rendered frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }
}
