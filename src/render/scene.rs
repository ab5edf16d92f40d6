//! Draw primitives for one frame
//!
//! A [`Scene`] is an ordered list of pixel-space drawing commands composed
//! from a read-only view of the game. The terminal [`Renderer`] rasterizes
//! it; tests assert on it directly.
//!
//! [`Renderer`]: super::Renderer

use ratatui::style::Color;

use crate::game::{Difficulty, Game, GameConfig, GameMode};

/// Colours shared by every scene
pub mod palette {
    use ratatui::style::Color;

    pub const BACKGROUND: Color = Color::Rgb(245, 245, 245);
    pub const TEXT: Color = Color::Rgb(80, 80, 80);
    pub const SNAKE: Color = Color::Rgb(0, 117, 44);
    pub const FOOD: Color = Color::Rgb(230, 41, 55);
    pub const EASY: Color = Color::Rgb(0, 228, 48);
    pub const MEDIUM: Color = Color::Rgb(255, 161, 0);
    pub const HARD: Color = Color::Rgb(230, 41, 55);
}

pub const TITLE_SIZE: u32 = 50;
pub const HEADING_SIZE: u32 = 30;
pub const BODY_SIZE: u32 = 20;

/// One drawing primitive in pixel coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill the whole screen
    Clear(Color),
    /// Filled rectangle
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    /// Text whose top-left corner sits at (x, y)
    Text {
        text: String,
        x: i32,
        y: i32,
        size: u32,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Build the draw list for the current state of `game`
    pub fn compose<R>(game: &Game<R>) -> Self {
        let layout = SceneLayout::new(game.config());
        let mut scene = Scene::default();
        scene.commands.push(DrawCommand::Clear(palette::BACKGROUND));

        match game.mode() {
            GameMode::DifficultySelect => layout.menu(&mut scene),
            GameMode::Playing => layout.board(&mut scene, game),
            GameMode::GameOver => {
                let message = game_over_message(game.score());
                layout.result_message(&mut scene, &message);
            }
            GameMode::Won => layout.result_message(&mut scene, WIN_MESSAGE),
        }

        scene
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub const WIN_MESSAGE: &str = "Congratulations! You won! Press ENTER to restart";

pub fn game_over_message(score: u32) -> String {
    let unit = if score == 1 { "point" } else { "points" };
    format!("Game Over! You scored {score} {unit}. Press ENTER to restart")
}

/// Width in pixels a string takes up once rasterized.
///
/// The terminal uses fixed-width glyphs one column wide, so every character
/// costs half a grid cell regardless of the nominal font size.
pub fn measure_text(text: &str, config: &GameConfig) -> i32 {
    text.chars().count() as i32 * column_width(config)
}

/// Pixels covered by one terminal column
pub fn column_width(config: &GameConfig) -> i32 {
    (config.cell_size / 2).max(1) as i32
}

struct SceneLayout<'a> {
    config: &'a GameConfig,
    half_width: i32,
    half_height: i32,
}

impl<'a> SceneLayout<'a> {
    fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            half_width: config.screen_width as i32 / 2,
            half_height: config.screen_height as i32 / 2,
        }
    }

    fn centered(&self, scene: &mut Scene, text: &str, y: i32, size: u32, color: Color) {
        let x = self.half_width - measure_text(text, self.config) / 2;
        scene.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn result_message(&self, scene: &mut Scene, text: &str) {
        self.centered(scene, text, self.half_height - 10, BODY_SIZE, palette::TEXT);
    }

    fn menu(&self, scene: &mut Scene) {
        let h = self.half_height;
        self.centered(scene, "Snake", h - 250, TITLE_SIZE, palette::TEXT);
        self.centered(scene, "Select Difficulty", h - 100, HEADING_SIZE, palette::TEXT);

        for (row, difficulty) in Difficulty::ALL.into_iter().enumerate() {
            let label = format!("{}. {}", difficulty.menu_key(), difficulty.label());
            let color = match difficulty {
                Difficulty::Easy => palette::EASY,
                Difficulty::Medium => palette::MEDIUM,
                Difficulty::Hard => palette::HARD,
            };
            self.centered(scene, &label, h - 20 + 40 * row as i32, BODY_SIZE, color);
        }
    }

    fn board<R>(&self, scene: &mut Scene, game: &Game<R>) {
        let size = self.config.cell_size as i32;
        let cells = game
            .snake()
            .segments()
            .iter()
            .map(|segment| (*segment, palette::SNAKE))
            .chain(std::iter::once((game.food(), palette::FOOD)));

        for (cell, color) in cells {
            scene.commands.push(DrawCommand::Rect {
                x: cell.x * size,
                y: cell.y * size,
                width: size,
                height: size,
                color,
            });
        }

        scene.commands.push(DrawCommand::Text {
            text: format!("Score: {}", game.score()),
            x: 10,
            y: 10,
            size: BODY_SIZE,
            color: palette::TEXT,
        });
    }
}
