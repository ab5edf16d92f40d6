use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::scene::{DrawCommand, HEADING_SIZE, Scene, column_width};
use crate::game::GameConfig;

/// Rasterizes pixel-space scenes onto the terminal.
///
/// One terminal column covers half a grid cell and one row covers a full
/// cell, so grid cells come out roughly square.
pub struct Renderer {
    column_px: i32,
    row_px: i32,
    columns: u16,
    rows: u16,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        let column_px = column_width(config);
        let row_px = config.cell_size.max(1) as i32;
        Self {
            column_px,
            row_px,
            columns: (config.screen_width as i32 / column_px) as u16,
            rows: (config.screen_height as i32 / row_px) as u16,
        }
    }

    /// Terminal size needed to show the whole scene
    pub fn canvas_size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene) {
        let area = self.canvas_area(frame.area());
        frame.render_widget(SceneView { renderer: self, scene }, area);
    }

    /// Centre the canvas in `area`, clipping when the terminal is too small
    pub fn canvas_area(&self, area: Rect) -> Rect {
        let width = self.columns.min(area.width);
        let height = self.rows.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn column_of(&self, x: i32) -> i32 {
        x.div_euclid(self.column_px)
    }

    fn row_of(&self, y: i32) -> i32 {
        y.div_euclid(self.row_px)
    }

    /// First column past a pixel edge, rounding partial columns up
    fn column_end(&self, x: i32) -> i32 {
        (x + self.column_px - 1).div_euclid(self.column_px)
    }

    fn row_end(&self, y: i32) -> i32 {
        (y + self.row_px - 1).div_euclid(self.row_px)
    }
}

struct SceneView<'a> {
    renderer: &'a Renderer,
    scene: &'a Scene,
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas { area, buf };
        let r = self.renderer;

        for command in &self.scene.commands {
            match command {
                DrawCommand::Clear(color) => {
                    let style = Style::reset().bg(*color);
                    for row in 0..i32::from(area.height) {
                        for col in 0..i32::from(area.width) {
                            canvas.paint(col, row, ' ', style);
                        }
                    }
                }
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    let style = Style::default().bg(*color);
                    for row in r.row_of(*y)..r.row_end(y + height) {
                        for col in r.column_of(*x)..r.column_end(x + width) {
                            canvas.paint(col, row, ' ', style);
                        }
                    }
                }
                DrawCommand::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => {
                    let mut style = Style::default().fg(*color);
                    if *size >= HEADING_SIZE {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    let row = r.row_of(*y);
                    let start = r.column_of(*x);
                    for (offset, ch) in text.chars().enumerate() {
                        canvas.paint(start + offset as i32, row, ch, style);
                    }
                }
            }
        }
    }
}

/// Clipped view of a buffer region addressed from its top-left corner
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn paint(&mut self, col: i32, row: i32, symbol: char, style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((self.area.x + col, self.area.y + row)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}
