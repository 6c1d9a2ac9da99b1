use macroquad::prelude::*;

use crate::game::{Cell, GameConfig, GameState};

// Palette
pub const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0); // dark gray
pub const SNAKE: Color = GREEN;
pub const FOOD: Color = RED;
pub const HUD_TEXT: Color = WHITE;

const NORMAL_FONT: u16 = 30;
const LARGE_FONT: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Large,
}

impl TextSize {
    pub fn font_size(self) -> u16 {
        match self {
            TextSize::Normal => NORMAL_FONT,
            TextSize::Large => LARGE_FONT,
        }
    }
}

/// Where a text's (x, y) point sits relative to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Draw `text` and return its bounding box
pub fn draw_label(text: &str, color: Color, x: f32, y: f32, anchor: Anchor, size: TextSize) -> Rect {
    let font_size = size.font_size();
    let dims = measure_text(text, None, font_size, 1.0);
    let (left, top) = match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::Center => (x - dims.width * 0.5, y - dims.height * 0.5),
    };
    // draw_text takes the baseline, not the top edge
    draw_text(text, left, top + dims.offset_y, font_size as f32, color);
    Rect::new(left, top, dims.width, dims.height)
}

/// Background lines at every cell boundary
pub fn draw_grid(config: &GameConfig) {
    let width = config.window_width();
    let height = config.window_height();

    for col in 0..config.grid_width {
        let x = col as f32 * config.cell_size;
        draw_line(x, 0.0, x, height, 1.0, GRID_LINE);
    }
    for row in 0..config.grid_height {
        let y = row as f32 * config.cell_size;
        draw_line(0.0, y, width, y, 1.0, GRID_LINE);
    }
}

pub fn cell_rect(cell: Cell, cell_size: f32) -> Rect {
    Rect::new(
        cell.x as f32 * cell_size,
        cell.y as f32 * cell_size,
        cell_size,
        cell_size,
    )
}

pub fn draw_cell(cell: Cell, cell_size: f32, color: Color) {
    let r = cell_rect(cell, cell_size);
    draw_rectangle(r.x, r.y, r.w, r.h, color);
}

/// Cover for a rectangle with rounded corners: a horizontal and a vertical
/// band plus one circle per corner, all with the returned radius
pub fn rounded_rect_parts(rect: Rect, radius: f32) -> ([Rect; 2], [Vec2; 4], f32) {
    let r = radius.clamp(0.0, rect.w.min(rect.h) * 0.5);
    let bands = [
        Rect::new(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h),
        Rect::new(rect.x, rect.y + r, rect.w, rect.h - 2.0 * r),
    ];
    let corners = [
        vec2(rect.x + r, rect.y + r),
        vec2(rect.right() - r, rect.y + r),
        vec2(rect.x + r, rect.bottom() - r),
        vec2(rect.right() - r, rect.bottom() - r),
    ];
    (bands, corners, r)
}

pub fn draw_rounded_rect(rect: Rect, radius: f32, color: Color) {
    let (bands, corners, r) = rounded_rect_parts(rect, radius);
    for band in bands {
        draw_rectangle(band.x, band.y, band.w, band.h, color);
    }
    for corner in corners {
        draw_circle(corner.x, corner.y, r, color);
    }
}

/// One full frame of a running round
pub fn draw_round(config: &GameConfig, state: &GameState, stored_best: u32) {
    clear_background(BLACK);
    draw_grid(config);

    for segment in &state.snake.body {
        draw_cell(*segment, config.cell_size, SNAKE);
    }
    draw_cell(state.food, config.cell_size, FOOD);

    draw_label(
        &format!("Score: {}", state.score),
        HUD_TEXT,
        10.0,
        10.0,
        Anchor::TopLeft,
        TextSize::Normal,
    );
    draw_label(
        &format!("Highscore: {}", state.score.max(stored_best)),
        HUD_TEXT,
        10.0,
        40.0,
        Anchor::TopLeft,
        TextSize::Normal,
    );
}
