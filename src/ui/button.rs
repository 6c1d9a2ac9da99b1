use macroquad::prelude::*;

use crate::render::{Anchor, TextSize, draw_label, draw_rounded_rect};

pub const BUTTON_WIDTH: f32 = 150.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
const CORNER_RADIUS: f32 = 10.0;

const FACE: Color = WHITE;
const FACE_HOVERED: Color = LIGHTGRAY;
const LABEL: Color = BLACK;

/// Clickable rectangle with a centered label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            rect,
            label: label.into(),
        }
    }

    /// Standard-sized button centred on `center_x` with its top edge at `top`
    pub fn centered(label: impl Into<String>, center_x: f32, top: f32) -> Self {
        Self::new(
            label,
            Rect::new(center_x - BUTTON_WIDTH * 0.5, top, BUTTON_WIDTH, BUTTON_HEIGHT),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    pub fn draw(&self, hovered: bool) {
        let face = if hovered { FACE_HOVERED } else { FACE };
        draw_rounded_rect(self.rect, CORNER_RADIUS, face);
        let center = self.rect.center();
        draw_label(&self.label, LABEL, center.x, center.y, Anchor::Center, TextSize::Normal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_layout() {
        let button = Button::centered("Play", 300.0, 170.0);
        assert_eq!(button.rect, Rect::new(225.0, 170.0, 150.0, 50.0));
        assert_eq!(button.label, "Play");
    }

    #[test]
    fn test_hit_testing() {
        let button = Button::new("Quit", Rect::new(10.0, 10.0, 100.0, 40.0));
        assert!(button.contains(vec2(10.0, 10.0)));
        assert!(button.contains(vec2(60.0, 30.0)));
        assert!(!button.contains(vec2(9.0, 30.0)));
        assert!(!button.contains(vec2(60.0, 51.0)));
    }
}
