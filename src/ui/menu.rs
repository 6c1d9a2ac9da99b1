use macroquad::prelude::*;

use super::button::Button;
use crate::render::{Anchor, TextSize, draw_label};

struct Line {
    text: String,
    color: Color,
    y: f32,
}

/// A full-screen menu: large heading, a few text lines and a column of buttons.
///
/// Each button carries the action value handed back when it is clicked, so
/// callers match on the result instead of wiring callbacks.
pub struct Menu<A> {
    center_x: f32,
    heading: Line,
    lines: Vec<Line>,
    buttons: Vec<(Button, A)>,
}

impl<A: Copy> Menu<A> {
    pub fn new(center_x: f32, heading: &str, color: Color, heading_y: f32) -> Self {
        Self {
            center_x,
            heading: Line {
                text: heading.to_string(),
                color,
                y: heading_y,
            },
            lines: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn line(mut self, text: impl Into<String>, color: Color, y: f32) -> Self {
        self.lines.push(Line {
            text: text.into(),
            color,
            y,
        });
        self
    }

    pub fn button(mut self, label: &str, top: f32, action: A) -> Self {
        self.buttons
            .push((Button::centered(label, self.center_x, top), action));
        self
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().map(|(button, _)| button)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Action of the button under `point`, if any
    pub fn hit(&self, point: Vec2) -> Option<A> {
        self.buttons
            .iter()
            .find(|(button, _)| button.contains(point))
            .map(|(_, action)| *action)
    }

    pub fn draw(&self, pointer: Vec2) {
        clear_background(BLACK);
        draw_label(
            &self.heading.text,
            self.heading.color,
            self.center_x,
            self.heading.y,
            Anchor::Center,
            TextSize::Large,
        );
        for line in &self.lines {
            draw_label(
                &line.text,
                line.color,
                self.center_x,
                line.y,
                Anchor::Center,
                TextSize::Normal,
            );
        }
        for (button, _) in &self.buttons {
            button.draw(button.contains(pointer));
        }
    }

    /// Show the menu until a button is clicked.
    ///
    /// Input is read only after a frame has been presented, so the click that
    /// opened this menu cannot also press one of its buttons.
    pub async fn run(&self) -> A {
        loop {
            self.draw(mouse_position().into());
            next_frame().await;

            if is_mouse_button_pressed(MouseButton::Left) {
                if let Some(action) = self.hit(mouse_position().into()) {
                    return action;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Choice {
        Yes,
        No,
    }

    fn menu() -> Menu<Choice> {
        Menu::new(300.0, "Sure?", WHITE, 100.0)
            .line("really", WHITE, 150.0)
            .button("Yes", 200.0, Choice::Yes)
            .button("No", 270.0, Choice::No)
    }

    #[test]
    fn test_hit_returns_bound_action() {
        let menu = menu();
        assert_eq!(menu.hit(vec2(300.0, 225.0)), Some(Choice::Yes));
        assert_eq!(menu.hit(vec2(300.0, 300.0)), Some(Choice::No));
    }

    #[test]
    fn test_miss_returns_none() {
        let menu = menu();
        assert_eq!(menu.hit(vec2(300.0, 260.0)), None);
        assert_eq!(menu.hit(vec2(10.0, 225.0)), None);
    }

    #[test]
    fn test_buttons_share_a_column() {
        let menu = menu();
        let xs: Vec<f32> = menu.buttons().map(|b| b.rect.x).collect();
        assert_eq!(xs, vec![225.0, 225.0]);
    }
}
