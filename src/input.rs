//! Keyboard mapping for the playing screen.

use macroquad::prelude::KeyCode;

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Pause,
}

/// Map a pressed key to what it means while a round is running
pub fn handle_key(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(KeyAction::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::S => Some(KeyAction::Steer(Direction::Down)),
        KeyCode::Left | KeyCode::A => Some(KeyAction::Steer(Direction::Left)),
        KeyCode::Right | KeyCode::D => Some(KeyAction::Steer(Direction::Right)),
        KeyCode::Escape => Some(KeyAction::Pause),
        _ => None,
    }
}

/// Keys polled each frame, in the order their presses are applied
pub const POLLED_KEYS: [KeyCode; 9] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::S,
    KeyCode::A,
    KeyCode::D,
    KeyCode::Escape,
];

/// Actions for this frame's presses, in `POLLED_KEYS` order
pub fn pressed_actions(is_pressed: impl Fn(KeyCode) -> bool) -> Vec<KeyAction> {
    POLLED_KEYS
        .iter()
        .copied()
        .filter(|&key| is_pressed(key))
        .filter_map(handle_key)
        .collect()
}

/// Direction change waiting for the next tick.
///
/// Presses that would reverse the current heading are dropped on arrival;
/// among the rest the last one before the tick wins.
#[derive(Debug, Default)]
pub struct PendingDirection {
    pending: Option<Direction>,
}

impl PendingDirection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, current: Direction, requested: Direction) {
        if !requested.reverses(current) {
            self.pending = Some(requested);
        }
    }

    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}
