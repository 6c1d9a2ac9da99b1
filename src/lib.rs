//! Grid Snake - single-player Snake with title, pause and death screens
//!
//! - `game`: window-free core (snake, food, collisions, config)
//! - `persistence`: the high score file
//! - `input`, `ticker`: keyboard mapping and fixed-rate stepping
//! - `render`, `ui`: drawing helpers, buttons and menus
//! - `screens`, `app`: the screen loops and the state machine tying them together

pub mod app;
pub mod game;
pub mod input;
pub mod persistence;
pub mod render;
pub mod screens;
pub mod ticker;
pub mod ui;
