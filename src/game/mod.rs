//! Core game logic for Snake
//!
//! Nothing in here touches the window, so rounds can be stepped and checked
//! in plain unit tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, Direction};
pub use config::{CONFIG_FILE, GameConfig};
pub use engine::{GameEngine, StepResult};
pub use state::{Cell, CollisionType, GameState, Snake};
