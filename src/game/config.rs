use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory at startup
pub const CONFIG_FILE: &str = "snake_config.json";

/// Configuration for the game
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Snake steps per second
    pub ticks_per_second: f32,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Starting head column
    pub start_x: i32,
    /// Starting head row
    pub start_y: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Text file holding the high score
    pub highscore_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            cell_size: 20.0,
            ticks_per_second: 10.0,
            food_score: 10,
            start_x: 5,
            start_y: 5,
            initial_snake_length: 1,
            highscore_path: PathBuf::from("highscore.txt"),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;

        log::info!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width > 0 && self.grid_height > 0,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(
            self.ticks_per_second > 0.0,
            "ticks_per_second must be positive, got {}",
            self.ticks_per_second
        );
        ensure!(
            self.cell_size > 0.0,
            "cell_size must be positive, got {}",
            self.cell_size
        );
        ensure!(
            self.start_x >= 0
                && self.start_y >= 0
                && (self.start_x as usize) < self.grid_width
                && (self.start_y as usize) < self.grid_height,
            "start cell ({}, {}) is outside the grid",
            self.start_x,
            self.start_y
        );
        // the body trails to the left of the head
        ensure!(
            self.initial_snake_length >= 1
                && self.initial_snake_length <= self.start_x as usize + 1,
            "initial_snake_length {} does not fit left of column {}",
            self.initial_snake_length,
            self.start_x
        );
        Ok(())
    }

    /// Seconds between two snake steps
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.ticks_per_second as f64
    }

    pub fn window_width(&self) -> f32 {
        self.grid_width as f32 * self.cell_size
    }

    pub fn window_height(&self) -> f32 {
        self.grid_height as f32 * self.cell_size
    }
}
