use anyhow::Result;
use macroquad::prelude::*;

use crate::app::App;
use crate::game::GameConfig;
use crate::render::HUD_TEXT;
use crate::ui::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAction {
    Play,
    Quit,
}

pub fn menu(config: &GameConfig, best: u32) -> Menu<TitleAction> {
    let w = config.window_width();
    let h = config.window_height();

    Menu::new(w / 2.0, "Snake", GREEN, h / 4.0)
        .line(format!("Highscore: {}", best), HUD_TEXT, h / 4.0 + 50.0)
        .button("Play", h / 2.0 - 30.0, TitleAction::Play)
        .button("Quit", h / 2.0 + 40.0, TitleAction::Quit)
}

pub async fn run(app: &App) -> Result<TitleAction> {
    let best = app.high_scores.load()?;
    Ok(menu(&app.config, best).run().await)
}
