use macroquad::prelude::*;

use crate::game::GameConfig;
use crate::ui::Menu;

/// Choice made in the pause menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    /// Back into the running round
    Continue,
    /// Abandon the round and start a fresh one
    Restart,
    /// Abandon the round and go back to the title screen
    ToTitle,
}

pub fn menu(config: &GameConfig) -> Menu<PauseAction> {
    let w = config.window_width();
    let h = config.window_height();

    Menu::new(w / 2.0, "Paused", YELLOW, h / 4.0)
        .button("Continue", h / 2.0 - 70.0, PauseAction::Continue)
        .button("Restart", h / 2.0, PauseAction::Restart)
        .button("Quit", h / 2.0 + 70.0, PauseAction::ToTitle)
}

pub async fn run(config: &GameConfig) -> PauseAction {
    log::debug!("paused");
    let action = menu(config).run().await;
    log::debug!("pause menu: {:?}", action);
    action
}
