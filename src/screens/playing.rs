use anyhow::Result;
use macroquad::prelude::*;

use super::paused::{self, PauseAction};
use crate::app::App;
use crate::input::{KeyAction, PendingDirection, pressed_actions};
use crate::render;
use crate::ticker::Ticker;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Died { score: u32 },
    Restart,
    ToTitle,
}

/// Play one round until the snake dies or the pause menu abandons it.
///
/// Input and drawing run every frame; the snake moves on the ticker.
pub async fn run(app: &mut App) -> Result<RoundOutcome> {
    let stored_best = app.high_scores.load()?;
    let mut state = app.engine.reset();
    let mut pending = PendingDirection::new();
    let mut ticker = Ticker::new(app.config.tick_interval(), get_time());
    log::debug!("round started, food at {:?}", state.food);

    loop {
        let mut pause_requested = false;
        for action in pressed_actions(is_key_pressed) {
            match action {
                KeyAction::Steer(direction) => pending.request(state.snake.heading, direction),
                KeyAction::Pause => pause_requested = true,
            }
        }

        if pause_requested {
            match paused::run(&app.config).await {
                PauseAction::Continue => ticker.reset(get_time()),
                PauseAction::Restart => return Ok(RoundOutcome::Restart),
                PauseAction::ToTitle => return Ok(RoundOutcome::ToTitle),
            }
        }

        if ticker.ready(get_time()) {
            let result = app.engine.step(&mut state, pending.take().into());
            if result.terminated() {
                return Ok(RoundOutcome::Died { score: state.score });
            }
        }

        render::draw_round(&app.config, &state, stored_best);
        next_frame().await;
    }
}
