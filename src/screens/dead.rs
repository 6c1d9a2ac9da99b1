use anyhow::Result;
use macroquad::prelude::*;

use crate::app::App;
use crate::game::GameConfig;
use crate::render::HUD_TEXT;
use crate::ui::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadAction {
    Replay,
}

pub fn menu(config: &GameConfig, score: u32, best: u32, new_record: bool) -> Menu<DeadAction> {
    let w = config.window_width();
    let h = config.window_height();

    let mut menu = Menu::new(w / 2.0, "You Died!", RED, h / 3.0)
        .line(format!("Your score: {}", score), HUD_TEXT, h / 3.0 + 50.0)
        // below the Replay button, which spans h/2 + 10 .. h/2 + 60
        .line(format!("Highscore: {}", best), HUD_TEXT, h / 2.0 + 90.0);
    if new_record {
        menu = menu.line("New highscore!", YELLOW, h / 6.0);
    }
    menu.button("Replay", h / 2.0 + 10.0, DeadAction::Replay)
}

/// Record the round's score, then wait for the player to replay
pub async fn run(app: &App, score: u32) -> Result<DeadAction> {
    let new_record = app.high_scores.record(score)?;
    let best = app.high_scores.load()?;

    Ok(menu(&app.config, score, best, new_record).run().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_button() {
        let menu = menu(&GameConfig::default(), 40, 40, true);
        // 600x400 window: Replay spans y 210..260
        assert_eq!(menu.hit(vec2(300.0, 230.0)), Some(DeadAction::Replay));
        assert_eq!(menu.hit(vec2(300.0, 150.0)), None);
        assert_eq!(menu.buttons().count(), 1);
    }

    #[test]
    fn test_score_and_highscore_on_separate_lines() {
        let plain = menu(&GameConfig::default(), 40, 60, false);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines, vec!["Your score: 40", "Highscore: 60"]);

        let record = menu(&GameConfig::default(), 60, 60, true);
        assert!(record.lines().any(|l| l == "New highscore!"));
    }
}
