//! Application context and the screen state machine that drives it.

use anyhow::Result;

use crate::game::{GameConfig, GameEngine};
use crate::persistence::HighScoreStore;
use crate::screens::{self, DeadAction, RoundOutcome, TitleAction};

/// Everything the screens share. Owned by the driver, borrowed by each screen.
pub struct App {
    pub config: GameConfig,
    pub high_scores: HighScoreStore,
    pub engine: GameEngine,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            high_scores: HighScoreStore::new(config.highscore_path.clone()),
            engine: GameEngine::new(config.clone()),
            config,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Title,
    Playing,
    Dead { score: u32 },
    Exit,
}

impl From<TitleAction> for Scene {
    fn from(action: TitleAction) -> Self {
        match action {
            TitleAction::Play => Scene::Playing,
            TitleAction::Quit => Scene::Exit,
        }
    }
}

impl From<RoundOutcome> for Scene {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Died { score } => Scene::Dead { score },
            RoundOutcome::Restart => Scene::Playing,
            RoundOutcome::ToTitle => Scene::Title,
        }
    }
}

impl From<DeadAction> for Scene {
    fn from(action: DeadAction) -> Self {
        match action {
            DeadAction::Replay => Scene::Playing,
        }
    }
}

/// Run screens from the title until the player quits
pub async fn run(app: &mut App) -> Result<()> {
    let mut scene = Scene::Title;

    loop {
        let next: Scene = match scene {
            Scene::Title => screens::title::run(app).await?.into(),
            Scene::Playing => screens::playing::run(app).await?.into(),
            Scene::Dead { score } => screens::dead::run(app, score).await?.into(),
            Scene::Exit => {
                log::info!("quit from title screen");
                return Ok(());
            }
        };
        log::debug!("{:?} -> {:?}", scene, next);
        scene = next;
    }
}
