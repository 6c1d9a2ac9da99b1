use anyhow::Result;
use macroquad::prelude::*;
use std::path::Path;

use grid_snake::app::{self, App};
use grid_snake::game::{CONFIG_FILE, GameConfig};

fn window_conf() -> Conf {
    // a broken config is reported once the logger is up, in `run`
    let config = GameConfig::load(Path::new(CONFIG_FILE)).unwrap_or_default();
    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.window_width() as i32,
        window_height: config.window_height() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> Result<()> {
    let config = GameConfig::load(Path::new(CONFIG_FILE))?;
    log::debug!("config: {:?}", config);

    let mut app = App::new(config);
    app::run(&mut app).await
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run().await {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
