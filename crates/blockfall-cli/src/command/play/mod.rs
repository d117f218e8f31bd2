use anyhow::Context as _;
use blockfall_engine::{GameConfig, GameState, PieceSeed};

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod input;

pub(crate) fn run(config: GameConfig, seed: Option<PieceSeed>, fps: u32) -> anyhow::Result<()> {
    let state = match seed {
        Some(seed) => GameState::with_seed(config, seed),
        None => GameState::new(config),
    }
    .context("Failed to start game")?;

    let mut app = PlayApp::new(state, fps);
    Tui::new().run(&mut app)?;

    println!("{}", app.summary());
    Ok(())
}
