//! gridwalk entry point.
//!
//! Startup runs in this order: level prompt, level and asset loading, then
//! the window with its splash screen and the game loop. The level is chosen
//! before the window opens so a bad file name or level is reported without
//! ever creating a window.

use std::io::{self, BufRead, Write};

use gridwalk::assets::Assets;
use gridwalk::config::GameConfig;
use gridwalk::engine;
use gridwalk::error::{GameError, Result};
use gridwalk::level::{available_levels, load_level};
use gridwalk::world::build_world;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    setup_logging();

    // Fatal errors are reported, never turned into a non-zero exit status.
    if let Err(e) = start() {
        tracing::error!("{e}");
    }
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn start() -> Result<()> {
    let config = GameConfig::from_env();

    let level_name = match std::env::args().nth(1) {
        Some(name) => name,
        None => prompt_level_name(&available_levels(config.assets_dir()))?,
    };

    let map = load_level(config.assets_dir(), &level_name)?;
    let assets = Assets::load(&config)?;
    let world = build_world(&map, &config, assets.player_size())?;

    engine::run(config, assets, world)
}

/// Ask for a level file name on stdin, suggesting the ones that exist.
fn prompt_level_name(suggestions: &[String]) -> Result<String> {
    let mut stdout = io::stdout().lock();
    if suggestions.is_empty() {
        write!(stdout, "Level file name: ").map_err(GameError::Prompt)?;
    } else {
        write!(stdout, "Level file name ({}): ", suggestions.join(", ")).map_err(GameError::Prompt)?;
    }
    stdout.flush().map_err(GameError::Prompt)?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(GameError::Prompt)?;
    Ok(line.trim().to_string())
}
