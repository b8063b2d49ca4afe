use std::env;
use std::path::{Path, PathBuf};

// ── Fixed constants ─────────────────────────────────────────────────────────

pub const VIEWPORT_WIDTH: u32 = 550;
pub const VIEWPORT_HEIGHT: u32 = 550;
pub const TILE_WIDTH: u32 = 50;
pub const TILE_HEIGHT: u32 = 50;
pub const FPS: u32 = 50;

/// Pixel offset of the player sprite from its grid cell's top-left corner.
pub const PLAYER_INSET: (i32, i32) = (15, 5);

/// Environment variable that overrides the assets directory.
pub const ASSETS_DIR_ENV: &str = "GRIDWALK_ASSETS_DIR";

// ── AssetNames ──────────────────────────────────────────────────────────────

/// File names (relative to the assets directory) of every image the game loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetNames {
    pub wall: String,
    pub road: String,
    pub player: String,
    pub background: String,
    /// Optional splash font atlas; the splash renders without text if absent.
    pub font_image: String,
    pub font_glyphs: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            wall: "box.png".into(),
            road: "grass.png".into(),
            player: "mar.png".into(),
            background: "fon.png".into(),
            font_image: "font.png".into(),
            font_glyphs: "font.json".into(),
        }
    }
}

// ── GameConfig ──────────────────────────────────────────────────────────────

/// Runtime configuration snapshot.
///
/// Everything except the assets directory is fixed; `from_env` only lets the
/// caller relocate the data folder.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub title: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub fps: u32,
    pub player_inset: (i32, i32),
    pub assets_dir: PathBuf,
    pub assets: AssetNames,
    /// Lines shown on the splash screen.
    pub intro_text: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "gridwalk".into(),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            fps: FPS,
            player_inset: PLAYER_INSET,
            assets_dir: PathBuf::from("data"),
            assets: AssetNames::default(),
            intro_text: vec![
                "Hero Movement".into(),
                String::new(),
                "The hero walks tile by tile".into(),
                "The camera follows the hero".into(),
            ],
        }
    }
}

impl GameConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `GRIDWALK_ASSETS_DIR` - directory holding images and level files (default: `data`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>(ASSETS_DIR_ENV) {
            config.assets_dir = dir;
        }

        config
    }

    /// Resolve `name` against the assets directory.
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.assets_dir.join(name)
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    if raw.trim().is_empty() {
        return None;
    }
    raw.parse().ok()
}
