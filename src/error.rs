use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every fatal condition the game can hit. None of them are retried; `main`
/// reports the error and exits.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("image file '{}' not found", path.display())]
    AssetNotFound { path: PathBuf },

    #[error("cannot decode image file '{}': {source}", path.display())]
    AssetDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot open level file '{}': {source}", path.display())]
    LevelFileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The level must contain exactly one `'@'` marker.
    #[error("level must contain exactly one player marker '@', found {player_markers}")]
    InvalidLevel { player_markers: usize },

    #[error("graphics: {0}")]
    Graphics(String),

    #[error("failed to read level name from stdin: {0}")]
    Prompt(#[source] io::Error),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
