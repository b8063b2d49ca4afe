pub mod assets;
pub mod camera;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod level;
pub mod renderer;
pub mod scene;
pub mod world;

pub use error::{GameError, Result};

/// Built-in splash font atlas, rendered by `build.rs` and embedded at compile time.
pub const DEFAULT_FONT_ATLAS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/splash_font.png"));

/// Glyph map for the built-in font atlas (char-keyed JSON, see `Font::from_atlas_json`).
pub const DEFAULT_FONT_GLYPHS: &str = include_str!(concat!(env!("OUT_DIR"), "/splash_font.json"));
