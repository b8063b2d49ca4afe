use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::renderer::text::Font;
use crate::{DEFAULT_FONT_ATLAS, DEFAULT_FONT_GLYPHS};

/// Bitmap font for the splash screen.
pub struct FontAsset {
    pub image: RgbaImage,
    pub font: Font,
}

/// Every image the game needs, decoded to RGBA up front.
pub struct Assets {
    pub wall: RgbaImage,
    pub road: RgbaImage,
    pub player: RgbaImage,
    pub background: RgbaImage,
    pub font: Option<FontAsset>,
}

impl Assets {
    /// Load all required images from the assets directory. Missing files are
    /// fatal; the splash font falls back to the built-in one.
    pub fn load(config: &GameConfig) -> Result<Self> {
        let names = &config.assets;
        let assets = Self {
            wall: load_image(&config.asset_path(&names.wall))?,
            road: load_image(&config.asset_path(&names.road))?,
            player: load_image(&config.asset_path(&names.player))?,
            background: load_image(&config.asset_path(&names.background))?,
            font: load_font(
                &config.asset_path(&names.font_image),
                &config.asset_path(&names.font_glyphs),
            ),
        };
        tracing::info!(dir = %config.assets_dir().display(), font = assets.font.is_some(), "assets loaded");
        Ok(assets)
    }

    /// Pixel size of the player sprite.
    pub fn player_size(&self) -> (u32, u32) {
        self.player.dimensions()
    }
}

/// Decode one image file to RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(GameError::AssetNotFound { path: path.to_path_buf() });
    }
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| GameError::AssetDecode { path: path.to_path_buf(), source })
}

/// The splash font: `font.png` + `font.json` from the assets directory when
/// both exist and parse, otherwise the built-in font.
fn load_font(image_path: &Path, glyphs_path: &Path) -> Option<FontAsset> {
    if image_path.is_file() && glyphs_path.is_file() {
        if let Some(font) = load_font_files(image_path, glyphs_path) {
            return Some(font);
        }
        tracing::warn!("falling back to the built-in splash font");
    }
    builtin_font()
}

fn load_font_files(image_path: &Path, glyphs_path: &Path) -> Option<FontAsset> {
    let image = match load_image(image_path) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!("splash font image unusable: {e}");
            return None;
        }
    };

    let json = match fs::read_to_string(glyphs_path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %glyphs_path.display(), "cannot read splash font glyphs: {e}");
            return None;
        }
    };

    match Font::from_atlas_json(&json, image.width(), image.height()) {
        Ok(font) => Some(FontAsset { image, font }),
        Err(e) => {
            tracing::warn!(path = %glyphs_path.display(), "malformed splash font glyphs: {e}");
            None
        }
    }
}

fn builtin_font() -> Option<FontAsset> {
    let image = match image::load_from_memory(DEFAULT_FONT_ATLAS) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            tracing::warn!("built-in splash font unusable: {e}; intro text disabled");
            return None;
        }
    };
    match Font::from_atlas_json(DEFAULT_FONT_GLYPHS, image.width(), image.height()) {
        Ok(font) => Some(FontAsset { image, font }),
        Err(e) => {
            tracing::warn!("built-in splash glyphs malformed: {e}; intro text disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gridwalk_assets_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_image_is_asset_not_found() {
        let dir = scratch_dir("missing");
        let err = load_image(&dir.join("box.png")).unwrap_err();
        assert!(matches!(err, GameError::AssetNotFound { .. }));
    }

    #[test]
    fn garbage_image_is_decode_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join("box.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_image(&path), Err(GameError::AssetDecode { .. })));
    }

    #[test]
    fn load_reads_every_required_image() {
        let dir = scratch_dir("full");
        for (name, w, h) in [("box.png", 50, 50), ("grass.png", 50, 50), ("mar.png", 20, 40), ("fon.png", 8, 8)] {
            RgbaImage::new(w, h).save(dir.join(name)).unwrap();
        }
        let config = GameConfig { assets_dir: dir, ..GameConfig::default() };
        let assets = Assets::load(&config).unwrap();
        assert_eq!(assets.player_size(), (20, 40));
        let font = assets.font.expect("built-in font");
        for ch in "Hero Movement".chars() {
            assert!(font.font.glyphs.contains_key(&ch), "missing glyph {ch:?}");
        }
    }

    #[test]
    fn font_files_override_builtin() {
        let dir = scratch_dir("font_override");
        RgbaImage::new(32, 16).save(dir.join("font.png")).unwrap();
        fs::write(dir.join("font.json"), r#"{ "Z": { "x": 0, "y": 0, "w": 8, "h": 16 } }"#).unwrap();
        let font = load_font(&dir.join("font.png"), &dir.join("font.json")).unwrap();
        assert_eq!(font.font.glyphs.len(), 1);
        assert_eq!(font.image.dimensions(), (32, 16));
    }

    #[test]
    fn malformed_font_files_fall_back_to_builtin() {
        let dir = scratch_dir("font_malformed");
        RgbaImage::new(32, 16).save(dir.join("font.png")).unwrap();
        fs::write(dir.join("font.json"), "{ nope").unwrap();
        let font = load_font(&dir.join("font.png"), &dir.join("font.json")).unwrap();
        assert!(font.font.glyphs.contains_key(&'H'));
    }

    #[test]
    fn builtin_font_covers_intro_text() {
        let font = builtin_font().unwrap();
        for line in GameConfig::default().intro_text {
            for ch in line.chars() {
                assert!(font.font.glyphs.contains_key(&ch), "missing glyph {ch:?}");
            }
        }
    }

    #[test]
    fn builtin_intro_fits_the_viewport() {
        use crate::renderer::text::layout_lines;
        let config = GameConfig::default();
        let font = builtin_font().unwrap();
        let quads = layout_lines(&config.intro_text, &font.font, 40.0, 50.0, 100.0, 15.0);
        assert!(!quads.is_empty());
        assert!(quads.iter().all(|q| q.pos[0] + q.size[0] <= config.viewport_width as f32));
    }
}
