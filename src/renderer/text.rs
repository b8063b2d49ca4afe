use std::collections::HashMap;

use serde::Deserialize;

// ── GlyphQuad ─────────────────────────────────────────────────────────────────

/// One positioned glyph, ready to be turned into sprite vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// Top-left screen position in pixels.
    pub pos: [f32; 2],
    /// Width and height in pixels.
    pub size: [f32; 2],
    /// Normalised atlas texture coordinates in `[0, 1]`.
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

// ── Glyph / Font ──────────────────────────────────────────────────────────────

/// Pixel rectangle of a single character in the bitmap font atlas.
#[derive(Debug, Clone)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// How far to advance the cursor after drawing this glyph.
    pub x_advance: u32,
}

/// A uniform-grid bitmap font loaded from a char-keyed JSON map:
///
/// ```json
/// { "A": { "x": 0, "y": 0, "w": 16, "h": 24 }, ... }
/// ```
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
    /// Tallest glyph height in pixels.
    pub line_height: u32,
    pub texture_width: u32,
    pub texture_height: u32,
}

impl Font {
    /// Parse the glyph map. `texture_width` / `texture_height` are the atlas
    /// image dimensions, needed to compute UVs. Keys longer than one
    /// character are ignored.
    pub fn from_atlas_json(
        json: &str,
        texture_width: u32,
        texture_height: u32,
    ) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct AtlasEntry { x: u32, y: u32, w: u32, h: u32 }

        let raw: HashMap<String, AtlasEntry> = serde_json::from_str(json)?;

        let line_height = raw.values().map(|e| e.h).max().unwrap_or(0);

        let glyphs = raw
            .into_iter()
            .filter_map(|(key, entry)| {
                let mut chars = key.chars();
                let ch = chars.next()?;
                if chars.next().is_some() { return None; }

                Some((ch, Glyph {
                    x: entry.x,
                    y: entry.y,
                    width: entry.w,
                    height: entry.h,
                    x_advance: entry.w,
                }))
            })
            .collect();

        Ok(Self { glyphs, line_height, texture_width, texture_height })
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Lay out `lines` as a vertical block.
///
/// Starting from `top`, each line first adds `spacing` pixels, is drawn with
/// its top at the running coordinate, and then advances by one `font_size`
/// line height. Empty lines still take up a line. Characters missing from
/// the font are skipped without advancing.
pub fn layout_lines<S: AsRef<str>>(
    lines: &[S],
    font: &Font,
    font_size: f32,
    left: f32,
    top: f32,
    spacing: f32,
) -> Vec<GlyphQuad> {
    if font.line_height == 0 || font.texture_width == 0 || font.texture_height == 0 {
        return Vec::new();
    }

    let scale = font_size / font.line_height as f32;
    let tw = font.texture_width as f32;
    let th = font.texture_height as f32;

    let mut quads = Vec::new();
    let mut cursor_y = top;

    for line in lines {
        cursor_y += spacing;
        let mut cursor_x = left;

        for ch in line.as_ref().chars() {
            let Some(glyph) = font.glyphs.get(&ch) else { continue };

            quads.push(GlyphQuad {
                pos: [cursor_x, cursor_y],
                size: [glyph.width as f32 * scale, glyph.height as f32 * scale],
                uv_min: [glyph.x as f32 / tw, glyph.y as f32 / th],
                uv_max: [
                    (glyph.x + glyph.width) as f32 / tw,
                    (glyph.y + glyph.height) as f32 / th,
                ],
            });
            cursor_x += glyph.x_advance as f32 * scale;
        }

        cursor_y += font_size;
    }

    quads
}
