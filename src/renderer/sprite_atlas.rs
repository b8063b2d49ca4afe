use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use image::RgbaImage;

// ── SpriteData ───────────────────────────────────────────────────────────────

/// UV coordinates and pixel size of a single packed sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteData {
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub pixel_w: u32,
    pub pixel_h: u32,
}

// ── Shelf packing (pure, GPU-free) ───────────────────────────────────────────

/// One sprite's position inside the packed atlas.
#[derive(Debug, PartialEq)]
pub struct PlacedSprite<K> {
    pub key: K,
    /// Top-left pixel coordinate inside the atlas.
    pub atlas_x: u32,
    pub atlas_y: u32,
    pub pixel_w: u32,
    pub pixel_h: u32,
}

/// Shelf-pack `items` (`(key, pixel_w, pixel_h)`) into rows at most
/// `max_width` pixels wide.
///
/// Duplicate keys are skipped (only the first occurrence after sorting is
/// packed). Sprites wider than `max_width` are skipped with a warning.
///
/// Returns `(placements, atlas_pixel_width, atlas_pixel_height)`, both
/// rounded up to the next power of two.
pub fn pack<K: Copy + Eq + Hash + std::fmt::Debug>(
    items: &[(K, u32, u32)],
    max_width: u32,
) -> (Vec<PlacedSprite<K>>, u32, u32) {
    // Tallest first for better shelf utilisation.
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].2.cmp(&items[a].2));

    let mut placed: HashSet<K> = HashSet::new();
    let mut placements = Vec::new();
    let mut cur_x = 0u32;
    let mut cur_y = 0u32;
    let mut row_h = 0u32;

    for &i in &order {
        let (key, w, h) = items[i];

        if !placed.insert(key) {
            continue;
        }

        if w > max_width {
            tracing::warn!(?key, width = w, max_width, "sprite wider than atlas; skipping");
            continue;
        }

        if cur_x + w > max_width {
            cur_y += row_h;
            cur_x = 0;
            row_h = 0;
        }

        placements.push(PlacedSprite { key, atlas_x: cur_x, atlas_y: cur_y, pixel_w: w, pixel_h: h });
        cur_x += w;
        row_h = row_h.max(h);
    }

    let atlas_h = (cur_y + row_h).next_power_of_two().max(1);
    let atlas_w = max_width.next_power_of_two();
    (placements, atlas_w, atlas_h)
}

// ── SpriteAtlas ──────────────────────────────────────────────────────────────

/// CPU-side sprite atlas: the composited image and per-sprite UVs.
pub struct SpriteAtlas<K> {
    pub image: RgbaImage,
    pub sprites: HashMap<K, SpriteData>,
}

impl<K: Copy + Eq + Hash + std::fmt::Debug> SpriteAtlas<K> {
    /// Maximum row width of the packed atlas texture in pixels.
    pub const ATLAS_WIDTH: u32 = 512;

    /// Pack and composite `images` into a single RGBA atlas.
    pub fn compose(images: &[(K, &RgbaImage)]) -> Self {
        let dims: Vec<(K, u32, u32)> =
            images.iter().map(|(k, img)| (*k, img.width(), img.height())).collect();
        let (placements, atlas_w, atlas_h) = pack(&dims, Self::ATLAS_WIDTH);

        let lookup: HashMap<K, &RgbaImage> = images.iter().map(|(k, i)| (*k, *i)).collect();
        let mut image = RgbaImage::new(atlas_w, atlas_h);
        let mut sprites = HashMap::new();

        for p in &placements {
            let Some(src) = lookup.get(&p.key) else { continue };

            for dy in 0..p.pixel_h {
                for dx in 0..p.pixel_w {
                    image.put_pixel(p.atlas_x + dx, p.atlas_y + dy, *src.get_pixel(dx, dy));
                }
            }

            let uv_min = [p.atlas_x as f32 / atlas_w as f32, p.atlas_y as f32 / atlas_h as f32];
            let uv_max = [
                (p.atlas_x + p.pixel_w) as f32 / atlas_w as f32,
                (p.atlas_y + p.pixel_h) as f32 / atlas_h as f32,
            ];
            sprites.insert(p.key, SpriteData { uv_min, uv_max, pixel_w: p.pixel_w, pixel_h: p.pixel_h });
        }

        Self { image, sprites }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn pack_wraps_to_next_shelf_when_row_full() {
        let items = [("a", 200, 32), ("b", 200, 32), ("c", 200, 32)];
        let (pl, _, _) = pack(&items, 512);
        assert_eq!(pl.len(), 3);
        let row1: Vec<_> = pl.iter().filter(|p| p.atlas_y > 0).collect();
        assert_eq!(row1.len(), 1, "third sprite wraps to row 1");
        assert_eq!(row1[0].atlas_y, 32);
    }

    #[test]
    fn pack_skips_sprite_wider_than_atlas() {
        let items = [("giant", 600, 48), ("normal", 50, 50)];
        let (pl, _, _) = pack(&items, 512);
        assert_eq!(pl.len(), 1);
        assert_eq!(pl[0].key, "normal");
    }

    #[test]
    fn compose_copies_pixels_and_reports_size() {
        let red = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        let blue = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]));
        let atlas = SpriteAtlas::compose(&[(1u8, &red), (2u8, &blue)]);

        let r = &atlas.sprites[&1];
        assert_eq!((r.pixel_w, r.pixel_h), (4, 2));
        let b = &atlas.sprites[&2];
        let bx = (b.uv_min[0] * atlas.image.width() as f32) as u32;
        let by = (b.uv_min[1] * atlas.image.height() as f32) as u32;
        assert_eq!(*atlas.image.get_pixel(bx, by), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn compose_uvs_within_unit_range() {
        let img = RgbaImage::new(50, 50);
        let atlas = SpriteAtlas::compose(&[("wall", &img), ("road", &img)]);
        for data in atlas.sprites.values() {
            for v in data.uv_min.iter().chain(data.uv_max.iter()) {
                assert!((0.0..=1.0).contains(v));
            }
            assert!(data.uv_min[0] < data.uv_max[0]);
        }
    }
}
