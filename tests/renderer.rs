use std::collections::HashMap;

use gridwalk::geometry::Rect;
use gridwalk::renderer::pipeline::{quad, rect_quad, BLACK, WHITE};
use gridwalk::renderer::sprite_atlas::{pack, PlacedSprite, SpriteAtlas, SpriteData};
use gridwalk::renderer::text::GlyphQuad;
use gridwalk::renderer::{background_vertices, text_vertices, world_vertices};
use gridwalk::scene::SpriteCommand;
use gridwalk::world::SpriteId;
use image::{Rgba, RgbaImage};

// ── Sprite atlas packing ──────────────────────────────────────────────────

#[test]
fn pack_empty_input_returns_no_placements() {
    let (placements, _w, h): (Vec<PlacedSprite<&str>>, u32, u32) = pack(&[], 512);
    assert!(placements.is_empty());
    assert_eq!(h, 1);
}

#[test]
fn pack_single_sprite_placed_at_origin() {
    let (pl, _, _) = pack(&[("hero", 20, 40)], 512);
    assert_eq!(pl.len(), 1);
    assert_eq!((pl[0].atlas_x, pl[0].atlas_y), (0, 0));
    assert_eq!((pl[0].pixel_w, pl[0].pixel_h), (20, 40));
}

#[test]
fn pack_tallest_first() {
    let (pl, _, _) = pack(&[("tile", 50, 50), ("hero", 20, 60)], 512);
    assert_eq!(pl[0].key, "hero");
    assert_eq!(pl[1].atlas_x, 20);
}

#[test]
fn pack_height_is_power_of_two() {
    let (_, w, h) = pack(&[("a", 50, 50), ("b", 50, 50), ("c", 20, 40)], 512);
    assert_eq!((w, h), (512, 64));
}

#[test]
fn pack_skips_oversized_and_duplicate_sprites() {
    let (pl, _, _) = pack(&[("wide", 600, 10), ("a", 10, 10), ("a", 10, 10)], 512);
    assert_eq!(pl.len(), 1);
    assert_eq!(pl[0].key, "a");
}

#[test]
fn atlas_copies_pixels_and_assigns_uvs() {
    let red = RgbaImage::from_pixel(50, 50, Rgba([255, 0, 0, 255]));
    let blue = RgbaImage::from_pixel(20, 40, Rgba([0, 0, 255, 255]));
    let atlas = SpriteAtlas::compose(&[(SpriteId::Wall, &red), (SpriteId::Player, &blue)]);

    let wall = &atlas.sprites[&SpriteId::Wall];
    let x = (wall.uv_min[0] * atlas.image.width() as f32) as u32;
    assert_eq!(*atlas.image.get_pixel(x, 0), Rgba([255, 0, 0, 255]));
    assert_eq!((wall.pixel_w, wall.pixel_h), (50, 50));
    assert!(!atlas.sprites.contains_key(&SpriteId::Road));
}

// ── Vertex builders ───────────────────────────────────────────────────────

#[test]
fn quad_covers_rect_with_two_triangles() {
    let v = quad([10.0, 20.0], [30.0, 40.0], [0.0, 0.0], [1.0, 1.0], WHITE);
    let xs: Vec<f32> = v.iter().map(|p| p.position[0]).collect();
    let ys: Vec<f32> = v.iter().map(|p| p.position[1]).collect();
    assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
    assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
    assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
    assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
}

#[test]
fn rect_quad_uses_integer_rect() {
    let v = rect_quad(&Rect::new(-5, 5, 50, 50), [0.0, 0.0], [1.0, 1.0], WHITE);
    assert_eq!(v[0].position, [-5.0, 5.0]);
    assert_eq!(v[5].position, [45.0, 55.0]);
}

#[test]
fn background_fills_viewport() {
    let v = background_vertices([550.0, 550.0]);
    assert_eq!(v[0].position, [0.0, 0.0]);
    assert_eq!(v[5].position, [550.0, 550.0]);
    assert_eq!(v[5].uv, [1.0, 1.0]);
}

#[test]
fn text_is_black() {
    let g = GlyphQuad { pos: [0.0, 0.0], size: [8.0, 16.0], uv_min: [0.0, 0.0], uv_max: [0.5, 1.0] };
    let v = text_vertices(&[g, g]);
    assert_eq!(v.len(), 12);
    assert!(v.iter().all(|p| p.tint == BLACK));
}

#[test]
fn world_vertices_follow_command_order_and_skip_unknown() {
    let mut uvs = HashMap::new();
    let data = |u: f32| SpriteData { uv_min: [u, 0.0], uv_max: [u + 0.1, 0.1], pixel_w: 50, pixel_h: 50 };
    uvs.insert(SpriteId::Wall, data(0.0));
    uvs.insert(SpriteId::Player, data(0.5));

    let commands = [
        SpriteCommand { sprite: SpriteId::Wall, rect: Rect::new(0, 0, 50, 50) },
        SpriteCommand { sprite: SpriteId::Road, rect: Rect::new(50, 0, 50, 50) },
        SpriteCommand { sprite: SpriteId::Player, rect: Rect::new(65, 5, 20, 40) },
    ];
    let v = world_vertices(&commands, &uvs);
    assert_eq!(v.len(), 12);
    assert_eq!(v[0].uv, [0.0, 0.0]);
    assert_eq!(v[6].uv, [0.5, 0.0]);
    assert_eq!(v[6].position, [65.0, 5.0]);
    assert!(v.iter().all(|p| p.tint == WHITE));
}
