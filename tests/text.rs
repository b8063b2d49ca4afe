use gridwalk::renderer::text::*;

// 'H' and 'i' on a 64x32 atlas; 'i' is narrower.
fn sample_font() -> Font {
    Font::from_atlas_json(
        r#"{ "H": { "x": 0,  "y": 0, "w": 16, "h": 32 },
             "i": { "x": 16, "y": 0, "w": 8,  "h": 32 } }"#,
        64,
        32,
    )
    .unwrap()
}

#[test]
fn atlas_json_builds_glyph_map() {
    let font = sample_font();
    assert_eq!(font.glyphs.len(), 2);
    assert_eq!(font.line_height, 32);
    let i = &font.glyphs[&'i'];
    assert_eq!((i.x, i.width, i.x_advance), (16, 8, 8));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Font::from_atlas_json("{ not json", 64, 32).is_err());
}

#[test]
fn glyphs_scale_to_font_size() {
    let quads = layout_lines(&["Hi"], &sample_font(), 16.0, 0.0, 0.0, 0.0);
    assert_eq!(quads.len(), 2);
    assert_eq!(quads[0].size, [8.0, 16.0]);
    assert_eq!(quads[1].pos, [8.0, 0.0]);
    assert_eq!(quads[1].size, [4.0, 16.0]);
}

#[test]
fn uvs_are_normalised() {
    let quads = layout_lines(&["i"], &sample_font(), 32.0, 0.0, 0.0, 0.0);
    assert_eq!(quads[0].uv_min, [0.25, 0.0]);
    assert_eq!(quads[0].uv_max, [0.375, 1.0]);
}

#[test]
fn intro_block_positions() {
    let lines = ["H", "", "H", "H"];
    let quads = layout_lines(&lines, &sample_font(), 40.0, 50.0, 100.0, 15.0);
    let ys: Vec<f32> = quads.iter().map(|q| q.pos[1]).collect();
    // Each line: +spacing, draw, +font_size. The empty line still advances.
    assert_eq!(ys, vec![115.0, 225.0, 280.0]);
    assert!(quads.iter().all(|q| q.pos[0] == 50.0));
}

#[test]
fn unknown_characters_are_skipped() {
    let quads = layout_lines(&["H?H"], &sample_font(), 32.0, 0.0, 0.0, 0.0);
    assert_eq!(quads.len(), 2);
    assert_eq!(quads[1].pos[0], 16.0);
}

#[test]
fn empty_font_lays_out_nothing() {
    let font = Font::from_atlas_json("{}", 64, 32).unwrap();
    assert!(layout_lines(&["H"], &font, 40.0, 0.0, 0.0, 0.0).is_empty());
}
