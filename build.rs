// Generates placeholder sprites into data/ for any image that is missing, so a
// fresh checkout runs without hand-made art. Existing files are never touched.
// Also renders the built-in splash font into OUT_DIR.

use image::{Rgba, RgbaImage};
use std::path::Path;

fn draw_bordered_rect(width: u32, height: u32, fill: [u8; 4], border: [u8; 4]) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || x == width - 1 || y == 0 || y == height - 1;
            img.put_pixel(x, y, Rgba(if on_border { border } else { fill }));
        }
    }
    img
}

fn draw_box(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let brick_row = y / 10;
            let offset_x = if brick_row % 2 == 0 { 0 } else { width / 4 };
            let is_mortar_h = y % 10 == 0;
            let is_mortar_v = (x + offset_x) % (width / 2) == 0;
            let color = if is_mortar_h || is_mortar_v {
                Rgba([0x4A, 0x48, 0x45, 0xFF])
            } else {
                Rgba([0x9A, 0x6B, 0x3F, 0xFF])
            };
            img.put_pixel(x, y, color);
        }
    }
    img
}

fn draw_grass(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            // Cheap deterministic speckle.
            let tuft = (x * 7 + y * 13) % 11 == 0;
            let color = if tuft { [0x2E, 0x8B, 0x3A, 0xFF] } else { [0x4C, 0xAF, 0x50, 0xFF] };
            img.put_pixel(x, y, Rgba(color));
        }
    }
    img
}

fn draw_hero(width: u32, height: u32) -> RgbaImage {
    let mut img = draw_bordered_rect(width, height, [0xD6, 0x2E, 0x2E, 0xFF], [0x60, 0x10, 0x10, 0xFF]);
    let eye = Rgba([0x10, 0x10, 0x10, 0xFF]);
    let ey = height / 4;
    for ex in [width / 3, 2 * width / 3] {
        img.put_pixel(ex, ey, eye);
    }
    img
}

fn draw_backdrop(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        let shade = 0xC0 + (0x3F * y / height.max(1)) as u8;
        for x in 0..width {
            img.put_pixel(x, y, Rgba([shade, shade, 0xF0, 0xFF]));
        }
    }
    img
}

// 5x7 glyph bitmaps for the built-in splash font. Lowercase letters share the
// uppercase cells.
const GLYPHS: &[(char, [&str; 7])] = &[
    ('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    ('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    ('D', ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."]),
    ('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    ('F', ["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
    ('G', [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
    ('H', ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('I', [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('J', ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    ('K', ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
    ('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    ('M', ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
    ('N', ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
    ('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('P', ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
    ('Q', [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    ('R', ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
    ('S', [".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
    ('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    ('U', ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('V', ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
    ('W', ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
    ('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
    ('Y', ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
    ('Z', ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
    ('0', [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
    ('1', ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('2', [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
    ('3', ["####.", "....#", "....#", ".###.", "....#", "....#", "####."]),
    ('4', ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
    ('5', ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
    ('6', [".###.", "#....", "#....", "####.", "#...#", "#...#", ".###."]),
    ('7', ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
    ('8', [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
    ('9', [".###.", "#...#", "#...#", ".####", "....#", "....#", ".###."]),
    (' ', [".....", ".....", ".....", ".....", ".....", ".....", "....."]),
    ('.', [".....", ".....", ".....", ".....", ".....", ".....", "..#.."]),
    (',', [".....", ".....", ".....", ".....", ".....", "..#..", ".#..."]),
    ('!', ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."]),
    ('?', [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."]),
    ('\'', ["..#..", "..#..", ".....", ".....", ".....", ".....", "....."]),
    ('-', [".....", ".....", ".....", ".###.", ".....", ".....", "....."]),
    (':', [".....", "..#..", ".....", ".....", ".....", "..#..", "....."]),
];

/// Font cell size in atlas pixels. Glyph rows are drawn twice as tall as
/// they are wide so lines of intro text fit the viewport width.
const CELL_W: u32 = 6;
const CELL_H: u32 = 14;
const CELLS_PER_ROW: u32 = 16;

/// Render the glyph table into an atlas image plus its char-keyed JSON map.
fn draw_font() -> (RgbaImage, String) {
    let rows = (GLYPHS.len() as u32).div_ceil(CELLS_PER_ROW);
    let mut img = RgbaImage::from_pixel(CELL_W * CELLS_PER_ROW, CELL_H * rows, Rgba([0, 0, 0, 0]));
    let mut entries = Vec::new();

    for (i, (ch, bitmap)) in GLYPHS.iter().enumerate() {
        let cx = (i as u32 % CELLS_PER_ROW) * CELL_W;
        let cy = (i as u32 / CELLS_PER_ROW) * CELL_H;

        for (gy, line) in bitmap.iter().enumerate() {
            for (gx, bit) in line.chars().enumerate() {
                if bit != '#' {
                    continue;
                }
                let (x, y) = (cx + gx as u32, cy + 2 * gy as u32);
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
                img.put_pixel(x, y + 1, Rgba([255, 255, 255, 255]));
            }
        }

        let rect = format!(r#"{{ "x": {cx}, "y": {cy}, "w": {CELL_W}, "h": {CELL_H} }}"#);
        entries.push(format!(r#""{ch}": {rect}"#));
        if ch.is_ascii_uppercase() {
            entries.push(format!(r#""{}": {rect}"#, ch.to_ascii_lowercase()));
        }
    }

    (img, format!("{{\n  {}\n}}\n", entries.join(",\n  ")))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // The built-in splash font is embedded in the binary from OUT_DIR.
    let out = std::path::PathBuf::from(std::env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let (font_img, font_json) = draw_font();
    font_img.save(out.join("splash_font.png")).expect("write built-in font atlas");
    std::fs::write(out.join("splash_font.json"), font_json).expect("write built-in font glyphs");

    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    if std::fs::create_dir_all(&data).is_err() {
        println!("cargo:warning=cannot create {}", data.display());
        return;
    }

    let sprites: [(&str, fn() -> RgbaImage); 4] = [
        ("box.png", || draw_box(50, 50)),
        ("grass.png", || draw_grass(50, 50)),
        ("mar.png", || draw_hero(20, 40)),
        ("fon.png", || draw_backdrop(550, 550)),
    ];

    for (name, draw) in sprites {
        let path = data.join(name);
        if path.exists() {
            continue;
        }
        if let Err(e) = draw().save(&path) {
            println!("cargo:warning=cannot write {}: {e}", path.display());
        }
    }
}
