use std::fs;
use std::path::Path;

use crate::error::{GameError, Result};

/// Character used to pad short rows.
pub const PAD_CHAR: char = '#';

/// Rectangular grid of level characters, stored row by row.
///
/// Every row has the same number of characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelMap {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl LevelMap {
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Character at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Rows as owned strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.iter().collect()).collect()
    }

    /// Iterate `(x, y, ch)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &ch)| (x, y, ch)))
    }
}

/// Parse level text. Each line is trimmed and right-padded with `'#'` to the
/// longest line's length. Content is not validated.
pub fn parse_level(text: &str) -> LevelMap {
    let mut rows: Vec<Vec<char>> = text.lines().map(|l| l.trim().chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, PAD_CHAR);
    }
    LevelMap { rows, width }
}

/// Read and parse `dir/filename`.
pub fn load_level(dir: &Path, filename: &str) -> Result<LevelMap> {
    let path = dir.join(filename);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let map = parse_level(&text);
            tracing::info!(path = %path.display(), width = map.width(), height = map.height(), "level loaded");
            Ok(map)
        }
        Err(source) => Err(GameError::LevelFileNotFound { path, source }),
    }
}

/// Names of the `.txt` level files directly inside `dir`, sorted.
pub fn available_levels(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = walkdir::WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("txt"))
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    names
}
