// =============================================================================
// GEOMETRY.RS - Pixel rectangles and grid directions
//
// Everything in the game lives on an integer pixel grid:
// - Rectangles for tile/player bounds and camera-shifted draw positions
// - Axis-aligned overlap tests for collision
// - The 4 cardinal directions a move can take
// =============================================================================

/// Axis-aligned rectangle in integer pixel space (y grows downward).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 { self.x }
    #[inline]
    pub fn top(&self) -> i32 { self.y }
    #[inline]
    pub fn right(&self) -> i32 { self.x + self.w }
    #[inline]
    pub fn bottom(&self) -> i32 { self.y + self.h }

    /// Center point, rounded toward negative infinity.
    #[inline]
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w.div_euclid(2), self.y + self.h.div_euclid(2))
    }

    /// A copy of this rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// True if the two rectangles share interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap, and an empty
    /// rectangle (zero width or height) overlaps nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// =============================================================================
// DIRECTION HELPERS
// =============================================================================

/// One of the 4 cardinal directions. There is no diagonal movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit grid offset `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Pixel offset of a one-tile step.
    pub fn step(self, tile_w: u32, tile_h: u32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dx * tile_w as i32, dy * tile_h as i32)
    }
}
