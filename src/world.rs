use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::geometry::Rect;
use crate::level::LevelMap;

// ── Tiles ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Road,
}

impl TileKind {
    pub fn is_collidable(self) -> bool {
        matches!(self, TileKind::Wall)
    }
}

/// A static grid cell. Never moves once built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    pub grid_x: i32,
    pub grid_y: i32,
    pub rect: Rect,
}

// ── Player ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
    /// Inset from the grid cell's top-left corner, used to recover the grid position.
    inset: (i32, i32),
    tile_w: i32,
    tile_h: i32,
}

impl Player {
    /// Grid cell the player currently stands on.
    pub fn grid_pos(&self) -> (i32, i32) {
        (
            (self.rect.x - self.inset.0).div_euclid(self.tile_w),
            (self.rect.y - self.inset.1).div_euclid(self.tile_h),
        )
    }
}

// ── Drawable ────────────────────────────────────────────────────────────────

/// Which sprite a drawable uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Wall,
    Road,
    Player,
}

impl From<TileKind> for SpriteId {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall => SpriteId::Wall,
            TileKind::Road => SpriteId::Road,
        }
    }
}

/// Anything the render pass can draw: a world rectangle plus a sprite.
pub trait Drawable {
    fn world_rect(&self) -> Rect;
    fn sprite(&self) -> SpriteId;
}

impl Drawable for Tile {
    fn world_rect(&self) -> Rect { self.rect }
    fn sprite(&self) -> SpriteId { self.kind.into() }
}

impl Drawable for Player {
    fn world_rect(&self) -> Rect { self.rect }
    fn sprite(&self) -> SpriteId { SpriteId::Player }
}

// ── World ───────────────────────────────────────────────────────────────────

/// Owned level state: ordered tiles, the indices of collidable tiles, and the player.
#[derive(Clone, Debug)]
pub struct World {
    tiles: Vec<Tile>,
    walls: Vec<usize>,
    pub player: Player,
    tile_w: u32,
    tile_h: u32,
}

impl World {
    /// Tiles in build (row-major) order.
    pub fn tiles(&self) -> &[Tile] { &self.tiles }

    /// Collidable tiles only.
    pub fn walls(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.walls.iter().map(|&i| &self.tiles[i])
    }

    pub fn tile_size(&self) -> (u32, u32) { (self.tile_w, self.tile_h) }

    pub fn tile_at(&self, grid_x: i32, grid_y: i32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.grid_x == grid_x && t.grid_y == grid_y)
    }
}

fn tile_rect(grid_x: i32, grid_y: i32, tile_w: u32, tile_h: u32) -> Rect {
    Rect::new(grid_x * tile_w as i32, grid_y * tile_h as i32, tile_w as i32, tile_h as i32)
}

/// Instantiate tiles and the player from `map`.
///
/// `'.'` is a road, `'#'` a wall, `'@'` a road with the player on it; any
/// other character leaves an empty gap. `player_size` is the player sprite's
/// pixel size. Fails with `InvalidLevel` unless exactly one `'@'` is present.
pub fn build_world(map: &LevelMap, config: &GameConfig, player_size: (u32, u32)) -> Result<World> {
    let (tile_w, tile_h) = (config.tile_width, config.tile_height);
    let (inset_x, inset_y) = config.player_inset;

    let mut tiles = Vec::with_capacity(map.width() * map.height());
    let mut walls = Vec::new();
    let mut spawns: Vec<(i32, i32)> = Vec::new();

    for (x, y, ch) in map.cells() {
        let (gx, gy) = (x as i32, y as i32);
        let kind = match ch {
            '.' => TileKind::Road,
            '#' => TileKind::Wall,
            '@' => {
                spawns.push((gx, gy));
                TileKind::Road
            }
            _ => continue,
        };
        if kind.is_collidable() {
            walls.push(tiles.len());
        }
        tiles.push(Tile { kind, grid_x: gx, grid_y: gy, rect: tile_rect(gx, gy, tile_w, tile_h) });
    }

    let [(px, py)] = spawns[..] else {
        return Err(GameError::InvalidLevel { player_markers: spawns.len() });
    };

    let player = Player {
        rect: Rect::new(
            px * tile_w as i32 + inset_x,
            py * tile_h as i32 + inset_y,
            player_size.0 as i32,
            player_size.1 as i32,
        ),
        inset: (inset_x, inset_y),
        tile_w: tile_w as i32,
        tile_h: tile_h as i32,
    };

    tracing::debug!(tiles = tiles.len(), walls = walls.len(), spawn_x = px, spawn_y = py, "world built");
    Ok(World { tiles, walls, player, tile_w, tile_h })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::parse_level;

    fn build(text: &str) -> Result<World> {
        build_world(&parse_level(text), &GameConfig::default(), (20, 40))
    }

    #[test]
    fn tiles_follow_row_major_order() {
        let world = build(".@.\n###").unwrap();
        let order: Vec<(i32, i32)> = world.tiles().iter().map(|t| (t.grid_x, t.grid_y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn only_walls_are_collidable() {
        let world = build(".@.\n###").unwrap();
        assert_eq!(world.walls().count(), 3);
        assert!(world.walls().all(|t| t.kind == TileKind::Wall && t.grid_y == 1));
    }

    #[test]
    fn unknown_characters_leave_gaps() {
        let world = build("@x.").unwrap();
        assert_eq!(world.tiles().len(), 2);
        assert!(world.tile_at(1, 0).is_none());
    }

    #[test]
    fn player_tile_is_road() {
        let world = build("#@#").unwrap();
        assert_eq!(world.tile_at(1, 0).map(|t| t.kind), Some(TileKind::Road));
    }

    #[test]
    fn missing_player_is_invalid() {
        assert!(matches!(build("..\n##"), Err(GameError::InvalidLevel { player_markers: 0 })));
    }

    #[test]
    fn duplicate_player_is_invalid() {
        assert!(matches!(build("@.@"), Err(GameError::InvalidLevel { player_markers: 2 })));
    }
}
