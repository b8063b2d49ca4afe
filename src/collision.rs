use crate::geometry::{Direction, Rect};
use crate::world::World;

/// Result of resolving one move proposal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now occupies `to`.
    Moved { from: Rect, to: Rect },
    /// `attempted` overlapped a wall; the player did not move.
    Blocked { attempted: Rect },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// True if `rect` overlaps any collidable tile in `world`.
pub fn collides(rect: &Rect, world: &World) -> bool {
    world.walls().any(|wall| rect.overlaps(&wall.rect))
}

/// The player's rectangle moved exactly one tile in `dir`.
pub fn proposed_rect(world: &World, dir: Direction) -> Rect {
    let (tile_w, tile_h) = world.tile_size();
    let (dx, dy) = dir.step(tile_w, tile_h);
    world.player.rect.translated(dx, dy)
}

/// Propose a one-tile move and commit it unless the destination hits a wall.
pub fn try_move(world: &mut World, dir: Direction) -> MoveOutcome {
    let from = world.player.rect;
    let to = proposed_rect(world, dir);

    if collides(&to, world) {
        tracing::debug!(?dir, x = to.x, y = to.y, "move blocked");
        return MoveOutcome::Blocked { attempted: to };
    }

    world.player.rect = to;
    tracing::debug!(?dir, x = to.x, y = to.y, "move committed");
    MoveOutcome::Moved { from, to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::level::parse_level;
    use crate::world::build_world;

    fn world(text: &str) -> World {
        build_world(&parse_level(text), &GameConfig::default(), (20, 40)).unwrap()
    }

    #[test]
    fn wall_below_blocks_down() {
        let mut w = world(".@.\n###");
        let before = w.player.rect;
        let outcome = try_move(&mut w, Direction::Down);
        assert!(!outcome.is_moved());
        assert_eq!(w.player.rect, before);
        assert_eq!(w.player.grid_pos(), (1, 0));
    }

    #[test]
    fn open_road_commits_exact_proposal() {
        let mut w = world(".@.\n###");
        let expected = w.player.rect.translated(50, 0);
        let outcome = try_move(&mut w, Direction::Right);
        assert_eq!(outcome, MoveOutcome::Moved { from: expected.translated(-50, 0), to: expected });
        assert_eq!(w.player.rect, expected);
        assert_eq!(w.player.grid_pos(), (2, 0));
    }

    #[test]
    fn gaps_and_map_edges_do_not_block() {
        // Nothing but empty space to the left of the spawn.
        let mut w = world("@");
        assert!(try_move(&mut w, Direction::Left).is_moved());
        assert_eq!(w.player.grid_pos(), (-1, 0));
    }

    #[test]
    fn each_event_resolves_independently() {
        let mut w = world("#...\n#@.#\n####");
        assert!(!try_move(&mut w, Direction::Left).is_moved());
        assert!(try_move(&mut w, Direction::Up).is_moved());
        assert!(try_move(&mut w, Direction::Right).is_moved());
        assert!(try_move(&mut w, Direction::Down).is_moved());
        assert!(!try_move(&mut w, Direction::Right).is_moved());
        assert_eq!(w.player.grid_pos(), (2, 1));
    }
}
