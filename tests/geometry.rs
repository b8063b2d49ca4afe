use gridwalk::geometry::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10, 20, 40, 60));
}

#[test]
fn center_floors_odd_sizes() {
    assert_eq!(Rect::new(0, 0, 5, 5).center(), (2, 2));
    assert_eq!(Rect::new(-5, -5, 5, 5).center(), (-3, -3));
}

#[test]
fn touching_rects_do_not_overlap() {
    let a = Rect::new(0, 0, 50, 50);
    assert!(!a.overlaps(&Rect::new(50, 0, 50, 50)));
    assert!(!a.overlaps(&Rect::new(0, 50, 50, 50)));
    assert!(a.overlaps(&Rect::new(49, 49, 50, 50)));
}

#[test]
fn contained_rect_overlaps() {
    let tile = Rect::new(50, 50, 50, 50);
    assert!(tile.overlaps(&Rect::new(65, 55, 20, 40)));
}

#[test]
fn direction_steps_are_one_tile() {
    assert_eq!(Direction::Up.step(50, 50), (0, -50));
    assert_eq!(Direction::Down.step(50, 50), (0, 50));
    assert_eq!(Direction::Left.step(50, 50), (-50, 0));
    assert_eq!(Direction::Right.step(50, 50), (50, 0));
}

#[test]
fn deltas_are_unit_steps() {
    assert_eq!(Direction::Up.delta(), (0, -1));
    assert_eq!(Direction::Right.delta(), (1, 0));
}
