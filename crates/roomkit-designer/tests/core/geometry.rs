use proptest::prelude::*;
use roomkit_designer::geometry::{
    point_to_segment_distance, polygon_area, polygon_perimeter, room_outline, snap,
};
use roomkit_designer::{Point2D, Wall};

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Wall {
    Wall::new(Point2D::new(x1, y1), Point2D::new(x2, y2), 2.7, 0.2)
}

#[test]
fn test_canonical_rectangle() {
    let walls = vec![
        wall(0.0, 0.0, 4.0, 0.0),
        wall(4.0, 0.0, 4.0, 3.0),
        wall(4.0, 3.0, 0.0, 3.0),
        wall(0.0, 3.0, 0.0, 0.0),
    ];
    assert!((polygon_area(&room_outline(&walls)) - 12.0).abs() < 1e-9);
    assert!((polygon_perimeter(&walls) - 14.0).abs() < 1e-9);
}

#[test]
fn test_outline_dedupes_shared_corners() {
    let walls = vec![wall(0.0, 0.0, 2.0, 0.0), wall(2.0, 0.0, 2.0, 2.0)];
    assert_eq!(room_outline(&walls).len(), 3);
}

proptest! {
    #[test]
    fn test_snap_is_idempotent(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        grid in prop::sample::select(vec![0.05f64, 0.1, 0.25, 0.5, 1.0]),
    ) {
        let once = snap(Point2D::new(x, y), grid);
        let twice = snap(once, grid);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_snap_moves_at_most_half_a_cell(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
        grid in 0.01f64..2.0,
    ) {
        let snapped = snap(Point2D::new(x, y), grid);
        prop_assert!((snapped.x - x).abs() <= grid / 2.0 + 1e-9);
        prop_assert!((snapped.y - y).abs() <= grid / 2.0 + 1e-9);
    }

    #[test]
    fn test_segment_distance_bounded_by_endpoints(
        px in -10.0f64..10.0, py in -10.0f64..10.0,
        ax in -10.0f64..10.0, ay in -10.0f64..10.0,
        bx in -10.0f64..10.0, by in -10.0f64..10.0,
    ) {
        let p = Point2D::new(px, py);
        let a = Point2D::new(ax, ay);
        let b = Point2D::new(bx, by);
        let d = point_to_segment_distance(p, a, b);
        let to_a = (px - ax).hypot(py - ay);
        let to_b = (px - bx).hypot(py - by);
        prop_assert!(d <= to_a.min(to_b) + 1e-9);
        prop_assert!(d >= 0.0);
    }
}
