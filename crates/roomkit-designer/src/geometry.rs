//! Geometry utilities for the room builder.
//!
//! Pure functions for distance, grid snapping, wall orientation, room
//! area/perimeter and point-to-segment hit math. Nothing here holds state.

use crate::model::Wall;
use roomkit_core::{Point2D, Point3D};

/// Points closer than this are considered the same outline vertex.
const VERTEX_EPSILON: f64 = 1e-9;

/// Euclidean distance between two floor-plan points.
pub fn distance_2d(a: Point2D, b: Point2D) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Euclidean distance between two 3D points.
pub fn distance_3d(a: Point3D, b: Point3D) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

fn snap_value(v: f64, grid_size: f64) -> f64 {
    (v / grid_size).round() * grid_size
}

fn valid_grid(grid_size: f64) -> bool {
    grid_size.is_finite() && grid_size > 0.0
}

/// Rounds each coordinate to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid leaves the point unchanged.
pub fn snap(point: Point2D, grid_size: f64) -> Point2D {
    if !valid_grid(grid_size) {
        return point;
    }
    Point2D::new(snap_value(point.x, grid_size), snap_value(point.y, grid_size))
}

/// 3D variant of [`snap`]; elevation is snapped too.
pub fn snap_3d(point: Point3D, grid_size: f64) -> Point3D {
    if !valid_grid(grid_size) {
        return point;
    }
    Point3D::new(
        snap_value(point.x, grid_size),
        snap_value(point.y, grid_size),
        snap_value(point.z, grid_size),
    )
}

/// Length of a wall's centerline.
pub fn wall_length(wall: &Wall) -> f64 {
    distance_2d(wall.start, wall.end)
}

/// Angle of a wall in radians, `atan2(dy, dx)`.
pub fn wall_angle(wall: &Wall) -> f64 {
    (wall.end.y - wall.start.y).atan2(wall.end.x - wall.start.x)
}

/// Rotation in degrees given to a door or window placed against `wall`.
pub fn opening_rotation(wall: &Wall) -> f64 {
    -wall_angle(wall).to_degrees()
}

/// Deduplicated wall endpoints in first-seen order.
pub fn room_outline(walls: &[Wall]) -> Vec<Point2D> {
    let mut points: Vec<Point2D> = Vec::with_capacity(walls.len() * 2);
    for wall in walls {
        for p in [wall.start, wall.end] {
            let seen = points
                .iter()
                .any(|q| (q.x - p.x).abs() < VERTEX_EPSILON && (q.y - p.y).abs() < VERTEX_EPSILON);
            if !seen {
                points.push(p);
            }
        }
    }
    points
}

/// Shoelace area of a point set ordered by angle about its centroid.
///
/// The angular sort assumes the points outline a single polygon that is
/// star-shaped around its centroid. Non-convex or multiply-connected room
/// outlines produce an incorrect area; that limitation is accepted.
/// Returns 0 for fewer than three distinct points.
pub fn polygon_area(points: &[Point2D]) -> f64 {
    let mut pts: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        let seen = pts
            .iter()
            .any(|q| (q.x - p.x).abs() < VERTEX_EPSILON && (q.y - p.y).abs() < VERTEX_EPSILON);
        if !seen {
            pts.push(*p);
        }
    }
    if pts.len() < 3 {
        return 0.0;
    }

    let n = pts.len() as f64;
    let cx = pts.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = pts.iter().map(|p| p.y).sum::<f64>() / n;

    pts.sort_by(|a, b| {
        let ang_a = (a.y - cy).atan2(a.x - cx);
        let ang_b = (b.y - cy).atan2(b.x - cx);
        ang_a.total_cmp(&ang_b)
    });

    let mut sum = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    (sum / 2.0).abs()
}

/// Total wall run: the sum of every wall's length, duplicates included.
pub fn polygon_perimeter(walls: &[Wall]) -> f64 {
    walls.iter().map(wall_length).sum()
}

/// Parameter in [0, 1] of the point on segment `a`-`b` closest to `p`.
pub fn project_onto_segment(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return 0.0;
    }
    (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
}

/// Distance from `p` to the closest point of segment `a`-`b`.
pub fn point_to_segment_distance(p: Point2D, a: Point2D, b: Point2D) -> f64 {
    let t = project_onto_segment(p, a, b);
    let closest = Point2D::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    distance_2d(p, closest)
}
