use std::cmp::Ordering;

use lyon_geom::Point;

pub mod graham;
pub mod jarvis;

/// Z-component of the cross product of the vectors (p1 - p0) and (p2 - p0)
///
/// Positive when p0 → p1 → p2 sweeps counter-clockwise, negative when it
/// sweeps clockwise, and exactly zero when the three points are collinear
/// (in particular whenever two of them coincide).
pub fn cross(p0: Point<f64>, p1: Point<f64>, p2: Point<f64>) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

fn sign(angle: f64) -> Ordering {
    if angle < 0. {
        Ordering::Less
    } else if angle > 0. {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Positional order over points: the cross formation of the two points taken
/// against the implicit origin, i.e. p1.x·p2.y compared with p1.y·p2.x
///
/// This is NOT a lexicographic (x, y) order. It ranks points by angle around
/// (0, 0), which changes which point ends up as the Graham scan anchor for
/// some inputs, so callers must not substitute a coordinate order for it.
pub fn position_order(p1: Point<f64>, p2: Point<f64>) -> Ordering {
    sign(p1.x * p2.y - p1.y * p2.x)
}

/// Polar-angle order around `origin`
///
/// Two points collinear with the origin rank equal, so sorting with this
/// comparator must be stable for their relative order to be deterministic.
pub fn polar_order(origin: Point<f64>, p1: Point<f64>, p2: Point<f64>) -> Ordering {
    sign(cross(origin, p1, p2))
}
