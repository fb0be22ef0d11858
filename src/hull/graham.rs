use lyon_geom::Point;

use super::{cross, polar_order, position_order};

/// Computes the convex hull of `points` with Graham's scan
///
/// Sorts by positional order to pick the anchor vertex, re-sorts by polar
/// angle around it, then sweeps once with a stack, popping any vertex that
/// fails to make a strict turn toward the incoming point. Collinear boundary
/// points are therefore dropped: only strictly convex vertices survive.
/// Vertices come back in counter-clockwise order (y-down frame) starting
/// from the anchor. The caller's slice is left untouched.
///
/// Based on the algorithm given in "Introduction to Algorithms," 3rd
/// edition, pp. 1031, Thomas H. Cormen et. al.
///
/// The input must hold at least 3 points that are not all collinear;
/// behavior is undefined otherwise. O(n log n) in the two sorts.
pub fn convex_hull(points: &[Point<f64>]) -> Vec<Point<f64>> {
    let mut points = points.to_vec();
    // Stable sorts keep ties in input order, like the source TimSort
    points.sort_by(|p1, p2| position_order(*p1, *p2));

    let anchor = points[0];

    // The anchor ranks equal to every point under its own polar order, so
    // leaving it in front and sorting the tail keeps the comparator a
    // strict weak order
    points[1..].sort_by(|p1, p2| polar_order(anchor, *p1, *p2));

    let mut hull = vec![anchor, points[1], points[2]];

    for &p in &points[3..] {
        // A non-negative cross product means the top of the stack bends the
        // wrong way (or not at all) on the way to p, so it cannot be a
        // convex vertex
        while hull.len() >= 3 && cross(p, hull[hull.len() - 2], hull[hull.len() - 1]) >= 0. {
            hull.pop();
        }
        hull.push(p);
    }

    hull
}
