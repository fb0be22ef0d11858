use lyon_geom::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
    None,
}

/// Classifies the turn taken by p → q → r
///
/// Negative cross products are right turns here, which is the mirror of the
/// convention the scan-based hull uses. The two predicates are deliberately
/// kept separate: folding them into one convention changes which collinear
/// boundary points each algorithm retains.
fn turn(p: Point<f64>, q: Point<f64>, r: Point<f64>) -> Turn {
    let angle = (q.x - p.x) * (r.y - p.y) - (r.x - p.x) * (q.y - p.y);
    if angle < 0. {
        Turn::Right
    } else if angle > 0. {
        Turn::Left
    } else {
        Turn::None
    }
}

/// Finds the hull vertex that follows `p`: the candidate every other point
/// lies to the left of, taking the farthest one when several are collinear
fn next_hull_point(points: &[Point<f64>], p: Point<f64>) -> Point<f64> {
    let mut q = p;
    for &r in points {
        let t = turn(p, q, r);
        if t == Turn::Right || (t == Turn::None && p.distance_to(r) > p.distance_to(q)) {
            q = r;
        }
    }
    q
}

/// Computes the convex hull of `points` by gift wrapping (Jarvis' march)
///
/// Starts from the leftmost point (first encountered on ties, strict `<`)
/// and wraps around the set, appending the most extreme next vertex until
/// the wrap closes on the starting point. Collinear boundary points are kept
/// only when farthest, so intermediate ones are skipped over.
///
/// Based on pseudocode written by Tom Switzer. See
/// <http://tomswitzer.net/2009/12/jarvis-march/>
///
/// The input must hold at least 3 points with no exact duplicates; a
/// duplicate of a hull vertex can keep the wrap from ever closing, so the
/// point supplier is responsible for avoiding them. O(n·h) for h hull
/// vertices.
pub fn convex_hull(points: &[Point<f64>]) -> Vec<Point<f64>> {
    let mut hull = vec![points[0]];
    for p in points {
        if p.x < hull[0].x {
            hull.clear();
            hull.push(*p);
        }
    }

    let mut i = 0;
    while i < hull.len() {
        let q = next_hull_point(points, hull[i]);
        if q != hull[0] {
            hull.push(q);
        }
        i += 1;
    }

    hull
}

#[cfg(test)]
mod tests {
    use lyon_geom::point;
    use pretty_assertions::assert_eq;

    use super::convex_hull;

    #[test]
    fn square_with_center_point_keeps_only_the_corners() {
        let points = [
            point(0., 0.),
            point(10., 0.),
            point(10., 10.),
            point(0., 10.),
            point(5., 5.),
        ];

        assert_eq!(
            convex_hull(&points),
            vec![
                point(0., 0.),
                point(10., 0.),
                point(10., 10.),
                point(0., 10.),
            ]
        );
    }

    #[test]
    fn collinear_points_reduce_to_the_extremes() {
        let points = [point(0., 0.), point(1., 1.), point(2., 2.)];

        assert_eq!(convex_hull(&points), vec![point(0., 0.), point(2., 2.)]);
    }

    #[test]
    fn convex_position_input_comes_back_whole() {
        let points = [
            point(4., 0.),
            point(8., 3.),
            point(6., 8.),
            point(2., 8.),
            point(0., 3.),
        ];

        assert_eq!(
            convex_hull(&points),
            vec![
                point(0., 3.),
                point(4., 0.),
                point(8., 3.),
                point(6., 8.),
                point(2., 8.),
            ]
        );
    }

    #[test]
    fn leftmost_tie_goes_to_the_first_point_scanned() {
        let points = [point(0., 5.), point(3., 1.), point(0., 1.), point(5., 4.)];

        assert_eq!(
            convex_hull(&points),
            vec![
                point(0., 5.),
                point(0., 1.),
                point(3., 1.),
                point(5., 4.),
            ]
        );
    }

    #[test]
    fn hull_vertices_come_from_the_input() {
        let points = vec![
            point(8., 3.),
            point(4., 0.),
            point(2., 8.),
            point(5., 5.),
            point(0., 3.),
            point(6., 8.),
        ];

        for vertex in convex_hull(&points) {
            assert!(points.contains(&vertex));
        }
    }
}
