use std::path::PathBuf;

use cairo::{Context, SvgSurface};
use lyon_geom::Point;
use tracing::debug;

/// Frame dimensions, shared with the point generator so every point lands
/// inside the rendered area
pub const WIDTH: f64 = 800.;
pub const HEIGHT: f64 = 600.;

const POINT_RADIUS: f64 = 2.;

/// Draws one iteration's point set and its hull to an SVG file: points as
/// small filled circles, the hull as a closed polygon through its vertices
/// in order. Each (points, hull) pair is rendered as one whole frame.
pub fn render_frame(points: &[Point<f64>], hull: &[Point<f64>], path: PathBuf) {
    debug!("Draw to svg");
    let surf = SvgSurface::new(WIDTH, HEIGHT, Some(path)).unwrap();
    let ctx = Context::new(&surf).unwrap();

    ctx.set_source_rgb(1., 1., 1.);
    ctx.rectangle(0., 0., WIDTH, HEIGHT);
    ctx.fill().unwrap();

    ctx.set_source_rgb(0., 0., 0.);
    for point in points {
        ctx.move_to(point.x, point.y);
        ctx.arc(point.x, point.y, POINT_RADIUS, 0., std::f64::consts::TAU);
    }
    ctx.fill().unwrap();

    if let Some(first) = hull.first() {
        ctx.move_to(first.x, first.y);
    }
    for point in hull.iter().skip(1) {
        ctx.line_to(point.x, point.y);
    }
    ctx.close_path();
    ctx.stroke().unwrap();

    surf.finish();
}
