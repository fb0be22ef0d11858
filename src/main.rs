use std::{fs, io, path::PathBuf, time::Instant};

use clap::{Parser, ValueEnum};
use lyon_geom::point;
use rand::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod hull;
mod render;

/// Computes the convex hull of randomly generated points, a fixed number of
/// iterations in a row, and reports timing statistics. Each iteration can
/// optionally be rendered as an SVG frame.
#[derive(Debug, Parser)]
#[command(about)]
struct Opt {
    /// Number of points to include in each iteration (at least 3)
    points: usize,

    /// Number of iterations to compute
    iterations: usize,

    /// Hull algorithm to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Render the result of each iteration
    #[arg(short, long)]
    display: bool,

    /// Directory for rendered frames (created if missing)
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Graham's scan: sort by angle, sweep once with a stack
    Graham,
    /// Jarvis' march: gift-wrap vertex by vertex
    Jarvis,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hullbench=info")),
        )
        .init();
    let opt = Opt::parse();

    if opt.display {
        fs::create_dir_all(&opt.out)?;
    }

    let mut rng = thread_rng();

    let start = Instant::now();
    let mut total_hull_points = 0usize;
    for i in 0..opt.iterations {
        // Keep points clear of the frame edges. f64 coordinates make exact
        // duplicates unlikely, which Jarvis' march depends on.
        let points = (0..opt.points)
            .map(|_| {
                point(
                    rng.gen_range(10.0..render::WIDTH - 10.),
                    rng.gen_range(35.0..render::HEIGHT - 10.),
                )
            })
            .collect::<Vec<_>>();

        let hull = match opt.algorithm {
            Algorithm::Graham => hull::graham::convex_hull(&points),
            Algorithm::Jarvis => hull::jarvis::convex_hull(&points),
        };
        total_hull_points += hull.len();

        if opt.display {
            render::render_frame(&points, &hull, opt.out.join(format!("hull-{i:04}.svg")));
        }
    }
    let duration = start.elapsed();

    info!("Total time elapsed: {}ms", duration.as_millis());
    info!(
        "Average time per iteration: {}ms",
        duration.as_millis() as f64 / opt.iterations as f64
    );
    info!(
        "Average number of hull points: {}",
        total_hull_points as f64 / opt.iterations as f64
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Opt;

    #[test]
    fn cli_is_well_formed() {
        Opt::command().debug_assert();
    }
}
