//! Prints the control handles and smoothed outline of a square ring and an
//! open L-shaped path.
//!
//! Usage:
//! ```text
//! cargo run --example smooth                  # curvedness 1, skew 0
//! cargo run --example smooth -- 1.5 -0.5      # curvedness 1.5, skew -0.5
//! RUST_LOG=geosmooth=trace cargo run --example smooth
//! ```

use geosmooth::api::{geom_bezier_alpha_skew, geom_bezier_controls_alpha_skew};
use geosmooth::geometry::Geometry;
use geosmooth::math::Point2;

fn main() {
    // Default: WARN for everything, INFO for geosmooth.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geosmooth=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geosmooth=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let alpha = args.next().and_then(|a| a.parse().ok()).unwrap_or(1.0);
    let skew = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.0);
    tracing::info!(alpha, skew, "smoothing demo shapes");

    let shapes = [
        (
            "square ring",
            Geometry::area(vec![vec![
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
                Point2::new(0.0, 0.0),
            ]]),
        ),
        (
            "open L",
            Geometry::line(vec![vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
            ]]),
        ),
    ];

    for (name, geom) in &shapes {
        println!("== {name}");
        match geom_bezier_controls_alpha_skew(geom, alpha, skew) {
            Some(controls) => {
                for line in &controls.branches {
                    let [a, h] = [line.coords[0], line.coords[1]];
                    println!("  handle ({:.3}, {:.3}) -> ({:.3}, {:.3})", a.x, a.y, h.x, h.y);
                }
            }
            None => println!("  no handles"),
        }
        match geom_bezier_alpha_skew(geom, alpha, skew) {
            Some(smoothed) => {
                for p in smoothed.coords() {
                    println!("  {:.4} {:.4}", p.x, p.y);
                }
            }
            None => println!("  no result"),
        }
    }
}
