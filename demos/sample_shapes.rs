//! Samples every shape kind and logs what a plotting front end would draw.
//!
//! Usage:
//! ```text
//! cargo run --example sample_shapes                  # all shapes
//! cargo run --example sample_shapes -- hyperbola     # one shape
//! RUST_LOG=coordgeo=trace cargo run --example sample_shapes
//! ```

use coordgeo::geometry::{Circle, Ellipse, Hyperbola, Line, Orientation, Parabola, Triangle};
use coordgeo::math::Point2;
use coordgeo::tessellation::{SamplingParams, Tessellate};
use coordgeo::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for coordgeo and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=coordgeo=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sample_shapes=info".parse().unwrap_or_default())
        .add_directive("coordgeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let filter = std::env::args().nth(1);
    let params = SamplingParams::default();

    let shapes: Vec<(&str, Box<dyn Tessellate>)> = vec![
        (
            "line",
            Box::new(Line::new(Point2::new(0.0, 1.0), Point2::new(2.0, 2.0))),
        ),
        (
            "triangle",
            Box::new(Triangle::new(
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(0.0, 3.0),
            )?),
        ),
        ("circle", Box::new(Circle::new(Point2::new(1.0, -1.0), 2.5)?)),
        (
            "parabola",
            Box::new(Parabola::new(0.5, -1.0, 2.0, Orientation::Vertical)?),
        ),
        (
            "ellipse",
            Box::new(Ellipse::new(5.0, 3.0, 0.0, 0.0, Orientation::Horizontal)?),
        ),
        (
            "hyperbola",
            Box::new(Hyperbola::new(3.0, 4.0, 0.0, 0.0, Orientation::Horizontal)?),
        ),
    ];

    for (name, shape) in &shapes {
        if filter.as_deref().is_some_and(|f| f != *name) {
            continue;
        }
        let polylines = shape.tessellate(&params);
        let samples: usize = polylines.iter().map(|p| p.len()).sum();
        tracing::info!(shape = name, polylines = polylines.len(), samples, "sampled");
        for landmark in shape.landmarks() {
            tracing::info!(
                shape = name,
                label = landmark.label,
                x = landmark.point.x,
                y = landmark.point.y,
                "landmark"
            );
        }
    }

    Ok(())
}
