//! Run a synthetic three-frame burst through the engine.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p vigil-engine --example burst_analysis
//! ```

use vigil_engine::{evaluate, AnalysisConfig};
use vigil_models::{BoundingBox, FrameDetections, RawDetection, Region};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    // A person loitering near a doorway while a car drives through.
    let person = |x1: f64| RawDetection::new("person", 0.87, BoundingBox::new(x1, 120.0, x1 + 60.0, 320.0));
    let car = |x1: f64| RawDetection::new("car", 0.93, BoundingBox::new(x1, 200.0, x1 + 180.0, 290.0));

    let frames = vec![
        FrameDetections::new(1280, 720, vec![person(400.0), car(0.0)]),
        FrameDetections::new(1280, 720, vec![person(404.0), car(150.0)]),
        FrameDetections::new(1280, 720, vec![person(407.0), car(300.0)]),
    ];

    // Watch the left two-thirds of the frame.
    let region = Region::from_points(vec![[0.0, 0.0], [0.66, 0.0], [0.66, 1.0], [0.0, 1.0]])
        .expect("region has three or more vertices");

    let decision = evaluate(&frames, Some(&region), &AnalysisConfig::default());
    println!(
        "{}",
        serde_json::to_string_pretty(&decision).expect("decision serializes")
    );
}
