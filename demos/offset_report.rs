//! Offsets and clips a few sample shapes and logs what comes out.
//!
//! Usage:
//! ```text
//! cargo run --example offset_report
//! RUST_LOG=polykernel=debug cargo run --example offset_report
//! ```

use polykernel::math::polygon_2d::{area_paths, make_path, reverse_path};
use polykernel::{inflate_paths, rect_clip, EndType, JoinType, Paths64, Rect64};
use tracing::info;

fn report(name: &str, paths: &Paths64) {
    let vertices: usize = paths.iter().map(Vec::len).sum();
    info!(name, paths = paths.len(), vertices, area = area_paths(paths), "result");
}

fn main() {
    // Default: WARN for everything, INFO for polykernel and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polykernel=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("offset_report=info".parse().unwrap_or_default())
        .add_directive("polykernel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let outer = make_path(&[0, 0, 100, 0, 100, 100, 0, 100]);
    let hole = reverse_path(&make_path(&[30, 30, 70, 30, 70, 70, 30, 70]));
    let subject = vec![outer, hole];

    for join in [JoinType::Square, JoinType::Round, JoinType::Miter, JoinType::Bevel] {
        for delta in [-10.0, 10.0, 25.0] {
            let result = inflate_paths(&subject, delta, join, EndType::Polygon, 2.0, 0.25);
            report(&format!("{join:?} {delta:+}"), &result);
        }
    }

    let line = vec![make_path(&[0, 0, 60, 40, 120, 0])];
    for end in [EndType::Butt, EndType::Square, EndType::Round, EndType::Joined] {
        let result = inflate_paths(&line, 8.0, JoinType::Round, end, 2.0, 0.25);
        report(&format!("open {end:?}"), &result);
    }

    for rect in [Rect64::new(20, 20, 80, 80), Rect64::new(40, 40, 60, 60), Rect64::new(-50, 50, 50, 150)] {
        let result = rect_clip(&rect, &subject);
        report(&format!("clip {rect:?}"), &result);
    }
}
