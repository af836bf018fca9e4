//! One tracer shared across threads over one read-only grid.

use crossbeam_channel::unbounded;
use harmonia_core::Point2D;
use harmonia_path::{PathTracer, TraceConfig};
use harmonia_test_utils::GridFixture;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn tracer_is_send_and_sync() {
    assert_send_sync::<PathTracer>();
}

#[test]
fn concurrent_traces_match_sequential() {
    let mut fx = GridFixture::ramp(5, 12, 1.0, 0.0);
    for r in 0..5 {
        fx.lock(10, r, 10.0);
    }
    let grid = fx.view();
    let tracer = PathTracer::new(
        TraceConfig::default()
            .with_step_size(0.25)
            .with_cd_precision(0.5),
    )
    .unwrap();

    let (tx, rx) = unbounded();
    std::thread::scope(|s| {
        for row in 1..4u32 {
            let tx = tx.clone();
            let tracer = &tracer;
            s.spawn(move || {
                let start = Point2D::new(2.0, row as f32);
                tx.send((row, tracer.trace(&grid, start))).unwrap();
            });
        }
    });
    drop(tx);

    let mut results: Vec<_> = rx.iter().collect();
    results.sort_by_key(|(row, _)| *row);
    assert_eq!(results.len(), 3);
    for (row, result) in results {
        let path = result.unwrap();
        assert_eq!(path.len(), 31, "row {row}");
        assert_eq!(path.last(), Some(Point2D::new(9.5, row as f32)));
        assert_eq!(path, tracer.trace(&grid, Point2D::new(2.0, row as f32)).unwrap());
    }
}
