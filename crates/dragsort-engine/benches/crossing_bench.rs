#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use dragsort_core::geometry::testing::FixedRows;
use dragsort_engine::controller::Reorderer;
use std::hint::black_box;

const ROWS: usize = 1_000;
const ROW_HEIGHT: f64 = 10.0;

fn provider() -> FixedRows {
    FixedRows::new(ROWS, ROW_HEIGHT)
}

fn bench_move_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/move");
    let rows = provider();

    group.bench_function("quiescent_stream_128", |b| {
        let origin = ROWS / 2;
        let start = rows.natural_midpoint(origin);
        b.iter(|| {
            let mut reorderer = Reorderer::default();
            reorderer.on_grab(&rows, origin, start);
            for step in 0..128 {
                let wiggle = if step % 2 == 0 { 2.0 } else { -2.0 };
                black_box(reorderer.on_move(&rows, start + wiggle, wiggle));
            }
            black_box(reorderer.on_release())
        });
    });

    group.bench_function("single_event_full_sweep", |b| {
        let bottom = rows.natural_midpoint(ROWS - 1) + ROW_HEIGHT;
        b.iter(|| {
            let mut reorderer = Reorderer::default();
            reorderer.on_grab(&rows, 0, rows.natural_midpoint(0));
            black_box(reorderer.on_move(&rows, bottom, bottom));
            black_box(reorderer.on_release())
        });
    });

    group.bench_function("zigzag_one_row_128", |b| {
        let origin = ROWS / 2;
        let start = rows.natural_midpoint(origin);
        b.iter(|| {
            let mut reorderer = Reorderer::default();
            reorderer.on_grab(&rows, origin, start);
            for step in 0..128 {
                let (cursor, delta) = if step % 2 == 0 {
                    (start - 11.0, -12.0)
                } else {
                    (start + 1.0, 12.0)
                };
                black_box(reorderer.on_move(&rows, cursor, delta));
            }
            black_box(reorderer.on_release())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_move_stream);
criterion_main!(benches);
