#![forbid(unsafe_code)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rowdrag_core::{Activation, RowLayout, compute_displacements, resolve_target_index};
use std::hint::black_box;

fn layout(rows: usize) -> RowLayout {
    let heights: Vec<f64> = (0..rows).map(|i| 24.0 + (i % 3) as f64 * 8.0).collect();
    RowLayout::from_heights(&heights, rows / 2).expect("bench heights are valid")
}

fn bench_compute_displacements(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowdrag/displacement/frame");
    for rows in [16_usize, 256, 4096] {
        let layout = layout(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &layout, |b, layout| {
            b.iter(|| black_box(compute_displacements(layout, black_box(137.5))));
        });
    }
    group.finish();
}

fn bench_drag_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("rowdrag/displacement/sweep");

    group.bench_function("256_rows_120_moves_then_resolve", |b| {
        let rows: Vec<usize> = (0..256).collect();
        b.iter(|| {
            let mut activation =
                Activation::capture(rows.clone(), &128, |_| 28.0).expect("source present");
            for step in 0..120 {
                let changed = activation.update(f64::from(step) * 6.0);
                black_box(changed.len());
            }
            black_box(resolve_target_index(activation.movements(), 128))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_displacements, bench_drag_sweep);
criterion_main!(benches);
