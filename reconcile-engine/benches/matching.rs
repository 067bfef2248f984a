//! FILENAME: reconcile-engine/benches/matching.rs
//! Benchmarks for the windowed best-effort matcher over large columns.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::Cell;
use reconcile_engine::{
    find_corresponding_cell_best_effort, find_corresponding_cells_best_effort,
};

/// A column of 10k cells with every third row filled.
fn large_column() -> Vec<Cell> {
    (0..10_000u32)
        .map(|y| {
            if y % 3 == 0 {
                Cell::new_text(1, y, format!("player{}", y))
            } else {
                Cell::new(1, y)
            }
        })
        .collect()
}

fn bench_single_match(c: &mut Criterion) {
    let candidates = large_column();
    let anchor = Cell::new_text(0, 5_000, "L1");

    c.bench_function("best_effort_single_10k", |b| {
        b.iter(|| {
            find_corresponding_cell_best_effort(black_box(&candidates), &anchor, 50, false)
        })
    });
}

fn bench_multi_match(c: &mut Criterion) {
    let candidates = large_column();
    let anchor = Cell::new_text(0, 5_000, "L1");

    c.bench_function("best_effort_multi_10k", |b| {
        b.iter(|| {
            find_corresponding_cells_best_effort(black_box(&candidates), &anchor, 50, true)
        })
    });
}

criterion_group!(benches, bench_single_match, bench_multi_match);
criterion_main!(benches);
