//! Benchmarks for grid construction, lookups and rendering.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqgrid::{Direction, Grid};

const SIZES: [usize; 3] = [100, 10_000, 100_000];

/// Benchmark layout in both directions across source sizes
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        for direction in Direction::ALL {
            group.bench_with_input(
                BenchmarkId::new(direction.as_str(), size),
                &size,
                |b, &size| {
                    b.iter(|| Grid::new(black_box(0..size), 12, direction).expect("valid layout"))
                },
            );
        }
    }

    group.finish();
}

/// Benchmark row, column and cell queries on a large grid
fn bench_queries(c: &mut Criterion) {
    let grid = Grid::vertical(0..100_000usize, 12).expect("valid layout");
    let rows = grid.num_rows();

    c.bench_function("cell_lookup", |b| {
        b.iter(|| {
            for row in (1..=rows).step_by(97) {
                black_box(grid.cell(row, 5).ok());
            }
        })
    });

    c.bench_function("column_sum", |b| {
        b.iter(|| grid.column(black_box(7)).unwrap().iter().sum::<usize>())
    });

    c.bench_function("rows_walk", |b| {
        b.iter(|| grid.rows().map(|row| row.len()).sum::<usize>())
    });
}

/// Benchmark text rendering and JSON snapshots
fn bench_output(c: &mut Criterion) {
    let grid = Grid::horizontal(0..10_000usize, 8).expect("valid layout");

    c.bench_function("render_10k", |b| b.iter(|| black_box(grid.render())));

    c.bench_function("json_10k", |b| {
        b.iter(|| serde_json::to_string(black_box(&grid)).expect("serializable"))
    });
}

criterion_group!(benches, bench_construction, bench_queries, bench_output);
criterion_main!(benches);
