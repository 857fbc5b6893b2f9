//! Benchmarks for the layered solver.
//!
//! This benchmark suite measures `LayeredSolver::solve` on generated boards of
//! increasing size. Board generation happens outside the timed section.
//!
//! # Test Data
//!
//! Boards come from `PuzzleGenerator` with three fixed seeds per size:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use slidetile_generator::{PuzzleGenerator, PuzzleSeed};
use slidetile_solver::LayeredSolver;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const SIZES: [u8; 5] = [3, 4, 5, 7, 9];

fn bench_solve(c: &mut Criterion) {
    let solver = LayeredSolver::new();
    let mut group = c.benchmark_group("solve");

    for size in SIZES {
        let generator = PuzzleGenerator::new(size);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            let board = generator.generate_with_seed(seed).board;
            group.bench_with_input(
                BenchmarkId::new(format!("{size}x{size}"), format!("seed_{i}")),
                &board,
                |b, board| {
                    b.iter(|| {
                        let moves = solver.solve(hint::black_box(board)).unwrap();
                        hint::black_box(moves)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_solve
);
criterion_main!(benches);
