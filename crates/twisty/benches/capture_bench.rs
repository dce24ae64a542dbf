//! Criterion benchmarks for capture and bandage checks on scrambled cubes.
//! Focus sizes: scramble length in {0, 10, 100, 1000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use twisty::puzzle::catalog::{bandaged_cube, rubiks_cube};
use twisty::puzzle::{Move, Puzzle, PuzzleDefinition, ScrambleCfg};

fn scrambled(def: &PuzzleDefinition, moves: usize, seed: u64) -> Puzzle {
    let mut p = Puzzle::from_definition("bench", def).expect("builtin definition loads");
    let mut rng = StdRng::seed_from_u64(seed);
    let seq = p.scramble(&mut rng, ScrambleCfg { moves });
    p.enqueue(seq);
    p.run_until_idle(usize::MAX);
    p
}

fn bench_capture(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture");
    let plain = rubiks_cube();
    let bandaged = bandaged_cube();
    for &n in &[0usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("captured_all", n), &n, |b, &n| {
            let p = scrambled(&plain, n, 41);
            b.iter(|| {
                p.generator_ids()
                    .map(|id| p.captured(id).len())
                    .sum::<usize>()
            })
        });

        group.bench_with_input(BenchmarkId::new("bandage_veto", n), &n, |b, &n| {
            let p = scrambled(&bandaged, n, 42);
            b.iter(|| {
                p.generator_ids()
                    .filter(|&id| p.is_move_blocked(&Move::new(id, false)))
                    .count()
            })
        });
    }

    group.bench_function("apply_and_settle", |b| {
        b.iter_batched(
            || {
                let mut p = scrambled(&plain, 0, 0);
                let mut rng = StdRng::seed_from_u64(43);
                let seq = p.scramble(&mut rng, ScrambleCfg { moves: 20 });
                p.enqueue(seq);
                p
            },
            |mut p| p.run_until_idle(usize::MAX),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_capture);
criterion_main!(benches);
