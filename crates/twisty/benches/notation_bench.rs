//! Criterion benchmarks for notation expansion.
//! Focus sizes: repeat count in {1, 10, 100, 1000}.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use twisty::notation::Sequencer;
use twisty::puzzle::catalog::rubiks_cube;
use twisty::puzzle::Puzzle;

fn bench_notation(c: &mut Criterion) {
    let p = Puzzle::from_definition("RubiksCube", &rubiks_cube()).expect("builtin loads");
    let mut group = c.benchmark_group("notation");
    for &n in &[1usize, 10, 100, 1000] {
        let text = format!("{n}[R,U,R',U']");
        group.bench_with_input(BenchmarkId::new("repeat_group", n), &text, |b, text| {
            let mut seq = Sequencer::new();
            b.iter(|| seq.try_generate(text, &p).map(|m| m.len()))
        });

        let text = vec!["R,U',2{F,D},(L,B)~'"; n].join(",");
        group.bench_with_input(BenchmarkId::new("long_sequence", n), &text, |b, text| {
            let mut seq = Sequencer::new();
            b.iter(|| seq.try_generate(text, &p).map(|m| m.len()))
        });
    }

    group.bench_function("stored_and_axis", |b| {
        let mut seq = Sequencer::new();
        seq.try_generate("sexy = R,U,R',U'", &p)
            .expect("assignment parses");
        b.iter(|| seq.try_generate("6sexy,UR,RUF'", &p).map(|m| m.len()))
    });
    group.finish();
}

criterion_group!(benches, bench_notation);
criterion_main!(benches);
