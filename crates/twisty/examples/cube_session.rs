//! Scripted cube session timing probe.
//!
//! Purpose
//! - Exercise the full loop a UI drives: scramble, notation, undo/redo,
//!   animation ticks and a snapshot round trip, on the builtin cube.
//! - Print tick counts and wall-clock timings as a quick sanity data point.
//!
//! Run: `cargo run -p twisty --example cube_session`

use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use twisty::notation::Sequencer;
use twisty::puzzle::catalog::rubiks_cube;
use twisty::puzzle::{PermutationSnapshot, Puzzle, ScrambleCfg};

const MAX_TICKS: usize = 1_000_000;

fn main() {
    let mut cube = Puzzle::from_definition("RubiksCube", &rubiks_cube()).expect("builtin loads");
    let mut seq = Sequencer::new();

    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(7);
    let scramble = cube.scramble(&mut rng, ScrambleCfg { moves: 25 });
    cube.enqueue(scramble);
    let scramble_ticks = cube.run_until_idle(MAX_TICKS);
    let scrambled = cube.snapshot();
    println!(
        "scramble_moves=25 ticks={scramble_ticks} solved={}",
        cube.is_solved()
    );

    seq.generate("sexy = R,U,R',U'", &cube);
    let moves = seq.generate("6sexy", &cube);
    let n_moves = moves.len();
    cube.enqueue(moves);
    let notation_ticks = cube.run_until_idle(MAX_TICKS);
    println!("notation_moves={n_moves} ticks={notation_ticks}");

    let mut undone = 0;
    while cube.undo() {
        cube.run_until_idle(MAX_TICKS);
        undone += 1;
    }
    println!(
        "undone={undone} redo_len={} drift_from_scramble={:.3e}",
        cube.queue.redo.len(),
        drift(&cube.snapshot(), &scrambled)
    );

    let text = scrambled.to_json().expect("snapshot serialises");
    let restored = PermutationSnapshot::from_json(&text).expect("snapshot parses");
    let mut fresh = Puzzle::from_definition("RubiksCube", &rubiks_cube()).expect("builtin loads");
    fresh.restore(&restored).expect("snapshot fits");
    println!("restored_solved={}", fresh.is_solved());
    println!("elapsed_ms={:.3}", start.elapsed().as_secs_f64() * 1e3);
}

fn drift(a: &PermutationSnapshot, b: &PermutationSnapshot) -> f64 {
    a.transforms
        .iter()
        .zip(&b.transforms)
        .flat_map(|(x, y)| x.iter().zip(y).map(|(p, q)| (p - q).abs()))
        .fold(0.0, f64::max)
}
