//! Subcommand bodies. Each returns a serialisable summary that `main` prints.

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use twisty::notation::Sequencer;
use twisty::puzzle::catalog;
use twisty::puzzle::{PermutationSnapshot, Puzzle, PuzzleDefinition, PuzzleKind, ScrambleCfg};

use crate::provenance::{write_sidecar, Payload};

/// Load a puzzle from a definition file, or by builtin name.
pub fn load_puzzle(spec: &str) -> Result<Puzzle> {
    let path = Path::new(spec);
    if path.is_file() {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let def = PuzzleDefinition::from_json(&text)
            .with_context(|| format!("parsing puzzle definition {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| spec.to_string());
        return Puzzle::from_definition(&name, &def)
            .with_context(|| format!("building puzzle from {}", path.display()));
    }
    match catalog::builtin(spec) {
        Some(def) => Puzzle::from_definition(spec, &def)
            .with_context(|| format!("building builtin puzzle {spec}")),
        None => bail!(
            "no puzzle file or builtin named {spec} (builtins: {})",
            catalog::names().join(", ")
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub name: String,
    pub kind: PuzzleKind,
    pub pieces: usize,
    pub generators: usize,
    pub pickable: usize,
    pub labels: Vec<String>,
    pub bandaged: bool,
    pub eps: f64,
}

pub fn check(spec: &str) -> Result<CheckSummary> {
    let p = load_puzzle(spec)?;
    Ok(CheckSummary {
        name: p.name.clone(),
        kind: p.kind,
        pieces: p.pieces.len(),
        generators: p.generators.len(),
        pickable: p.pick_points().count(),
        labels: p.generators.iter().filter_map(|g| g.label.clone()).collect(),
        bandaged: p.bandaged,
        eps: p.eps,
    })
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub generated: usize,
    pub applied: usize,
    pub blocked: usize,
    pub ticks: usize,
    pub solved: bool,
}

pub fn run(spec: &str, sequence: &str, bandaged: bool, out: Option<&Path>) -> Result<RunSummary> {
    let mut p = load_puzzle(spec)?;
    p.bandaged |= bandaged;
    let moves = Sequencer::new()
        .try_generate(sequence, &p)
        .with_context(|| format!("parsing move sequence {sequence:?}"))?;
    let generated = moves.len();
    p.enqueue(moves);
    let ticks = p.run_until_idle(usize::MAX);
    let applied = p.queue.undo.len();
    tracing::info!(generated, applied, ticks, "sequence applied");
    if let Some(out) = out {
        write_snapshot(
            &p,
            out,
            Payload::new(
                "run",
                p.name.clone(),
                json!({"sequence": sequence, "bandaged": p.bandaged}),
            ),
        )?;
    }
    Ok(RunSummary {
        generated,
        applied,
        blocked: generated - applied,
        ticks,
        solved: p.is_solved(),
    })
}

#[derive(Debug, Serialize)]
pub struct ScrambleSummary {
    pub seed: u64,
    pub moves: usize,
    pub solved: bool,
}

pub fn scramble(
    spec: &str,
    seed: Option<u64>,
    moves: usize,
    out: Option<&Path>,
) -> Result<ScrambleSummary> {
    let mut p = load_puzzle(spec)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let seq = p.scramble(&mut rng, ScrambleCfg { moves });
    let moves = seq.len();
    p.enqueue(seq);
    p.run_until_idle(usize::MAX);
    tracing::info!(seed, moves, "scrambled");
    if let Some(out) = out {
        write_snapshot(
            &p,
            out,
            Payload::new("scramble", p.name.clone(), json!({"seed": seed, "moves": moves})),
        )?;
    }
    Ok(ScrambleSummary {
        seed,
        moves,
        solved: p.is_solved(),
    })
}

#[derive(Debug, Serialize)]
pub struct RestoreSummary {
    pub snapshot_puzzle: String,
    pub pieces: usize,
    pub solved: bool,
}

pub fn restore(spec: &str, state: &Path) -> Result<RestoreSummary> {
    let mut p = load_puzzle(spec)?;
    let text =
        fs::read_to_string(state).with_context(|| format!("reading {}", state.display()))?;
    let snapshot = PermutationSnapshot::from_json(&text)
        .with_context(|| format!("parsing snapshot {}", state.display()))?;
    if snapshot.puzzle != p.name {
        tracing::warn!(snapshot = %snapshot.puzzle, puzzle = %p.name, "snapshot names another puzzle");
    }
    p.restore(&snapshot)
        .with_context(|| format!("restoring {} onto {}", state.display(), p.name))?;
    Ok(RestoreSummary {
        snapshot_puzzle: snapshot.puzzle,
        pieces: p.pieces.len(),
        solved: p.is_solved(),
    })
}

fn write_snapshot(p: &Puzzle, out: &Path, payload: Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = p.snapshot().to_json().context("serialising snapshot")?;
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), "wrote snapshot");
    Ok(())
}
