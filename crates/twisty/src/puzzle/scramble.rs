//! Random scrambles.
//!
//! Only generators with a pick point take part (the selectable ones). The same
//! generator is never drawn twice in a row when an alternative exists.
//! Scramble moves are untagged, so they stay out of undo/redo history.

use rand::Rng;

use super::model::Puzzle;
use super::moves::Move;
use super::types::GeneratorId;

/// Scramble length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrambleCfg {
    pub moves: usize,
}

impl Default for ScrambleCfg {
    fn default() -> Self {
        Self { moves: 100 }
    }
}

impl Puzzle {
    /// Generators eligible for scrambling.
    pub fn scramble_generators(&self) -> Vec<GeneratorId> {
        self.generator_ids()
            .filter(|id| self.generator(*id).pick_point.is_some())
            .collect()
    }

    /// Draw `cfg.moves` random untagged moves. Empty if no generator is eligible.
    pub fn scramble<R: Rng>(&self, rng: &mut R, cfg: ScrambleCfg) -> Vec<Move> {
        let eligible = self.scramble_generators();
        if eligible.is_empty() {
            return Vec::new();
        }
        let mut moves = Vec::with_capacity(cfg.moves);
        let mut last: Option<usize> = None;
        for _ in 0..cfg.moves {
            let mut k = rng.gen_range(0..eligible.len());
            if eligible.len() > 1 {
                while Some(k) == last {
                    k = rng.gen_range(0..eligible.len());
                }
            }
            last = Some(k);
            moves.push(Move::new(eligible[k], rng.gen_bool(0.5)));
        }
        moves
    }
}
