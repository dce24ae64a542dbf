//! Capture engine: which pieces a generator turns right now.
//!
//! Algorithm
//! - Capture tree present: evaluate it bottom-up; leaves are the *direct*
//!   captures of the referenced generators, internal nodes combine child sets.
//! - Otherwise: direct capture, i.e. pieces whose current centre is strictly
//!   inside the generator's region (`CAPTURE_EPS`, boundary excluded), plus
//!   the kind-specific extension (`WormHole` core group).
//!
//! Sets are fresh `BTreeSet`s per evaluation (ordered by piece index), so the
//! engine never shares mutable collections between calls.

use std::collections::BTreeSet;

use crate::geom::cfg::CAPTURE_EPS;
use crate::geom::Side;

use super::kind::PuzzleKind;
use super::model::Puzzle;
use super::types::{CaptureNode, GeneratorId, PieceId, SetOp};

pub type CaptureSet = BTreeSet<PieceId>;

/// Number of trailing generators forming the `WormHole` core group.
const CORE_GROUP_LEN: usize = 3;

impl Puzzle {
    /// Pieces whose current centre is strictly inside the generator's region.
    pub fn direct_capture(&self, id: GeneratorId) -> CaptureSet {
        let region = &self.generator(id).region;
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| region.classify(&piece.current_center(), CAPTURE_EPS) == Side::Inside)
            .map(|(i, _)| PieceId(i))
            .collect()
    }

    /// Pieces a move of `id` turns.
    pub fn captured(&self, id: GeneratorId) -> CaptureSet {
        if let Some(root) = &self.generator(id).capture_tree {
            return self.evaluate_capture_tree(root);
        }
        match self.kind {
            PuzzleKind::WormHole => self.wormhole_capture(id),
            PuzzleKind::Standard | PuzzleKind::ArrowLock | PuzzleKind::Copter => {
                self.direct_capture(id)
            }
        }
    }

    pub fn evaluate_capture_tree(&self, node: &CaptureNode) -> CaptureSet {
        match node {
            CaptureNode::Leaf(id) => self.direct_capture(*id),
            CaptureNode::Op { op, children } => {
                let sets: Vec<CaptureSet> = children
                    .iter()
                    .map(|child| self.evaluate_capture_tree(child))
                    .collect();
                combine(*op, &sets)
            }
        }
    }

    /// Direct capture, extended by the best-aligned core generator's capture
    /// whenever the set holds a single-triangle core piece.
    fn wormhole_capture(&self, id: GeneratorId) -> CaptureSet {
        let mut set = self.direct_capture(id);
        let holds_core = set
            .iter()
            .any(|piece| self.pieces[piece.0].triangle_count == 1);
        if !holds_core || self.generators.len() < CORE_GROUP_LEN {
            return set;
        }
        let axis = self.generator(id).axis;
        let first = self.generators.len() - CORE_GROUP_LEN;
        let core = (first..self.generators.len())
            .map(GeneratorId)
            .min_by(|a, b| {
                let score = |g: &GeneratorId| (self.generator(*g).axis.dot(&axis).abs() - 1.0).abs();
                score(a).total_cmp(&score(b))
            });
        if let Some(core) = core {
            set.extend(self.direct_capture(core));
        }
        set
    }
}

/// Combine child sets; `Subtract` keeps elements of the first set found in no other.
pub fn combine(op: SetOp, sets: &[CaptureSet]) -> CaptureSet {
    let Some((first, rest)) = sets.split_first() else {
        return CaptureSet::new();
    };
    match op {
        SetOp::Union => sets.iter().flatten().copied().collect(),
        SetOp::Intersection => first
            .iter()
            .filter(|p| rest.iter().all(|s| s.contains(p)))
            .copied()
            .collect(),
        SetOp::Subtract => first
            .iter()
            .filter(|p| !rest.iter().any(|s| s.contains(p)))
            .copied()
            .collect(),
    }
}
