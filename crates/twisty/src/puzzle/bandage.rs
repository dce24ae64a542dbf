//! Bandage rules: predicates that veto a move on a bandaged puzzle.
//!
//! - Generic: any piece straddling the generator's raw region blocks the
//!   move, as does a capture count outside `[min, max]`.
//! - `ArrowLock`: the arrow table below replaces the generic rule entirely.
//!
//! Straddle detection always uses the generator's region, even when a capture
//! tree decides the captured set.

use super::kind::PuzzleKind;
use super::model::Puzzle;
use super::moves::Move;
use super::types::{GeneratorId, PieceId, PieceMarker};

/// Arrow pieces currently facing along a move axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowCount {
    pub black: usize,
    pub white: usize,
}

impl ArrowCount {
    /// Rule table: both colours allow either direction, black alone only
    /// forward, white alone only inverse, none allows everything.
    pub fn blocks(&self, inverse: bool) -> bool {
        match (self.black > 0, self.white > 0) {
            (true, true) => false,
            (true, false) => inverse,
            (false, true) => !inverse,
            (false, false) => false,
        }
    }
}

impl Puzzle {
    /// Whether the bandage rules for this puzzle kind veto `mv`.
    pub fn is_move_blocked(&self, mv: &Move) -> bool {
        match self.kind {
            PuzzleKind::ArrowLock => self.aligned_arrows(mv.generator).blocks(mv.inverse),
            PuzzleKind::Standard | PuzzleKind::WormHole | PuzzleKind::Copter => {
                self.generic_blocked(mv.generator)
            }
        }
    }

    fn generic_blocked(&self, id: GeneratorId) -> bool {
        if let Some(piece) = self.straddling_pieces(id).first() {
            tracing::trace!(generator = id.0, piece = piece.0, "piece straddles cut");
            return true;
        }
        let generator = self.generator(id);
        if generator.min_capture_count.is_some() || generator.max_capture_count.is_some() {
            let count = self.captured(id).len();
            if !generator.capture_count_allowed(count) {
                tracing::trace!(generator = id.0, count, "capture count out of bounds");
                return true;
            }
        }
        false
    }

    /// Pieces with current-pose samples strictly on both sides of the region.
    pub fn straddling_pieces(&self, id: GeneratorId) -> Vec<PieceId> {
        let region = &self.generator(id).region;
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.straddles(region, self.eps))
            .map(|(i, _)| PieceId(i))
            .collect()
    }

    /// Count arrow pieces whose current average normal matches the move axis.
    pub fn aligned_arrows(&self, id: GeneratorId) -> ArrowCount {
        let axis = self.generator(id).axis;
        let mut count = ArrowCount::default();
        for piece in &self.pieces {
            let (Some(marker), Some(normal)) = (piece.marker, piece.current_normal()) else {
                continue;
            };
            if (normal.dot(&axis) - 1.0).abs() >= self.eps {
                continue;
            }
            match marker {
                PieceMarker::BlackArrow => count.black += 1,
                PieceMarker::WhiteArrow => count.white += 1,
            }
        }
        count
    }
}
