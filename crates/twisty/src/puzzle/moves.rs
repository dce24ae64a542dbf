//! Moves and their application to piece transforms.

use crate::geom::rotation_about_point;

use super::model::Puzzle;
use super::types::GeneratorId;

/// Which history stack a successfully applied move lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveTag {
    /// Push onto the undo stack.
    History,
    /// Push onto the front of the redo stack.
    Future,
}

/// One turn of one generator. Untagged moves (scrambles) are not recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub generator: GeneratorId,
    pub inverse: bool,
    pub override_angle: Option<f64>,
    pub tag: Option<MoveTag>,
}

impl Move {
    #[inline]
    pub fn new(generator: GeneratorId, inverse: bool) -> Self {
        Self {
            generator,
            inverse,
            override_angle: None,
            tag: None,
        }
    }

    #[inline]
    pub fn with_tag(mut self, tag: MoveTag) -> Self {
        self.tag = Some(tag);
        self
    }

    #[inline]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.override_angle = Some(angle);
        self
    }

    /// Flip the direction; geometry is not recomputed.
    #[inline]
    pub fn invert(&mut self) {
        self.inverse = !self.inverse;
    }

    #[inline]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }
}

impl Puzzle {
    /// Rotation angle a move composes into piece transforms:
    /// `-angle` for a forward move, `+angle` for an inverse one.
    pub fn signed_angle(&self, mv: &Move) -> f64 {
        let angle = mv
            .override_angle
            .unwrap_or_else(|| self.generator(mv.generator).angle);
        if mv.inverse {
            angle
        } else {
            -angle
        }
    }

    /// Apply `mv`: veto check, then compose the rotation into every captured
    /// piece and start its animation. Returns `false` (no mutation) if blocked.
    ///
    /// Panics if any piece is still animating; callers gate on
    /// [`Puzzle::is_animating`].
    pub fn apply(&mut self, mv: &Move) -> bool {
        assert!(
            !self.is_animating(),
            "move applied while the puzzle is animating"
        );
        if self.bandaged && self.is_move_blocked(mv) {
            tracing::debug!(generator = mv.generator.0, inverse = mv.inverse, "move blocked");
            return false;
        }

        let angle = self.signed_angle(mv);
        let generator = self.generator(mv.generator);
        let (center, axis) = (generator.center, generator.axis);
        let rotation = rotation_about_point(&center, &axis, angle);

        let captured = self.captured(mv.generator);
        for id in &captured {
            let piece = &mut self.pieces[id.0];
            piece.permutation = rotation * piece.permutation;
            piece.animation.center = center;
            piece.animation.axis = axis;
            piece.animation.angle = -angle;
        }
        tracing::trace!(
            generator = mv.generator.0,
            inverse = mv.inverse,
            captured = captured.len(),
            "move applied"
        );
        true
    }
}
