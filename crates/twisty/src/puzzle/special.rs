//! Compound "jumble" moves of the copter family.
//!
//! A compound move turns the two secondary generators of the chosen special
//! move by the jumble angle, turns the primary generator, then turns the two
//! secondaries back. Modifier intent is an explicit parameter; nothing here
//! reads ambient key state.

use nalgebra::Vector3;

use super::model::Puzzle;
use super::moves::{Move, MoveTag};
use super::types::GeneratorId;

/// Which special move a held modifier selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialModifier {
    /// `special_move_a`, positive jumble angle.
    Shift,
    /// `special_move_b`, negative jumble angle.
    Ctrl,
}

/// Angle between edge axes (1,0,1) and (0,1,1) seen along the edge axis (1,1,0).
pub fn jumble_angle() -> f64 {
    let n = Vector3::<f64>::new(1.0, 1.0, 0.0).normalize();
    let a = Vector3::<f64>::new(1.0, 0.0, 1.0);
    let b = Vector3::<f64>::new(0.0, 1.0, 1.0);
    let a_rejected = (a - n * a.dot(&n)).normalize();
    let b_rejected = (b - n * b.dot(&n)).normalize();
    a_rejected.dot(&b_rejected).clamp(-1.0, 1.0).acos()
}

impl Puzzle {
    /// Five-move compound sequence for `id`, or empty when the puzzle kind or
    /// generator has no special moves.
    pub fn compound_move(
        &self,
        id: GeneratorId,
        modifier: SpecialModifier,
        inverse: bool,
    ) -> Vec<Move> {
        if !self.kind.supports_compound_moves() {
            return Vec::new();
        }
        let Some(special) = self.generator(id).special else {
            return Vec::new();
        };
        let (pair, scale) = match modifier {
            SpecialModifier::Shift => (special.move_a, 1.0),
            SpecialModifier::Ctrl => (special.move_b, -1.0),
        };
        let angle = jumble_angle() * scale;
        let turn = |g: GeneratorId, a: f64| {
            Move::new(g, false)
                .with_angle(a)
                .with_tag(MoveTag::History)
        };
        vec![
            turn(pair.generator_a, angle),
            turn(pair.generator_b, angle),
            Move::new(id, inverse).with_tag(MoveTag::History),
            turn(pair.generator_a, -angle),
            turn(pair.generator_b, -angle),
        ]
    }
}
