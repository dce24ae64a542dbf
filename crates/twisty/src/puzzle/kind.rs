//! Closed set of per-puzzle strategies, selected by puzzle name.
//!
//! Every puzzle-specific rule dispatches on [`PuzzleKind`] instead of comparing
//! names at the call site.

use serde::{Deserialize, Serialize};

use crate::geom::cfg::DEFAULT_EPS;

/// Capture/bandage/compound-move strategy of a puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// Generic capture and bandage rules.
    #[default]
    Standard,
    /// Captures that include a single-triangle core piece also drag in the
    /// core group best aligned with the move axis.
    WormHole,
    /// Bandage check replaced by the black/white arrow rule table.
    ArrowLock,
    /// Generators may carry compound "jumble" moves.
    Copter,
}

impl PuzzleKind {
    /// Strategy for a puzzle name; unknown names get `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "WormHoleII" => PuzzleKind::WormHole,
            "ArrowLock" | "ArrowLockCube" => PuzzleKind::ArrowLock,
            "CurvyCopter" | "CurvyCopterPlus" | "HelicopterCube" | "FlowerCopter" => {
                PuzzleKind::Copter
            }
            _ => PuzzleKind::Standard,
        }
    }

    /// Bandage tolerance used when the definition carries no `eps`.
    pub fn default_eps(self) -> f64 {
        match self {
            PuzzleKind::Standard
            | PuzzleKind::WormHole
            | PuzzleKind::ArrowLock
            | PuzzleKind::Copter => DEFAULT_EPS,
        }
    }

    #[inline]
    pub fn supports_compound_moves(self) -> bool {
        matches!(self, PuzzleKind::Copter)
    }
}
