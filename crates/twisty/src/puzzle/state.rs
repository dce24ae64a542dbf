//! Solved check and permutation snapshots for the persistence layer.

use std::fmt;

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use super::model::Puzzle;

/// Serializable state: one column-major 4x4 transform per piece.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermutationSnapshot {
    pub puzzle: String,
    pub transforms: Vec<[f64; 16]>,
}

#[derive(Debug)]
pub enum StateError {
    Json(serde_json::Error),
    LengthMismatch { expected: usize, found: usize },
    NonFinite { piece: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Json(err) => write!(f, "malformed snapshot: {err}"),
            StateError::LengthMismatch { expected, found } => write!(
                f,
                "snapshot has {found} transforms but the puzzle has {expected} pieces"
            ),
            StateError::NonFinite { piece } => {
                write!(f, "snapshot transform for piece {piece} is not finite")
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StateError {
    fn from(err: serde_json::Error) -> Self {
        StateError::Json(err)
    }
}

impl PermutationSnapshot {
    pub fn from_json(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Puzzle {
    /// Every piece at its solved pose (max-abs `SOLVED_EPS` from identity).
    ///
    /// Puzzles with several indistinguishable solved states, or a whole-puzzle
    /// rotation, report unsolved.
    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(|piece| piece.is_solved())
    }

    pub fn snapshot(&self) -> PermutationSnapshot {
        let transforms = self
            .pieces
            .iter()
            .map(|piece| {
                let mut out = [0.0; 16];
                out.copy_from_slice(piece.permutation.as_slice());
                out
            })
            .collect();
        PermutationSnapshot {
            puzzle: self.name.clone(),
            transforms,
        }
    }

    /// Overwrite every piece transform from `snapshot`.
    ///
    /// Only the transform count and finiteness are checked; the puzzle name is
    /// informational. In-flight animations are dropped.
    pub fn restore(&mut self, snapshot: &PermutationSnapshot) -> Result<(), StateError> {
        if snapshot.transforms.len() != self.pieces.len() {
            return Err(StateError::LengthMismatch {
                expected: self.pieces.len(),
                found: snapshot.transforms.len(),
            });
        }
        if let Some(piece) = snapshot
            .transforms
            .iter()
            .position(|m| m.iter().any(|x| !x.is_finite()))
        {
            return Err(StateError::NonFinite { piece });
        }
        for (piece, m) in self.pieces.iter_mut().zip(&snapshot.transforms) {
            piece.permutation = Matrix4::from_column_slice(m);
        }
        self.finish_animations();
        Ok(())
    }
}
