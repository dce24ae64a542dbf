//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and benches. Breaking changes are
//! allowed.

// Geometry
pub use crate::geom::{max_abs_diff, rotation_about_point, Plane, Region, Side};
// Definitions and loading
pub use crate::puzzle::catalog::{builtin as builtin_puzzle, names as builtin_names};
pub use crate::puzzle::{LoadError, PuzzleDefinition, PuzzleKind};
// Runtime model
pub use crate::puzzle::{
    combine as combine_captures, AnimationCfg, CaptureSet, GeneratorId, Move, MoveTag, PieceId,
    Puzzle, ScrambleCfg, SpecialModifier,
};
// Persistence
pub use crate::puzzle::{PermutationSnapshot, StateError};
// Notation
pub use crate::notation::{ParseError, Sequencer};
