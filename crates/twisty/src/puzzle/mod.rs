//! Puzzle model, capture engine, bandage rules and the move queue.
//!
//! Purpose
//! - Hold the loaded puzzle (pieces + generators), decide which pieces a move
//!   turns, veto illegal moves on bandaged puzzles, and serialise move
//!   application against piece animation.
//!
//! Data flow
//! - UI or notation → `Puzzle::enqueue` → `Puzzle::tick` pops one move when
//!   idle → bandage check → capture → compose rotation + start animation →
//!   renderer reads `Piece::render_transform` each frame.
//!
//! Per-puzzle special cases are routed through [`PuzzleKind`]; shared code
//! never compares puzzle names.

mod bandage;
mod capture;
pub mod catalog;
mod define;
mod kind;
mod model;
mod moves;
mod queue;
mod scramble;
mod special;
mod state;
mod types;

pub use bandage::ArrowCount;
pub use capture::{combine, CaptureSet};
pub use define::{
    CaptureNodeDef, GeneratorDef, LoadError, MarkerDef, PieceDef, PlaneDef, PuzzleDefinition,
    SpecialCaseDef, SpecialMoveDef, Xyz,
};
pub use kind::PuzzleKind;
pub use model::Puzzle;
pub use moves::{Move, MoveTag};
pub use queue::{AnimationCfg, MoveQueue};
pub use scramble::ScrambleCfg;
pub use special::{jumble_angle, SpecialModifier};
pub use state::{PermutationSnapshot, StateError};
pub use types::{
    Animation, CaptureNode, Generator, GeneratorId, Piece, PieceId, PieceMarker, SetOp,
    SpecialCaseData, SpecialMove,
};
