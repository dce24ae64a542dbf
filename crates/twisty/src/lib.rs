//! Twisty puzzle engine.
//!
//! A puzzle is a set of rigid pieces and a set of generators (rotations about
//! an axis through a centre, restricted to a region of half-spaces). The
//! engine decides which pieces a generator captures, vetoes moves that would
//! tear bandaged blocks, keeps undo/redo history and interleaves move
//! application with piece animation.
//!
//! Modules
//! - `geom`: planes, regions and rotation matrices.
//! - `puzzle`: definitions, the `Puzzle` aggregate, capture, bandaging, moves.
//! - `notation`: move-sequence text (`R,U,R',U'`, `2{R,U}`) into moves.
//!
//! API Policy
//! - The crate serves the `twisty` CLI and the benches; there is no stable
//!   public API. `api` and `prelude` collect the names callers use most.

pub mod api;
pub mod geom;
pub mod notation;
pub mod puzzle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Matrix4 as Mat4, Point3 as Pt3, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::notation::{ParseError, Sequencer};
    pub use crate::puzzle::{
        catalog, GeneratorId, LoadError, Move, MoveTag, PieceId, Puzzle, PuzzleDefinition,
        PuzzleKind,
    };
    pub use nalgebra::{Matrix4 as Mat4, Point3 as Pt3, Vector3 as Vec3};
}
