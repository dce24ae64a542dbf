//! Half-space geometry for capture regions.
//!
//! Purpose
//! - Classify points against convex regions given as ordered plane lists, and
//!   build the rigid rotations that moves compose into piece transforms.
//! - Keep tolerances explicit at every call: capture uses `CAPTURE_EPS`,
//!   straddle and alignment checks use the puzzle's configured eps.
//!
//! Conventions
//! - Planes store a unit normal pointing *out* of the region.
//! - Matrices are nalgebra column-major `Matrix4<f64>`; points transform with
//!   `transform_point` (homogeneous divide included).

pub mod cfg;
mod region;
mod types;

pub use region::Region;
pub use types::{max_abs_diff, rotation_about_point, Plane, Side};

#[cfg(test)]
mod tests;
