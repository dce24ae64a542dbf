//! Tolerance and interaction defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle tolerances.
//!   Per-puzzle deviations travel with the puzzle definition (`eps`) or its
//!   kind, never through ad-hoc literals.

/// Default side-classification epsilon for straddle and alignment checks.
pub const DEFAULT_EPS: f64 = 1e-7;
/// Epsilon used when testing piece centres for capture: only strictly inside counts.
pub const CAPTURE_EPS: f64 = 0.0;
/// Max-abs tolerance for "permutation transform equals identity".
pub const SOLVED_EPS: f64 = 1e-7;
/// Largest normalised-device distance at which a pick point can be selected.
pub const PICK_RADIUS: f64 = 0.3;
/// Viewer rotation per pixel of pointer drag.
pub const DRAG_RADIANS_PER_PIXEL: f64 = std::f64::consts::PI / 200.0;
