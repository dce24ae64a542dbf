//! Pieces, generators and capture trees.
//!
//! Kept small and explicit; the behaviour lives in `capture`, `bandage`,
//! `moves` and `queue`, all as `impl Puzzle` blocks over these records.

use nalgebra::{Matrix4, Point3, Unit, Vector3};

use crate::geom::cfg::SOLVED_EPS;
use crate::geom::{max_abs_diff, rotation_about_point, Region};

/// Index of a piece in `Puzzle::pieces`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub usize);

/// Index of a generator in `Puzzle::generators`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratorId(pub usize);

/// Orientation marker used by arrow-locking bandage rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceMarker {
    BlackArrow,
    WhiteArrow,
}

/// In-flight rotation not yet folded away. `angle == 0` means idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub center: Point3<f64>,
    pub axis: Unit<Vector3<f64>>,
    pub angle: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            axis: Vector3::x_axis(),
            angle: 0.0,
        }
    }
}

impl Animation {
    /// Step `angle` toward zero by `delta`, landing exactly on zero.
    pub fn advance(&mut self, delta: f64) {
        if self.angle > delta {
            self.angle -= delta;
        } else if self.angle < -delta {
            self.angle += delta;
        } else {
            self.angle = 0.0;
        }
    }

    pub fn transform(&self) -> Matrix4<f64> {
        if self.angle == 0.0 {
            Matrix4::identity()
        } else {
            rotation_about_point(&self.center, &self.axis, self.angle)
        }
    }
}

/// Renderable unit of the puzzle.
///
/// Invariants:
/// - `center`, `vertices`, `triangle_count`, `average_normal` describe the
///   solved (rest) pose and never change.
/// - `permutation` maps rest pose to current pose; only `Puzzle::apply` and
///   `Puzzle::restore` write it.
#[derive(Clone, Debug)]
pub struct Piece {
    pub center: Point3<f64>,
    pub vertices: Vec<Point3<f64>>,
    pub triangle_count: usize,
    pub average_normal: Option<Unit<Vector3<f64>>>,
    pub marker: Option<PieceMarker>,
    pub permutation: Matrix4<f64>,
    pub animation: Animation,
}

impl Piece {
    pub fn new(center: Point3<f64>, vertices: Vec<Point3<f64>>) -> Self {
        Self {
            center,
            vertices,
            triangle_count: 0,
            average_normal: None,
            marker: None,
            permutation: Matrix4::identity(),
            animation: Animation::default(),
        }
    }

    /// Rest-pose centre carried to the current pose.
    #[inline]
    pub fn current_center(&self) -> Point3<f64> {
        self.permutation.transform_point(&self.center)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.angle != 0.0
    }

    /// What the renderer draws with: animation ∘ permutation.
    pub fn render_transform(&self) -> Matrix4<f64> {
        self.animation.transform() * self.permutation
    }

    pub fn is_solved(&self) -> bool {
        max_abs_diff(&self.permutation, &Matrix4::identity()) < SOLVED_EPS
    }

    /// Current-pose average face normal, if the piece has one.
    pub fn current_normal(&self) -> Option<Unit<Vector3<f64>>> {
        let n = self.average_normal?;
        Unit::try_new(self.permutation.transform_vector(&n), f64::EPSILON)
    }

    /// True iff the current-pose samples lie strictly on both sides of `region`.
    pub fn straddles(&self, region: &Region, eps: f64) -> bool {
        region.straddled_by(&self.vertices, &self.permutation, eps)
    }
}

/// Set operator of an internal capture-tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOp {
    Union,
    Intersection,
    /// First child minus every other child.
    Subtract,
}

/// Boolean expression over sibling generators' direct captures.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureNode {
    Leaf(GeneratorId),
    Op { op: SetOp, children: Vec<CaptureNode> },
}

/// Pair of secondary generators turned around a compound move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialMove {
    pub generator_a: GeneratorId,
    pub generator_b: GeneratorId,
}

/// Compound-move data attached to a generator (copter family).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialCaseData {
    pub move_a: SpecialMove,
    pub move_b: SpecialMove,
}

/// Named rotation operator.
///
/// Contract: a non-inverse move turns captured pieces by `-angle` about
/// `axis` through `center`; an inverse move by `+angle`.
#[derive(Clone, Debug)]
pub struct Generator {
    pub center: Point3<f64>,
    pub axis: Unit<Vector3<f64>>,
    pub angle: f64,
    pub region: Region,
    pub capture_tree: Option<CaptureNode>,
    pub pick_point: Option<Point3<f64>>,
    pub label: Option<String>,
    pub min_capture_count: Option<usize>,
    pub max_capture_count: Option<usize>,
    pub special: Option<SpecialCaseData>,
}

impl Generator {
    pub fn new(center: Point3<f64>, axis: Unit<Vector3<f64>>, angle: f64, region: Region) -> Self {
        Self {
            center,
            axis,
            angle,
            region,
            capture_tree: None,
            pick_point: None,
            label: None,
            min_capture_count: None,
            max_capture_count: None,
            special: None,
        }
    }

    /// `count` within `[min, max]`, unset bounds being unbounded.
    pub fn capture_count_allowed(&self, count: usize) -> bool {
        self.min_capture_count.map_or(true, |min| count >= min)
            && self.max_capture_count.map_or(true, |max| count <= max)
    }
}
