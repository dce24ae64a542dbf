//! Planes, side classification and rigid helpers.

use nalgebra::{Matrix4, Point3, Rotation3, Unit, Vector3};

/// Oriented cut plane. The half-space `dot(p - center, unit_normal) < 0` is
/// the inside.
///
/// Invariants:
/// - `unit_normal` has unit length (enforced by [`Plane::new`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub center: Point3<f64>,
    pub unit_normal: Vector3<f64>,
}

impl Plane {
    /// Build a plane, normalising `normal`. `None` for a (near) zero normal.
    pub fn new(center: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let unit = Unit::try_new(normal, f64::EPSILON)?;
        Some(Self {
            center,
            unit_normal: unit.into_inner(),
        })
    }

    #[inline]
    pub fn signed_distance(&self, p: &Point3<f64>) -> f64 {
        (p - self.center).dot(&self.unit_normal)
    }
}

/// Result of classifying a point against a plane set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Inside,
    Outside,
    /// Within `eps` of the boundary; counts as neither side.
    Boundary,
}

impl Side {
    /// Classify a signed distance against a symmetric band of width `2 * eps`.
    #[inline]
    pub fn from_distance(d: f64, eps: f64) -> Self {
        if d < -eps {
            Side::Inside
        } else if d > eps {
            Side::Outside
        } else {
            Side::Boundary
        }
    }
}

/// Rigid rotation by `angle` radians about the line through `center` along `axis`:
/// `T(center) · R(axis, angle) · T(-center)`.
pub fn rotation_about_point(
    center: &Point3<f64>,
    axis: &Unit<Vector3<f64>>,
    angle: f64,
) -> Matrix4<f64> {
    let rotation = Rotation3::from_axis_angle(axis, angle).to_homogeneous();
    Matrix4::new_translation(&center.coords) * rotation * Matrix4::new_translation(&-center.coords)
}

/// Max-abs distance between two 4x4 matrices.
#[inline]
pub fn max_abs_diff(a: &Matrix4<f64>, b: &Matrix4<f64>) -> f64 {
    (a - b).amax()
}
