//! Convex capture regions as intersections of half-spaces.
//!
//! A point's side is decided by the *largest* signed plane distance, compared
//! once against `±eps`. Near-tied planes therefore resolve consistently, which
//! a per-plane boolean AND would not guarantee inside the boundary band.

use nalgebra::{Matrix4, Point3};

use super::types::{Plane, Side};

/// Ordered list of planes; the region is the intersection of their insides.
///
/// An empty plane list bounds nothing, so every point is inside.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub planes: Vec<Plane>,
}

impl Region {
    #[inline]
    pub fn new(planes: Vec<Plane>) -> Self {
        Self { planes }
    }

    /// Largest signed distance over all planes (`-inf` for an empty region).
    pub fn max_distance(&self, p: &Point3<f64>) -> f64 {
        self.planes
            .iter()
            .map(|plane| plane.signed_distance(p))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[inline]
    pub fn classify(&self, p: &Point3<f64>, eps: f64) -> Side {
        Side::from_distance(self.max_distance(p), eps)
    }

    /// Boundary counts as contained.
    #[inline]
    pub fn contains(&self, p: &Point3<f64>, eps: f64) -> bool {
        !matches!(self.classify(p, eps), Side::Outside)
    }

    /// True iff the transformed samples land strictly on both sides.
    /// Boundary samples count for neither side.
    pub fn straddled_by<'a, I>(&self, samples: I, transform: &Matrix4<f64>, eps: f64) -> bool
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut inside = false;
        let mut outside = false;
        for p in samples {
            match self.classify(&transform.transform_point(p), eps) {
                Side::Inside => inside = true,
                Side::Outside => outside = true,
                Side::Boundary => {}
            }
            if inside && outside {
                return true;
            }
        }
        false
    }
}
