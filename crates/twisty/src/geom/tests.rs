use super::cfg::DEFAULT_EPS;
use super::*;
use nalgebra::{point, vector, Matrix4, Point3, Unit, Vector3};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn unit_box() -> Region {
    // |x|,|y|,|z| <= 1 with outward normals.
    let mut planes = Vec::new();
    for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
        planes.push(Plane::new(Point3::from(axis), axis).unwrap());
        planes.push(Plane::new(Point3::from(-axis), -axis).unwrap());
    }
    Region::new(planes)
}

#[test]
fn plane_normalises_and_rejects_zero() {
    let p = Plane::new(point![0.0, 0.0, 0.0], vector![0.0, 3.0, 0.0]).unwrap();
    assert!((p.unit_normal.norm() - 1.0).abs() < 1e-12);
    assert!(Plane::new(point![0.0, 0.0, 0.0], Vector3::zeros()).is_none());
}

#[test]
fn box_classification_inside_outside_boundary() {
    let r = unit_box();
    assert_eq!(r.classify(&point![0.0, 0.0, 0.0], DEFAULT_EPS), Side::Inside);
    assert_eq!(r.classify(&point![2.0, 0.0, 0.0], DEFAULT_EPS), Side::Outside);
    assert_eq!(r.classify(&point![1.0, 0.5, 0.0], DEFAULT_EPS), Side::Boundary);
    // Corner: three planes tied at zero still resolve to one answer.
    assert_eq!(r.classify(&point![1.0, 1.0, 1.0], DEFAULT_EPS), Side::Boundary);
    assert!(r.contains(&point![1.0, 1.0, 1.0], DEFAULT_EPS));
    assert!(!r.contains(&point![1.0, 1.0, 1.1], DEFAULT_EPS));
}

#[test]
fn zero_eps_only_exact_zero_is_boundary() {
    let r = unit_box();
    assert_eq!(r.classify(&point![1.0, 0.0, 0.0], 0.0), Side::Boundary);
    assert_eq!(r.classify(&point![1.0 - 1e-12, 0.0, 0.0], 0.0), Side::Inside);
    assert_eq!(r.classify(&point![1.0 + 1e-12, 0.0, 0.0], 0.0), Side::Outside);
}

#[test]
fn empty_region_contains_everything() {
    let r = Region::default();
    assert_eq!(r.classify(&point![1e6, -3.0, 2.0], DEFAULT_EPS), Side::Inside);
}

#[test]
fn straddle_requires_both_strict_sides() {
    // Half-space x > 0 (normal -x through the origin).
    let r = Region::new(vec![Plane::new(Point3::origin(), -Vector3::x()).unwrap()]);
    let id = Matrix4::identity();
    let across = [point![-0.5, 0.0, 0.0], point![0.5, 0.0, 0.0]];
    assert!(r.straddled_by(&across, &id, DEFAULT_EPS));
    // One sample on the plane, one inside: not a straddle.
    let touching = [point![0.0, 0.0, 0.0], point![0.5, 0.0, 0.0]];
    assert!(!r.straddled_by(&touching, &id, DEFAULT_EPS));
    // Shifting the piece fully inside removes the straddle.
    let shift = Matrix4::new_translation(&vector![2.0, 0.0, 0.0]);
    assert!(!r.straddled_by(&across, &shift, DEFAULT_EPS));
}

#[test]
fn rotation_about_point_fixes_center_and_turns_quarter() {
    let c = point![1.0, 0.0, 0.0];
    let axis = Unit::new_normalize(vector![1.0, 0.0, 0.0]);
    let m = rotation_about_point(&c, &axis, std::f64::consts::FRAC_PI_2);
    assert!((m.transform_point(&c) - c).norm() < 1e-12);
    let q = m.transform_point(&point![1.0, 1.0, 0.0]);
    assert!((q - point![1.0, 0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn rotation_round_trip_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let c = point![rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)];
        let axis = Unit::new_normalize(vector![
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(0.1..1.0)
        ]);
        let angle = rng.gen_range(-3.0..3.0);
        let m = rotation_about_point(&c, &axis, angle) * rotation_about_point(&c, &axis, -angle);
        assert!(max_abs_diff(&m, &Matrix4::identity()) < 1e-12);
    }
}

proptest! {
    #[test]
    fn classify_depends_only_on_max_distance(
        x in -3.0f64..3.0, y in -3.0f64..3.0, z in -3.0f64..3.0, eps in 0.0f64..0.5,
    ) {
        let r = unit_box();
        let p = point![x, y, z];
        let d = x.abs().max(y.abs()).max(z.abs()) - 1.0;
        prop_assert!((r.max_distance(&p) - d).abs() < 1e-12);
        prop_assert_eq!(r.classify(&p, eps), Side::from_distance(r.max_distance(&p), eps));
    }

    #[test]
    fn boundary_band_has_width_two_eps(t in -1.0f64..1.0, eps in 1e-6f64..0.1) {
        let r = unit_box();
        let d = t * 2.0 * eps;
        let side = r.classify(&point![1.0 + d, 0.0, 0.0], eps);
        if d.abs() < eps * (1.0 - 1e-9) {
            prop_assert_eq!(side, Side::Boundary);
        } else if d > eps * (1.0 + 1e-9) {
            prop_assert_eq!(side, Side::Outside);
        } else if d < -eps * (1.0 + 1e-9) {
            prop_assert_eq!(side, Side::Inside);
        }
    }
}
