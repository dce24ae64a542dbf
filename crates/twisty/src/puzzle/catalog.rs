//! Built-in puzzle definitions.
//!
//! Geometry follows the cube generator: the solved cube spans `[-1, 1]^3`,
//! each face generator cuts at distance 1/3 from the centre and turns by a
//! quarter turn about the face axis through the face centre.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use super::define::{GeneratorDef, PieceDef, PlaneDef, PuzzleDefinition, Xyz};

const CUT: f64 = 1.0 / 3.0;

/// Names accepted by [`builtin`].
pub fn names() -> &'static [&'static str] {
    &["RubiksCube", "BandagedCube"]
}

pub fn builtin(name: &str) -> Option<PuzzleDefinition> {
    match name {
        "RubiksCube" => Some(rubiks_cube()),
        "BandagedCube" => Some(bandaged_cube()),
        _ => None,
    }
}

/// Face directions and notation labels in generator order.
fn faces() -> [(Vector3<f64>, &'static str); 6] {
    [
        (-Vector3::x(), "L"),
        (Vector3::x(), "R"),
        (-Vector3::y(), "D"),
        (Vector3::y(), "U"),
        (-Vector3::z(), "B"),
        (Vector3::z(), "F"),
    ]
}

fn face_generator(dir: Vector3<f64>, label: &str) -> GeneratorDef {
    GeneratorDef {
        center: Xyz::from(dir),
        axis: Xyz::from(dir),
        angle: FRAC_PI_2,
        plane_list: vec![PlaneDef {
            center: Xyz::from(dir * CUT),
            unit_normal: Xyz::from(-dir),
        }],
        pick_point: Some(Xyz::from(dir)),
        capture_tree_root: None,
        label: Some(label.to_string()),
        min_capture_count: None,
        max_capture_count: None,
        special_case_data: None,
    }
}

/// Axis-aligned box piece sampled at its eight corners.
pub fn box_piece(lo: Vector3<f64>, hi: Vector3<f64>) -> PieceDef {
    let corner = |k: usize| {
        Xyz::new(
            if k & 1 == 0 { lo.x } else { hi.x },
            if k & 2 == 0 { lo.y } else { hi.y },
            if k & 4 == 0 { lo.z } else { hi.z },
        )
    };
    // Two triangles per face, outward winding.
    #[rustfmt::skip]
    const TRIANGLES: [[usize; 3]; 12] = [
        [0, 4, 6], [0, 6, 2], // -x
        [1, 3, 7], [1, 7, 5], // +x
        [0, 1, 5], [0, 5, 4], // -y
        [2, 6, 7], [2, 7, 3], // +y
        [0, 2, 3], [0, 3, 1], // -z
        [4, 5, 7], [4, 7, 6], // +z
    ];
    PieceDef {
        center: Xyz::from((lo + hi) * 0.5),
        vertex_list: (0..8).map(corner).collect(),
        triangle_list: TRIANGLES.to_vec(),
        normal_list: Vec::new(),
        marker: None,
    }
}

fn cubie(i: i32, j: i32, k: i32) -> PieceDef {
    let c = Vector3::new(f64::from(i), f64::from(j), f64::from(k)) * (2.0 * CUT);
    let half = Vector3::repeat(CUT);
    box_piece(c - half, c + half)
}

/// 3x3x3 cube: 27 cubies, generators `L R D U B F`.
pub fn rubiks_cube() -> PuzzleDefinition {
    let mut mesh_list = Vec::with_capacity(27);
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                mesh_list.push(cubie(i, j, k));
            }
        }
    }
    PuzzleDefinition {
        name: Some("RubiksCube".to_string()),
        bandages: false,
        eps: None,
        kind: None,
        mesh_list,
        generator_mesh_list: faces()
            .into_iter()
            .map(|(dir, label)| face_generator(dir, label))
            .collect(),
    }
}

/// Bandaged 3x3x3: the up-front-right corner is fused to the up-right edge,
/// so any turn whose cut runs through that block is vetoed (`F` when solved).
pub fn bandaged_cube() -> PuzzleDefinition {
    let mut mesh_list = Vec::with_capacity(26);
    for i in -1..=1 {
        for j in -1..=1 {
            for k in -1..=1 {
                if (i, j) == (1, 1) && (k == 0 || k == 1) {
                    continue;
                }
                mesh_list.push(cubie(i, j, k));
            }
        }
    }
    mesh_list.push(box_piece(
        Vector3::new(CUT, CUT, -CUT),
        Vector3::new(1.0, 1.0, 1.0),
    ));
    PuzzleDefinition {
        name: Some("BandagedCube".to_string()),
        bandages: true,
        eps: None,
        kind: None,
        mesh_list,
        generator_mesh_list: faces()
            .into_iter()
            .map(|(dir, label)| face_generator(dir, label))
            .collect(),
    }
}
