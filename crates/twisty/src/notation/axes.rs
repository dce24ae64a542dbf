//! Built-in viewer-space axis names.
//!
//! Faces are single letters, edges two letters, corners three. Any ordering
//! of the letters names the same axis (`UR`, `RU`; `RUF`, `FUR`, ...).

use nalgebra::Vector3;

#[rustfmt::skip]
const AXES: [(&str, [f64; 3]); 26] = [
    ("L", [-1.0, 0.0, 0.0]), ("R", [1.0, 0.0, 0.0]),
    ("D", [0.0, -1.0, 0.0]), ("U", [0.0, 1.0, 0.0]),
    ("B", [0.0, 0.0, -1.0]), ("F", [0.0, 0.0, 1.0]),

    ("UL", [-1.0, 1.0, 0.0]), ("UR", [1.0, 1.0, 0.0]),
    ("UB", [0.0, 1.0, -1.0]), ("UF", [0.0, 1.0, 1.0]),
    ("DL", [-1.0, -1.0, 0.0]), ("DR", [1.0, -1.0, 0.0]),
    ("DB", [0.0, -1.0, -1.0]), ("DF", [0.0, -1.0, 1.0]),
    ("BL", [-1.0, 0.0, -1.0]), ("BR", [1.0, 0.0, -1.0]),
    ("FL", [-1.0, 0.0, 1.0]), ("FR", [1.0, 0.0, 1.0]),

    ("LDB", [-1.0, -1.0, -1.0]), ("RDB", [1.0, -1.0, -1.0]),
    ("LUB", [-1.0, 1.0, -1.0]), ("RUB", [1.0, 1.0, -1.0]),
    ("LDF", [-1.0, -1.0, 1.0]), ("RDF", [1.0, -1.0, 1.0]),
    ("LUF", [-1.0, 1.0, 1.0]), ("RUF", [1.0, 1.0, 1.0]),
];

fn sorted_chars(s: &str) -> Vec<char> {
    let mut v: Vec<char> = s.chars().collect();
    v.sort_unstable();
    v
}

/// Viewer-space direction for a built-in axis name, case-sensitive.
///
/// Every ordering of the letters is accepted, not only cyclic rotations:
/// `FUR` and `RFU` both name the `RUF` corner.
pub fn builtin_axis(name: &str) -> Option<Vector3<f64>> {
    if name.is_empty() || name.len() > 3 {
        return None;
    }
    let key = sorted_chars(name);
    AXES.iter()
        .find(|(letters, _)| letters.len() == name.len() && sorted_chars(letters) == key)
        .map(|(_, v)| Vector3::new(v[0], v[1], v[2]))
}

pub fn is_builtin_axis(name: &str) -> bool {
    builtin_axis(name).is_some()
}
