//! Puzzle definition documents (JSON) and their validation.
//!
//! Purpose
//! - Mirror the on-disk format written by the puzzle generator:
//!   `mesh_list` (pieces) and `generator_mesh_list` (generators).
//! - Validate the whole document before anything is built so that a failed
//!   load never leaves a half-constructed puzzle behind.
//!
//! Renderer-only fields (uvs, colours, textures, border loops) are ignored.

use std::fmt;

use nalgebra::{Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::geom::{Plane, Region};

use super::kind::PuzzleKind;
use super::types::{
    CaptureNode, Generator, GeneratorId, Piece, PieceMarker, SetOp, SpecialCaseData, SpecialMove,
};

/// Errors surfaced while decoding or validating a definition.
#[derive(Debug)]
pub enum LoadError {
    Json(serde_json::Error),
    /// A coordinate or angle is NaN/inf.
    NonFinite { what: String },
    ZeroAxis { generator: usize },
    ZeroNormal { generator: usize, plane: usize },
    /// Capture-tree leaf or special move referencing a generator that does not exist.
    MissingGenerator { generator: usize, referenced: usize },
    EmptyCaptureOp { generator: usize },
    InvalidCaptureBounds { generator: usize, min: usize, max: usize },
    TriangleIndex { piece: usize, index: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Json(err) => write!(f, "malformed puzzle definition: {err}"),
            LoadError::NonFinite { what } => write!(f, "{what} is not finite"),
            LoadError::ZeroAxis { generator } => {
                write!(f, "generator {generator} has a zero-length axis")
            }
            LoadError::ZeroNormal { generator, plane } => write!(
                f,
                "plane {plane} of generator {generator} has a zero-length normal"
            ),
            LoadError::MissingGenerator {
                generator,
                referenced,
            } => write!(
                f,
                "generator {generator} references missing generator {referenced}"
            ),
            LoadError::EmptyCaptureOp { generator } => write!(
                f,
                "capture tree of generator {generator} has an operator without children"
            ),
            LoadError::InvalidCaptureBounds {
                generator,
                min,
                max,
            } => write!(
                f,
                "generator {generator} has min_capture_count {min} > max_capture_count {max}"
            ),
            LoadError::TriangleIndex { piece, index } => write!(
                f,
                "piece {piece} has a triangle referencing missing vertex {index}"
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

/// `{x, y, z}` as written by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn point(&self, what: impl FnOnce() -> String) -> Result<Point3<f64>, LoadError> {
        Ok(Point3::from(self.vector(what)?))
    }

    fn vector(&self, what: impl FnOnce() -> String) -> Result<Vector3<f64>, LoadError> {
        let v = Vector3::new(self.x, self.y, self.z);
        if v.iter().all(|c| c.is_finite()) {
            Ok(v)
        } else {
            Err(LoadError::NonFinite { what: what() })
        }
    }
}

impl From<Vector3<f64>> for Xyz {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3<f64>> for Xyz {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerDef {
    BlackArrow,
    WhiteArrow,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceDef {
    pub center: Xyz,
    pub vertex_list: Vec<Xyz>,
    #[serde(default)]
    pub triangle_list: Vec<[usize; 3]>,
    #[serde(default)]
    pub normal_list: Vec<Xyz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerDef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneDef {
    pub center: Xyz,
    pub unit_normal: Xyz,
}

/// Capture-tree node: `{"op": .., "children": [..]}` or `{"mesh": index}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptureNodeDef {
    Op {
        op: SetOp,
        children: Vec<CaptureNodeDef>,
    },
    Leaf {
        mesh: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialMoveDef {
    pub generator_mesh_a: usize,
    pub generator_mesh_b: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCaseDef {
    pub special_move_a: SpecialMoveDef,
    pub special_move_b: SpecialMoveDef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorDef {
    pub center: Xyz,
    pub axis: Xyz,
    pub angle: f64,
    #[serde(default)]
    pub plane_list: Vec<PlaneDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_point: Option<Xyz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_tree_root: Option<CaptureNodeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_capture_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capture_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_case_data: Option<SpecialCaseDef>,
}

/// Whole puzzle document, consumed once at load time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub bandages: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PuzzleKind>,
    pub mesh_list: Vec<PieceDef>,
    pub generator_mesh_list: Vec<GeneratorDef>,
}

impl PuzzleDefinition {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Explicit `kind`, else the strategy registered for `name`.
    pub fn resolve_kind(&self, name: &str) -> PuzzleKind {
        self.kind.unwrap_or_else(|| PuzzleKind::from_name(name))
    }

    pub fn build_pieces(&self) -> Result<Vec<Piece>, LoadError> {
        self.mesh_list
            .iter()
            .enumerate()
            .map(|(i, def)| build_piece(i, def))
            .collect()
    }

    pub fn build_generators(&self) -> Result<Vec<Generator>, LoadError> {
        let count = self.generator_mesh_list.len();
        self.generator_mesh_list
            .iter()
            .enumerate()
            .map(|(i, def)| build_generator(i, def, count))
            .collect()
    }
}

fn build_piece(index: usize, def: &PieceDef) -> Result<Piece, LoadError> {
    let center = def.center.point(|| format!("centre of piece {index}"))?;
    let vertices = def
        .vertex_list
        .iter()
        .map(|v| v.point(|| format!("vertex of piece {index}")))
        .collect::<Result<Vec<_>, _>>()?;
    for tri in &def.triangle_list {
        if let Some(&bad) = tri.iter().find(|&&k| k >= vertices.len()) {
            return Err(LoadError::TriangleIndex {
                piece: index,
                index: bad,
            });
        }
    }

    let mut piece = Piece::new(center, vertices);
    piece.triangle_count = def.triangle_list.len();
    piece.average_normal = average_normal(def, &piece.vertices, index)?;
    piece.marker = def.marker.map(|m| match m {
        MarkerDef::BlackArrow => PieceMarker::BlackArrow,
        MarkerDef::WhiteArrow => PieceMarker::WhiteArrow,
    });
    Ok(piece)
}

/// Mean of the listed normals, else of the triangle face normals.
fn average_normal(
    def: &PieceDef,
    vertices: &[Point3<f64>],
    index: usize,
) -> Result<Option<Unit<Vector3<f64>>>, LoadError> {
    let mut sum = Vector3::zeros();
    if !def.normal_list.is_empty() {
        for n in &def.normal_list {
            sum += n.vector(|| format!("normal of piece {index}"))?;
        }
    } else {
        for &[a, b, c] in &def.triangle_list {
            let face = (vertices[b] - vertices[a]).cross(&(vertices[c] - vertices[a]));
            if let Some(unit) = Unit::try_new(face, f64::EPSILON) {
                sum += unit.into_inner();
            }
        }
    }
    Ok(Unit::try_new(sum, f64::EPSILON))
}

fn build_generator(index: usize, def: &GeneratorDef, count: usize) -> Result<Generator, LoadError> {
    let center = def.center.point(|| format!("centre of generator {index}"))?;
    let axis = def.axis.vector(|| format!("axis of generator {index}"))?;
    let axis = Unit::try_new(axis, f64::EPSILON).ok_or(LoadError::ZeroAxis { generator: index })?;
    if !def.angle.is_finite() {
        return Err(LoadError::NonFinite {
            what: format!("angle of generator {index}"),
        });
    }

    let mut planes = Vec::with_capacity(def.plane_list.len());
    for (k, plane) in def.plane_list.iter().enumerate() {
        let c = plane
            .center
            .point(|| format!("plane {k} centre of generator {index}"))?;
        let n = plane
            .unit_normal
            .vector(|| format!("plane {k} normal of generator {index}"))?;
        planes.push(Plane::new(c, n).ok_or(LoadError::ZeroNormal {
            generator: index,
            plane: k,
        })?);
    }

    let mut generator = Generator::new(center, axis, def.angle, Region::new(planes));
    generator.pick_point = def
        .pick_point
        .map(|p| p.point(|| format!("pick point of generator {index}")))
        .transpose()?;
    generator.capture_tree = def
        .capture_tree_root
        .as_ref()
        .map(|root| build_capture_node(index, root, count))
        .transpose()?;
    generator.label = def.label.clone();
    if let (Some(min), Some(max)) = (def.min_capture_count, def.max_capture_count) {
        if min > max {
            return Err(LoadError::InvalidCaptureBounds {
                generator: index,
                min,
                max,
            });
        }
    }
    generator.min_capture_count = def.min_capture_count;
    generator.max_capture_count = def.max_capture_count;
    generator.special = def
        .special_case_data
        .map(|data| {
            Ok::<_, LoadError>(SpecialCaseData {
                move_a: build_special_move(index, data.special_move_a, count)?,
                move_b: build_special_move(index, data.special_move_b, count)?,
            })
        })
        .transpose()?;
    Ok(generator)
}

fn checked_id(generator: usize, referenced: usize, count: usize) -> Result<GeneratorId, LoadError> {
    if referenced < count {
        Ok(GeneratorId(referenced))
    } else {
        Err(LoadError::MissingGenerator {
            generator,
            referenced,
        })
    }
}

fn build_special_move(
    generator: usize,
    def: SpecialMoveDef,
    count: usize,
) -> Result<SpecialMove, LoadError> {
    Ok(SpecialMove {
        generator_a: checked_id(generator, def.generator_mesh_a, count)?,
        generator_b: checked_id(generator, def.generator_mesh_b, count)?,
    })
}

fn build_capture_node(
    generator: usize,
    def: &CaptureNodeDef,
    count: usize,
) -> Result<CaptureNode, LoadError> {
    match def {
        CaptureNodeDef::Leaf { mesh } => Ok(CaptureNode::Leaf(checked_id(generator, *mesh, count)?)),
        CaptureNodeDef::Op { op, children } => {
            if children.is_empty() {
                return Err(LoadError::EmptyCaptureOp { generator });
            }
            let children = children
                .iter()
                .map(|child| build_capture_node(generator, child, count))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CaptureNode::Op { op: *op, children })
        }
    }
}
