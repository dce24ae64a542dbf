//! The `Puzzle` aggregate: pieces, generators, viewer state and move queue.

use nalgebra::{Matrix4, Point2, Point3, Rotation3, Unit, Vector3};

use crate::geom::cfg::{DRAG_RADIANS_PER_PIXEL, PICK_RADIUS};

use super::capture::CaptureSet;
use super::define::{LoadError, PuzzleDefinition};
use super::kind::PuzzleKind;
use super::moves::{Move, MoveTag};
use super::queue::{AnimationCfg, MoveQueue};
use super::special::SpecialModifier;
use super::types::{Generator, GeneratorId, Piece};

/// Aggregate root driven by the UI layer.
///
/// Invariants:
/// - `pieces` and `generators` are fixed for the lifetime of the value;
///   loading another puzzle replaces the whole value.
/// - Every `GeneratorId` stored inside (capture trees, special moves, queue)
///   indexes `generators`.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub name: String,
    pub kind: PuzzleKind,
    pub pieces: Vec<Piece>,
    pub generators: Vec<Generator>,
    pub selected: Option<GeneratorId>,
    pub bandaged: bool,
    /// Tolerance for straddle and axis-alignment checks.
    pub eps: f64,
    pub orientation: Rotation3<f64>,
    pub queue: MoveQueue,
    pub animation: AnimationCfg,
}

impl Puzzle {
    /// Validate `def` completely, then build. Nothing is built on error.
    pub fn from_definition(name: &str, def: &PuzzleDefinition) -> Result<Self, LoadError> {
        let name = def.name.clone().unwrap_or_else(|| name.to_string());
        let kind = def.resolve_kind(&name);
        let eps = match def.eps {
            Some(eps) if eps.is_finite() && eps >= 0.0 => eps,
            Some(_) => {
                return Err(LoadError::NonFinite {
                    what: "definition eps".to_string(),
                })
            }
            None => kind.default_eps(),
        };
        let pieces = def.build_pieces()?;
        let generators = def.build_generators()?;
        tracing::debug!(
            puzzle = %name,
            ?kind,
            pieces = pieces.len(),
            generators = generators.len(),
            bandaged = def.bandages,
            "puzzle loaded"
        );
        Ok(Self {
            name,
            kind,
            pieces,
            generators,
            selected: None,
            bandaged: def.bandages,
            eps,
            orientation: Rotation3::identity(),
            queue: MoveQueue::default(),
            animation: AnimationCfg::default(),
        })
    }

    pub fn from_json(name: &str, text: &str) -> Result<Self, LoadError> {
        Self::from_definition(name, &PuzzleDefinition::from_json(text)?)
    }

    /// Replace this puzzle with a freshly loaded one. On error `self` is untouched.
    pub fn reload(&mut self, name: &str, def: &PuzzleDefinition) -> Result<(), LoadError> {
        let mut next = Self::from_definition(name, def)?;
        next.animation = self.animation;
        *self = next;
        Ok(())
    }

    #[inline]
    pub fn generator(&self, id: GeneratorId) -> &Generator {
        &self.generators[id.0]
    }

    pub fn generator_ids(&self) -> impl Iterator<Item = GeneratorId> + '_ {
        (0..self.generators.len()).map(GeneratorId)
    }

    /// Generator whose notation label is exactly `label`.
    pub fn generator_by_label(&self, label: &str) -> Option<GeneratorId> {
        self.generators
            .iter()
            .position(|g| g.label.as_deref() == Some(label))
            .map(GeneratorId)
    }

    /// Generator whose axis best matches `axis` given in viewer coordinates.
    ///
    /// The axis is carried into puzzle coordinates through the inverse of the
    /// viewer orientation, then the generator minimising `|dot - 1|` wins
    /// (last one on ties, so edge notation `UR` on a cube picks `U`).
    pub fn generator_for_viewer_axis(&self, axis: &Vector3<f64>) -> Option<GeneratorId> {
        let axis = Unit::try_new(*axis, f64::EPSILON)?;
        let local = self.orientation.inverse() * axis.into_inner();
        let mut best: Option<(GeneratorId, f64)> = None;
        for id in self.generator_ids() {
            let score = (self.generator(id).axis.dot(&local) - 1.0).abs();
            if best.map_or(true, |(_, s)| score <= s) {
                best = Some((id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Pre-multiply the orientation by the drag rotation (x by `dy`, then y by `dx`).
    pub fn orient_by_drag(&mut self, dx: f64, dy: f64) {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), DRAG_RADIANS_PER_PIXEL * dy);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), DRAG_RADIANS_PER_PIXEL * dx);
        self.orientation = ry * rx * self.orientation;
    }

    /// Select the generator whose projected pick point is nearest `mouse`
    /// (normalised device coordinates) and within `PICK_RADIUS`.
    ///
    /// Pick points are carried through the viewer orientation before
    /// `view_projection`. Returns whether the selection changed.
    pub fn pick_generator(&mut self, mouse: Point2<f64>, view_projection: &Matrix4<f64>) -> bool {
        let transform = view_projection * self.orientation.to_homogeneous();
        let mut best_distance = PICK_RADIUS;
        let mut best = None;
        for (i, g) in self.generators.iter().enumerate() {
            let Some(pick) = g.pick_point else { continue };
            let projected = transform.transform_point(&pick);
            let distance = (Point2::new(projected.x, projected.y) - mouse).norm();
            if distance < best_distance {
                best_distance = distance;
                best = Some(GeneratorId(i));
            }
        }
        if self.selected != best {
            self.selected = best;
            true
        } else {
            false
        }
    }

    /// Pieces the selected generator would currently turn.
    pub fn highlighted_pieces(&self) -> CaptureSet {
        self.selected
            .map(|id| self.captured(id))
            .unwrap_or_default()
    }

    /// Moves for a wheel step on the selected generator.
    ///
    /// `delta_y < 0` turns forward, `> 0` inverse, `0` nothing. With a
    /// modifier held on a copter puzzle the compound move is produced instead
    /// (when the generator carries special-case data).
    pub fn wheel_move(&self, delta_y: f64, modifier: Option<SpecialModifier>) -> Vec<Move> {
        let Some(id) = self.selected else {
            return Vec::new();
        };
        if delta_y == 0.0 {
            return Vec::new();
        }
        let inverse = delta_y > 0.0;
        if let Some(modifier) = modifier {
            if self.kind.supports_compound_moves() && self.generator(id).special.is_some() {
                return self.compound_move(id, modifier, inverse);
            }
        }
        vec![Move::new(id, inverse).with_tag(MoveTag::History)]
    }

    /// World-space pick points, for UI overlays.
    pub fn pick_points(&self) -> impl Iterator<Item = (GeneratorId, Point3<f64>)> + '_ {
        self.generators
            .iter()
            .enumerate()
            .filter_map(|(i, g)| g.pick_point.map(|p| (GeneratorId(i), p)))
    }
}
