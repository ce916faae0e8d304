use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{GeometryError, Result, SceneError};
use crate::geometry::Plane;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::scene::{
    CuttingPlane, Face, Point, PointId, RawFace, RawPlane, RawPoint, RawScene, RawSolid, Rotation,
    Scene, Segment, Solid,
};

/// Distance beyond which a face's embedded position is reported as stale.
const POSITION_MISMATCH: f64 = 1e-9;

/// Resolves a raw payload into a cross-referenced [`Scene`].
///
/// Resolution is all-or-nothing: the first unknown name, malformed record or
/// degenerate vector aborts and no scene is returned.
pub struct ResolveScene<'a> {
    raw: &'a RawScene,
}

impl<'a> ResolveScene<'a> {
    /// Creates a new `ResolveScene` operation.
    #[must_use]
    pub fn new(raw: &'a RawScene) -> Self {
        Self { raw }
    }

    /// Executes the resolution.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnresolvedPoint`] naming the first reference with
    /// no matching point, or another scene/geometry error for malformed input.
    pub fn execute(&self) -> Result<Scene> {
        let mut scene = Scene::default();

        for raw_point in &self.raw.points {
            let position = to_point(raw_point.position)?;
            scene.add_point(Point::new(raw_point.name.clone(), position))?;
        }

        for (solid_index, raw_solid) in self.raw.solids.iter().enumerate() {
            let solid = resolve_solid(&scene, solid_index, raw_solid)?;
            scene.add_solid(solid);
        }

        for raw_plane in &self.raw.planes {
            let plane = resolve_plane(&scene, raw_plane)?;
            scene.add_plane(plane);
        }

        let lines = resolve_segments(&scene, &self.raw.lines, "line")?;
        let arrows = resolve_segments(&scene, &self.raw.arrows, "arrow")?;
        scene.set_segments(lines, arrows);
        scene.set_rotation(Rotation::from_raw(self.raw.rotate));

        debug!(
            points = self.raw.points.len(),
            solids = self.raw.solids.len(),
            planes = self.raw.planes.len(),
            lines = scene.lines().len(),
            arrows = scene.arrows().len(),
            "resolved scene"
        );

        Ok(scene)
    }
}

fn to_point(coords: [f64; 3]) -> Result<Point3> {
    if coords.iter().all(|c| c.is_finite()) {
        Ok(Point3::from(coords))
    } else {
        Err(GeometryError::NonFinite.into())
    }
}

fn lookup(scene: &Scene, name: &str, context: &'static str) -> Result<PointId> {
    scene.point_id(name).ok_or_else(|| {
        SceneError::UnresolvedPoint {
            name: name.to_owned(),
            context,
        }
        .into()
    })
}

/// Resolves a `{name, position}` record by name; the scene's position wins.
fn lookup_record(scene: &Scene, record: &RawPoint, context: &'static str) -> Result<PointId> {
    let id = lookup(scene, &record.name, context)?;
    let known = scene.point(id)?.position;
    let declared = Point3::from(record.position);
    if (known - declared).norm() > POSITION_MISMATCH {
        warn!(
            point = %record.name,
            context,
            "embedded position disagrees with scene point; using scene position"
        );
    }
    Ok(id)
}

fn resolve_solid(scene: &Scene, solid_index: usize, raw: &RawSolid) -> Result<Solid> {
    let boundary = raw
        .points
        .iter()
        .map(|name| lookup(scene, name, "solid"))
        .collect::<Result<Vec<_>>>()?;

    let faces = raw
        .faces
        .iter()
        .enumerate()
        .map(|(face_index, face)| resolve_face(scene, solid_index, face_index, face))
        .collect::<Result<Vec<_>>>()?;

    Ok(Solid { boundary, faces })
}

fn resolve_face(
    scene: &Scene,
    solid_index: usize,
    face_index: usize,
    raw: &RawFace,
) -> Result<Face> {
    let [a, b, c] = raw.points.as_slice() else {
        return Err(SceneError::InvalidFace {
            solid: solid_index,
            face: face_index,
            count: raw.points.len(),
        }
        .into());
    };

    let normal = Vector3::from(raw.normal);
    let len = normal.norm();
    if !len.is_finite() || !raw.constant.is_finite() {
        return Err(GeometryError::NonFinite.into());
    }
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }

    Ok(Face {
        normal: normal / len,
        constant: raw.constant / len,
        points: [
            lookup_record(scene, a, "face")?,
            lookup_record(scene, b, "face")?,
            lookup_record(scene, c, "face")?,
        ],
    })
}

fn resolve_plane(scene: &Scene, raw: &RawPlane) -> Result<CuttingPlane> {
    let RawPlane(normal, a, b, c, section, size) = raw;

    let references = [
        lookup_record(scene, a, "plane")?,
        lookup_record(scene, b, "plane")?,
        lookup_record(scene, c, "plane")?,
    ];
    let anchor = scene.point(references[0])?.position;
    let plane = Plane::from_normal(anchor, Vector3::from(*normal))?;

    Ok(CuttingPlane {
        plane,
        references,
        section: *section,
        size: *size,
    })
}

/// Resolves name-pair strings, collapsing exact duplicates.
fn resolve_segments(scene: &Scene, pairs: &[String], context: &'static str) -> Result<Vec<Segment>> {
    let mut seen = HashSet::new();
    let mut segments = Vec::new();

    for pair in pairs {
        if !seen.insert(pair.as_str()) {
            continue;
        }
        let mut chars = pair.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SceneError::InvalidSegment(pair.clone()).into());
        };
        segments.push(Segment {
            a: lookup(scene, &a.to_string(), context)?,
            b: lookup(scene, &b.to_string(), context)?,
        });
    }

    Ok(segments)
}
