pub mod cutting_plane;
pub mod point;
pub mod raw;
pub mod segment;
pub mod solid;

pub use cutting_plane::{CuttingPlane, CuttingPlaneId};
pub use point::{Point, PointId};
pub use raw::{RawFace, RawPlane, RawPoint, RawScene, RawSolid};
pub use segment::{Rotation, Segment};
pub use solid::{Face, Solid, SolidId};

use std::collections::HashMap;

use crate::error::SceneError;
use slotmap::SlotMap;

/// A fully resolved, immutable scene.
///
/// Entities reference each other via typed IDs (generational indices).
/// A scene is only ever built by [`ResolveScene`](crate::operations::ResolveScene)
/// and never mutated afterwards; each generation produces a new one.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    points: SlotMap<PointId, Point>,
    names: HashMap<String, PointId>,
    solids: SlotMap<SolidId, Solid>,
    planes: SlotMap<CuttingPlaneId, CuttingPlane>,
    lines: Vec<Segment>,
    arrows: Vec<Segment>,
    rotation: Rotation,
}

impl Scene {
    // --- Construction (resolver only) ---

    /// Inserts a point, or fails if its name is taken.
    pub(crate) fn add_point(&mut self, point: Point) -> Result<PointId, SceneError> {
        if self.names.contains_key(&point.name) {
            return Err(SceneError::DuplicatePoint(point.name));
        }
        let name = point.name.clone();
        let id = self.points.insert(point);
        self.names.insert(name, id);
        Ok(id)
    }

    pub(crate) fn add_solid(&mut self, solid: Solid) -> SolidId {
        self.solids.insert(solid)
    }

    pub(crate) fn add_plane(&mut self, plane: CuttingPlane) -> CuttingPlaneId {
        self.planes.insert(plane)
    }

    pub(crate) fn set_segments(&mut self, lines: Vec<Segment>, arrows: Vec<Segment>) {
        self.lines = lines;
        self.arrows = arrows;
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    // --- Points ---

    /// Returns the point with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this scene.
    pub fn point(&self, id: PointId) -> Result<&Point, SceneError> {
        self.points
            .get(id)
            .ok_or(SceneError::EntityNotFound("point"))
    }

    /// Looks up a point by name.
    #[must_use]
    pub fn point_id(&self, name: &str) -> Option<PointId> {
        self.names.get(name).copied()
    }

    /// Iterates over all points.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points.iter()
    }

    // --- Solids ---

    /// Returns the solid with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this scene.
    pub fn solid(&self, id: SolidId) -> Result<&Solid, SceneError> {
        self.solids
            .get(id)
            .ok_or(SceneError::EntityNotFound("solid"))
    }

    /// Iterates over all solids.
    pub fn solids(&self) -> impl Iterator<Item = (SolidId, &Solid)> {
        self.solids.iter()
    }

    // --- Cutting planes ---

    /// Returns the cutting plane with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID does not belong to this scene.
    pub fn plane(&self, id: CuttingPlaneId) -> Result<&CuttingPlane, SceneError> {
        self.planes
            .get(id)
            .ok_or(SceneError::EntityNotFound("cutting plane"))
    }

    /// Iterates over all cutting planes.
    pub fn planes(&self) -> impl Iterator<Item = (CuttingPlaneId, &CuttingPlane)> {
        self.planes.iter()
    }

    // --- Segments ---

    /// Distinct lines, in first-declaration order.
    #[must_use]
    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    /// Distinct arrows, in first-declaration order.
    #[must_use]
    pub fn arrows(&self) -> &[Segment] {
        &self.arrows
    }

    /// Requested auto-rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}
