use crate::geometry::Plane;

use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for a cutting plane in a scene.
    pub struct CuttingPlaneId;
}

/// A plane declared in the script, optionally rendered as a filled section.
///
/// Only `plane` (declared normal through the anchor) takes part in the
/// intersection math. The other reference points size the plane widget.
#[derive(Debug, Clone)]
pub struct CuttingPlane {
    /// The geometric plane, with its frame anchored at the anchor point.
    pub plane: Plane,
    /// The three points the plane was declared through; the first is the anchor.
    pub references: [PointId; 3],
    /// Whether a filled cross-section is requested.
    pub section: bool,
    /// Size of the plane widget.
    pub size: f64,
}

impl CuttingPlane {
    /// The point fixing the plane's position.
    #[must_use]
    pub fn anchor(&self) -> PointId {
        self.references[0]
    }
}
