use crate::error::Result;
use crate::math::Point3;
use crate::scene::{Scene, Segment};

use super::{HelperGeometry, RenderHelper};

/// A plain line between two points.
#[derive(Debug, Clone)]
pub struct SegmentHelper {
    start: Point3,
    end: Point3,
}

impl SegmentHelper {
    /// Creates the helper for a scene line.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not in `scene`.
    pub fn new(scene: &Scene, segment: &Segment) -> Result<Self> {
        Ok(Self {
            start: scene.point(segment.a)?.position,
            end: scene.point(segment.b)?.position,
        })
    }
}

impl RenderHelper for SegmentHelper {
    fn compute_geometry(&self) -> HelperGeometry {
        HelperGeometry {
            strips: vec![vec![self.start, self.end]],
            triangles: Vec::new(),
        }
    }

    fn update_for_viewpoint(&mut self, _camera: &Point3) {}
}
