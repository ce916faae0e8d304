use tracing::debug;

use crate::error::Result;
use crate::math::intersect_3d::segment_plane_intersect;
use crate::math::quantize::QuantizedPointSet;
use crate::math::{Point3, QUANTUM};
use crate::scene::{CuttingPlaneId, Scene, SolidId};
use crate::tessellation::DEFAULT_COLLINEAR_TOLERANCE;

/// Parameters controlling cross-section extraction.
#[derive(Debug, Clone, Copy)]
pub struct SectionParams {
    /// Grid size intersection points are rounded to before deduplication.
    pub quantum: f64,
    /// Sine tolerance under which a section vertex counts as collinear.
    pub collinear_tolerance: f64,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            quantum: QUANTUM,
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
        }
    }
}

impl SectionParams {
    /// Sets the quantization grid size.
    #[must_use]
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the collinearity tolerance.
    #[must_use]
    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }
}

/// Computes the points where a cutting plane meets a solid's edges.
///
/// Every edge of every face is intersected with the plane; hits are
/// quantized so that an edge shared by two faces contributes one point.
pub struct CrossSection {
    solid: SolidId,
    plane: CuttingPlaneId,
    params: SectionParams,
}

impl CrossSection {
    /// Creates a new `CrossSection` query with default parameters.
    #[must_use]
    pub fn new(solid: SolidId, plane: CuttingPlaneId) -> Self {
        Self {
            solid,
            plane,
            params: SectionParams::default(),
        }
    }

    /// Sets custom section parameters.
    #[must_use]
    pub fn with_params(mut self, params: SectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Returns the distinct, unordered, coplanar intersection points, or
    /// `None` when fewer than three remain (the plane misses or only grazes
    /// the solid).
    ///
    /// # Errors
    ///
    /// Returns an error if the solid, plane or a face point is not in `scene`.
    pub fn execute(&self, scene: &Scene) -> Result<Option<Vec<Point3>>> {
        let solid = scene.solid(self.solid)?;
        let cutting = scene.plane(self.plane)?;

        let mut hits = QuantizedPointSet::new(self.params.quantum);
        let mut raw_hits = 0usize;
        for face in &solid.faces {
            for (from, to) in face.edges() {
                let start = scene.point(from)?.position;
                let end = scene.point(to)?.position;
                if let Some(hit) = segment_plane_intersect(&start, &end, &cutting.plane) {
                    raw_hits += 1;
                    hits.insert(&hit);
                }
            }
        }

        if hits.len() < 3 {
            debug!(raw_hits, unique = hits.len(), "plane misses solid; no section");
            return Ok(None);
        }

        debug!(raw_hits, unique = hits.len(), "section points found");
        Ok(Some(hits.into_points()))
    }
}
