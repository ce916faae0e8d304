use tracing::debug;

use crate::error::Result;
use crate::scene::{CuttingPlaneId, Scene, SolidId};
use crate::tessellation::{TriangleMesh, TriangulatePolygon};

use super::{CrossSection, SectionParams};

/// A triangulated cross-section of one solid by one cutting plane.
#[derive(Debug, Clone)]
pub struct SectionMesh {
    /// The solid that was cut.
    pub solid: SolidId,
    /// The plane that cut it.
    pub plane: CuttingPlaneId,
    /// The filled section polygon.
    pub mesh: TriangleMesh,
}

/// Builds section meshes for every solid and every plane flagged for sectioning.
pub struct BuildSections {
    params: SectionParams,
}

impl BuildSections {
    /// Creates a new `BuildSections` operation.
    #[must_use]
    pub fn new(params: SectionParams) -> Self {
        Self { params }
    }

    /// Executes the operation.
    ///
    /// Pairs that produce no visible section are skipped silently.
    ///
    /// # Errors
    ///
    /// Returns an error if a section polygon cannot be triangulated.
    pub fn execute(&self, scene: &Scene) -> Result<Vec<SectionMesh>> {
        let mut sections = Vec::new();

        for (plane_id, cutting) in scene.planes().filter(|(_, plane)| plane.section) {
            for (solid_id, _) in scene.solids() {
                let Some(points) = CrossSection::new(solid_id, plane_id)
                    .with_params(self.params)
                    .execute(scene)?
                else {
                    continue;
                };

                let mesh = TriangulatePolygon::new(&points, *cutting.plane.plane_normal())
                    .with_collinear_tolerance(self.params.collinear_tolerance)
                    .execute()?;

                match mesh {
                    Some(mesh) => sections.push(SectionMesh {
                        solid: solid_id,
                        plane: plane_id,
                        mesh,
                    }),
                    None => debug!(points = points.len(), "section ring degenerate; skipped"),
                }
            }
        }

        Ok(sections)
    }
}
