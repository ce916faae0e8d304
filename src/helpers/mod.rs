//! Geometry for the renderer's helper objects.
//!
//! Each helper is an independent type behind [`RenderHelper`]; the renderer
//! asks for geometry and tells helpers where the camera is.

mod arrow;
mod plane_widget;
mod segment;

pub use arrow::ArrowHelper;
pub use plane_widget::PlaneWidget;
pub use segment::SegmentHelper;

use crate::error::Result;
use crate::math::Point3;
use crate::scene::Scene;

/// Parameters controlling helper geometry.
#[derive(Debug, Clone, Copy)]
pub struct WidgetParams {
    /// Multiplier from a plane's declared size to its widget width.
    pub scale: f64,
}

impl Default for WidgetParams {
    fn default() -> Self {
        Self { scale: 5.0 }
    }
}

impl WidgetParams {
    /// Sets the plane widget scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Line strips and filled triangles making up a helper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelperGeometry {
    /// Connected polylines.
    pub strips: Vec<Vec<Point3>>,
    /// Filled triangles, wound counter-clockwise toward the viewer.
    pub triangles: Vec<[Point3; 3]>,
}

/// Capability shared by every renderer helper.
pub trait RenderHelper {
    /// Computes the helper's geometry in world space.
    fn compute_geometry(&self) -> HelperGeometry;

    /// Re-orients view-dependent parts toward `camera`.
    fn update_for_viewpoint(&mut self, camera: &Point3);
}

/// Creates helpers for every plane, line and arrow of a scene.
///
/// # Errors
///
/// Returns an error if a referenced point is not in `scene`.
pub fn build_helpers(scene: &Scene, params: &WidgetParams) -> Result<Vec<Box<dyn RenderHelper>>> {
    let mut helpers: Vec<Box<dyn RenderHelper>> = Vec::new();

    for (_, plane) in scene.planes() {
        helpers.push(Box::new(PlaneWidget::new(scene, plane, params)?));
    }
    for line in scene.lines() {
        helpers.push(Box::new(SegmentHelper::new(scene, line)?));
    }
    for arrow in scene.arrows() {
        helpers.push(Box::new(ArrowHelper::new(scene, arrow)?));
    }

    Ok(helpers)
}
