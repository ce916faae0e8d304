use crate::error::Result;
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::scene::{Scene, Segment};

use super::{HelperGeometry, RenderHelper};

/// Head length as a fraction of the arrow length.
const HEAD_LENGTH: f64 = 0.2;

/// Head half-width as a fraction of the head length.
const HEAD_WIDTH: f64 = 0.2;

/// A directed arrow from one point to another, its head turned to the viewer.
#[derive(Debug, Clone)]
pub struct ArrowHelper {
    origin: Point3,
    direction: Vector3,
    length: f64,
    side: Vector3,
}

impl ArrowHelper {
    /// Creates the helper for a scene arrow.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not in `scene`.
    pub fn new(scene: &Scene, segment: &Segment) -> Result<Self> {
        let origin = scene.point(segment.a)?.position;
        let tip = scene.point(segment.b)?.position;
        let delta = tip - origin;
        let length = delta.norm();
        let direction = if length > TOLERANCE {
            delta / length
        } else {
            Vector3::zeros()
        };
        Ok(Self {
            origin,
            direction,
            length,
            side: any_perpendicular(&direction),
        })
    }

    /// Unit direction, or zero for a degenerate arrow.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Distance from origin to tip.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    fn tip(&self) -> Point3 {
        self.origin + self.direction * self.length
    }
}

fn any_perpendicular(direction: &Vector3) -> Vector3 {
    let reference = if direction.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    direction
        .cross(&reference)
        .try_normalize(TOLERANCE)
        .unwrap_or_else(Vector3::zeros)
}

impl RenderHelper for ArrowHelper {
    fn compute_geometry(&self) -> HelperGeometry {
        if self.length <= TOLERANCE {
            return HelperGeometry::default();
        }

        let tip = self.tip();
        let head_length = self.length * HEAD_LENGTH;
        let head_base = tip - self.direction * head_length;
        let half_width = head_length * HEAD_WIDTH;

        HelperGeometry {
            strips: vec![vec![self.origin, head_base]],
            triangles: vec![[
                tip,
                head_base + self.side * half_width,
                head_base - self.side * half_width,
            ]],
        }
    }

    fn update_for_viewpoint(&mut self, camera: &Point3) {
        let to_camera = camera - self.tip();
        // Head spans the direction perpendicular to both the shaft and the view ray.
        if let Some(side) = to_camera.cross(&self.direction).try_normalize(TOLERANCE) {
            self.side = side;
        }
    }
}
