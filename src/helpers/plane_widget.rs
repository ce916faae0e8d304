use crate::error::Result;
use crate::math::intersect_3d::signed_distance_to_plane;
use crate::math::{Point3, Vector3};
use crate::scene::{CuttingPlane, Scene};

use super::{HelperGeometry, RenderHelper, WidgetParams};

/// The bounding quad drawn for a cutting plane.
///
/// Centred on the projection of the plane's three reference points' centroid
/// and spanned by the plane frame. The fill is wound toward the viewer.
#[derive(Debug, Clone)]
pub struct PlaneWidget {
    center: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
    half_extent: f64,
    facing: Vector3,
}

impl PlaneWidget {
    /// Creates the widget for a cutting plane.
    ///
    /// # Errors
    ///
    /// Returns an error if a reference point is not in `scene`.
    pub fn new(scene: &Scene, cutting: &CuttingPlane, params: &WidgetParams) -> Result<Self> {
        let mut sum = Vector3::zeros();
        for &id in &cutting.references {
            sum += scene.point(id)?.position.coords;
        }
        let centroid = Point3::from(sum / 3.0);

        let plane = &cutting.plane;
        let normal = *plane.plane_normal();
        let center = centroid - normal * signed_distance_to_plane(&centroid, plane);

        Ok(Self {
            center,
            u_dir: *plane.u_dir(),
            v_dir: *plane.v_dir(),
            normal,
            half_extent: 0.5 * params.scale * cutting.size,
            facing: normal,
        })
    }

    /// Centre of the quad, on the plane.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// The four corners, counter-clockwise around the plane normal.
    #[must_use]
    pub fn corners(&self) -> [Point3; 4] {
        let u = self.u_dir * self.half_extent;
        let v = self.v_dir * self.half_extent;
        [
            self.center - u - v,
            self.center + u - v,
            self.center + u + v,
            self.center - u + v,
        ]
    }
}

impl RenderHelper for PlaneWidget {
    fn compute_geometry(&self) -> HelperGeometry {
        let [a, b, c, d] = self.corners();
        let triangles = if self.facing.dot(&self.normal) >= 0.0 {
            vec![[a, b, c], [a, c, d]]
        } else {
            vec![[a, c, b], [a, d, c]]
        };
        HelperGeometry {
            strips: vec![vec![a, b, c, d, a], vec![a, c], vec![b, d]],
            triangles,
        }
    }

    fn update_for_viewpoint(&mut self, camera: &Point3) {
        self.facing = if (camera - self.center).dot(&self.normal) >= 0.0 {
            self.normal
        } else {
            -self.normal
        };
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::ResolveScene;
    use crate::scene::{RawPlane, RawPoint, RawScene};
    use approx::assert_relative_eq;

    fn widget(size: f64) -> PlaneWidget {
        let a = RawPoint::new("A", [0.0, 0.0, 1.0]);
        let b = RawPoint::new("B", [3.0, 0.0, 1.0]);
        let c = RawPoint::new("C", [0.0, 3.0, 1.0]);
        let raw = RawScene {
            points: vec![a.clone(), b.clone(), c.clone()],
            planes: vec![RawPlane([0.0, 0.0, 1.0], a, b, c, true, size)],
            ..RawScene::default()
        };
        let scene = ResolveScene::new(&raw).execute().unwrap();
        let (_, plane) = scene.planes().next().unwrap();
        PlaneWidget::new(&scene, plane, &WidgetParams::default()).unwrap()
    }

    #[test]
    fn quad_is_centred_and_sized() {
        let w = widget(2.0);
        assert_relative_eq!((w.center() - Point3::new(1.0, 1.0, 1.0)).norm(), 0.0, epsilon = 1e-12);
        let [a, b, c, _] = w.corners();
        assert_relative_eq!((b - a).norm(), 10.0, epsilon = 1e-12);
        assert_relative_eq!((c - b).norm(), 10.0, epsilon = 1e-12);
        for corner in w.corners() {
            assert_relative_eq!(corner.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fill_turns_toward_camera() {
        let mut w = widget(1.0);
        for camera in [Point3::new(0.0, 0.0, 9.0), Point3::new(0.0, 0.0, -9.0)] {
            w.update_for_viewpoint(&camera);
            for [a, b, c] in w.compute_geometry().triangles {
                let normal = (b - a).cross(&(c - a));
                assert!(normal.dot(&(camera - a)) > 0.0);
            }
        }
    }
}
