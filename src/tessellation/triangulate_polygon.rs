use std::collections::HashMap;

use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use crate::error::{Result, TessellationError};
use crate::geometry::Plane;
use crate::math::polygon_2d::{order_by_centroid_angle, remove_collinear, winding_number_2d};
use crate::math::{Point2, Point3, Vector3};

use super::TriangleMesh;

/// Default sine tolerance under which a ring vertex counts as collinear.
pub const DEFAULT_COLLINEAR_TOLERANCE: f64 = 1e-5;

/// Triangulates an unordered set of coplanar points.
///
/// The points are projected into a frame on the supporting plane, ordered by
/// angle around their centroid, stripped of collinear vertices and
/// triangulated with a constrained Delaunay triangulation of the ring.
///
/// The angular ordering assumes the points are in convex position, which
/// holds for a plane cutting a convex solid. A non-convex section still gets
/// a simple (star-shaped) ring, but not necessarily the true outline.
pub struct TriangulatePolygon<'a> {
    points: &'a [Point3],
    normal: Vector3,
    collinear_tolerance: f64,
}

impl<'a> TriangulatePolygon<'a> {
    /// Creates a new `TriangulatePolygon` operation.
    #[must_use]
    pub fn new(points: &'a [Point3], normal: Vector3) -> Self {
        Self {
            points,
            normal,
            collinear_tolerance: DEFAULT_COLLINEAR_TOLERANCE,
        }
    }

    /// Sets the sine tolerance used to drop collinear ring vertices.
    #[must_use]
    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    /// The local frame the points are projected into: origin at the first
    /// point, axes spanning the supporting plane.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no points or the normal is degenerate.
    pub fn frame(&self) -> Result<Plane> {
        let origin = self.points.first().ok_or_else(|| {
            TessellationError::InvalidInput("no points to triangulate".into())
        })?;
        Plane::from_normal(*origin, self.normal)
    }

    /// Executes the triangulation.
    ///
    /// Returns `None` when fewer than three non-collinear vertices remain.
    /// Vertices of the mesh are the input points that survive, in ring
    /// order; triangles wind counter-clockwise seen from the normal side.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given, the normal is
    /// degenerate, or the triangulation cannot be built.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<Option<TriangleMesh>> {
        if self.points.len() < 3 {
            return Err(TessellationError::InvalidInput(format!(
                "need at least 3 points, got {}",
                self.points.len()
            ))
            .into());
        }

        let frame = self.frame()?;
        let projected: Vec<Point2> = self.points.iter().map(|p| frame.project(p)).collect();

        let ring = order_by_centroid_angle(&projected);
        let ring = remove_collinear(&projected, &ring, self.collinear_tolerance);
        if ring.len() < 3 {
            debug!(points = self.points.len(), "section collapsed to a line");
            return Ok(None);
        }

        let ring_2d: Vec<Point2> = ring.iter().map(|&i| projected[i]).collect();
        let triangles = triangulate_ring(&ring_2d)?;

        let normal = *frame.plane_normal();
        let mesh = TriangleMesh {
            vertices: ring.iter().map(|&i| self.points[i]).collect(),
            normals: vec![normal; ring.len()],
            uvs: ring_2d,
            indices: triangles
                .into_iter()
                .map(|[a, b, c]| [a as u32, b as u32, c as u32])
                .collect(),
        };
        Ok(Some(mesh))
    }
}

/// Triangulates a simple ring, returning index triples into `ring`.
fn triangulate_ring(ring: &[Point2]) -> Result<Vec<[usize; 3]>> {
    let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();

    let mut handles = Vec::with_capacity(ring.len());
    let mut ring_index: HashMap<usize, usize> = HashMap::new();
    for (i, pt) in ring.iter().enumerate() {
        let h = cdt
            .insert(SpadePoint2::new(pt.x, pt.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        if ring_index.insert(h.index(), i).is_some() {
            return Err(TessellationError::Failed("coincident ring vertices".into()).into());
        }
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        cdt.add_constraint(from, to);
    }

    let mut triangles = Vec::with_capacity(ring.len() - 2);
    for face in cdt.inner_faces() {
        let mut tri = [0usize; 3];
        for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
            *slot = *ring_index.get(&vh.fix().index()).ok_or_else(|| {
                TessellationError::Failed("CDT produced a vertex outside the ring".into())
            })?;
        }
        let [a, b, c] = tri;
        let centroid = Point2::from((ring[a].coords + ring[b].coords + ring[c].coords) / 3.0);
        if winding_number_2d(&centroid, ring) != 0 {
            triangles.push([a, b, c]);
        }
    }

    Ok(triangles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn triangle_normal(mesh: &TriangleMesh, tri: [u32; 3]) -> Vector3 {
        let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
        (b - a).cross(&(c - a))
    }

    #[test]
    fn unit_square_makes_two_triangles() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        let mesh = TriangulatePolygon::new(&pts, v(0.0, 0.0, 1.0))
            .execute()
            .unwrap()
            .unwrap();

        assert_eq!(mesh.indices.len(), 2);
        let used: HashSet<u32> = mesh.indices.iter().flatten().copied().collect();
        assert_eq!(used.len(), 4);
        for vertex in &mesh.vertices {
            assert!(pts.contains(vertex));
        }
        assert_relative_eq!(mesh.area(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn scrambled_input_is_ordered() {
        let pts = vec![p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 0.0, 0.0)];
        let mesh = TriangulatePolygon::new(&pts, v(0.0, 0.0, 1.0))
            .execute()
            .unwrap()
            .unwrap();
        assert_eq!(mesh.indices.len(), 2);
        assert_relative_eq!(mesh.area(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn triangles_face_the_normal() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        for normal in [v(0.0, 0.0, 1.0), v(0.0, 0.0, -1.0)] {
            let mesh = TriangulatePolygon::new(&pts, normal).execute().unwrap().unwrap();
            for &tri in &mesh.indices {
                assert!(triangle_normal(&mesh, tri).dot(&normal) > 0.0);
            }
        }
    }

    #[test]
    fn tilted_hexagon() {
        let normal = v(1.0, 1.0, 1.0).normalize();
        let frame = Plane::from_normal(p(2.0, 0.0, -1.0), normal).unwrap();
        let pts: Vec<Point3> = (0_i32..6)
            .map(|k| {
                let a = f64::from(k) * std::f64::consts::FRAC_PI_3;
                frame.lift(&Point2::new(a.cos(), a.sin()))
            })
            .rev()
            .collect();
        let mesh = TriangulatePolygon::new(&pts, normal).execute().unwrap().unwrap();
        assert_eq!(mesh.indices.len(), 4);
        assert_relative_eq!(mesh.area(), 3.0 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-9);
        assert!(mesh.normals.iter().all(|n| (n - normal).norm() < 1e-12));
    }

    #[test]
    fn collinear_points_are_dropped() {
        let pts = vec![
            p(0.0, 0.0, 0.5),
            p(1.0, 0.0, 0.5),
            p(1.0, 1.0, 0.5),
            p(0.0, 1.0, 0.5),
            p(0.5, 0.0, 0.5),
            p(1.0, 0.5, 0.5),
        ];
        let mesh = TriangulatePolygon::new(&pts, v(0.0, 0.0, 1.0))
            .execute()
            .unwrap()
            .unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 2);
    }

    #[test]
    fn collinear_set_yields_nothing() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        let mesh = TriangulatePolygon::new(&pts, v(0.0, 0.0, 1.0)).execute().unwrap();
        assert!(mesh.is_none());
    }

    #[test]
    fn too_few_points_is_an_error() {
        let pts = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)];
        assert!(TriangulatePolygon::new(&pts, v(0.0, 0.0, 1.0)).execute().is_err());
    }

    #[test]
    fn frame_round_trips_points() {
        let normal = v(0.2, -0.7, 0.4).normalize();
        let base = Plane::from_normal(p(1.0, 2.0, 3.0), normal).unwrap();
        let pts: Vec<Point3> = [(0.0, 0.0), (3.0, -1.0), (-2.5, 4.0), (0.1, 0.2)]
            .iter()
            .map(|&(u, w)| base.lift(&Point2::new(u, w)))
            .collect();

        let op = TriangulatePolygon::new(&pts, normal);
        let frame = op.frame().unwrap();
        assert_eq!(frame.origin(), &pts[0]);
        for point in &pts {
            let back = frame.lift(&frame.project(point));
            assert!((back - point).norm() < 1e-6);
        }

        let mesh = op.execute().unwrap().unwrap();
        for (uv, vertex) in mesh.uvs.iter().zip(&mesh.vertices) {
            assert!((frame.lift(uv) - vertex).norm() < 1e-6);
        }
    }
}
