use crate::geometry::Plane;

use super::{Point3, Vector3, TOLERANCE};

/// Relationship of a line with a plane.
#[derive(Debug)]
pub enum LinePlaneRelation {
    /// Line intersects the plane at a single point.
    Point { point: Point3, t: f64 },
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Computes the intersection of a line `origin + t * dir` with a plane.
#[must_use]
pub fn line_plane_intersect(origin: &Point3, dir: &Vector3, plane: &Plane) -> LinePlaneRelation {
    let normal = plane.plane_normal();
    let denom = normal.dot(dir);

    let numer = plane.constant() - normal.dot(&origin.coords);

    if denom.abs() < TOLERANCE {
        // Line is parallel to the plane
        if numer.abs() < TOLERANCE {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        let t = numer / denom;
        let point = origin + dir * t;
        LinePlaneRelation::Point { point, t }
    }
}

/// Intersects the closed segment `start..=end` with a plane.
///
/// Returns the crossing point when the parameter `t` along the segment lies
/// in `[0, 1]`, so a plane through an endpoint counts as a hit. Segments
/// parallel to the plane, including those lying in it, yield `None`.
#[must_use]
pub fn segment_plane_intersect(start: &Point3, end: &Point3, plane: &Plane) -> Option<Point3> {
    match line_plane_intersect(start, &(end - start), plane) {
        LinePlaneRelation::Point { point, t } if (0.0..=1.0).contains(&t) => Some(point),
        _ => None,
    }
}

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    plane.plane_normal().dot(&point.coords) - plane.constant()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn z_plane(height: f64) -> Plane {
        Plane::from_normal(p(0.0, 0.0, height), v(0.0, 0.0, 1.0)).unwrap()
    }

    // ── line_plane_intersect ──

    #[test]
    fn line_hits_plane() {
        let result = line_plane_intersect(&p(0.0, 0.0, 0.0), &v(0.0, 0.0, 1.0), &z_plane(5.0));
        match result {
            LinePlaneRelation::Point { point, t } => {
                assert!((t - 5.0).abs() < TOLERANCE);
                assert!((point.z - 5.0).abs() < TOLERANCE);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    #[test]
    fn line_parallel_to_plane() {
        let result = line_plane_intersect(&p(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), &z_plane(5.0));
        assert!(matches!(result, LinePlaneRelation::Parallel));
    }

    #[test]
    fn line_on_plane() {
        let result = line_plane_intersect(&p(1.0, 2.0, 0.0), &v(1.0, 0.0, 0.0), &z_plane(0.0));
        assert!(matches!(result, LinePlaneRelation::OnPlane));
    }

    #[test]
    fn line_oblique_to_plane() {
        let result = line_plane_intersect(&p(0.0, 0.0, -3.0), &v(1.0, 1.0, 1.0), &z_plane(0.0));
        match result {
            LinePlaneRelation::Point { point, t } => {
                assert!((t - 3.0).abs() < TOLERANCE);
                assert!(point.z.abs() < TOLERANCE);
            }
            other => panic!("expected Point, got {other:?}"),
        }
    }

    // ── segment_plane_intersect ──

    #[test]
    fn segment_crossing_plane() {
        let hit = segment_plane_intersect(&p(1.0, 1.0, 0.0), &p(1.0, 1.0, 1.0), &z_plane(0.25));
        let hit = hit.unwrap();
        assert!((hit - p(1.0, 1.0, 0.25)).norm() < TOLERANCE);
    }

    #[test]
    fn segment_short_of_plane() {
        let hit = segment_plane_intersect(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 1.0), &z_plane(1.5));
        assert!(hit.is_none());
    }

    #[test]
    fn segment_endpoint_on_plane_counts() {
        let hit = segment_plane_intersect(&p(0.0, 0.0, 0.0), &p(0.0, 0.0, 1.0), &z_plane(1.0));
        assert!((hit.unwrap() - p(0.0, 0.0, 1.0)).norm() < TOLERANCE);

        let hit = segment_plane_intersect(&p(0.0, 0.0, 1.0), &p(0.0, 0.0, 2.0), &z_plane(1.0));
        assert!((hit.unwrap() - p(0.0, 0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn segment_in_plane_is_ignored() {
        let hit = segment_plane_intersect(&p(0.0, 0.0, 1.0), &p(1.0, 0.0, 1.0), &z_plane(1.0));
        assert!(hit.is_none());
    }

    // ── signed_distance_to_plane ──

    #[test]
    fn signed_distance_sides() {
        let plane = z_plane(2.0);
        assert!((signed_distance_to_plane(&p(3.0, 3.0, 5.0), &plane) - 3.0).abs() < TOLERANCE);
        assert!((signed_distance_to_plane(&p(0.0, 0.0, 0.0), &plane) + 2.0).abs() < TOLERANCE);
        assert!(signed_distance_to_plane(&p(9.0, -4.0, 2.0), &plane).abs() < TOLERANCE);
    }
}
