use std::cmp::Ordering;

use super::{Point2, Vector2};

/// 2D cross product of `(a - o)` and `(b - o)`.
///
/// Positive when `o -> a -> b` turns counter-clockwise.
#[inline]
#[must_use]
pub fn cross_2d(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Computes the signed area of a polygon ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Winding number of `point` with respect to the ring `verts`.
///
/// Non-zero => inside, zero => outside.
#[must_use]
pub fn winding_number_2d(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &verts[i];
        let b = &verts[(i + 1) % n];

        if a.y <= point.y {
            if b.y > point.y && cross_2d(a, b, point) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && cross_2d(a, b, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Arithmetic mean of a point set.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / n)
}

/// Orders an unordered point set into a ring by angle around its centroid.
///
/// Returns indices into `points`, counter-clockwise. Only produces a simple
/// ring when the points are in convex position. Points at exactly the same
/// angle are ordered by distance from the centroid, nearest first; the sort
/// is stable so exact duplicates keep their input order.
#[must_use]
pub fn order_by_centroid_angle(points: &[Point2]) -> Vec<usize> {
    let center = centroid_2d(points);
    let keys: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            let d = p - center;
            (d.y.atan2(d.x), d.norm_squared())
        })
        .collect();

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let (angle_a, dist_a) = keys[a];
        let (angle_b, dist_b) = keys[b];
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| dist_a.partial_cmp(&dist_b).unwrap_or(Ordering::Equal))
    });
    order
}

/// Drops ring vertices that are collinear with their two neighbours.
///
/// `ring` holds indices into `points`. A vertex is dropped when the sine of
/// the turn between its incoming and outgoing edges is within `tolerance`,
/// which also removes coincident neighbours. Repeats until stable.
#[must_use]
pub fn remove_collinear(points: &[Point2], ring: &[usize], tolerance: f64) -> Vec<usize> {
    let mut ring = ring.to_vec();
    loop {
        let n = ring.len();
        if n < 3 {
            return ring;
        }
        let drop = (0..n).find(|&i| {
            let prev = &points[ring[(i + n - 1) % n]];
            let cur = &points[ring[i]];
            let next = &points[ring[(i + 1) % n]];
            let incoming = (cur - prev).norm();
            let outgoing = (next - cur).norm();
            cross_2d(prev, cur, next).abs() <= tolerance * incoming * outgoing
        });
        match drop {
            Some(i) => {
                ring.remove(i);
            }
            None => return ring,
        }
    }
}
