use std::collections::HashSet;

use super::Point3;

/// Rounds a coordinate to the nearest multiple of `quantum`.
///
/// Idempotent: quantizing an already quantized value returns it unchanged.
#[must_use]
pub fn quantize(value: f64, quantum: f64) -> f64 {
    // Adding 0.0 folds -0.0 into +0.0.
    (value / quantum).round() * quantum + 0.0
}

/// Rounds every coordinate of a point to the `quantum` grid.
#[must_use]
pub fn quantize_point(point: &Point3, quantum: f64) -> Point3 {
    point.map(|c| quantize(c, quantum))
}

/// Grid cell index of a point; two points share a key iff they quantize equally.
#[allow(clippy::cast_possible_truncation)]
fn grid_key(point: &Point3, quantum: f64) -> [i64; 3] {
    [
        (point.x / quantum).round() as i64,
        (point.y / quantum).round() as i64,
        (point.z / quantum).round() as i64,
    ]
}

/// An insertion-ordered set of points deduplicated on a quantization grid.
#[derive(Debug, Clone)]
pub struct QuantizedPointSet {
    quantum: f64,
    seen: HashSet<[i64; 3]>,
    points: Vec<Point3>,
}

impl QuantizedPointSet {
    /// Creates an empty set using the given grid size.
    #[must_use]
    pub fn new(quantum: f64) -> Self {
        Self {
            quantum,
            seen: HashSet::new(),
            points: Vec::new(),
        }
    }

    /// Quantizes `point` and inserts it unless an equal point is present.
    ///
    /// Returns `true` if the point was new.
    pub fn insert(&mut self, point: &Point3) -> bool {
        let quantized = quantize_point(point, self.quantum);
        if self.seen.insert(grid_key(&quantized, self.quantum)) {
            self.points.push(quantized);
            true
        } else {
            false
        }
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The distinct quantized points in first-insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Consumes the set, returning the distinct points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}
