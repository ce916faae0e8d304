use crate::math::Vector3;

use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in a scene.
    pub struct SolidId;
}

/// A triangular boundary face of a solid.
///
/// The face lies in `{p : normal · p = constant}`; the plane data is carried
/// as given and must agree with the three points.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Unit outward normal.
    pub normal: Vector3,
    /// Signed plane offset.
    pub constant: f64,
    /// The three non-collinear corner points.
    pub points: [PointId; 3],
}

impl Face {
    /// The three edges `A-B`, `B-C`, `C-A` as point pairs.
    #[must_use]
    pub fn edges(&self) -> [(PointId, PointId); 3] {
        let [a, b, c] = self.points;
        [(a, b), (b, c), (c, a)]
    }
}

/// A polyhedral solid described by its triangulated boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// The solid's corner points, in declaration order.
    pub boundary: Vec<PointId>,
    /// Triangular boundary faces.
    pub faces: Vec<Face>,
}
