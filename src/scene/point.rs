use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a named point in a scene.
    pub struct PointId;
}

/// A named point of the construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Unique name, as written in the script.
    pub name: String,
    /// The 3D position of the point.
    pub position: Point3,
}

impl Point {
    /// Creates a new named point.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}
