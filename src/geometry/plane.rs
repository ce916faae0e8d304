use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space with an orthonormal in-plane frame.
///
/// Defined by an origin point and a unit normal; `u_dir` is an arbitrary
/// in-plane unit vector and `v_dir = normal × u_dir`, so `(u_dir, v_dir,
/// normal)` is right-handed.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane from an origin and a normal vector.
    ///
    /// The normal is normalised; the U and V directions are computed
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length or any input
    /// coordinate is not finite.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        if !origin.iter().chain(normal.iter()).all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite.into());
        }
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let u_dir = reference.cross(&normal).normalize();
        let v_dir = normal.cross(&u_dir);

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal,
        })
    }

    /// Returns the same plane with its frame re-anchored at `origin`.
    ///
    /// `origin` is expected to lie on the plane; only the frame moves.
    #[must_use]
    pub fn with_origin(mut self, origin: Point3) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the U direction vector.
    #[must_use]
    pub fn u_dir(&self) -> &Vector3 {
        &self.u_dir
    }

    /// Returns the V direction vector.
    #[must_use]
    pub fn v_dir(&self) -> &Vector3 {
        &self.v_dir
    }

    /// Returns the unit normal vector of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed offset `c` of the plane equation `normal · p = c`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        self.normal.dot(&self.origin.coords)
    }

    /// Projects a 3D point into the plane's local `(u, v)` frame.
    ///
    /// The out-of-plane component is discarded.
    #[must_use]
    pub fn project(&self, point: &Point3) -> Point2 {
        let diff = point - self.origin;
        Point2::new(diff.dot(&self.u_dir), diff.dot(&self.v_dir))
    }

    /// Maps local `(u, v)` coordinates back onto the plane in 3D.
    #[must_use]
    pub fn lift(&self, uv: &Point2) -> Point3 {
        self.origin + self.u_dir * uv.x + self.v_dir * uv.y
    }
}
