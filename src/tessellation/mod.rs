mod triangulate_polygon;

pub use triangulate_polygon::{TriangulatePolygon, DEFAULT_COLLINEAR_TOLERANCE};

use serde::Serialize;

use crate::math::{Point2, Point3, Vector3};

/// A triangle mesh approximation of a planar polygon.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Local in-plane coordinates of each vertex.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Total area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
            })
            .sum()
    }

    /// Converts the mesh into the plain `{vertices, triangles}` export shape.
    #[must_use]
    pub fn to_export(&self) -> MeshExport {
        MeshExport {
            vertices: self.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
            triangles: self.indices.clone(),
        }
    }
}

/// Serializable mesh handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshExport {
    pub vertices: Vec<[f64; 3]>,
    pub triangles: Vec<[u32; 3]>,
}
