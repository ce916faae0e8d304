//! Input schema for one generation, as produced by the script interpreter.
//!
//! ```json
//! {
//!   "points": [{"name": "A", "position": [0, 0, 0]}],
//!   "solids": [{"points": ["A", "B"], "facesData": [
//!     {"normal": [0, 0, -1], "constant": 0, "points": [{"name": "A", "position": [0, 0, 0]}]}
//!   ]}],
//!   "planes": [[[0, 0, 1], {"name": "A", "position": [0, 0, 0]}, ..., true, 1.0]],
//!   "lines": ["AB"],
//!   "arrows": ["BA"],
//!   "rotate": 1.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SectioError};

/// A point record: name and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub name: String,
    pub position: [f64; 3],
}

impl RawPoint {
    /// Creates a point record.
    #[must_use]
    pub fn new(name: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A triangular face record of a solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFace {
    pub normal: [f64; 3],
    pub constant: f64,
    pub points: Vec<RawPoint>,
}

/// A solid record: boundary point names and triangular faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSolid {
    pub points: Vec<String>,
    #[serde(rename = "facesData", alias = "faces_data", default)]
    pub faces: Vec<RawFace>,
}

/// A plane record: `[normal, a, b, c, section, size]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlane(
    pub [f64; 3],
    pub RawPoint,
    pub RawPoint,
    pub RawPoint,
    pub bool,
    pub f64,
);

/// The complete payload of one script run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScene {
    pub points: Vec<RawPoint>,
    pub solids: Vec<RawSolid>,
    pub planes: Vec<RawPlane>,
    pub lines: Vec<String>,
    pub arrows: Vec<String>,
    pub rotate: Option<f64>,
}

impl RawScene {
    /// Parses and schema-checks a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`SectioError::Payload`] if the JSON does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SectioError::Payload(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let json = r#"{
            "points": [
                {"name": "A", "position": [0, 0, 0]},
                {"name": "B", "position": [1, 0, 0]},
                {"name": "C", "position": [0, 1, 0]}
            ],
            "solids": [{"points": ["A", "B", "C"], "faces_data": [
                {"normal": [0, 0, 1], "constant": 0,
                 "points": [{"name": "A", "position": [0, 0, 0]},
                            {"name": "B", "position": [1, 0, 0]},
                            {"name": "C", "position": [0, 1, 0]}]}
            ]}],
            "planes": [[[0, 0, 1],
                        {"name": "A", "position": [0, 0, 0]},
                        {"name": "B", "position": [1, 0, 0]},
                        {"name": "C", "position": [0, 1, 0]},
                        true, 1.5]],
            "lines": ["AB", "AB"],
            "arrows": ["BC"],
            "rotate": 2
        }"#;
        let raw = RawScene::from_json(json).unwrap();
        assert_eq!(raw.points.len(), 3);
        assert_eq!(raw.solids[0].faces.len(), 1);
        assert_eq!(raw.planes[0].1.name, "A");
        assert!(raw.planes[0].4);
        assert_eq!(raw.lines, vec!["AB".to_string(), "AB".to_string()]);
        assert_eq!(raw.rotate, Some(2.0));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let raw = RawScene::from_json(r#"{"points": []}"#).unwrap();
        assert!(raw.solids.is_empty());
        assert!(raw.rotate.is_none());
    }

    #[test]
    fn camel_case_faces_key() {
        let json = r#"{"points": ["A"], "facesData": []}"#;
        let solid: RawSolid = serde_json::from_str(json).unwrap();
        assert!(solid.faces.is_empty());
    }

    #[test]
    fn malformed_position_is_a_payload_error() {
        let err = RawScene::from_json(r#"{"points": [{"name": "A", "position": [0, 0]}]}"#)
            .unwrap_err();
        assert!(matches!(err, SectioError::Payload(_)));
    }
}
