use thiserror::Error;

/// Top-level error type for the cross-section engine.
#[derive(Debug, Error)]
pub enum SectioError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("invalid scene payload: {0}")]
    Payload(String),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Failure reported by the script interpreter.
///
/// Relayed verbatim; the engine never interprets the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// The interpreter's message, untouched.
    pub message: String,
    /// 1-based source line, when the interpreter reported one.
    pub line: Option<usize>,
}

impl ScriptError {
    /// Creates a script error with an optional source line.
    #[must_use]
    pub fn new(message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Errors raised while resolving raw records into a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("unknown point '{name}' referenced by {context}")]
    UnresolvedPoint { name: String, context: &'static str },

    #[error("invalid segment '{0}': expected exactly two point names")]
    InvalidSegment(String),

    #[error("face {face} of solid {solid} has {count} points, expected 3")]
    InvalidFace {
        solid: usize,
        face: usize,
        count: usize,
    },

    #[error("point '{0}' is defined more than once")]
    DuplicatePoint(String),

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite coordinate")]
    NonFinite,
}

/// Errors related to polygon triangulation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid triangulation input: {0}")]
    InvalidInput(String),

    #[error("triangulation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`SectioError`].
pub type Result<T> = std::result::Result<T, SectioError>;
