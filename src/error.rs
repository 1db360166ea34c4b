//! Error types for Grafo operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Grafo operations.
///
/// Covers dimension mismatches on feature assignment, out-of-range node
/// and edge indices, and loader failures (I/O and parse errors).
///
/// # Examples
///
/// ```
/// use grafo::error::GrafoError;
///
/// let err = GrafoError::DimensionMismatch {
///     expected: "3x4".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum GrafoError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Node, edge, or element index outside the valid range.
    IndexOutOfBounds {
        /// What was being indexed (e.g. "node", "edge")
        kind: &'static str,
        /// Offending index
        index: usize,
        /// Valid length
        len: usize,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Malformed graph file content.
    Parse {
        /// 1-based line number where parsing failed
        line: usize,
        /// Error description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for GrafoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrafoError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            GrafoError::IndexOutOfBounds { kind, index, len } => {
                write!(f, "{kind} index {index} out of bounds (len={len})")
            }
            GrafoError::Io(e) => write!(f, "I/O error: {e}"),
            GrafoError::Parse { line, message } => {
                write!(f, "parse error at line {line}: {message}")
            }
            GrafoError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GrafoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrafoError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GrafoError {
    fn from(err: std::io::Error) -> Self {
        GrafoError::Io(err)
    }
}

impl From<&str> for GrafoError {
    fn from(msg: &str) -> Self {
        GrafoError::Other(msg.to_string())
    }
}

impl From<String> for GrafoError {
    fn from(msg: String) -> Self {
        GrafoError::Other(msg)
    }
}

impl GrafoError {
    /// Create a dimension mismatch for a feature row of the wrong width.
    #[must_use]
    pub fn feature_width(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("feature width {expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a node index out of bounds error.
    #[must_use]
    pub fn node_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            kind: "node",
            index,
            len,
        }
    }

    /// Create an edge index out of bounds error.
    #[must_use]
    pub fn edge_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            kind: "edge",
            index,
            len,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, GrafoError>;
