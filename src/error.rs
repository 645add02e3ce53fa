//! Error types for polycollide operations.

use thiserror::Error;

/// Errors returned by the fallible parts of the API.
///
/// Geometric queries never fail: degenerate shapes produce best-effort
/// answers. Only index access, shape conversion and configuration loading
/// report errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A point index was past the end of the polygon.
    #[error("point index {index} out of bounds for polygon with {len} points")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of points in the polygon.
        len: usize,
    },

    /// A triangle was requested from a polygon that does not have exactly three points.
    #[error("expected exactly 3 points for a triangle, got {len}")]
    NotATriangle {
        /// Number of points in the source polygon.
        len: usize,
    },

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}
