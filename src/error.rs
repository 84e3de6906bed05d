//! Error type shared by every curve and matrix operation.

use thiserror::Error;

/// Result type for curve and matrix operations.
pub type Result<T> = std::result::Result<T, CurveError>;

/// Coarse classification of a [`CurveError`].
///
/// Several variants of [`CurveError`] describe the same kind of misuse with different details,
/// e.g. both a missing control point and a zero sample count are invalid arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A matrix was constructed from empty or jagged rows.
    Dimension,
    /// Two matrices have incompatible shapes for an operation.
    DimensionMismatch,
    /// A matrix element was accessed out of bounds.
    Index,
    /// An argument violates an operation's precondition.
    InvalidArgument,
    /// A curve parameter lies outside of the curve's domain.
    Range,
}

/// Errors raised by matrices and curve evaluation.
///
/// All of them are programmer errors: they are returned immediately and never leave partial
/// results behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Matrix rows are missing or of unequal length.
    #[error("invalid matrix dimensions: {0}")]
    Dimension(String),

    /// Operands of a matrix operation have incompatible shapes.
    #[error("cannot {operation} a {}x{} matrix with a {}x{} matrix", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Name of the failed operation.
        operation: &'static str,
        /// Dimensions of the left operand.
        left: (usize, usize),
        /// Dimensions of the right operand.
        right: (usize, usize),
    },

    /// Element access outside of a matrix.
    #[error("index ({row}, {column}) out of bounds for a {rows}x{columns} matrix")]
    Index {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },

    /// A curve's degree is larger than its number of control points.
    #[error("degree {degree} exceeds the number of control points ({points})")]
    DegreeExceedsPointCount {
        /// Requested degree.
        degree: usize,
        /// Number of control points.
        points: usize,
    },

    /// Too few control points for the requested curve.
    #[error("not enough control points: need at least {required}, got {found}")]
    NotEnoughPoints {
        /// Minimal number of control points.
        required: usize,
        /// Number of control points given.
        found: usize,
    },

    /// A discretization was requested with zero samples.
    #[error("sample count must be positive")]
    NoSamples,

    /// The curve parameter is outside of the knot vector's range.
    #[error("parameter {t} is outside of the range [{min}, {max}]")]
    Range {
        /// Offending parameter.
        t: f64,
        /// Lower bound of the domain.
        min: f64,
        /// Upper bound of the domain.
        max: f64,
    },
}

impl CurveError {
    /// Returns the kind of error this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::Dimension(_) => ErrorKind::Dimension,
            CurveError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            CurveError::Index { .. } => ErrorKind::Index,
            CurveError::DegreeExceedsPointCount { .. }
            | CurveError::NotEnoughPoints { .. }
            | CurveError::NoSamples => ErrorKind::InvalidArgument,
            CurveError::Range { .. } => ErrorKind::Range,
        }
    }
}
