//! Error types for tree construction and queries.

use thiserror::Error;

/// Errors reported by [`BspTree`](crate::BspTree) construction and
/// operations.
///
/// A point query that finds nothing is not an error; it reports
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BspError {
    /// The tree dimensionality must be at least 1.
    #[error("dimension must be at least 1")]
    InvalidDimension,

    /// The leaf capacity must be at least 1.
    #[error("leaf size must be at least 1")]
    InvalidLeafSize,

    /// A point's coordinate count does not match the expected
    /// dimensionality.
    #[error("point has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        /// The dimensionality required by the receiver.
        expected: usize,
        /// The dimensionality of the offending input.
        actual: usize,
    },
}
