//! Error types for m3d operations.
//!
//! The vector, matrix and quaternion kernel is total: degenerate input
//! propagates IEEE NaN/Infinity rather than failing. This module backs the
//! *checked* variants that sit next to the unchecked operations, and the
//! intercept solver where "no solution" is a meaningful outcome.
//!
//! # Usage
//!
//! ```rust
//! use m3d_core::{Error, Result};
//!
//! fn component(values: &[f32; 3], index: usize) -> Result<f32> {
//!     values
//!         .get(index)
//!         .copied()
//!         .ok_or(Error::index_out_of_range(index, 3))
//! }
//!
//! assert!(component(&[1.0, 2.0, 3.0], 5).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `m3d-math` - Checked indexing, normalization and inversion
//! - `m3d-geom` - Intercept solver

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked m3d operations.
///
/// # Categories
///
/// - **Degenerate input**: [`DegenerateVector`](Error::DegenerateVector),
///   [`SingularMatrix`](Error::SingularMatrix)
/// - **Bounds errors**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Geometry**: [`UnreachableIntercept`](Error::UnreachableIntercept)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vector (or quaternion) with zero length was used where a
    /// direction is required.
    #[error("degenerate vector: {context}")]
    DegenerateVector {
        /// What was being computed
        context: String,
    },

    /// The matrix has no inverse.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_core::Error;
    ///
    /// let err = Error::singular(0.0);
    /// assert!(err.is_singular());
    /// assert!(err.to_string().contains("singular"));
    /// ```
    #[error("singular matrix (determinant {determinant})")]
    SingularMatrix {
        /// Determinant that failed the singularity test
        determinant: f32,
    },

    /// Component, row or column index outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of valid indices
        len: usize,
    },

    /// The pursuer can never reach the target.
    #[error("unreachable intercept: {reason}")]
    UnreachableIntercept {
        /// Why no intercept exists
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::DegenerateVector`] error.
    #[inline]
    pub fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateVector {
            context: context.into(),
        }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    ///
    /// # Arguments
    ///
    /// * `index` - Index that was accessed
    /// * `len` - Number of valid indices
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::UnreachableIntercept`] error.
    #[inline]
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::UnreachableIntercept {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`Error::DegenerateVector`].
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateVector { .. })
    }

    /// Returns `true` for [`Error::SingularMatrix`].
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` for [`Error::IndexOutOfRange`].
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` for [`Error::UnreachableIntercept`].
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::UnreachableIntercept { .. })
    }
}
