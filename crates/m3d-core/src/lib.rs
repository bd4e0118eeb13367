//! # m3d-core
//!
//! Core types for the m3d 3D math toolkit.
//!
//! - [`Error`], [`Result`] - Error taxonomy for the checked operations
//! - [`deg_to_rad`], [`rad_to_deg`], [`approx_eq`] - Scalar helpers
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other m3d crates build on it:
//!
//! ```text
//! m3d-core (this crate)
//!    ^
//!    |
//!    +-- m3d-math (vectors, matrices, quaternions)
//!    +-- m3d-geom (curves, intercepts, field of view)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::{approx_eq, consts, deg_to_rad, rad_to_deg};

/// Prelude module for convenient imports.
///
/// ```
/// use m3d_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{approx_eq, deg_to_rad, rad_to_deg};
}
