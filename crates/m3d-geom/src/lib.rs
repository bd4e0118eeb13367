//! # m3d-geom
//!
//! Geometric helpers built on [`m3d_math`].
//!
//! - [`bezier`] - Quadratic and cubic Bezier curves in 2D and 3D
//! - [`intercept`] - Pursuit heading and meeting time
//! - [`fov`] - Planar field-of-view test
//!
//! # Usage
//!
//! ```rust
//! use m3d_geom::{Curve2D, CubicBezier2D, FieldOfView};
//! use m3d_math::Vec2;
//!
//! let path = CubicBezier2D::new(
//!     Vec2::ZERO,
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(1.0, 1.0),
//!     Vec2::new(1.0, 0.0),
//! );
//! let guard = FieldOfView::from_degrees(Vec2::new(0.5, -1.0), Vec2::Y, 3.0, 60.0);
//!
//! let seen = path.sample(8).into_iter().filter(|p| guard.contains(*p)).count();
//! assert!(seen > 0);
//! ```
//!
//! # Dependencies
//!
//! - [`m3d_core`] - Error type
//! - [`m3d_math`] - Vectors and matrices
//! - `tracing` - Diagnostics for rejected intercepts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bezier;
pub mod fov;
pub mod intercept;

pub use bezier::{
    CUBIC_BASIS, CubicBezier2D, CubicBezier3D, Curve2D, Curve3D, QUAD_BASIS, QuadBezier2D,
    QuadBezier3D,
};
pub use fov::{FieldOfView, is_within_range_2d};
pub use intercept::{intercept_point, intercept_time, target_intercept, try_target_intercept};
