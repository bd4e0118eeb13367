//! # m3d-math
//!
//! Fixed-size linear algebra for 3D work.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - Vectors with dot/cross products and norms
//! - [`Mat3`], [`Mat4`] - Row-major square matrices with determinant,
//!   minors, cofactors and adjugate inverse
//! - [`Quat`] - Quaternions and axis-angle vector rotation
//! - [`lerp`], [`lerp_2d`], [`lerp_3d`] - Linear interpolation
//!
//! # Design
//!
//! Every type is a `Copy` aggregate of `f32`; no operation allocates.
//! Matrices are stored as arrays of **row** vectors and multiply **column**
//! vectors:
//!
//! ```text
//! result[r] = v . row_r
//! ```
//!
//! Arithmetic is total. Degenerate input (normalizing a zero vector,
//! inverting a zero quaternion) produces NaN/Inf rather than an error;
//! the `try_*` / `checked_*` variants report [`m3d_core::Error`] instead.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Mat4, Quat, Vec3};
//!
//! let r = Mat4::rotation_z(90.0);
//! let by_matrix = r.transform_point(Vec3::X);
//! let by_quat = Quat::rotate_vector(Vec3::X, Vec3::Z, 90.0);
//! assert!(by_matrix.approx_eq(by_quat, 1e-6));
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for every type
//!
//! # Used By
//!
//! - `m3d-geom` - Curves, intercepts, field of view
//! - `m3d-cli` - Demonstration binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use interp::*;
pub use mat3::*;
pub use mat4::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

use std::fmt;

/// Writes `lines` framed above and below by a rule of `=` as wide as the
/// widest line.
pub(crate) fn write_bordered(f: &mut fmt::Formatter<'_>, lines: &[String]) -> fmt::Result {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let rule = "=".repeat(width);
    writeln!(f, "{}", rule)?;
    for line in lines {
        writeln!(f, "{}", line)?;
    }
    write!(f, "{}", rule)
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_mat4_json_roundtrip() {
        let m = Mat4::rotation_y(30.0);
        let json = serde_json::to_string(&m).unwrap();
        let back: Mat4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_quat_json_shape() {
        let json = serde_json::to_value(Quat::IDENTITY).unwrap();
        assert_eq!(json["w"], 1.0f64);
        assert_eq!(json["v"]["x"], 0.0f64);
    }
}
