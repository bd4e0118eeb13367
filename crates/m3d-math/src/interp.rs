//! Linear interpolation.
//!
//! All functions use the weighted form `(1 - t) * a + t * b`, which returns
//! `a` and `b` exactly at `t = 0` and `t = 1`. They are total over every
//! real `t`: values outside `[0, 1]` extrapolate along the line.
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{lerp, lerp_2d, Vec2};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(lerp_2d(Vec2::ZERO, Vec2::new(2.0, 4.0), 0.25), Vec2::new(0.5, 1.0));
//! ```

use crate::{Vec2, Vec3};

/// Linear interpolation between two scalars.
///
/// # Example
///
/// ```rust
/// use m3d_math::lerp;
///
/// assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
/// assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
/// assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Linear interpolation between two 2D points.
#[inline]
pub fn lerp_2d(p0: Vec2, p1: Vec2, t: f32) -> Vec2 {
    Vec2::new(lerp(p0.x, p1.x, t), lerp(p0.y, p1.y, t))
}

/// Linear interpolation between two 3D points.
#[inline]
pub fn lerp_3d(p0: Vec3, p1: Vec3, t: f32) -> Vec3 {
    Vec3::new(lerp(p0.x, p1.x, t), lerp(p0.y, p1.y, t), lerp(p0.z, p1.z, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(-3.5, 7.25, 0.0), -3.5);
        assert_eq!(lerp(-3.5, 7.25, 1.0), 7.25);
        assert_abs_diff_eq!(lerp(0.0, 10.0, 0.3), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    }

    #[test]
    fn test_lerp_points() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(3.0, 2.0, -1.0);
        assert_eq!(lerp_3d(a, b, 0.5), Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(lerp_3d(a, b, 0.5), a.lerp(b, 0.5));
        assert_eq!(lerp_2d(Vec2::X, Vec2::Y, 1.0), Vec2::Y);
    }
}
