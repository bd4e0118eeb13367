//! Quadratic and cubic Bezier curves in 2D and 3D.
//!
//! Curves are evaluated in power form. For parameter `t` the power basis
//! `(t^2, t, 1)` (quadratic) or `(t^3, t^2, t, 1)` (cubic) is multiplied by
//! a fixed basis matrix, giving the Bernstein weights of the control points.
//! Each output coordinate is then the dot product of those weights with the
//! per-axis control vector cached at construction.
//!
//! ```text
//! weights = BASIS * (t^3, t^2, t, 1)
//! x(t)    = (x0, x1, x2, x3) . weights
//! ```
//!
//! `t` is meant to lie in `[0, 1]`; other values extrapolate the polynomial.

use m3d_math::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// Power-to-Bernstein basis for quadratic curves.
///
/// Rows give `(1-t)^2`, `2t(1-t)` and `t^2` against `(t^2, t, 1)`.
pub const QUAD_BASIS: Mat3 = Mat3::from_rows([
    [1.0, -2.0, 1.0],
    [-2.0, 2.0, 0.0],
    [1.0, 0.0, 0.0],
]);

/// Power-to-Bernstein basis for cubic curves.
///
/// Rows give `(1-t)^3`, `3t(1-t)^2`, `3t^2(1-t)` and `t^3` against
/// `(t^3, t^2, t, 1)`.
pub const CUBIC_BASIS: Mat4 = Mat4::from_rows([
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
]);

#[inline]
fn quad_weights(t: f32) -> Vec3 {
    QUAD_BASIS * Vec3::new(t * t, t, 1.0)
}

#[inline]
fn cubic_weights(t: f32) -> Vec4 {
    CUBIC_BASIS * Vec4::new(t * t * t, t * t, t, 1.0)
}

/// Evenly spaced parameters `0, 1/n, ..., 1`; a single `0` when `n == 0`.
fn sample_params(segments: usize) -> impl Iterator<Item = f32> {
    let n = segments.max(1);
    (0..=segments).map(move |i| i as f32 / n as f32)
}

/// A planar curve that can be evaluated at a parameter.
pub trait Curve2D {
    /// Point on the curve at `t`.
    fn point(&self, t: f32) -> Vec2;

    /// `segments + 1` points evenly spaced over `t` in `[0, 1]`.
    fn sample(&self, segments: usize) -> Vec<Vec2> {
        sample_params(segments).map(|t| self.point(t)).collect()
    }
}

/// A space curve that can be evaluated at a parameter.
pub trait Curve3D {
    /// Point on the curve at `t`.
    fn point(&self, t: f32) -> Vec3;

    /// `segments + 1` points evenly spaced over `t` in `[0, 1]`.
    fn sample(&self, segments: usize) -> Vec<Vec3> {
        sample_params(segments).map(|t| self.point(t)).collect()
    }
}

/// Quadratic Bezier curve with three 2D control points.
///
/// # Example
///
/// ```rust
/// use m3d_geom::{Curve2D, QuadBezier2D};
/// use m3d_math::Vec2;
///
/// let curve = QuadBezier2D::new(Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(2.0, 0.0));
/// assert_eq!(curve.point(0.5), Vec2::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier2D {
    controls: [Vec2; 3],
    control_x: Vec3,
    control_y: Vec3,
}

impl QuadBezier2D {
    /// Creates the curve and caches the per-axis control vectors.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self {
            controls: [p0, p1, p2],
            control_x: Vec3::new(p0.x, p1.x, p2.x),
            control_y: Vec3::new(p0.y, p1.y, p2.y),
        }
    }

    /// Control points in order.
    pub fn controls(&self) -> &[Vec2; 3] {
        &self.controls
    }
}

impl Curve2D for QuadBezier2D {
    fn point(&self, t: f32) -> Vec2 {
        let w = quad_weights(t);
        Vec2::new(self.control_x.dot(w), self.control_y.dot(w))
    }
}

/// Cubic Bezier curve with four 2D control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2D {
    controls: [Vec2; 4],
    control_x: Vec4,
    control_y: Vec4,
}

impl CubicBezier2D {
    /// Creates the curve and caches the per-axis control vectors.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            controls: [p0, p1, p2, p3],
            control_x: Vec4::new(p0.x, p1.x, p2.x, p3.x),
            control_y: Vec4::new(p0.y, p1.y, p2.y, p3.y),
        }
    }

    /// Control points in order.
    pub fn controls(&self) -> &[Vec2; 4] {
        &self.controls
    }
}

impl Curve2D for CubicBezier2D {
    fn point(&self, t: f32) -> Vec2 {
        let w = cubic_weights(t);
        Vec2::new(self.control_x.dot(w), self.control_y.dot(w))
    }
}

/// Quadratic Bezier curve with three 3D control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier3D {
    controls: [Vec3; 3],
    control_x: Vec3,
    control_y: Vec3,
    control_z: Vec3,
}

impl QuadBezier3D {
    /// Creates the curve and caches the per-axis control vectors.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self {
            controls: [p0, p1, p2],
            control_x: Vec3::new(p0.x, p1.x, p2.x),
            control_y: Vec3::new(p0.y, p1.y, p2.y),
            control_z: Vec3::new(p0.z, p1.z, p2.z),
        }
    }

    /// Control points in order.
    pub fn controls(&self) -> &[Vec3; 3] {
        &self.controls
    }
}

impl Curve3D for QuadBezier3D {
    fn point(&self, t: f32) -> Vec3 {
        let w = quad_weights(t);
        Vec3::new(
            self.control_x.dot(w),
            self.control_y.dot(w),
            self.control_z.dot(w),
        )
    }
}

/// Cubic Bezier curve with four 3D control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier3D {
    controls: [Vec3; 4],
    control_x: Vec4,
    control_y: Vec4,
    control_z: Vec4,
}

impl CubicBezier3D {
    /// Creates the curve and caches the per-axis control vectors.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            controls: [p0, p1, p2, p3],
            control_x: Vec4::new(p0.x, p1.x, p2.x, p3.x),
            control_y: Vec4::new(p0.y, p1.y, p2.y, p3.y),
            control_z: Vec4::new(p0.z, p1.z, p2.z, p3.z),
        }
    }

    /// Control points in order.
    pub fn controls(&self) -> &[Vec3; 4] {
        &self.controls
    }
}

impl Curve3D for CubicBezier3D {
    fn point(&self, t: f32) -> Vec3 {
        let w = cubic_weights(t);
        Vec3::new(
            self.control_x.dot(w),
            self.control_y.dot(w),
            self.control_z.dot(w),
        )
    }
}
