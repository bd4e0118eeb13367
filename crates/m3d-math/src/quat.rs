//! Quaternions and axis-angle vector rotation.
//!
//! A [`Quat`] is a real scalar `w` plus an imaginary [`Vec3`] `(i, j, k)`.
//! Multiplication is the Hamilton product:
//!
//! ```text
//! w   = w1 * w2 - v1 . v2
//! imag = w1 * v2 + w2 * v1 + v1 x v2
//! ```
//!
//! Vectors are rotated with the sandwich product `q * v * q^-1`, where `v`
//! is embedded as a pure quaternion (`w = 0`).
//!
//! # Usage
//!
//! ```rust
//! use m3d_math::{Quat, Vec3};
//!
//! let v = Quat::rotate_vector(Vec3::X, Vec3::Z, 90.0);
//! assert!(v.approx_eq(Vec3::Y, 1e-6));
//! ```

use m3d_core::{Error, Result, consts, deg_to_rad};
use std::fmt;
use std::ops::{Mul, Neg};

use crate::{Vec3, Vec4};

/// A quaternion `w + i*I + j*J + k*K`.
///
/// Only unit quaternions represent rotations; [`Quat::normalize`] brings a
/// quaternion back onto the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// Real part.
    pub w: f32,
    /// Imaginary part `(i, j, k)`.
    pub v: Vec3,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion `(1; 0, 0, 0)`.
    pub const IDENTITY: Self = Self::from_parts(Vec3::ZERO, 1.0);

    /// Creates a quaternion from its imaginary components and real part.
    #[inline]
    pub const fn new(i: f32, j: f32, k: f32, w: f32) -> Self {
        Self::from_parts(Vec3::new(i, j, k), w)
    }

    /// Creates a quaternion from an imaginary vector and a real part.
    #[inline]
    pub const fn from_parts(imaginary: Vec3, real: f32) -> Self {
        Self { w: real, v: imaginary }
    }

    /// Creates a quaternion from a [`Vec4`] laid out `(i, j, k, w)`.
    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Embeds a vector as a pure quaternion (`w = 0`).
    #[inline]
    pub const fn pure(v: Vec3) -> Self {
        Self::from_parts(v, 0.0)
    }

    /// Returns the layout `(i, j, k, w)`.
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        self.v.extend(self.w)
    }

    /// Real part.
    #[inline]
    pub fn w(self) -> f32 {
        self.w
    }

    /// First imaginary component.
    #[inline]
    pub fn i(self) -> f32 {
        self.v.x
    }

    /// Second imaginary component.
    #[inline]
    pub fn j(self) -> f32 {
        self.v.y
    }

    /// Third imaginary component.
    #[inline]
    pub fn k(self) -> f32 {
        self.v.z
    }

    /// Imaginary part as a vector.
    #[inline]
    pub fn imaginary(self) -> Vec3 {
        self.v
    }

    /// Returns true when the real part is within `1e-5` of zero.
    #[inline]
    pub fn is_pure(self) -> bool {
        self.w.abs() <= consts::PURE_EPSILON
    }

    /// Squared norm, `w^2 + v . v`.
    #[inline]
    pub fn norm_squared(self) -> f32 {
        self.w * self.w + self.v.dot(self.v)
    }

    /// Norm, `sqrt(w^2 + v . v)`.
    #[inline]
    pub fn norm(self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Divides both parts by the norm, in place. A zero quaternion becomes NaN.
    #[inline]
    pub fn normalize(&mut self) {
        let n = self.norm();
        self.w /= n;
        self.v = self.v / n;
    }

    /// Returns a normalized copy. A zero quaternion becomes NaN.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Negates the imaginary part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_parts(-self.v, self.w)
    }

    /// Multiplicative inverse, `conjugate / norm^2`.
    ///
    /// A zero quaternion yields NaN/Inf components; see [`Quat::try_inverse`].
    #[inline]
    pub fn inverse(self) -> Self {
        (1.0 / self.norm_squared()) * self.conjugate()
    }

    /// Inverse, or [`Error::DegenerateVector`] for a zero quaternion.
    pub fn try_inverse(self) -> Result<Self> {
        let n2 = self.norm_squared();
        if n2 > 0.0 && n2.is_finite() {
            Ok((1.0 / n2) * self.conjugate())
        } else {
            Err(Error::degenerate("cannot invert a zero quaternion"))
        }
    }

    /// Rotates `initial` about `axis` by `radians`.
    ///
    /// `axis` is normalized before the rotation quaternion
    /// `q = (cos(a/2); sin(a/2) * axis)` is built, so any non-zero length
    /// works. The conjugate stands in for `q^-1` since `q` is unit.
    pub fn rotate_vector_rad(initial: Vec3, axis: Vec3, radians: f32) -> Vec3 {
        let (sin_h, cos_h) = (radians / 2.0).sin_cos();

        let mut axis = axis;
        axis.normalize();

        let q = Self::from_parts(sin_h * axis, cos_h);
        let q_inv = Self::from_parts(-sin_h * axis, cos_h);

        (q * initial * q_inv).v
    }

    /// Rotates `initial` about `axis` by `degrees`.
    #[inline]
    pub fn rotate_vector(initial: Vec3, axis: Vec3, degrees: f32) -> Vec3 {
        Self::rotate_vector_rad(initial, axis, deg_to_rad(degrees))
    }

    /// Returns true if every component is within `epsilon` of `other`.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.w - other.w).abs() <= epsilon && self.v.approx_eq(other.v, epsilon)
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.v.x, self.v.y, self.v.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

// Hamilton product
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.w * rhs.v + rhs.w * self.v + self.v.cross(rhs.v),
            self.w * rhs.w - self.v.dot(rhs.v),
        )
    }
}

// Quat * pure(v)
impl Mul<Vec3> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Vec3) -> Self {
        self * Quat::pure(rhs)
    }
}

// pure(v) * Quat
impl Mul<Quat> for Vec3 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Quat::pure(self) * rhs
    }
}

impl Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Quat::from_parts(self * rhs.v, self * rhs.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        rhs * self
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_parts(-self.v, -self.w)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(6);
        write!(
            f,
            "({:.*}; {:.*}, {:.*}, {:.*})",
            p, self.w, p, self.v.x, p, self.v.y, p, self.v.z
        )
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const I: Quat = Quat::new(1.0, 0.0, 0.0, 0.0);
    const J: Quat = Quat::new(0.0, 1.0, 0.0, 0.0);
    const K: Quat = Quat::new(0.0, 0.0, 1.0, 0.0);

    #[test]
    fn test_hamilton_units() {
        assert_eq!(I * J, K);
        assert_eq!(J * K, I);
        assert_eq!(K * I, J);
        assert_eq!(J * I, -K);
        assert_eq!(I * I, Quat::new(0.0, 0.0, 0.0, -1.0));
        assert_eq!(I * J * K, Quat::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_quat_associative() {
        let a = Quat::new(1.0, -2.0, 0.5, 3.0);
        let b = Quat::new(0.0, 4.0, 1.0, -1.0);
        let c = Quat::new(2.0, 2.0, -3.0, 0.5);
        assert!(((a * b) * c).approx_eq(a * (b * c), 1e-4));
        assert!(!(a * b).approx_eq(b * a, 1e-4));
    }

    #[test]
    fn test_quat_norm_conjugate() {
        let q = Quat::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(q.norm(), 5.0);
        assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -2.0, 4.0));
        assert_abs_diff_eq!(q.normalized().norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_quat_inverse() {
        let q = Quat::new(0.3, -1.2, 2.0, 0.7);
        assert!((q * q.inverse()).approx_eq(Quat::IDENTITY, 1e-6));
        assert!((q.inverse() * q).approx_eq(Quat::IDENTITY, 1e-6));
        let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert!(zero.try_inverse().unwrap_err().is_degenerate());
        assert!(!zero.inverse().v.is_finite());
    }

    #[test]
    fn test_quat_pure() {
        assert!(Quat::pure(Vec3::ONE).is_pure());
        assert!(Quat::new(1.0, 0.0, 0.0, 5e-6).is_pure());
        assert!(!Quat::IDENTITY.is_pure());
    }

    #[test]
    fn test_quat_layout() {
        let q = Quat::from_vec4(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!((q.i(), q.j(), q.k(), q.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.to_vec4(), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Quat::from_glam(q.to_glam()), q);
    }

    #[test]
    fn test_rotate_quarter_turns() {
        assert!(Quat::rotate_vector(Vec3::X, Vec3::Z, 90.0).approx_eq(Vec3::Y, 1e-6));
        assert!(Quat::rotate_vector(Vec3::Y, Vec3::X, 90.0).approx_eq(Vec3::Z, 1e-6));
        assert!(Quat::rotate_vector(Vec3::Z, Vec3::Y, 90.0).approx_eq(Vec3::X, 1e-6));
        assert!(Quat::rotate_vector(Vec3::X, Vec3::Z, 180.0).approx_eq(-Vec3::X, 1e-6));
    }

    #[test]
    fn test_rotate_non_unit_axis() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let unit = Quat::rotate_vector(v, Vec3::new(0.0, 0.0, 1.0), 37.0);
        let long = Quat::rotate_vector(v, Vec3::new(0.0, 0.0, 25.0), 37.0);
        assert!(unit.approx_eq(long, 1e-5));
    }

    #[test]
    fn test_rotate_zero_angle() {
        let v = Vec3::new(-4.0, 0.5, 2.0);
        let r = Quat::rotate_vector(v, Vec3::new(1.0, 1.0, 0.0), 0.0);
        assert!(r.approx_eq(v, 1e-6));
    }

    #[test]
    fn test_rotate_matches_glam() {
        let v = Vec3::new(0.2, -1.5, 3.0);
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let rad = 1.1;
        let ours = Quat::rotate_vector_rad(v, axis, rad);
        let theirs = glam::Quat::from_axis_angle(axis.normalized().to_glam(), rad) * v.to_glam();
        assert!(ours.approx_eq(Vec3::from_glam(theirs), 1e-5));
    }
}
