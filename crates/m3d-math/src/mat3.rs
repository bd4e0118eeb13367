//! 3x3 matrix type.
//!
//! [`Mat3`] is the minor type of [`crate::Mat4`] and the quadratic Bezier
//! basis. It carries its own determinant and adjugate inverse.
//!
//! # Convention
//!
//! Matrices are stored as an array of **row** vectors and multiply
//! **column vectors**; `m[r][c]` addresses row `r`, column `c`:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | row0 . v |
//! | m10 m11 m12 | * | y | = | row1 . v |
//! | m20 m21 m22 |   | z |   | row2 . v |
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::Vec3;

/// A 3x3 row-major matrix.
///
/// # Example
///
/// ```rust
/// use m3d_math::{Mat3, Vec3};
///
/// let m = Mat3::from_rows([
///     [6.0, 1.0, 1.0],
///     [4.0, -2.0, 5.0],
///     [2.0, 8.0, 7.0],
/// ]);
/// assert_eq!(m.determinant(), -306.0);
/// assert_eq!(Mat3::IDENTITY * Vec3::X, Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// Rows, top to bottom.
    pub rows: [Vec3; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_row_vecs(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_row_vecs(Vec3::X, Vec3::Y, Vec3::Z);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self::from_row_vecs(
            Vec3::from_array(rows[0]),
            Vec3::from_array(rows[1]),
            Vec3::from_array(rows[2]),
        )
    }

    /// Creates a matrix from column arrays (transposed into rows).
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0]],
            [cols[0][1], cols[1][1], cols[2][1]],
            [cols[0][2], cols[1][2], cols[2][2]],
        ])
    }

    /// Creates a matrix from row vectors.
    #[inline]
    pub const fn from_row_vecs(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        self.rows[i]
    }

    /// Returns column `i`, read element by element from each row.
    #[inline]
    pub fn column(&self, i: usize) -> Vec3 {
        Vec3::new(self.rows[0][i], self.rows[1][i], self.rows[2][i])
    }

    /// Returns the transpose, `t[r][c] = m[c][r]`.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_row_vecs(self.column(0), self.column(1), self.column(2))
    }

    /// Determinant as the scalar triple product `(row0 x row1) . row2`.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.rows[0].cross(self.rows[1]).dot(self.rows[2])
    }

    /// Cofactor matrix, `c[r][col] = (-1)^(r+col) * det(minor(r, col))`.
    ///
    /// For a 3x3 matrix each cofactor row is the cross product of the two
    /// other rows taken in cyclic order.
    #[inline]
    pub fn cofactors(&self) -> Self {
        let [r0, r1, r2] = self.rows;
        Self::from_row_vecs(r1.cross(r2), r2.cross(r0), r0.cross(r1))
    }

    /// Inverse via the adjugate, `(1 / det) * transpose(cofactors)`.
    ///
    /// Returns `None` only when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        Some((1.0 / det) * self.cofactors().transpose())
    }

    /// Returns true if every element is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.approx_eq(*b, epsilon))
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            self.column(0).to_glam(),
            self.column(1).to_glam(),
            self.column(2).to_glam(),
        )
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn index(&self, i: usize) -> &Vec3 {
        &self.rows[i]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec3 {
        &mut self.rows[i]
    }
}

// Mat3 + Mat3
impl Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_row_vecs(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

// Mat3 - Mat3
impl Sub for Mat3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_row_vecs(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
        )
    }
}

// f32 * Mat3
impl Mul<Mat3> for f32 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::from_row_vecs(self * rhs.rows[0], self * rhs.rows[1], self * rhs.rows[2])
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        rhs * self
    }
}

// Mat3 * Vec3 (column vector)
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            rhs.dot(self.rows[0]),
            rhs.dot(self.rows[1]),
            rhs.dot(self.rows[2]),
        )
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for c in 0..3 {
            let col = rhs.column(c);
            for r in 0..3 {
                result.rows[r][c] = self.rows[r].dot(col);
            }
        }
        result
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(6);
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|r| format!("|{:.*} {:.*} {:.*}|", p, r.x, p, r.y, p, r.z))
            .collect();
        crate::write_bordered(f, &lines)
    }
}

impl From<glam::Mat3> for Mat3 {
    #[inline]
    fn from(m: glam::Mat3) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat3> for glam::Mat3 {
    #[inline]
    fn from(m: Mat3) -> glam::Mat3 {
        m.to_glam()
    }
}
