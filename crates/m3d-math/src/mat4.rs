//! 4x4 matrix type.
//!
//! [`Mat4`] holds the dense linear-algebra kernel: minors, cofactors,
//! determinant by cofactor expansion and inverse via the adjugate, plus the
//! axis rotation and uniform scale builders.
//!
//! # Convention
//!
//! Same as [`crate::Mat3`]: an array of row vectors, `m[r][c]` is row `r`,
//! column `c`, and `m * v` dots `v` against each row.
//!
//! # Determinant
//!
//! The determinant expands along row 0 over the four 3x3 minors. That is
//! factorial in the dimension and only appropriate because the size is fixed
//! at 4; a larger matrix type would need an LU decomposition instead.

use m3d_core::{Error, Result, deg_to_rad};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::{Mat3, Vec3, Vec4};

/// A 4x4 row-major matrix.
///
/// # Example
///
/// ```rust
/// use m3d_math::Mat4;
///
/// let m = Mat4::from_rows([
///     [3.0, 0.0, 2.0, -1.0],
///     [1.0, 2.0, 0.0, -2.0],
///     [4.0, 0.0, 6.0, -3.0],
///     [5.0, 0.0, 2.0, 0.0],
/// ]);
/// assert_eq!(m.determinant(), 20.0);
///
/// let inv = m.try_inverse().unwrap();
/// assert!((m * inv).approx_eq(&Mat4::IDENTITY, 1e-3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Rows, top to bottom.
    pub rows: [Vec4; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self::from_row_vecs(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_row_vecs(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self::from_row_vecs(
            Vec4::from_array(rows[0]),
            Vec4::from_array(rows[1]),
            Vec4::from_array(rows[2]),
            Vec4::from_array(rows[3]),
        )
    }

    /// Creates a matrix from column arrays (transposed into rows).
    #[inline]
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self::from_rows([
            [cols[0][0], cols[1][0], cols[2][0], cols[3][0]],
            [cols[0][1], cols[1][1], cols[2][1], cols[3][1]],
            [cols[0][2], cols[1][2], cols[2][2], cols[3][2]],
            [cols[0][3], cols[1][3], cols[2][3], cols[3][3]],
        ])
    }

    /// Creates a matrix from row vectors.
    #[inline]
    pub const fn from_row_vecs(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            rows: [r0, r1, r2, r3],
        }
    }

    /// Returns row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        self.rows[i]
    }

    /// Returns column `i`, read element by element from each row.
    #[inline]
    pub fn column(&self, i: usize) -> Vec4 {
        Vec4::new(
            self.rows[0][i],
            self.rows[1][i],
            self.rows[2][i],
            self.rows[3][i],
        )
    }

    /// Returns the transpose, `t[r][c] = m[c][r]`.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_row_vecs(
            self.column(0),
            self.column(1),
            self.column(2),
            self.column(3),
        )
    }

    /// Returns the 3x3 matrix left after deleting `row` and `col`.
    ///
    /// Remaining rows and columns keep their relative order.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..4`. See [`Mat4::checked_minor`].
    pub fn minor(&self, row: usize, col: usize) -> Mat3 {
        assert!(
            row < 4 && col < 4,
            "Mat4 minor ({}, {}) out of bounds",
            row,
            col
        );

        let mut out = Mat3::ZERO;
        let mut dst_r = 0;
        for r in (0..4).filter(|&r| r != row) {
            let mut dst_c = 0;
            for c in (0..4).filter(|&c| c != col) {
                out.rows[dst_r][dst_c] = self.rows[r][c];
                dst_c += 1;
            }
            dst_r += 1;
        }
        out
    }

    /// Checked [`Mat4::minor`].
    pub fn checked_minor(&self, row: usize, col: usize) -> Result<Mat3> {
        if row >= 4 {
            return Err(Error::index_out_of_range(row, 4));
        }
        if col >= 4 {
            return Err(Error::index_out_of_range(col, 4));
        }
        Ok(self.minor(row, col))
    }

    /// Signed minor determinant, `(-1)^(row+col) * det(minor(row, col))`.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Matrix of all sixteen cofactors.
    pub fn cofactors(&self) -> Self {
        let mut out = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                out.rows[r][c] = self.cofactor(r, c);
            }
        }
        out
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|c| self.rows[0][c] * self.cofactor(0, c))
            .sum()
    }

    /// Inverse via the adjugate, `(1 / det) * transpose(cofactors)`.
    ///
    /// Returns `None` only when the determinant is exactly `0.0`. A
    /// near-singular matrix yields an inverse with large, inaccurate
    /// entries; use [`Mat4::checked_inverse`] to reject those.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        Some(self.adjugate_scaled(det))
    }

    /// Inverse that rejects any determinant with `|det| <= epsilon`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use m3d_math::Mat4;
    ///
    /// let nearly_flat = Mat4::scale(1e-3);
    /// assert!(nearly_flat.try_inverse().is_some());
    /// assert!(nearly_flat.checked_inverse(1e-6).unwrap_err().is_singular());
    /// ```
    pub fn checked_inverse(&self, epsilon: f32) -> Result<Self> {
        let det = self.determinant();
        if det.abs() <= epsilon || !det.is_finite() {
            return Err(Error::singular(det));
        }
        Ok(self.adjugate_scaled(det))
    }

    #[inline]
    fn adjugate_scaled(&self, det: f32) -> Self {
        (1.0 / det) * self.cofactors().transpose()
    }

    /// Rotation about the X axis by `degrees` (right-handed).
    pub fn rotation_x(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[1][1] = c;
        m.rows[1][2] = -s;
        m.rows[2][1] = s;
        m.rows[2][2] = c;
        m
    }

    /// Rotation about the Y axis by `degrees` (right-handed).
    pub fn rotation_y(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[0][0] = c;
        m.rows[0][2] = s;
        m.rows[2][0] = -s;
        m.rows[2][2] = c;
        m
    }

    /// Rotation about the Z axis by `degrees` (right-handed).
    pub fn rotation_z(degrees: f32) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[0][0] = c;
        m.rows[0][1] = -s;
        m.rows[1][0] = s;
        m.rows[1][1] = c;
        m
    }

    /// Uniform scale of the three spatial axes; `m[3][3]` stays 1.
    pub fn scale(factor: f32) -> Self {
        let mut m = Self::IDENTITY;
        for i in 0..3 {
            m.rows[i][i] = factor;
        }
        m
    }

    /// Transforms a point (`w = 1`) and drops the resulting `w`.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * p.extend(1.0)).truncate()
    }

    /// Returns true if every element is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.approx_eq(*b, epsilon))
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(|r| r.is_finite())
    }

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols(
            self.column(0).to_glam(),
            self.column(1).to_glam(),
            self.column(2).to_glam(),
            self.column(3).to_glam(),
        )
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        &self.rows[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.rows[i]
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_row_vecs(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
            self.rows[3] + rhs.rows[3],
        )
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_row_vecs(
            self.rows[0] - rhs.rows[0],
            self.rows[1] - rhs.rows[1],
            self.rows[2] - rhs.rows[2],
            self.rows[3] - rhs.rows[3],
        )
    }
}

// f32 * Mat4
impl Mul<Mat4> for f32 {
    type Output = Mat4;

    #[inline]
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4::from_row_vecs(
            self * rhs.rows[0],
            self * rhs.rows[1],
            self * rhs.rows[2],
            self * rhs.rows[3],
        )
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        rhs * self
    }
}

// Mat4 * Vec4 (column vector): dot v against each row
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::new(
            rhs.dot(self.rows[0]),
            rhs.dot(self.rows[1]),
            rhs.dot(self.rows[2]),
            rhs.dot(self.rows[3]),
        )
    }
}

// Mat4 * Mat4, column-first so each column of rhs is gathered once
impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for c in 0..4 {
            let col = rhs.column(c);
            for r in 0..4 {
                result.rows[r][c] = self.rows[r].dot(col);
            }
        }
        result
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(6);
        let lines: Vec<String> = self
            .rows
            .iter()
            .map(|r| {
                format!(
                    "|{:.*} {:.*} {:.*} {:.*}|",
                    p, r.x, p, r.y, p, r.z, p, r.w
                )
            })
            .collect();
        crate::write_bordered(f, &lines)
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}

impl From<Mat4> for glam::Mat4 {
    #[inline]
    fn from(m: Mat4) -> glam::Mat4 {
        m.to_glam()
    }
}
