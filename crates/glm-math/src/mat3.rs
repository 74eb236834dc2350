//! 3x3 matrix type.
//!
//! [`Mat3`] holds the linear part of a 3D transform (rotation and scale
//! without translation), typically obtained with [`Mat4::to_mat3`] for
//! normal matrices.
//!
//! # Convention
//!
//! Column-major storage, column vectors. `m[c]` is column `c`,
//! `m[(c, r)]` is the element at column `c`, row `r`.
//!
//! # Usage
//!
//! ```rust
//! use glm_math::{Mat3, Vec3};
//!
//! let m = Mat3::scale(2.0);
//! assert_eq!(m * Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
//! ```
//!
//! [`Mat4::to_mat3`]: crate::Mat4::to_mat3

use crate::{Mat2, Vec3};
use glm_core::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 3x3 column-major matrix.
///
/// # Example
///
/// ```rust
/// use glm_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    cols: [Vec3; 3],
}

impl Mat3 {
    /// Number of columns (and rows).
    pub const DIM: usize = 3;

    /// Zero matrix.
    pub const ZERO: Self = Self::scale(0.0);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::scale(1.0);

    /// Creates the identity matrix scaled by `s`.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::from_cols(
            Vec3::new(s, 0.0, 0.0),
            Vec3::new(0.0, s, 0.0),
            Vec3::new(0.0, 0.0, s),
        )
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from nine elements in column-major order:
    /// column 0 is `(x0, y0, z0)` and so on.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        x0: f32, y0: f32, z0: f32,
        x1: f32, y1: f32, z1: f32,
        x2: f32, y2: f32, z2: f32,
    ) -> Self {
        Self::from_cols(Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z1), Vec3::new(x2, y2, z2))
    }

    /// Creates a matrix from three columns.
    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a matrix from an array of columns.
    #[inline]
    pub const fn from_cols_array(cols: [Vec3; 3]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from 9 elements in column-major order.
    #[inline]
    pub const fn from_array(a: [f32; 9]) -> Self {
        Self::from_cols(
            Vec3::new(a[0], a[1], a[2]),
            Vec3::new(a[3], a[4], a[5]),
            Vec3::new(a[6], a[7], a[8]),
        )
    }

    /// Flattens the matrix column-major.
    #[inline]
    pub const fn to_array(&self) -> [f32; 9] {
        let [c0, c1, c2] = self.cols;
        [c0.x, c0.y, c0.z, c1.x, c1.y, c1.z, c2.x, c2.y, c2.z]
    }

    /// Returns a copy of the columns.
    #[inline]
    pub const fn to_cols_array(&self) -> [Vec3; 3] {
        self.cols
    }

    /// Returns a copy of column `c`, or an error outside `0..3`.
    #[inline]
    pub fn column(&self, c: usize) -> Result<Vec3> {
        Error::check_index(c, Self::DIM)?;
        Ok(self.cols[c])
    }

    /// Replaces column `c`, or returns an error outside `0..3`.
    #[inline]
    pub fn set_column(&mut self, c: usize, col: Vec3) -> Result<()> {
        Error::check_index(c, Self::DIM)?;
        self.cols[c] = col;
        Ok(())
    }

    /// Returns the element at column `c`, row `r`.
    #[inline]
    pub fn element(&self, c: usize, r: usize) -> Result<f32> {
        self.column(c)?.get(r)
    }

    /// Sets the element at column `c`, row `r`.
    #[inline]
    pub fn set_element(&mut self, c: usize, r: usize, value: f32) -> Result<()> {
        Error::check_index(c, Self::DIM)?;
        self.cols[c].set(r, value)
    }

    /// Returns row `r` as a vector, or an error outside `0..3`.
    #[inline]
    pub fn get_row(&self, r: usize) -> Result<Vec3> {
        Error::check_index(r, Self::DIM)?;
        Ok(self.row(r))
    }

    /// Returns row `r` as a vector.
    ///
    /// # Panics
    ///
    /// Panics outside `0..3`, like indexing. Use [`Mat3::get_row`] for a
    /// checked read.
    #[inline]
    pub fn row(&self, r: usize) -> Vec3 {
        Vec3::new(self.cols[0][r], self.cols[1][r], self.cols[2][r])
    }

    /// Extracts the upper-left 2x2 block.
    #[inline]
    pub fn to_mat2(&self) -> Mat2 {
        Mat2::from_cols(self.cols[0].truncate(), self.cols[1].truncate())
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Computes the determinant (cofactor expansion along column 0).
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
            - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
            + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Nine cofactors of the transposed matrix, each multiplied by
    /// `1 / determinant`. Singular input yields infinities or NaNs.
    pub fn inverse(&self) -> Self {
        let m = &self.cols;
        let one_over_det = 1.0 / self.determinant();

        // Adjugate, written element by element as (column, row)
        let mut inverse = Self::ZERO;
        inverse[(0, 0)] = (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * one_over_det;
        inverse[(1, 0)] = -(m[1][0] * m[2][2] - m[2][0] * m[1][2]) * one_over_det;
        inverse[(2, 0)] = (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * one_over_det;
        inverse[(0, 1)] = -(m[0][1] * m[2][2] - m[2][1] * m[0][2]) * one_over_det;
        inverse[(1, 1)] = (m[0][0] * m[2][2] - m[2][0] * m[0][2]) * one_over_det;
        inverse[(2, 1)] = -(m[0][0] * m[2][1] - m[2][0] * m[0][1]) * one_over_det;
        inverse[(0, 2)] = (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * one_over_det;
        inverse[(1, 2)] = -(m[0][0] * m[1][2] - m[1][0] * m[0][2]) * one_over_det;
        inverse[(2, 2)] = (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * one_over_det;
        inverse
    }

    /// Transforms a Vec3 by this matrix.
    #[inline]
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        let m = &self.cols;
        Vec3::new(
            m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
            m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
            m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
        )
    }

    /// Multiplies two matrices: `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let l = &self.cols;
        let col = |r: Vec3| l[0] * r[0] + l[1] * r[1] + l[2] * r[2];
        Self::from_cols(col(other.cols[0]), col(other.cols[1]), col(other.cols[2]))
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Mat3 * f32
impl Mul<f32> for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn index(&self, c: usize) -> &Vec3 {
        &self.cols[c]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, c: usize) -> &mut Vec3 {
        &mut self.cols[c]
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;

    #[inline]
    fn index(&self, (c, r): (usize, usize)) -> &f32 {
        &self.cols[c][r]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[inline]
    fn index_mut(&mut self, (c, r): (usize, usize)) -> &mut f32 {
        &mut self.cols[c][r]
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        write!(
            f,
            "[{}, {}, {}; {}, {}, {}; {}, {}, {}]",
            r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z
        )
    }
}

impl From<Mat3> for [f32; 9] {
    #[inline]
    fn from(m: Mat3) -> [f32; 9] {
        m.to_array()
    }
}

impl From<[f32; 9]> for Mat3 {
    #[inline]
    fn from(a: [f32; 9]) -> Self {
        Self::from_array(a)
    }
}

impl_approx_mat!(Mat3);
