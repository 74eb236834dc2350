//! 2x2 matrix type.

use crate::Vec2;
use glm_core::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 2x2 column-major matrix.
///
/// # Example
///
/// ```rust
/// use glm_math::{Mat2, Vec2};
///
/// let m = Mat2::new(2.0, 0.0, 0.0, 3.0);
/// assert_eq!(m * Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat2 {
    cols: [Vec2; 2],
}

impl Mat2 {
    /// Number of columns (and rows).
    pub const DIM: usize = 2;

    /// Zero matrix.
    pub const ZERO: Self = Self::scale(0.0);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::scale(1.0);

    /// Creates a matrix from four elements in column-major order:
    /// column 0 is `(x0, y0)`, column 1 is `(x1, y1)`.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::from_cols(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Creates the identity matrix scaled by `s`.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::new(s, 0.0, 0.0, s)
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from two columns.
    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { cols: [c0, c1] }
    }

    /// Creates a matrix from an array of columns.
    #[inline]
    pub const fn from_cols_array(cols: [Vec2; 2]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from 4 elements in column-major order.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Flattens the matrix column-major.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        let [c0, c1] = self.cols;
        [c0.x, c0.y, c1.x, c1.y]
    }

    /// Returns a copy of the columns.
    #[inline]
    pub const fn to_cols_array(&self) -> [Vec2; 2] {
        self.cols
    }

    /// Returns a copy of column `c`, or an error outside `0..2`.
    #[inline]
    pub fn column(&self, c: usize) -> Result<Vec2> {
        Error::check_index(c, Self::DIM)?;
        Ok(self.cols[c])
    }

    /// Replaces column `c`, or returns an error outside `0..2`.
    #[inline]
    pub fn set_column(&mut self, c: usize, col: Vec2) -> Result<()> {
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

    /// Returns row `r` as a vector, or an error outside `0..2`.
    #[inline]
    pub fn get_row(&self, r: usize) -> Result<Vec2> {
        Error::check_index(r, Self::DIM)?;
        Ok(self.row(r))
    }

    /// Returns row `r` as a vector.
    ///
    /// # Panics
    ///
    /// Panics outside `0..2`, like indexing. Use [`Mat2::get_row`] for a
    /// checked read.
    #[inline]
    pub fn row(&self, r: usize) -> Vec2 {
        Vec2::new(self.cols[0][r], self.cols[1][r])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1))
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }

    /// Computes the inverse. Singular input yields infinities or NaNs.
    #[inline]
    pub fn inverse(&self) -> Self {
        let m = &self.cols;
        let one_over_det = 1.0 / self.determinant();
        Self::new(
            m[1][1] * one_over_det,
            -m[0][1] * one_over_det,
            -m[1][0] * one_over_det,
            m[0][0] * one_over_det,
        )
    }

    /// Transforms a Vec2 by this matrix.
    #[inline]
    pub fn mul_vec2(&self, v: Vec2) -> Vec2 {
        let m = &self.cols;
        Vec2::new(m[0][0] * v[0] + m[1][0] * v[1], m[0][1] * v[0] + m[1][1] * v[1])
    }

    /// Multiplies two matrices: `self * other`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let l = &self.cols;
        let col = |r: Vec2| l[0] * r[0] + l[1] * r[1];
        Self::from_cols(col(other.cols[0]), col(other.cols[1]))
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.mul_vec2(rhs)
    }
}

impl Mul for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Mat2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

impl Mul<f32> for Mat2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(self.cols[0] * rhs, self.cols[1] * rhs)
    }
}

impl Index<usize> for Mat2 {
    type Output = Vec2;

    #[inline]
    fn index(&self, c: usize) -> &Vec2 {
        &self.cols[c]
    }
}

impl IndexMut<usize> for Mat2 {
    #[inline]
    fn index_mut(&mut self, c: usize) -> &mut Vec2 {
        &mut self.cols[c]
    }
}

impl Index<(usize, usize)> for Mat2 {
    type Output = f32;

    #[inline]
    fn index(&self, (c, r): (usize, usize)) -> &f32 {
        &self.cols[c][r]
    }
}

impl IndexMut<(usize, usize)> for Mat2 {
    #[inline]
    fn index_mut(&mut self, (c, r): (usize, usize)) -> &mut f32 {
        &mut self.cols[c][r]
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r0, r1) = (self.row(0), self.row(1));
        write!(f, "[{}, {}; {}, {}]", r0.x, r0.y, r1.x, r1.y)
    }
}

impl From<Mat2> for [f32; 4] {
    #[inline]
    fn from(m: Mat2) -> [f32; 4] {
        m.to_array()
    }
}

impl From<[f32; 4]> for Mat2 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl_approx_mat!(Mat2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat2_inverse_diagonal() {
        let m = Mat2::new(2.0, 0.0, 0.0, 3.0);
        assert_eq!(m.inverse(), Mat2::new(0.5, 0.0, 0.0, 1.0 / 3.0));
    }

    #[test]
    fn test_mat2_inverse_general() {
        // Rows [4 7], [2 6]: det 10
        let m = Mat2::new(4.0, 2.0, 7.0, 6.0);
        assert_eq!(m.determinant(), 10.0);
        let inv = m.inverse();
        assert_eq!(inv.to_array(), [0.6, -0.2, -0.7, 0.4]);
        approx::assert_abs_diff_eq!(m * inv, Mat2::IDENTITY, epsilon = 1e-6);
    }

    #[test]
    fn test_mat2_singular() {
        let m = Mat2::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(m.determinant(), 0.0);
        assert!(!m.inverse().is_finite());
    }

    #[test]
    fn test_mat2_mul() {
        let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
        let b = Mat2::new(0.0, 1.0, 1.0, 0.0);
        // Swapping columns
        assert_eq!(a * b, Mat2::new(3.0, 4.0, 1.0, 2.0));
        assert_eq!(b * a, Mat2::new(2.0, 1.0, 4.0, 3.0));
        assert_eq!(a * Vec2::new(1.0, 1.0), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_mat2_transpose() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.transpose(), Mat2::new(1.0, 3.0, 2.0, 4.0));
    }

    #[test]
    fn test_mat2_checked_access() {
        let mut m = Mat2::IDENTITY;
        assert!(m.set_element(1, 0, 5.0).is_ok());
        assert_eq!(m[(1, 0)], 5.0);
        assert_eq!(m.element(1, 0), Ok(5.0));
        assert_eq!(m.set_column(2, Vec2::ONE), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(m.get_row(0), Ok(Vec2::new(1.0, 5.0)));
        assert_eq!(m.get_row(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_mat2_display() {
        assert_eq!(Mat2::new(1.0, 2.0, 3.0, 4.0).to_string(), "[1, 3; 2, 4]");
    }
}
