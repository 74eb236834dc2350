//! 4x4 matrix type for homogeneous 3D transforms.
//!
//! [`Mat4`] is the output of every transform builder (projection, view,
//! model) and the usual hand-off to a graphics API uniform buffer.
//!
//! # Convention
//!
//! Matrices are stored **column-major** and use **column vectors**:
//!
//! ```text
//! m[c]    -> column c (a Vec4)
//! m[(c, r)] -> element at column c, row r
//!
//! | m[(0,0)] m[(1,0)] m[(2,0)] m[(3,0)] |   | x |
//! | m[(0,1)] m[(1,1)] m[(2,1)] m[(3,1)] | * | y |
//! | m[(0,2)] m[(1,2)] m[(2,2)] m[(3,2)] |   | z |
//! | m[(0,3)] m[(1,3)] m[(2,3)] m[(3,3)] |   | w |
//! ```
//!
//! Translation lives in column 3, so [`Mat4::to_array`] yields
//! `[.., tx, ty, tz, 1]` in its last four slots.
//!
//! # Usage
//!
//! ```rust
//! use glm_math::{Mat4, Vec3, Vec4, translate};
//!
//! let model = translate(Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
//! let p = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
//! ```

use crate::{Mat3, Vec3, Vec4};
use glm_core::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// A 4x4 column-major matrix.
///
/// Always holds exactly four columns of four components; there is no
/// partially-initialised state. Equality is exact per element.
///
/// # Example
///
/// ```rust
/// use glm_math::{Mat4, Vec4};
///
/// let m = Mat4::scale(2.0);
/// assert_eq!(m[1], Vec4::new(0.0, 2.0, 0.0, 0.0));
/// assert_eq!(m[(3, 3)], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    /// Number of columns (and rows).
    pub const DIM: usize = 4;

    /// Zero matrix.
    pub const ZERO: Self = Self::scale(0.0);

    /// Identity matrix.
    pub const IDENTITY: Self = Self::scale(1.0);

    /// Creates the identity matrix scaled by `s`: `s` on the diagonal,
    /// zero elsewhere.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::from_cols(
            Vec4::new(s, 0.0, 0.0, 0.0),
            Vec4::new(0.0, s, 0.0, 0.0),
            Vec4::new(0.0, 0.0, s, 0.0),
            Vec4::new(0.0, 0.0, 0.0, s),
        )
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from sixteen elements in column-major order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        x0: f32, y0: f32, z0: f32, w0: f32,
        x1: f32, y1: f32, z1: f32, w1: f32,
        x2: f32, y2: f32, z2: f32, w2: f32,
        x3: f32, y3: f32, z3: f32, w3: f32,
    ) -> Self {
        Self::from_cols(
            Vec4::new(x0, y0, z0, w0),
            Vec4::new(x1, y1, z1, w1),
            Vec4::new(x2, y2, z2, w2),
            Vec4::new(x3, y3, z3, w3),
        )
    }

    /// Creates a matrix from four columns.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from an array of columns.
    #[inline]
    pub const fn from_cols_array(cols: [Vec4; 4]) -> Self {
        Self { cols }
    }

    /// Creates a matrix from 16 elements in column-major order.
    ///
    /// Inverse of [`Mat4::to_array`].
    #[inline]
    pub const fn from_array(a: [f32; 16]) -> Self {
        Self::from_cols(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        )
    }

    /// Flattens the matrix column-major: column 0 first, then column 1, ...
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_math::Mat4;
    ///
    /// assert_eq!(
    ///     Mat4::identity().to_array(),
    ///     [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
    /// );
    /// ```
    #[inline]
    pub const fn to_array(&self) -> [f32; 16] {
        let [c0, c1, c2, c3] = self.cols;
        [
            c0.x, c0.y, c0.z, c0.w, c1.x, c1.y, c1.z, c1.w, c2.x, c2.y, c2.z, c2.w, c3.x, c3.y,
            c3.z, c3.w,
        ]
    }

    /// Returns a copy of the columns.
    #[inline]
    pub const fn to_cols_array(&self) -> [Vec4; 4] {
        self.cols
    }

    /// Returns a copy of column `c`, or an error outside `0..4`.
    ///
    /// Mutating the returned vector does not touch the matrix; use
    /// [`set_column`](Mat4::set_column) or `m[c] = ..` to replace a column.
    #[inline]
    pub fn column(&self, c: usize) -> Result<Vec4> {
        Error::check_index(c, Self::DIM)?;
        Ok(self.cols[c])
    }

    /// Replaces column `c`, or returns an error outside `0..4`.
    #[inline]
    pub fn set_column(&mut self, c: usize, col: Vec4) -> Result<()> {
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

    /// Returns row `r` as a vector, or an error outside `0..4`.
    #[inline]
    pub fn get_row(&self, r: usize) -> Result<Vec4> {
        Error::check_index(r, Self::DIM)?;
        Ok(self.row(r))
    }

    /// Returns row `r` as a vector.
    ///
    /// # Panics
    ///
    /// Panics outside `0..4`, like indexing. Use [`Mat4::get_row`] for a
    /// checked read.
    #[inline]
    pub fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.cols[0][r], self.cols[1][r], self.cols[2][r], self.cols[3][r])
    }

    /// Extracts the upper-left 3x3 block, dropping translation and the
    /// homogeneous row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_math::{Mat3, Mat4};
    ///
    /// assert_eq!(Mat4::identity().to_mat3(), Mat3::identity());
    /// ```
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            self.cols[0].truncate(),
            self.cols[1].truncate(),
            self.cols[2].truncate(),
        )
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Computes the determinant by cofactor expansion along column 0.
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;

        let sub_factor00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let sub_factor01 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let sub_factor02 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let sub_factor03 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let sub_factor04 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let sub_factor05 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let det_cof = Vec4::new(
            m[1][1] * sub_factor00 - m[1][2] * sub_factor01 + m[1][3] * sub_factor02,
            -(m[1][0] * sub_factor00 - m[1][2] * sub_factor03 + m[1][3] * sub_factor04),
            m[1][0] * sub_factor01 - m[1][1] * sub_factor03 + m[1][3] * sub_factor05,
            -(m[1][0] * sub_factor02 - m[1][1] * sub_factor04 + m[1][2] * sub_factor05),
        );

        m[0][0] * det_cof[0] + m[0][1] * det_cof[1] + m[0][2] * det_cof[2] + m[0][3] * det_cof[3]
    }

    /// Computes the inverse of this matrix.
    ///
    /// Uses GLM's cofactor grouping: 18 paired 2x2 minors packed into six
    /// `fac` vectors, combined with the `vec` columns under alternating
    /// signs, then scaled by `1 / det` where `det` is the dot product of
    /// column 0 with row 0 of the unscaled adjugate.
    ///
    /// A singular matrix is not detected: the result contains infinities
    /// or NaNs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_math::{Mat4, Vec3, translate};
    ///
    /// let m = translate(Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
    /// let inv = m.inverse();
    /// assert_eq!(inv[3].truncate(), Vec3::new(-1.0, -2.0, -3.0));
    /// ```
    pub fn inverse(&self) -> Self {
        let m = &self.cols;

        let coef00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let coef02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
        let coef03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];

        let coef04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let coef06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
        let coef07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];

        let coef08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let coef10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
        let coef11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];

        let coef12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let coef14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
        let coef15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];

        let coef16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let coef18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
        let coef19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];

        let coef20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
        let coef22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
        let coef23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

        let fac0 = Vec4::new(coef00, coef00, coef02, coef03);
        let fac1 = Vec4::new(coef04, coef04, coef06, coef07);
        let fac2 = Vec4::new(coef08, coef08, coef10, coef11);
        let fac3 = Vec4::new(coef12, coef12, coef14, coef15);
        let fac4 = Vec4::new(coef16, coef16, coef18, coef19);
        let fac5 = Vec4::new(coef20, coef20, coef22, coef23);

        let vec0 = Vec4::new(m[1][0], m[0][0], m[0][0], m[0][0]);
        let vec1 = Vec4::new(m[1][1], m[0][1], m[0][1], m[0][1]);
        let vec2 = Vec4::new(m[1][2], m[0][2], m[0][2], m[0][2]);
        let vec3 = Vec4::new(m[1][3], m[0][3], m[0][3], m[0][3]);

        let inv0 = vec1 * fac0 - vec2 * fac1 + vec3 * fac2;
        let inv1 = vec0 * fac0 - vec2 * fac3 + vec3 * fac4;
        let inv2 = vec0 * fac1 - vec1 * fac3 + vec3 * fac5;
        let inv3 = vec0 * fac2 - vec1 * fac4 + vec2 * fac5;

        let sign_a = Vec4::new(1.0, -1.0, 1.0, -1.0);
        let sign_b = Vec4::new(-1.0, 1.0, -1.0, 1.0);
        let inverse = Self::from_cols(inv0 * sign_a, inv1 * sign_b, inv2 * sign_a, inv3 * sign_b);

        let det = m[0].dot(inverse.row(0));
        inverse * (1.0 / det)
    }

    /// Transforms a Vec4 by this matrix.
    ///
    /// Equivalent to `matrix * vector`.
    #[inline]
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.cols;
        Vec4::new(
            m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2] + m[3][0] * v[3],
            m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2] + m[3][1] * v[3],
            m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2] + m[3][2] * v[3],
            m[0][3] * v[0] + m[1][3] * v[1] + m[2][3] * v[2] + m[3][3] * v[3],
        )
    }

    /// Multiplies two matrices: `self * other`.
    ///
    /// Column `c` of the product is the combination of `self`'s columns
    /// weighted by the components of `other[c]`.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let l = &self.cols;
        let col = |r: Vec4| l[0] * r[0] + l[1] * r[1] + l[2] * r[2] + l[3] * r[3];
        Self::from_cols(
            col(other.cols[0]),
            col(other.cols[1]),
            col(other.cols[2]),
            col(other.cols[3]),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    /// Rotation of `angle` radians around `axis`, applied to the identity.
    ///
    /// Shorthand for [`rotate`](crate::rotate)`(Mat4::IDENTITY, angle, axis)`.
    #[inline]
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        crate::rotate(Self::IDENTITY, angle, axis)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_mat(&rhs);
    }
}

// Mat4 * f32
impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(
            self.cols[0] * rhs,
            self.cols[1] * rhs,
            self.cols[2] * rhs,
            self.cols[3] * rhs,
        )
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, c: usize) -> &Vec4 {
        &self.cols[c]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, c: usize) -> &mut Vec4 {
        &mut self.cols[c]
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (c, r): (usize, usize)) -> &f32 {
        &self.cols[c][r]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (c, r): (usize, usize)) -> &mut f32 {
        &mut self.cols[c][r]
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..Self::DIM {
            if r > 0 {
                write!(f, "; ")?;
            }
            let row = self.row(r);
            write!(f, "{}, {}, {}, {}", row.x, row.y, row.z, row.w)?;
        }
        write!(f, "]")
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline]
    fn from(m: Mat4) -> [f32; 16] {
        m.to_array()
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(a: [f32; 16]) -> Self {
        Self::from_array(a)
    }
}

impl_approx_mat!(Mat4);
