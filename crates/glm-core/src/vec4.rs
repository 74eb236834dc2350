//! 4-component vector type.
//!
//! [`Vec4`] holds homogeneous coordinates (W = 1 for points, W = 0 for
//! directions), matrix columns of `Mat4`, and viewports laid out as
//! `(x, y, width, height)`.

use crate::{Error, Result, Vec3};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 4D vector of `f32` components.
///
/// Equality is exact per component.
///
/// # Example
///
/// ```rust
/// use glm_core::{Vec3, Vec4};
///
/// let point = Vec3::new(1.0, 2.0, 3.0).extend(1.0);
/// assert_eq!(point, Vec4::new(1.0, 2.0, 3.0, 1.0));
/// assert_eq!(point.truncate(), Vec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component (homogeneous coordinate)
    pub w: f32,
}

impl Vec4 {
    /// Number of components.
    pub const LEN: usize = 4;

    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit Z vector (0, 0, 1, 0).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit W vector (0, 0, 0, 1).
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array in component order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops the `w` component.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the component at `index`, or an error outside `0..4`.
    #[inline]
    pub fn get(self, index: usize) -> Result<f32> {
        Error::check_index(index, Self::LEN)?;
        Ok(self[index])
    }

    /// Sets the component at `index`, or returns an error outside `0..4`.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        Error::check_index(index, Self::LEN)?;
        self[index] = value;
        Ok(())
    }

    /// Dot product.
    ///
    /// Summed pairwise as `(x + y) + (z + w)`, which is also how the 4x4
    /// inverse recovers its determinant.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        let tmp = self * other;
        (tmp.x + tmp.y) + (tmp.z + tmp.w)
    }

    /// Squared length, summed left to right.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length; a zero vector yields NaN.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length_squared().sqrt())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Add<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs, self.w + rhs)
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Sub<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs, self.w - rhs)
    }
}

// Vec4 * Vec4 (component-wise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z, self.w * rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        Vec4::new(rhs.x * self, rhs.y * self, rhs.z * self, rhs.w * self)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.z, self.w)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl_approx_vec!(Vec4, x, y, z, w);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec4_dot_grouping() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
        assert_eq!(a.dot(b), b.dot(a));

        // (1e8 + 1) + (-1e8 + 1) loses both ones; a left-to-right sum keeps the last
        let c = Vec4::new(1e8, 1.0, -1e8, 1.0);
        assert_eq!(c.dot(Vec4::ONE), 0.0);
        assert_eq!(c.length_squared(), 2e16);
    }

    #[test]
    fn test_vec4_scalar_ops() {
        let v = Vec4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v / v.w, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v * 0.5 + 0.5, Vec4::new(1.5, 2.5, 3.5, 1.5));
        assert_eq!(v * 2.0 - 1.0, Vec4::new(3.0, 7.0, 11.0, 3.0));
        assert_eq!(v * Vec4::new(1.0, 0.0, -1.0, 2.0), Vec4::new(2.0, 0.0, -6.0, 4.0));
    }

    #[test]
    fn test_vec4_normalize() {
        let n = Vec4::new(1.0, 1.0, 1.0, 1.0).normalize();
        assert_abs_diff_eq!(n, Vec4::splat(0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_vec4_checked_access() {
        let mut v = Vec4::ZERO;
        assert!(v.set(3, 1.0).is_ok());
        assert_eq!(v, Vec4::W);
        assert_eq!(v.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    }

    #[test]
    fn test_vec4_to_array() {
        assert_eq!(Vec4::new(1.0, 2.0, 3.0, 4.0).to_array(), [1.0, 2.0, 3.0, 4.0]);
        let arr: [f32; 4] = Vec4::W.into();
        assert_eq!(arr, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_vec4_display() {
        assert_eq!(Vec4::new(0.0, 1.0, 2.0, 3.5).to_string(), "[0, 1, 2, 3.5]");
    }
}
