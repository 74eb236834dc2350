//! 3-component vector type.
//!
//! [`Vec3`] represents positions, directions, axes and scale factors.
//! It is the argument type of most transform builders in `glm-math`
//! (`look_at`, `translate`, `rotate`, `scale`, `project`).
//!
//! # Usage
//!
//! ```rust
//! use glm_core::Vec3;
//!
//! let eye = Vec3::new(0.0, 0.0, 5.0);
//! let forward = (Vec3::ZERO - eye).normalize();
//! assert_eq!(forward, Vec3::new(0.0, 0.0, -1.0));
//! ```

use crate::{Error, Result, Vec2, Vec4};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3D vector of `f32` components.
///
/// Equality is exact per component (`0.1 + 0.6 != 0.7` in `f32`, `NaN != NaN`).
/// Use the [`approx`] traits for tolerance comparisons.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, the panicking index `[0]`..`[2]`, or the
/// checked [`get`](Vec3::get) / [`set`](Vec3::set).
///
/// # Example
///
/// ```rust
/// use glm_core::Vec3;
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(v.x, 1.0);
/// assert_eq!(v[2], 3.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Number of components.
    pub const LEN: usize = 3;

    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_core::Vec3;
    ///
    /// assert_eq!(Vec3::splat(0.5), Vec3::new(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array in component order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Appends a `w` component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drops the `z` component.
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the component at `index`, or an error outside `0..3`.
    #[inline]
    pub fn get(self, index: usize) -> Result<f32> {
        Error::check_index(index, Self::LEN)?;
        Ok(self[index])
    }

    /// Sets the component at `index`, or returns an error outside `0..3`.
    #[inline]
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        Error::check_index(index, Self::LEN)?;
        self[index] = value;
        Ok(())
    }

    /// Dot product, summed `x, y, z` left to right.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        let tmp = self * other;
        tmp.x + tmp.y + tmp.z
    }

    /// Cross product.
    ///
    /// `a.cross(b) == -b.cross(a)` holds exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_core::Vec3;
    ///
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            self.z * other.x - other.z * self.x,
            self.x * other.y - other.x * self.y,
        )
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// Computed as `v * (1 / sqrt(x² + y² + z²))`. A zero vector yields NaN
    /// components; no guard is applied.
    #[inline]
    pub fn normalize(self) -> Self {
        self * (1.0 / self.length_squared().sqrt())
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vec3 + f32
impl Add<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vec3 - f32
impl Sub<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vec3 * f32
impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f32 * Vec3
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::new(rhs.x * self, rhs.y * self, rhs.z * self)
    }
}

// Vec3 / f32
impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Vec3 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<Vec4> for Vec3 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.truncate()
    }
}

impl_approx_vec!(Vec3, x, y, z);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 7.25);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vec3::ZERO);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_vec3_normalize_zero_is_nan() {
        assert!(Vec3::ZERO.normalize().is_nan());
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a + 1.0, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_vec3_div_by_zero() {
        let v = Vec3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_vec3_index() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    fn test_vec3_checked_access() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(1), Ok(2.0));
        assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert!(v.set(2, 9.0).is_ok());
        assert_eq!(v.z, 9.0);
        assert!(v.set(3, 9.0).is_err());
        assert_eq!(v, Vec3::new(1.0, 2.0, 9.0));
    }

    #[test]
    #[should_panic(expected = "Vec3 index out of bounds")]
    fn test_vec3_index_panics() {
        let v = Vec3::ZERO;
        let _x = v[3];
    }

    #[test]
    fn test_vec3_extend_truncate() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.truncate(), Vec2::new(1.0, 2.0));
        assert_eq!(Vec3::from(Vec4::new(1.0, 2.0, 3.0, 4.0)), v);
    }

    #[test]
    fn test_vec3_display() {
        assert_eq!(Vec3::new(1.0, 0.5, -2.0).to_string(), "[1, 0.5, -2]");
    }
}
