//! Geometric functions shared by all vector sizes.
//!
//! Free-function forms of the vector methods, generic over [`Vector`]
//! so call sites read like GLM: `dot(a, b)`, `normalize(v)`.

use crate::{Vec2, Vec3, Vec4};

/// Operations common to [`Vec2`], [`Vec3`] and [`Vec4`].
pub trait Vector: Copy {
    /// Dot product.
    fn dot(self, other: Self) -> f32;

    /// Euclidean length.
    fn length(self) -> f32;

    /// Unit-length copy; a zero vector yields NaN components.
    fn normalize(self) -> Self;
}

macro_rules! impl_vector {
    ($($ty:ty),+) => {
        $(
            impl Vector for $ty {
                #[inline]
                fn dot(self, other: Self) -> f32 {
                    <$ty>::dot(self, other)
                }

                #[inline]
                fn length(self) -> f32 {
                    <$ty>::length(self)
                }

                #[inline]
                fn normalize(self) -> Self {
                    <$ty>::normalize(self)
                }
            }
        )+
    };
}

impl_vector!(Vec2, Vec3, Vec4);

/// Dot product of two vectors of the same size.
#[inline]
pub fn dot<V: Vector>(a: V, b: V) -> f32 {
    a.dot(b)
}

/// Cross product of two 3D vectors.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Returns `v` scaled to unit length.
#[inline]
pub fn normalize<V: Vector>(v: V) -> V {
    v.normalize()
}

/// Euclidean length of `v`.
#[inline]
pub fn length<V: Vector>(v: V) -> f32 {
    v.length()
}
