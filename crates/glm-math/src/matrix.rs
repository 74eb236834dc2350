//! Operations shared by the square matrix types.

use crate::{Mat2, Mat3, Mat4};

/// A square column-major matrix of `f32`.
pub trait SquareMatrix: Copy {
    /// Number of columns (and rows).
    const DIM: usize;

    /// The identity matrix.
    fn identity() -> Self;

    /// Transposed copy.
    fn transpose(&self) -> Self;

    /// Determinant.
    fn determinant(&self) -> f32;

    /// Inverse; singular input yields non-finite elements.
    fn inverse(&self) -> Self;
}

macro_rules! impl_square_matrix {
    ($($ty:ident),+) => {
        $(
            impl SquareMatrix for $ty {
                const DIM: usize = $ty::DIM;

                #[inline]
                fn identity() -> Self {
                    $ty::IDENTITY
                }

                #[inline]
                fn transpose(&self) -> Self {
                    $ty::transpose(self)
                }

                #[inline]
                fn determinant(&self) -> f32 {
                    $ty::determinant(self)
                }

                #[inline]
                fn inverse(&self) -> Self {
                    $ty::inverse(self)
                }
            }
        )+
    };
}

impl_square_matrix!(Mat2, Mat3, Mat4);

/// Inverts a square matrix.
///
/// # Example
///
/// ```rust
/// use glm_math::{inverse, Mat2};
///
/// let m = Mat2::new(2.0, 0.0, 0.0, 4.0);
/// assert_eq!(inverse(m), Mat2::new(0.5, 0.0, 0.0, 0.25));
/// ```
#[inline]
pub fn inverse<M: SquareMatrix>(m: M) -> M {
    m.inverse()
}
