//! # glm-math
//!
//! Matrix types, geometric functions and transform builders for GLM-RS.
//!
//! This crate builds on [`glm_core`] vectors and reproduces the GLM
//! matrix conventions:
//!
//! - [`Mat2`], [`Mat3`], [`Mat4`] - Column-major square matrices
//! - [`dot`], [`cross`], [`normalize`], [`length`] - Geometric functions
//! - [`inverse`] - Generic inversion over [`SquareMatrix`]
//! - Projection builders: [`frustum`], [`perspective`], [`perspective_fov`],
//!   [`infinite_perspective`], [`tweaked_infinite_perspective`], [`ortho`],
//!   [`ortho_2d`]
//! - View and model builders: [`look_at`], [`rotate`], [`translate`],
//!   [`scale`]
//! - Screen mapping: [`project`], [`un_project`], [`pick_matrix`]
//!
//! ## Conventions
//!
//! Matrices are stored as columns and transform column vectors:
//! `m * v` applies `m` to `v`, and `a * b` applies `b` first. Projection
//! builders target a right-handed view space with clip depth in
//! `[-1, 1]` (OpenGL).
//!
//! # Usage
//!
//! ```rust
//! use glm_math::{look_at, perspective, Mat4, Vec3};
//!
//! let proj = perspective(std::f32::consts::FRAC_PI_2, 16.0 / 9.0, 0.1, 100.0);
//! let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let clip = proj * view * Vec3::ZERO.extend(1.0);
//! assert!(clip.w > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Implements `approx` tolerance traits column by column for a matrix type.
macro_rules! impl_approx_mat {
    ($ty:ident) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl approx::RelativeEq for $ty {
            #[inline]
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl approx::UlpsEq for $ty {
            #[inline]
            fn default_max_ulps() -> u32 {
                4
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
}

mod geometric;
mod mat2;
mod mat3;
mod mat4;
mod matrix;
mod transform;

pub use geometric::*;
pub use mat2::*;
pub use mat3::*;
pub use mat4::*;
pub use matrix::*;
pub use transform::*;

// Re-export core types so downstream code needs a single import.
pub use glm_core::{Error, Result, Vec2, Vec3, Vec4};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use glm_math::prelude::*;
///
/// let m = Mat4::IDENTITY;
/// assert_eq!(inverse(m), m);
/// ```
pub mod prelude {
    pub use crate::geometric::{Vector, cross, dot, length, normalize};
    pub use crate::matrix::{SquareMatrix, inverse};
    pub use crate::transform::*;
    pub use crate::{Mat2, Mat3, Mat4};
    pub use glm_core::prelude::*;
}
