//! # glm-core
//!
//! Core value types for GLM-compatible graphics math.
//!
//! This crate provides the foundational types used throughout GLM-RS:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - Fixed-size `f32` vectors with
//!   component-wise arithmetic
//! - [`Error`], [`Result`] - Range errors for checked access and argument
//!   validation
//!
//! ## Semantics
//!
//! The types reproduce GLM element for element:
//!
//! - `==` is exact per-component float equality (no epsilon). Tolerance
//!   comparisons go through the [`approx`] traits every type implements.
//! - Division by zero and normalizing a zero vector produce IEEE-754
//!   infinities/NaNs; they are never reported as errors.
//! - Index access outside the valid range is always an error (checked
//!   accessors) or a panic (`[]` operator), never clamped.
//!
//! ## Crate Structure
//!
//! ```text
//! glm-core (this crate)
//!    ^
//!    |
//!    +-- glm-math (matrices, inversion, transform builders)
//!    +-- glm-tests / glm-bench
//! ```
//!
//! # Usage
//!
//! ```rust
//! use glm_core::{Vec3, Vec4};
//!
//! let a = Vec3::new(1.0, 0.0, 0.0);
//! let b = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(a.extend(1.0).to_array(), [1.0, 0.0, 0.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Implements `approx` tolerance traits component-wise for a vector type.
macro_rules! impl_approx_vec {
    ($ty:ident, $($field:ident),+) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = f32;

            #[inline]
            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $ty {
            #[inline]
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }

        impl approx::UlpsEq for $ty {
            #[inline]
            fn default_max_ulps() -> u32 {
                4
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                $(approx::UlpsEq::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

pub mod error;
mod vec2;
mod vec3;
mod vec4;

pub use error::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use glm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::{Vec2, Vec3, Vec4};
}
