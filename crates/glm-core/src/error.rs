//! Error types for glm-core and glm-math operations.
//!
//! Only two kinds of failure are ever reported:
//!
//! - **Index errors**: reading or writing a vector component, matrix column
//!   or matrix element outside its valid range.
//! - **Argument errors**: transform builders that validate their inputs
//!   (`perspective_fov`, `pick_matrix`) reject non-positive sizes.
//!
//! Everything else (division by zero, singular matrices, normalizing a zero
//! vector) is *not* an error: IEEE-754 infinities and NaNs propagate
//! silently, exactly as GLM does.
//!
//! # Usage
//!
//! ```rust
//! use glm_core::{Error, Result, Vec3};
//!
//! fn third(v: Vec3) -> Result<f32> {
//!     v.get(2)
//! }
//!
//! assert_eq!(third(Vec3::new(1.0, 2.0, 3.0)).unwrap(), 3.0);
//! assert!(matches!(
//!     Vec3::ZERO.get(3),
//!     Err(Error::IndexOutOfRange { index: 3, len: 3 })
//! ));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Vec2`], [`crate::Vec3`], [`crate::Vec4`] - Checked component access
//! - `glm-math` - Matrix column/element access and transform argument checks

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by checked accessors and validating transform builders.
///
/// # Categories
///
/// - **Range errors on indices**: [`IndexOutOfRange`](Error::IndexOutOfRange)
/// - **Range errors on arguments**: [`ArgumentOutOfRange`](Error::ArgumentOutOfRange)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Index is outside `[0, len)`.
    ///
    /// Returned by vector component access and by matrix column or row
    /// access. Indices are never clamped or wrapped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glm_core::Error;
    ///
    /// let err = Error::IndexOutOfRange { index: 4, len: 4 };
    /// assert!(err.to_string().contains("4"));
    /// ```
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid indices
        len: usize,
    },

    /// A builder argument must be strictly positive but was not.
    #[error("argument `{name}` out of range: {value} (must be > 0)")]
    ArgumentOutOfRange {
        /// Parameter name as it appears in the builder signature
        name: &'static str,
        /// Rejected value
        value: f32,
    },
}

impl Error {
    /// Returns `Err(IndexOutOfRange)` unless `index < len`.
    #[inline]
    pub fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }

    /// Returns `Err(ArgumentOutOfRange)` unless `value > 0`.
    ///
    /// NaN passes: the comparison is `value <= 0`, as in GLM.
    #[inline]
    pub fn check_positive(name: &'static str, value: f32) -> Result<()> {
        if value <= 0.0 {
            Err(Self::ArgumentOutOfRange { name, value })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(Error::check_index(0, 2).is_ok());
        assert!(Error::check_index(1, 2).is_ok());
        assert_eq!(
            Error::check_index(2, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_check_positive() {
        assert!(Error::check_positive("width", 1.0).is_ok());
        assert!(Error::check_positive("width", 0.0).is_err());
        assert!(Error::check_positive("width", -0.0).is_err());
        assert!(Error::check_positive("width", -3.0).is_err());
        assert!(Error::check_positive("width", f32::NAN).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = Error::ArgumentOutOfRange {
            name: "fov",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "argument `fov` out of range: 0 (must be > 0)");

        let err = Error::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for length 3");
    }
}
