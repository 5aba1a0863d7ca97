//! Error types for dichroma-core operations.
//!
//! Every failure here is a contract violation by the caller: a buffer whose
//! length does not match its declared size, or two rasters that should share
//! a shape but don't. Nothing is retried.
//!
//! # Usage
//!
//! ```rust
//! use dichroma_core::{Error, Result};
//!
//! fn same_shape(a: (u32, u32), b: (u32, u32)) -> Result<()> {
//!     if a != b {
//!         return Err(Error::dimension_mismatch(a, b));
//!     }
//!     Ok(())
//! }
//!
//! assert!(same_shape((4, 4), (4, 5)).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or filtering rasters.
#[derive(Debug, Error)]
pub enum Error {
    /// Source and destination rasters differ in size.
    ///
    /// Returned by operations that pair two rasters pixel for pixel
    /// (filtering into a pre-allocated destination, difference maps).
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First raster width
        a_width: u32,
        /// First raster height
        a_height: u32,
        /// Second raster width
        b_width: u32,
        /// Second raster height
        b_height: u32,
    },

    /// Raster dimensions cannot be represented.
    ///
    /// Returned when `width * height` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel buffer length does not match `width * height`.
    #[error("buffer holds {got} pixels, expected {expected}")]
    BufferSize {
        /// Pixels required by the declared dimensions
        expected: usize,
        /// Pixels actually supplied
        got: usize,
    },

    /// Generic error with custom message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSize`] error.
    #[inline]
    pub fn buffer_size(expected: usize, got: usize) -> Self {
        Self::BufferSize { expected, got }
    }

    /// Creates an [`Error::Other`] error.
    #[inline]
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns `true` if this error is about raster shape.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. } | Self::InvalidDimensions { .. } | Self::BufferSize { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((100, 100), (200, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("200x50"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_buffer_size() {
        let err = Error::buffer_size(16, 15);
        assert!(err.to_string().contains("15"));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_other_is_not_shape() {
        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_shape_error());
    }
}
