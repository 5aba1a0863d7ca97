//! Raster image buffer.
//!
//! [`RasterImage`] is the only image type the simulation engine understands:
//! a `width x height` grid of packed ARGB pixels (see [`crate::pixel`]).
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, one `u32` per pixel:
//!
//! ```text
//! [P(0,0) P(1,0) P(2,0) ...]  <- Row 0
//! [P(0,1) P(1,1) P(2,1) ...]  <- Row 1
//! ```
//!
//! The buffer length is always exactly `width * height`.
//!
//! # Usage
//!
//! ```rust
//! use dichroma_core::{pixel, RasterImage};
//!
//! let mut img = RasterImage::new(3, 2);
//! img.set_pixel(2, 1, pixel::rgb(10, 20, 30));
//! assert_eq!(img.pixel(2, 1), 0xff0a141e);
//! assert_eq!(img.pixels().len(), 6);
//! ```

use crate::{Error, Result};

/// Owned buffer of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RasterImage {
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
    /// Row-major pixel data
    data: Vec<u32>,
}

impl RasterImage {
    /// Creates a raster filled with transparent black (`0x00000000`).
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Creates a raster with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: u32) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![px; count],
        }
    }

    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `width * height` overflows `usize`
    /// - [`Error::BufferSize`] if `data.len() != width * height`
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_core::RasterImage;
    ///
    /// let img = RasterImage::from_pixels(2, 2, vec![0xff000000; 4]).unwrap();
    /// assert_eq!(img.pixel_count(), 4);
    ///
    /// assert!(RasterImage::from_pixels(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        if data.len() != expected {
            return Err(Error::buffer_size(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocates a transparent raster with the same shape as `self`.
    ///
    /// Used as the destination of a filter pass.
    pub fn new_like(&self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the raster holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if both rasters have the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Fails with [`Error::DimensionMismatch`] unless shapes agree.
    pub fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()))
        }
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Mutable row-major pixel slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Consumes the raster and returns its buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<u32> {
        self.data
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks(self.width.max(1) as usize)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the raster.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: u32) {
        let idx = self.index(x, y);
        self.data[idx] = px;
    }
}
