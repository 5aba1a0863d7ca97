//! Raster filter driver.
//!
//! [`RasterFilter`] runs one [`Transform`] over every pixel of a raster.
//!
//! # Run cache
//!
//! Screenshots are full of horizontal runs of identical pixels (window
//! backgrounds, flat UI). The filter remembers the last source pixel and
//! its output; when the next source pixel is bit-identical, the previous
//! output is reused. Transforms are pure functions of a single pixel, so
//! the output is identical to transforming every pixel.
//!
//! The cache is a local of one filter pass. A `RasterFilter` holds no
//! mutable state and can be shared between threads.
//!
//! # Example
//!
//! ```rust
//! use dichroma_core::RasterImage;
//! use dichroma_sim::{RasterFilter, Transform};
//!
//! let src = RasterImage::filled(64, 64, 0xffff0000);
//! let filter = RasterFilter::new(Transform::deuteranopia());
//! let dst = filter.apply(&src);
//! assert_eq!(dst.dimensions(), (64, 64));
//! assert!(dst.pixels().iter().all(|&p| p == 0xff929200));
//! ```

use dichroma_core::RasterImage;
use dichroma_transfer::GammaTables;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{SimResult, Transform};

/// Applies a [`Transform`] to whole rasters.
#[derive(Debug, Clone, Copy)]
pub struct RasterFilter {
    transform: Transform,
    tables: &'static GammaTables,
}

impl RasterFilter {
    /// Creates a filter backed by the process-wide gamma tables.
    pub fn new(transform: Transform) -> Self {
        Self {
            transform,
            tables: dichroma_transfer::tables(),
        }
    }

    /// The transform this filter applies.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Transforms a single pixel.
    #[inline]
    pub fn apply_pixel(&self, px: u32) -> u32 {
        self.transform.apply_with(self.tables, px)
    }

    /// Filters `src` into a newly allocated raster of the same size.
    pub fn apply(&self, src: &RasterImage) -> RasterImage {
        trace!(width = src.width(), height = src.height(), "RasterFilter::apply");
        let mut dst = src.new_like();
        let reused = self.filter_slice(src.pixels(), dst.pixels_mut());
        debug!(pixels = src.pixel_count(), reused, "raster filtered");
        dst
    }

    /// Filters `src` into an existing raster.
    ///
    /// # Errors
    ///
    /// [`dichroma_core::Error::DimensionMismatch`] if `dst` has a different
    /// width or height than `src`. `dst` is left untouched in that case.
    pub fn apply_into(&self, src: &RasterImage, dst: &mut RasterImage) -> SimResult<()> {
        src.ensure_same_shape(dst)?;
        let reused = self.filter_slice(src.pixels(), dst.pixels_mut());
        debug!(pixels = src.pixel_count(), reused, "raster filtered in place");
        Ok(())
    }

    /// Filters a pixel slice, returning how many outputs came from the run cache.
    ///
    /// `src` and `dst` must have equal length.
    pub(crate) fn filter_slice(&self, src: &[u32], dst: &mut [u32]) -> usize {
        debug_assert_eq!(src.len(), dst.len());
        let mut prev: Option<(u32, u32)> = None;
        let mut reused = 0;
        for (out, &px) in dst.iter_mut().zip(src) {
            *out = match prev {
                Some((prev_in, prev_out)) if prev_in == px => {
                    reused += 1;
                    prev_out
                }
                _ => {
                    let result = self.apply_pixel(px);
                    prev = Some((px, result));
                    result
                }
            };
        }
        reused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dichroma_core::{pixel, Error};
    use crate::SimError;

    fn all_filters() -> Vec<RasterFilter> {
        vec![
            RasterFilter::new(Transform::deuteranopia()),
            RasterFilter::new(Transform::protanopia()),
            RasterFilter::new(Transform::tritanopia()),
            RasterFilter::new(Transform::grayscale()),
        ]
    }

    fn gradient(width: u32, height: u32) -> RasterImage {
        let data = (0..width * height)
            .map(|i| pixel::argb((i * 7) as u8, (i * 3) as u8, (i * 5 / 2) as u8, (i / 3) as u8))
            .collect();
        RasterImage::from_pixels(width, height, data).unwrap()
    }

    #[test]
    fn test_shape_preserved() {
        let src = gradient(17, 9);
        for f in all_filters() {
            assert_eq!(f.apply(&src).dimensions(), (17, 9));
        }
    }

    #[test]
    fn test_cache_matches_per_pixel() {
        let mut data = vec![pixel::rgb(200, 30, 40); 5];
        data.extend([pixel::rgb(1, 2, 3), pixel::rgb(1, 2, 3), pixel::rgb(200, 30, 40)]);
        let src = RasterImage::from_pixels(8, 1, data).unwrap();
        for f in all_filters() {
            let dst = f.apply(&src);
            for (s, d) in src.pixels().iter().zip(dst.pixels()) {
                assert_eq!(*d, f.apply_pixel(*s));
            }
            assert_eq!(dst.pixels()[0], dst.pixels()[1]);
        }
    }

    #[test]
    fn test_reuse_count() {
        let src = RasterImage::filled(10, 1, pixel::rgb(9, 9, 9));
        let f = RasterFilter::new(Transform::grayscale());
        let mut dst = src.new_like();
        assert_eq!(f.filter_slice(src.pixels(), dst.pixels_mut()), 9);
    }

    #[test]
    fn test_leading_transparent_black_is_opaque() {
        let src = RasterImage::new(4, 1);
        for f in all_filters() {
            let dst = f.apply(&src);
            assert!(dst.pixels().iter().all(|&p| pixel::is_opaque(p)));
        }
    }

    #[test]
    fn test_apply_into() {
        let src = gradient(6, 4);
        let f = RasterFilter::new(Transform::tritanopia());
        let mut dst = RasterImage::new(6, 4);
        f.apply_into(&src, &mut dst).unwrap();
        assert_eq!(dst, f.apply(&src));
    }

    #[test]
    fn test_apply_into_mismatch() {
        let src = gradient(6, 4);
        let f = RasterFilter::new(Transform::deuteranopia());
        let mut dst = RasterImage::filled(4, 6, 7);
        let err = f.apply_into(&src, &mut dst).unwrap_err();
        assert!(matches!(err, SimError::Core(Error::DimensionMismatch { .. })));
        assert!(dst.pixels().iter().all(|&p| p == 7));
    }

    #[test]
    fn test_empty_raster() {
        let src = RasterImage::new(0, 0);
        let dst = RasterFilter::new(Transform::grayscale()).apply(&src);
        assert!(dst.is_empty());
    }
}
