//! Parallel filtering using Rayon.
//!
//! Two shapes of parallelism are offered:
//!
//! - [`RasterFilter::apply_par`] splits one raster into horizontal bands.
//!   Each band runs its own run cache, so the output is bit-identical to
//!   [`RasterFilter::apply`].
//! - [`filter_many`] and [`Simulator::apply_many`] filter several
//!   independent rasters at once (for example one capture per display).
//!
//! Gamma tables are shared read-only; no locks are taken.
//!
//! # Example
//!
//! ```rust
//! use dichroma_core::RasterImage;
//! use dichroma_sim::{RasterFilter, Transform};
//!
//! let src = RasterImage::filled(640, 480, 0xff336699);
//! let filter = RasterFilter::new(Transform::tritanopia());
//! assert_eq!(filter.apply_par(&src), filter.apply(&src));
//! ```

use dichroma_core::RasterImage;
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{Deficiency, RasterFilter, Simulator};

/// Target pixel count per parallel band.
const BAND_PIXELS: usize = 64 * 1024;

impl RasterFilter {
    /// Filters `src` into a new raster, processing row bands in parallel.
    pub fn apply_par(&self, src: &RasterImage) -> RasterImage {
        let mut dst = src.new_like();
        if src.is_empty() {
            return dst;
        }

        let width = src.width() as usize;
        let rows_per_band = (BAND_PIXELS / width).max(1);
        let band = rows_per_band * width;
        trace!(width, height = src.height(), rows_per_band, "RasterFilter::apply_par");

        let reused: usize = dst
            .pixels_mut()
            .par_chunks_mut(band)
            .zip(src.pixels().par_chunks(band))
            .map(|(out, input)| self.filter_slice(input, out))
            .sum();
        debug!(pixels = src.pixel_count(), reused, "raster filtered in parallel");
        dst
    }
}

impl Simulator {
    /// Simulates the current mode on a raster, splitting it across threads.
    pub fn apply_par(&self, raster: &RasterImage) -> RasterImage {
        match self.filter() {
            Some(filter) => filter.apply_par(raster),
            None => raster.clone(),
        }
    }

    /// Simulates the current mode on several rasters concurrently.
    ///
    /// Results are returned in input order.
    pub fn apply_many(&self, rasters: &[RasterImage]) -> Vec<RasterImage> {
        trace!(count = rasters.len(), mode = %self.mode(), "Simulator::apply_many");
        rasters.par_iter().map(|r| self.apply(r)).collect()
    }
}

/// Filters every raster in `rasters` under `mode`, one task per raster.
pub fn filter_many(mode: Deficiency, rasters: &[RasterImage]) -> Vec<RasterImage> {
    Simulator::with_mode(mode).apply_many(rasters)
}
