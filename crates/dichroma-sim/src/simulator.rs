//! Simulation selector.
//!
//! [`Simulator`] owns the active [`Deficiency`] and the matching
//! [`RasterFilter`]. Switching modes is unconditional and cheap: it only
//! builds a new stateless transform. In [`Deficiency::Normal`] there is no
//! filter and rasters pass through unchanged.
//!
//! # Example
//!
//! ```rust
//! use dichroma_core::RasterImage;
//! use dichroma_sim::{Deficiency, Simulator};
//!
//! let capture = RasterImage::filled(8, 8, 0xff3366cc);
//!
//! let mut sim = Simulator::new();
//! assert_eq!(sim.apply(&capture), capture);
//!
//! sim.select_mode("protan").unwrap();
//! assert_eq!(sim.mode(), Deficiency::Protanopia);
//! let simulated = sim.apply(&capture);
//! assert_eq!(simulated.dimensions(), capture.dimensions());
//! ```

use dichroma_core::RasterImage;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::{Deficiency, LumaScale, RasterFilter, SimResult, Transform};

/// Holds the current simulation mode and dispatches rasters to it.
#[derive(Debug, Clone)]
pub struct Simulator {
    mode: Deficiency,
    luma: LumaScale,
    filter: Option<RasterFilter>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    /// Creates a simulator in normal mode.
    pub fn new() -> Self {
        Self {
            mode: Deficiency::Normal,
            luma: LumaScale::default(),
            filter: None,
        }
    }

    /// Creates a simulator already set to `mode`.
    pub fn with_mode(mode: Deficiency) -> Self {
        let mut sim = Self::new();
        sim.set_mode(mode);
        sim
    }

    /// Sets the grayscale luminance scale, rebuilding the active filter.
    pub fn with_luma_scale(mut self, luma: LumaScale) -> Self {
        self.luma = luma;
        self.set_mode(self.mode);
        self
    }

    /// Current mode.
    pub fn mode(&self) -> Deficiency {
        self.mode
    }

    /// Grayscale luminance scale in effect.
    pub fn luma_scale(&self) -> LumaScale {
        self.luma
    }

    /// Active filter, `None` in normal mode.
    pub fn filter(&self) -> Option<&RasterFilter> {
        self.filter.as_ref()
    }

    /// Replaces the active filter with the one for `mode`.
    pub fn set_mode(&mut self, mode: Deficiency) {
        debug!(from = %self.mode, to = %mode, "simulation mode changed");
        self.mode = mode;
        self.filter = Transform::for_mode(mode, self.luma).map(RasterFilter::new);
    }

    /// Parses `name` and switches to that mode.
    ///
    /// # Errors
    ///
    /// [`crate::SimError::InvalidMode`] if `name` is not a known mode. The
    /// current mode is kept.
    pub fn select_mode(&mut self, name: &str) -> SimResult<()> {
        let mode = name.parse()?;
        self.set_mode(mode);
        Ok(())
    }

    /// Simulates the current mode on a borrowed raster.
    ///
    /// Normal mode returns a copy of the input.
    pub fn apply(&self, raster: &RasterImage) -> RasterImage {
        match &self.filter {
            Some(filter) => filter.apply(raster),
            None => raster.clone(),
        }
    }

    /// Simulates the current mode on an owned raster.
    ///
    /// Normal mode hands the input back without copying.
    pub fn transform(&self, raster: RasterImage) -> RasterImage {
        trace!(mode = %self.mode, "Simulator::transform");
        match &self.filter {
            Some(filter) => filter.apply(&raster),
            None => raster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;
    use dichroma_core::pixel;

    fn sample() -> RasterImage {
        let data = vec![
            pixel::rgb(255, 0, 0),
            pixel::argb(0, 0, 255, 0),
            pixel::rgb(0, 0, 255),
            pixel::argb(12, 128, 128, 128),
        ];
        RasterImage::from_pixels(2, 2, data).unwrap()
    }

    #[test]
    fn test_normal_is_identity() {
        let sim = Simulator::new();
        let src = sample();
        assert_eq!(sim.apply(&src), src);
        assert_eq!(sim.transform(src.clone()), src);
        assert!(sim.filter().is_none());
    }

    #[test]
    fn test_set_mode_installs_filter() {
        let mut sim = Simulator::new();
        for mode in Deficiency::ALL {
            sim.set_mode(mode);
            assert_eq!(sim.mode(), mode);
            assert_eq!(sim.filter().is_none(), mode.is_normal());
        }
    }

    #[test]
    fn test_select_mode_invalid_keeps_mode() {
        let mut sim = Simulator::with_mode(Deficiency::Tritanopia);
        let err = sim.select_mode("monochrome").unwrap_err();
        assert!(matches!(err, SimError::InvalidMode(_)));
        assert_eq!(sim.mode(), Deficiency::Tritanopia);
    }

    #[test]
    fn test_transform_matches_apply() {
        let src = sample();
        for mode in Deficiency::ALL {
            let sim = Simulator::with_mode(mode);
            assert_eq!(sim.transform(src.clone()), sim.apply(&src));
        }
    }

    #[test]
    fn test_luma_scale_rebuilds_filter() {
        let white = RasterImage::filled(1, 1, 0xffffffff);
        let legacy = Simulator::with_mode(Deficiency::Grayscale);
        let full = Simulator::with_mode(Deficiency::Grayscale).with_luma_scale(LumaScale::Full);
        assert_eq!(legacy.apply(&white).pixel(0, 0), 0xffb9b9b9);
        assert_eq!(full.apply(&white).pixel(0, 0), 0xfffefefe);
        assert_eq!(full.luma_scale(), LumaScale::Full);
    }
}
