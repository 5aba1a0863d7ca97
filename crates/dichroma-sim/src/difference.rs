//! Perceptual difference maps.
//!
//! Highlights where a simulated rendering differs strongly from the
//! original, which is where a dichromat loses information. Each pixel pair
//! is compared in integer Lab ([`dichroma_transfer::lab`]); pairs whose
//! ΔE exceeds [`DELTA_E_THRESHOLD`] are painted [`MARKER`], the rest keep
//! the simulated pixel.

use dichroma_core::RasterImage;
use dichroma_transfer::{delta_e, srgb_to_lab};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::SimResult;

/// ΔE above which a pixel pair is marked.
pub const DELTA_E_THRESHOLD: f64 = 40.0;

/// Opaque blue used to mark large differences.
pub const MARKER: u32 = 0xff00_00ff;

/// Builds a difference map between a normal and a simulated raster.
///
/// # Errors
///
/// [`dichroma_core::Error::DimensionMismatch`] if the rasters differ in size.
///
/// # Example
///
/// ```rust
/// use dichroma_core::RasterImage;
/// use dichroma_sim::{difference_map, Deficiency, Simulator, MARKER};
///
/// let normal = RasterImage::filled(4, 4, 0xffff0000);
/// let simulated = Simulator::with_mode(Deficiency::Deuteranopia).apply(&normal);
/// let map = difference_map(&normal, &simulated).unwrap();
/// assert_eq!(map.pixel(0, 0), MARKER);
/// ```
pub fn difference_map(normal: &RasterImage, simulated: &RasterImage) -> SimResult<RasterImage> {
    normal.ensure_same_shape(simulated)?;

    let mut out = simulated.clone();
    let mut marked = 0usize;
    for (dst, &src) in out.pixels_mut().iter_mut().zip(normal.pixels()) {
        if delta_e(srgb_to_lab(src), srgb_to_lab(*dst)) > DELTA_E_THRESHOLD {
            *dst = MARKER;
            marked += 1;
        }
    }
    debug!(pixels = out.pixel_count(), marked, "difference map built");
    Ok(out)
}
