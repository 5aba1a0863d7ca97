//! # dichroma-sim
//!
//! Simulates how images appear to viewers with color vision deficiencies.
//!
//! The engine takes an already captured [`RasterImage`] and returns a new
//! raster of the same size rendered for one of five modes:
//!
//! | Mode | Model |
//! |------|-------|
//! | [`Deficiency::Normal`] | pass-through |
//! | [`Deficiency::Deuteranopia`] | red-green projection, fixed point |
//! | [`Deficiency::Protanopia`] | red-green projection, fixed point |
//! | [`Deficiency::Tritanopia`] | LMS half-plane reconstruction |
//! | [`Deficiency::Grayscale`] | Rec.709 luminance |
//!
//! # Modules
//!
//! - [`transform`] - Per-pixel colorimetric transforms
//! - [`filter`] - Raster driver with run-length reuse
//! - [`simulator`] - Mode selection and dispatch
//! - [`difference`] - Lab ΔE difference maps
//! - `parallel` - Rayon band and multi-raster filtering (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use dichroma_core::RasterImage;
//! use dichroma_sim::Simulator;
//!
//! let capture = RasterImage::filled(320, 200, 0xffe0a040);
//!
//! let mut sim = Simulator::new();
//! sim.select_mode("deuteranopia")?;
//! let simulated = sim.transform(capture);
//! assert_eq!(simulated.dimensions(), (320, 200));
//! # Ok::<(), dichroma_sim::SimError>(())
//! ```
//!
//! # Concurrency
//!
//! Filtering is synchronous and runs to completion on the calling thread.
//! Gamma tables are immutable statics; filters carry no mutable state, so
//! any number of rasters may be filtered concurrently.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod difference;
pub mod filter;
pub mod mode;
pub mod simulator;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::filter_many;

pub use dichroma_core::RasterImage;
pub use difference::{difference_map, DELTA_E_THRESHOLD, MARKER};
pub use error::{SimError, SimResult};
pub use filter::RasterFilter;
pub use mode::Deficiency;
pub use simulator::Simulator;
pub use transform::{LumaScale, RedGreen, Transform, Tritan};
