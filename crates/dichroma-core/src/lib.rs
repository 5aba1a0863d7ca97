//! # dichroma-core
//!
//! Core types shared by every dichroma crate.
//!
//! - [`RasterImage`] - Row-major buffer of packed 32-bit ARGB pixels
//! - [`pixel`] - Packing helpers and luminance weights for 8-bit ARGB
//! - [`Error`] - Unified error type for raster operations
//!
//! ## Crate Structure
//!
//! ```text
//! dichroma-core (this crate)
//!    ^
//!    |
//!    +-- dichroma-transfer (gamma tables, Lab helpers)
//!    +-- dichroma-sim (transforms, raster filter, simulator)
//!    +-- dichroma-cli (file based front end)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dichroma_core::{pixel, RasterImage};
//!
//! let img = RasterImage::filled(4, 2, pixel::argb(255, 200, 10, 10));
//! assert_eq!(img.dimensions(), (4, 2));
//! assert_eq!(pixel::red(img.pixel(3, 1)), 200);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;

pub use error::*;
pub use raster::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{argb, rgb, OPAQUE};
    pub use crate::raster::RasterImage;
}
