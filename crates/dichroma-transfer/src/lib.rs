//! # dichroma-transfer
//!
//! Transfer functions used by the color vision simulation.
//!
//! The simulation works on 8-bit display values but its colorimetric math
//! must happen on linear light. Both directions are table driven:
//!
//! | Direction | Input | Output | Function |
//! |-----------|-------|--------|----------|
//! | Decode | 8-bit gamma encoded channel | 15-bit linear intensity (0..32767) | [`linearize`] |
//! | Encode | 8-bit linear bucket (0..255) | 8-bit gamma encoded channel | [`delinearize`] |
//!
//! The curves approximate an sRGB display with a plain gamma of 2.2 and a
//! small black offset; see [`gamma`] for the exact formulas.
//!
//! [`lab`] converts packed pixels to integer CIE Lab for perceptual
//! difference maps.
//!
//! # Usage
//!
//! ```rust
//! use dichroma_transfer::{delinearize, linearize};
//!
//! assert_eq!(linearize(255), 32636);
//! assert_eq!(delinearize(255), 255);
//! ```
//!
//! # Dependencies
//!
//! - [`dichroma-core`] - Pixel helpers
//!
//! # Used By
//!
//! - `dichroma-sim` - Colorimetric transforms and difference maps

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod lab;

pub use gamma::{delinearize, delinearize_clamped, linearize, tables, GammaTables};
pub use lab::{delta_e, srgb_to_lab};
