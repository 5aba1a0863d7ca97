//! Error types for simulation operations.

use thiserror::Error;

/// Error type for simulation operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Mode name is not one of the five supported modes.
    #[error("invalid mode: '{0}' (expected normal, deuteranopia, protanopia, tritanopia or grayscale)")]
    InvalidMode(String),

    /// Raster contract violation (shape or buffer size).
    #[error(transparent)]
    Core(#[from] dichroma_core::Error),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
