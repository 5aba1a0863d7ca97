//! Gamma lookup tables.
//!
//! Two fixed 256-entry tables convert between 8-bit display values and the
//! integer linear space the simulation runs in.
//!
//! ## Forward (decode)
//!
//! ```text
//! lin = 0.992052 * (v / 255)^2.2 + 0.003974
//! table[v] = trunc(lin * 32767)
//! ```
//!
//! The offset lifts black slightly above zero, approximating the response
//! of a real sRGB display. Output range: 130..=32636.
//!
//! ## Inverse (encode)
//!
//! ```text
//! table[i] = trunc(255 * (i / 255)^(1/2.2))
//! ```
//!
//! Indexed by a linear intensity bucket already reduced to 0..=255.
//!
//! Both tables are built once per process and shared read-only between
//! threads.

use std::sync::OnceLock;

/// Display gamma exponent.
pub const GAMMA: f64 = 2.2;

/// Reciprocal of [`GAMMA`], used by the inverse table.
pub const GAMMA_INV: f64 = 1.0 / GAMMA;

/// Gain applied to the power curve before the black offset.
pub const LINEAR_GAIN: f64 = 0.992052;

/// Black offset added to the forward curve.
pub const LINEAR_OFFSET: f64 = 0.003974;

/// Full scale of the linear integer space (15 bits).
pub const LINEAR_MAX: i32 = 32767;

static TABLES: OnceLock<GammaTables> = OnceLock::new();

/// Forward and inverse gamma lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTables {
    forward: [u16; 256],
    inverse: [u8; 256],
}

impl GammaTables {
    /// Computes both tables from the closed-form curves.
    ///
    /// Prefer [`tables`], which builds them once and caches the result.
    pub fn build() -> Self {
        let mut forward = [0u16; 256];
        let mut inverse = [0u8; 256];
        for i in 0..256 {
            let v = i as f64 / 255.0;
            let lin = LINEAR_GAIN * v.powf(GAMMA) + LINEAR_OFFSET;
            forward[i] = (lin * LINEAR_MAX as f64) as u16;
            inverse[i] = (255.0 * v.powf(GAMMA_INV)) as u8;
        }
        Self { forward, inverse }
    }

    /// 8-bit encoded channel to linear intensity in 0..=32767.
    #[inline]
    pub fn linearize(&self, channel: u8) -> i32 {
        self.forward[channel as usize] as i32
    }

    /// Linear bucket in 0..=255 to 8-bit encoded channel.
    #[inline]
    pub fn delinearize(&self, bucket: u8) -> u8 {
        self.inverse[bucket as usize]
    }

    /// Clamps `value` into 0..=255, then encodes it.
    ///
    /// Transforms produce signed intermediates; this is the only safe way
    /// to feed them to the inverse table.
    #[inline]
    pub fn delinearize_clamped(&self, value: i32) -> u8 {
        self.delinearize(value.clamp(0, 255) as u8)
    }

    /// Raw forward table.
    pub fn forward(&self) -> &[u16; 256] {
        &self.forward
    }

    /// Raw inverse table.
    pub fn inverse(&self) -> &[u8; 256] {
        &self.inverse
    }
}

/// Returns the process-wide tables, building them on first use.
#[inline]
pub fn tables() -> &'static GammaTables {
    TABLES.get_or_init(GammaTables::build)
}

/// Decodes an 8-bit channel to linear intensity (0..=32767).
///
/// # Example
///
/// ```rust
/// use dichroma_transfer::gamma::linearize;
///
/// assert_eq!(linearize(0), 130);
/// assert_eq!(linearize(128), 7266);
/// ```
#[inline]
pub fn linearize(channel: u8) -> i32 {
    tables().linearize(channel)
}

/// Encodes a linear bucket (0..=255) to an 8-bit channel.
///
/// # Example
///
/// ```rust
/// use dichroma_transfer::gamma::delinearize;
///
/// assert_eq!(delinearize(0), 0);
/// assert_eq!(delinearize(128), 186);
/// ```
#[inline]
pub fn delinearize(bucket: u8) -> u8 {
    tables().delinearize(bucket)
}

/// Clamps a signed linear value into 0..=255 and encodes it.
#[inline]
pub fn delinearize_clamped(value: i32) -> u8 {
    tables().delinearize_clamped(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_known_values() {
        let t = tables();
        assert_eq!(t.linearize(0), 130);
        assert_eq!(t.linearize(2), 130);
        assert_eq!(t.linearize(3), 132);
        assert_eq!(t.linearize(64), 1683);
        assert_eq!(t.linearize(200), 19178);
        assert_eq!(t.linearize(254), 32356);
        assert_eq!(t.linearize(255), 32636);
    }

    #[test]
    fn test_inverse_known_values() {
        let t = tables();
        assert_eq!(t.delinearize(0), 0);
        assert_eq!(t.delinearize(1), 20);
        assert_eq!(t.delinearize(2), 28);
        assert_eq!(t.delinearize(64), 136);
        assert_eq!(t.delinearize(200), 228);
        assert_eq!(t.delinearize(254), 254);
        assert_eq!(t.delinearize(255), 255);
    }

    #[test]
    fn test_tables_monotonic() {
        let t = tables();
        assert!(t.forward().windows(2).all(|w| w[0] <= w[1]));
        assert!(t.inverse().windows(2).all(|w| w[0] <= w[1]));
        assert!(t.forward().iter().all(|&v| v as i32 <= LINEAR_MAX));
    }

    #[test]
    fn test_clamped_saturates() {
        assert_eq!(delinearize_clamped(-5000), 0);
        assert_eq!(delinearize_clamped(256), 255);
        assert_eq!(delinearize_clamped(1 << 20), 255);
        assert_eq!(delinearize_clamped(128), delinearize(128));
    }

    #[test]
    fn test_cached_tables_match_fresh_build() {
        assert_eq!(tables(), &GammaTables::build());
        assert!(std::ptr::eq(tables(), tables()));
    }

    #[test]
    fn test_tables_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| tables() as *const GammaTables as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
