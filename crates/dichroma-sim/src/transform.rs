//! Per-pixel colorimetric transforms.
//!
//! Each [`Transform`] maps one packed ARGB pixel to one opaque ARGB pixel.
//! All variants share the same skeleton:
//!
//! ```text
//! 8-bit RGB --linearize--> 15-bit linear --model--> 8-bit linear --delinearize--> 8-bit RGB
//! ```
//!
//! Input alpha is ignored and output alpha is always 255.
//!
//! # Variants
//!
//! - [`RedGreen`] - Vienot/Brettel/Mollon projection for protanopes and
//!   deuteranopes, evaluated in fixed point. Output red equals output green.
//! - [`Tritan`] - Brettel/Vienot/Mollon half-plane model for tritanopes,
//!   evaluated in LMS cone space in single precision.
//! - Grayscale - Rec.709 luminance replicated over R, G and B.
//!
//! # Reference
//!
//! Vienot, F., Brettel, H., Mollon, J.D. (1999). Digital video colourmaps
//! for checking the legibility of displays by dichromats. Color Research and
//! Application 24, 243-252.
//!
//! Brettel, H., Vienot, F., Mollon, J.D. (1997). Computerized simulation of
//! color appearance for dichromats. JOSA A 14(10), 2647-2655.

use dichroma_core::pixel::{self, OPAQUE, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
use dichroma_transfer::GammaTables;

use crate::Deficiency;

/// Fixed-point shift for the red-green model.
///
/// Coefficients are scaled by 2^15 and linear values span 2^15; dividing by
/// 2^30 and multiplying by 2^8 to land in 0..=255 is a shift by 22.
const RED_GREEN_SHIFT: u32 = 22;

/// Linear RGB (15-bit) to LMS cone response, rows L, M, S.
const RGB_TO_LMS: [[f32; 3]; 3] = [
    [0.05059983, 0.08585369, 0.00952420],
    [0.01893033, 0.08925308, 0.01370054],
    [0.00292202, 0.00975732, 0.07145979],
];

/// LMS back to linear RGB (0..1), rows R, G, B.
const LMS_TO_RGB: [[f32; 3]; 3] = [
    [30.830854, -29.832659, 1.610474],
    [-6.481468, 17.715578, -2.532642],
    [-0.375690, -1.199062, 14.273846],
];

/// LMS response of the 475 nm anchor stimulus.
const ANCHOR_475: [f32; 3] = [0.1284, 0.2237, 0.3636];

/// LMS response of the 660 nm anchor stimulus.
const ANCHOR_660: [f32; 3] = [0.0914, 0.007009, 0.0];

/// How grayscale luminance is reduced from 15-bit to an 8-bit bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LumaScale {
    /// Shift right by 8. Bit-compatible with existing renderings; maps
    /// full white to bucket 127, so the result is about one stop darker.
    #[default]
    Legacy,
    /// Multiply by 255/32767, so full white lands on bucket 253.
    Full,
}

/// Red-green dichromat model (deuteranopia and protanopia).
///
/// The three coefficients are the projection matrix entries pre-scaled by
/// 2^15. With linear inputs `r`, `g`, `b` in 0..=32767:
///
/// ```text
/// red = green = (k1*r + k2*g) >> 22
/// blue        = (k3*r - k3*g + 32768*b) >> 22
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedGreen {
    k1: i32,
    k2: i32,
    k3: i32,
}

impl RedGreen {
    /// Deuteranopia coefficients.
    pub const DEUTERANOPIA: RedGreen = RedGreen::new(9591, 23173, -730);

    /// Protanopia coefficients.
    pub const PROTANOPIA: RedGreen = RedGreen::new(3683, 29084, 131);

    /// Creates a model from pre-scaled coefficients.
    pub const fn new(k1: i32, k2: i32, k3: i32) -> Self {
        Self { k1, k2, k3 }
    }

    /// Returns `(k1, k2, k3)`.
    pub const fn coefficients(&self) -> (i32, i32, i32) {
        (self.k1, self.k2, self.k3)
    }

    #[inline]
    fn apply(&self, t: &GammaTables, px: u32) -> u32 {
        let r = t.linearize(pixel::red(px)) as i64;
        let g = t.linearize(pixel::green(px)) as i64;
        let b = t.linearize(pixel::blue(px)) as i64;
        let (k1, k2, k3) = (self.k1 as i64, self.k2 as i64, self.k3 as i64);

        // arithmetic shift floors negative sums; clamp afterwards
        let r_blind = (k1 * r + k2 * g) >> RED_GREEN_SHIFT;
        let b_blind = (k3 * r - k3 * g + 32768 * b) >> RED_GREEN_SHIFT;

        let red = t.delinearize_clamped(clamp_i64(r_blind));
        let blue = t.delinearize_clamped(clamp_i64(b_blind));
        pixel::rgb(red, red, blue)
    }
}

#[inline]
fn clamp_i64(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Tritan dichromat model.
///
/// The missing S cone response is reconstructed from L and M on one of two
/// half-planes through the neutral axis. The plane is picked by comparing
/// the pixel's M/L ratio against the ratio of the neutral stimulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tritan {
    inflection: f32,
    /// Plane through neutral and the 660 nm anchor.
    long: [f32; 3],
    /// Plane through neutral and the 475 nm anchor.
    short: [f32; 3],
}

impl Default for Tritan {
    fn default() -> Self {
        Self::new()
    }
}

impl Tritan {
    /// Derives plane coefficients from the anchor constants.
    pub fn new() -> Self {
        // LMS of equal-energy white: row sums of RGB_TO_LMS
        let neutral = RGB_TO_LMS.map(|row| row[0] + row[1] + row[2]);
        Self {
            inflection: neutral[1] / neutral[0],
            long: cross(neutral, ANCHOR_660),
            short: cross(neutral, ANCHOR_475),
        }
    }

    /// M/L ratio separating the two half-planes.
    pub fn inflection(&self) -> f32 {
        self.inflection
    }

    #[inline]
    fn apply(&self, t: &GammaTables, px: u32) -> u32 {
        let r = t.linearize(pixel::red(px)) as f32;
        let g = t.linearize(pixel::green(px)) as f32;
        let b = t.linearize(pixel::blue(px)) as f32;

        let m = &RGB_TO_LMS;
        let l_cone = (r * m[0][0] + g * m[0][1] + b * m[0][2]) / 32767.0;
        let m_cone = (r * m[1][0] + g * m[1][1] + b * m[1][2]) / 32767.0;

        let [a, b_coef, c] = if m_cone / l_cone < self.inflection {
            self.long
        } else {
            self.short
        };
        let s_cone = -(a * l_cone + b_coef * m_cone) / c;

        let inv = &LMS_TO_RGB;
        let channel = |row: &[f32; 3]| {
            let lin = (255.0 * (l_cone * row[0] + m_cone * row[1] + s_cone * row[2])) as i32;
            t.delinearize_clamped(lin)
        };
        pixel::rgb(channel(&inv[0]), channel(&inv[1]), channel(&inv[2]))
    }
}

/// Cross product `e x anchor`, giving the plane `a*L + b*M + c*S = 0`.
fn cross(e: [f32; 3], anchor: [f32; 3]) -> [f32; 3] {
    [
        e[1] * anchor[2] - e[2] * anchor[1],
        e[2] * anchor[0] - e[0] * anchor[2],
        e[0] * anchor[1] - e[1] * anchor[0],
    ]
}

#[inline]
fn grayscale(t: &GammaTables, scale: LumaScale, px: u32) -> u32 {
    let r = t.linearize(pixel::red(px)) as f64;
    let g = t.linearize(pixel::green(px)) as f64;
    let b = t.linearize(pixel::blue(px)) as f64;

    let luminance = REC709_LUMA_R * r + REC709_LUMA_G * g + REC709_LUMA_B * b;
    let bucket = match scale {
        LumaScale::Legacy => (luminance as i32) >> 8,
        LumaScale::Full => (luminance * 255.0 / 32767.0) as i32,
    };
    let v = t.delinearize_clamped(bucket);
    pixel::rgb(v, v, v)
}

/// A colorimetric transform for one non-normal mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Deuteranopia or protanopia.
    RedGreen(RedGreen),
    /// Tritanopia.
    Tritan(Tritan),
    /// Luminance only.
    Grayscale(LumaScale),
}

impl Transform {
    /// Deuteranopia transform.
    pub fn deuteranopia() -> Self {
        Transform::RedGreen(RedGreen::DEUTERANOPIA)
    }

    /// Protanopia transform.
    pub fn protanopia() -> Self {
        Transform::RedGreen(RedGreen::PROTANOPIA)
    }

    /// Tritanopia transform.
    pub fn tritanopia() -> Self {
        Transform::Tritan(Tritan::new())
    }

    /// Grayscale transform with the legacy luminance scale.
    pub fn grayscale() -> Self {
        Transform::Grayscale(LumaScale::Legacy)
    }

    /// Transform for `mode`, or `None` for [`Deficiency::Normal`].
    pub fn for_mode(mode: Deficiency, luma: LumaScale) -> Option<Self> {
        match mode {
            Deficiency::Normal => None,
            Deficiency::Deuteranopia => Some(Self::deuteranopia()),
            Deficiency::Protanopia => Some(Self::protanopia()),
            Deficiency::Tritanopia => Some(Self::tritanopia()),
            Deficiency::Grayscale => Some(Transform::Grayscale(luma)),
        }
    }

    /// Transforms one pixel using the given tables.
    #[inline]
    pub fn apply_with(&self, tables: &GammaTables, px: u32) -> u32 {
        let out = match self {
            Transform::RedGreen(rg) => rg.apply(tables, px),
            Transform::Tritan(tr) => tr.apply(tables, px),
            Transform::Grayscale(scale) => grayscale(tables, *scale, px),
        };
        out | OPAQUE
    }

    /// Transforms one pixel using the process-wide tables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dichroma_sim::Transform;
    ///
    /// let out = Transform::deuteranopia().apply(0xffff0000);
    /// assert_eq!(out, 0xff929200);
    /// ```
    #[inline]
    pub fn apply(&self, px: u32) -> u32 {
        self.apply_with(dichroma_transfer::tables(), px)
    }
}
