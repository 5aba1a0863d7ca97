//! Integer CIE Lab for difference maps.
//!
//! Converts packed sRGB pixels to Lab relative to a D50 white, with the
//! quantization the difference map was tuned against:
//!
//! - Channels are decoded with the sRGB power segment, but the toe below
//!   0.04045 divides by 12 rather than 12.92.
//! - L is scaled by 2.55 so it spans 0..=255; a and b stay in Lab units.
//! - All three components are rounded by adding 0.5 and truncating.
//!
//! Arithmetic is single precision except where the power function is
//! evaluated, matching the reference output bit for bit.
//!
//! # Reference
//!
//! Bruce Lindbloom, RGB/XYZ matrices and XYZ to Lab
//! <http://www.brucelindbloom.com>

use dichroma_core::pixel;

/// D50 reference white.
const WHITE_X: f32 = 0.964221;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 0.825211;

/// sRGB (D50 adapted) to XYZ.
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.436052025, 0.385081593, 0.143087414],
    [0.222491598, 0.71688606, 0.060621486],
    [0.013929122, 0.097097002, 0.71418547],
];

#[inline]
fn decode(channel: u8) -> f32 {
    let v = channel as f32 / 255.0;
    if (v as f64) <= 0.04045 {
        v / 12.0
    } else {
        ((v as f64 + 0.055) / 1.055).powf(2.4) as f32
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    let eps = 216.0f32 / 24389.0;
    let kappa = 24389.0f32 / 27.0;
    if t > eps {
        (t as f64).powf(1.0 / 3.0) as f32
    } else {
        (((kappa * t) as f64 + 16.0) / 116.0) as f32
    }
}

/// Converts an ARGB pixel to `[L*2.55, a, b]`, ignoring alpha.
///
/// # Example
///
/// ```rust
/// use dichroma_transfer::lab::srgb_to_lab;
///
/// assert_eq!(srgb_to_lab(0xffffffff), [255, 0, 0]);
/// assert_eq!(srgb_to_lab(0xff000000), [0, 0, 0]);
/// ```
pub fn srgb_to_lab(px: u32) -> [i32; 3] {
    let [r, g, b] = pixel::to_rgb(px).map(decode);

    let m = &RGB_TO_XYZ;
    let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;

    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y / WHITE_Y);
    let fz = lab_f(z / WHITE_Z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let bb = 200.0 * (fy - fz);

    [
        (2.55 * l as f64 + 0.5) as i32,
        (a as f64 + 0.5) as i32,
        (bb as f64 + 0.5) as i32,
    ]
}

/// Euclidean distance between two integer Lab triples.
pub fn delta_e(a: [i32; 3], b: [i32; 3]) -> f64 {
    let dl = (a[0] - b[0]) as f64;
    let da = (a[1] - b[1]) as f64;
    let db = (a[2] - b[2]) as f64;
    (dl * dl + da * da + db * db).sqrt()
}
