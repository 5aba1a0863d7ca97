//! Packed 8-bit ARGB pixel helpers.
//!
//! A pixel is a `u32` laid out as `0xAARRGGBB`: alpha in the top byte,
//! then red, green and blue. This matches the integer layout used by most
//! screen capture APIs, so captured buffers can be filtered in place
//! without repacking.

/// Alpha mask for a fully opaque pixel.
pub const OPAQUE: u32 = 0xff00_0000;

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Packs four channels into one ARGB pixel.
///
/// # Example
///
/// ```rust
/// use dichroma_core::pixel::argb;
///
/// assert_eq!(argb(0x80, 0x12, 0x34, 0x56), 0x8012_3456);
/// ```
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Packs an opaque pixel.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    argb(0xff, r, g, b)
}

/// Alpha channel of a packed pixel.
#[inline]
pub const fn alpha(px: u32) -> u8 {
    (px >> 24) as u8
}

/// Red channel of a packed pixel.
#[inline]
pub const fn red(px: u32) -> u8 {
    (px >> 16) as u8
}

/// Green channel of a packed pixel.
#[inline]
pub const fn green(px: u32) -> u8 {
    (px >> 8) as u8
}

/// Blue channel of a packed pixel.
#[inline]
pub const fn blue(px: u32) -> u8 {
    px as u8
}

/// Splits a pixel into `[r, g, b]`, dropping alpha.
#[inline]
pub const fn to_rgb(px: u32) -> [u8; 3] {
    [red(px), green(px), blue(px)]
}

/// Splits a pixel into `[r, g, b, a]`.
///
/// Channel order matches `image::Rgba`, which is what file codecs hand out.
#[inline]
pub const fn to_rgba(px: u32) -> [u8; 4] {
    [red(px), green(px), blue(px), alpha(px)]
}

/// Packs `[r, g, b, a]` into an ARGB pixel.
#[inline]
pub const fn from_rgba(c: [u8; 4]) -> u32 {
    argb(c[3], c[0], c[1], c[2])
}

/// Returns `true` if the pixel has full opacity.
#[inline]
pub const fn is_opaque(px: u32) -> bool {
    px & OPAQUE == OPAQUE
}
