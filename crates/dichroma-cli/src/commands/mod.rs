//! CLI command implementations

pub mod batch;
pub mod diff;
pub mod modes;
pub mod simulate;

use anyhow::{anyhow, Context, Result};
use dichroma_core::{pixel, RasterImage};
use dichroma_sim::{Deficiency, LumaScale, Simulator};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Load an image file as a packed ARGB raster
pub fn load_raster(path: &Path) -> Result<RasterImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let data = img.pixels().map(|p| pixel::from_rgba(p.0)).collect();
    Ok(RasterImage::from_pixels(width, height, data)?)
}

/// Save a packed ARGB raster; formats without alpha get RGB
pub fn save_raster(path: &Path, raster: &RasterImage) -> Result<()> {
    let bytes: Vec<u8> = raster.pixels().iter().flat_map(|&p| pixel::to_rgba(p)).collect();
    let rgba = RgbaImage::from_raw(raster.width(), raster.height(), bytes)
        .ok_or_else(|| anyhow!("raster buffer does not match {}x{}", raster.width(), raster.height()))?;

    let img = DynamicImage::ImageRgba8(rgba);
    let img = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };
    img.save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Build a simulator for `mode`
pub fn simulator(mode: Deficiency, full_range_gray: bool) -> Simulator {
    let luma = if full_range_gray { LumaScale::Full } else { LumaScale::Legacy };
    Simulator::with_mode(mode).with_luma_scale(luma)
}
