//! # Image Output
//!
//! Converts a [`RasterBuffer`] into image containers and draws the
//! human-readable digits.
//!
//! ## Formats
//!
//! | Format | Writer |
//! |--------|--------|
//! | PBM (`.pbm`) | plain `P1` text, written directly |
//! | PNG and anything else `image` supports | [`image::GrayImage`] |
//!
//! ## Example
//!
//! ```
//! use eanbar::{Barcode, BarcodeOptions, preview};
//!
//! let barcode = Barcode::new("96385074", false)?;
//! let raster = barcode.render(&BarcodeOptions::default())?;
//!
//! let pbm = preview::to_pbm(&raster);
//! assert!(pbm.starts_with("P1\n"));
//!
//! let png = preview::to_png(&raster)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), eanbar::EanbarError>(())
//! ```

pub mod font;
pub mod text;

use std::fmt::Write as _;
use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::{EanbarError, Result};
use crate::render::RasterBuffer;

/// Output container for saved images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Pbm,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Pbm => "pbm",
        }
    }
}

/// Convert to an 8-bit grayscale image (dark = 0, light = 255).
pub fn to_gray_image(raster: &RasterBuffer) -> GrayImage {
    let mut img = GrayImage::new(raster.width() as u32, raster.height() as u32);
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let color = if raster.get(x, y) { 0u8 } else { 255u8 };
            img.put_pixel(x as u32, y as u32, Luma([color]));
        }
    }
    img
}

/// Encode as PNG bytes.
pub fn to_png(raster: &RasterBuffer) -> Result<Vec<u8>> {
    use image::ImageEncoder;

    let img = to_gray_image(raster);
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            img.as_raw(),
            raster.width() as u32,
            raster.height() as u32,
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| EanbarError::Image(e.to_string()))?;

    Ok(png_bytes)
}

/// Encode as plain PBM (`P1`), one text line per pixel row, `1` = dark.
pub fn to_pbm(raster: &RasterBuffer) -> String {
    let mut out = String::with_capacity((raster.width() + 1) * raster.height() + 32);
    out.push_str("P1\n# Barcode\n");
    // Writing to a String cannot fail
    let _ = writeln!(out, "{} {}", raster.width(), raster.height());
    for y in 0..raster.height() {
        out.push_str(&raster.row_string(y));
        out.push('\n');
    }
    out
}

/// Save to `path`, choosing the container from the file extension.
pub fn save(raster: &RasterBuffer, path: &Path) -> Result<()> {
    let is_pbm = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pbm"));

    if is_pbm {
        std::fs::write(path, to_pbm(raster))?;
        return Ok(());
    }

    to_gray_image(raster)
        .save(path)
        .map_err(|e| EanbarError::Image(format!("Failed to save {}: {}", path.display(), e)))
}
