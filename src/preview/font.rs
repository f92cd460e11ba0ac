//! Digit glyphs for the human-readable line.
//!
//! Uses the Spleen 6x12 bitmap font, scaled by an integer factor with
//! nearest neighbor so glyphs stay 1-bit.

use spleen_font::{FONT_6X12, PSF2Font};

use crate::error::{EanbarError, Result};

/// Unscaled glyph width in pixels.
pub const GLYPH_WIDTH: usize = 6;

/// Unscaled glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 12;

/// A scaled 1-bit glyph, row-major, `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<bool>,
}

impl Glyph {
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y * self.width + x]
    }
}

/// Glyphs for the digits 0-9 at the given scale, indexed by digit.
pub fn digit_glyphs(scale: usize) -> Result<Vec<Glyph>> {
    let mut spleen = PSF2Font::new(FONT_6X12)
        .map_err(|_| EanbarError::Image("failed to load Spleen 6x12 font".to_string()))?;

    let mut glyphs = Vec::with_capacity(10);
    for digit in 0..10u8 {
        let ch = (b'0' + digit) as char;
        let utf8_bytes = ch.to_string();

        let mut src = vec![false; GLYPH_WIDTH * GLYPH_HEIGHT];
        if let Some(spleen_glyph) = spleen.glyph_for_utf8(utf8_bytes.as_bytes()) {
            for (row_y, row) in spleen_glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < GLYPH_HEIGHT && col_x < GLYPH_WIDTH {
                        src[row_y * GLYPH_WIDTH + col_x] = on;
                    }
                }
            }
        } else {
            draw_box(&mut src, GLYPH_WIDTH, GLYPH_HEIGHT);
        }

        glyphs.push(scale_glyph(&src, scale));
    }
    Ok(glyphs)
}

/// Integer upscale with nearest neighbor.
fn scale_glyph(src: &[bool], scale: usize) -> Glyph {
    let scale = scale.max(1);
    let width = GLYPH_WIDTH * scale;
    let height = GLYPH_HEIGHT * scale;
    let mut pixels = vec![false; width * height];
    for dy in 0..height {
        for dx in 0..width {
            pixels[dy * width + dx] = src[(dy / scale) * GLYPH_WIDTH + dx / scale];
        }
    }
    Glyph {
        width,
        height,
        pixels,
    }
}

/// Box outline for a missing glyph.
fn draw_box(glyph: &mut [bool], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = true;
        glyph[(height - 1) * width + x] = true;
    }
    for y in 0..height {
        glyph[y * width] = true;
        glyph[y * width + width - 1] = true;
    }
}
