//! Human-readable digits under the bars.
//!
//! ```text
//!   EAN-13                     UPC-A                      EAN-8
//!   ┃┃ ┃┃┃┃┃ ┃┃┃┃┃ ┃┃         ┃┃ ┃┃┃┃┃ ┃┃┃┃┃ ┃┃          ┃┃ ┃┃┃ ┃┃┃ ┃┃
//! 4 ┃┃ 006381 ┃┃ 333931 ┃┃   0 ┃┃ 36000 ┃┃ 29145 ┃┃ 2     ┃┃ 9638 ┃┃ 5074 ┃┃
//! ```
//!
//! Digits sit centred in their 7-unit cell, one unit below the bar body. The
//! EAN-13 leading digit and the UPC-A first and last digits go outside the
//! guards. The canvas grows with light pixels when they do not fit.

use super::font::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, digit_glyphs};
use crate::barcode::Barcode;
use crate::config::BarcodeOptions;
use crate::error::Result;
use crate::render::RasterBuffer;
use crate::symbology::Symbology;
use crate::symbology::tables::{DIGIT_WIDTH, MIDDLE_GUARD, SIDE_GUARD};

/// Where a digit is drawn, in units relative to the start of the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Left of the start guard
    OutsideLeft,
    /// Right of the end guard
    OutsideRight,
    /// Under the digit cell starting at this unit
    Cell(usize),
}

/// Digits and their slots for a barcode.
fn layout(barcode: &Barcode) -> Vec<(u8, Slot)> {
    let groups = barcode.groups();
    let half = barcode.symbology().half_width_digits();
    let left_start = SIDE_GUARD.len();
    let right_start = left_start + half * DIGIT_WIDTH + MIDDLE_GUARD.len();
    let left_cell = |i: usize| Slot::Cell(left_start + i * DIGIT_WIDTH);
    let right_cell = |i: usize| Slot::Cell(right_start + i * DIGIT_WIDTH);

    let mut out = Vec::with_capacity(barcode.symbology().digit_count());
    match barcode.symbology() {
        Symbology::Ean13 => {
            out.push((groups.leading(), Slot::OutsideLeft));
            out.extend(groups.left().iter().enumerate().map(|(i, &d)| (d, left_cell(i))));
            out.extend(groups.right().iter().enumerate().map(|(i, &d)| (d, right_cell(i))));
        }
        Symbology::UpcA => {
            let last = groups.right().len() - 1;
            out.push((groups.left()[0], Slot::OutsideLeft));
            out.extend(
                groups.left().iter().enumerate().skip(1).map(|(i, &d)| (d, left_cell(i))),
            );
            out.extend(
                groups.right().iter().enumerate().take(last).map(|(i, &d)| (d, right_cell(i))),
            );
            out.push((groups.right()[last], Slot::OutsideRight));
        }
        Symbology::Ean8 => {
            out.extend(groups.left().iter().enumerate().map(|(i, &d)| (d, left_cell(i))));
            out.extend(groups.right().iter().enumerate().map(|(i, &d)| (d, right_cell(i))));
        }
    }
    out
}

/// Draw the digits of `barcode` onto a copy of `raster`.
///
/// `raster` must come from [`Barcode::rasterize`] with the same options.
pub fn overlay(
    raster: &RasterBuffer,
    barcode: &Barcode,
    options: &BarcodeOptions,
) -> Result<RasterBuffer> {
    let unit = options.unit_width as usize;
    let borders = options.borders.resolve();
    let glyph_width = GLYPH_WIDTH * unit;
    let glyph_height = GLYPH_HEIGHT * unit;
    let bars_width = barcode.bits().len() * unit;

    let slots = layout(barcode);
    let has_left = slots.iter().any(|(_, s)| *s == Slot::OutsideLeft);
    let has_right = slots.iter().any(|(_, s)| *s == Slot::OutsideRight);

    // Outside digits need a glyph plus one unit of clearance
    let outside = glyph_width + unit;
    let grow_left = if has_left {
        outside.saturating_sub(borders.left)
    } else {
        0
    };
    let grow_right = if has_right {
        outside.saturating_sub(borders.right)
    } else {
        0
    };
    let text_top = borders.top + options.height as usize + unit;
    let grow_bottom = (text_top + glyph_height).saturating_sub(raster.height());

    let mut canvas = raster.pad(grow_left, grow_right, 0, grow_bottom)?;
    let bars_x = grow_left + borders.left;
    let glyphs = digit_glyphs(unit)?;
    let cell_offset = (DIGIT_WIDTH * unit - glyph_width) / 2;

    for (digit, slot) in slots {
        let x = match slot {
            Slot::OutsideLeft => bars_x - outside,
            Slot::OutsideRight => bars_x + bars_width + unit,
            Slot::Cell(start) => bars_x + start * unit + cell_offset,
        };
        draw_glyph(&mut canvas, &glyphs[digit as usize], x, text_top);
    }

    Ok(canvas)
}

fn draw_glyph(canvas: &mut RasterBuffer, glyph: &Glyph, x: usize, y: usize) {
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            if glyph.get(gx, gy) {
                canvas.set(x + gx, y + gy, true);
            }
        }
    }
}
