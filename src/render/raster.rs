//! # Bitstring Rasterization
//!
//! Expands a scan-line [`Bitstring`] into a 1-bit pixel grid.
//!
//! ## Layout
//!
//! ```text
//!   ┌───────────────────────── border.top ──────────────────────────┐
//!   │        ┃ ┃ ┃┃  ┃ ┃┃┃ ┃ ┃ ┃ ┃┃ ┃┃ ┃ ┃┃ ┃ ┃ ┃┃                │
//!   │ border ┃ ┃ ┃┃  ┃ ┃┃┃ ┃ ┃ ┃ ┃┃ ┃┃ ┃ ┃┃ ┃ ┃ ┃┃ border         │ height rows
//!   │  .left ┃ ┃ ┃┃  ┃ ┃┃┃ ┃ ┃ ┃ ┃┃ ┃┃ ┃ ┃┃ ┃ ┃ ┃┃  .right        │
//!   │        ┃ ┃              ┃ ┃              ┃ ┃                │ notch rows
//!   └──────────────────────── border.bottom ────────────────────────┘
//! ```
//!
//! Every unit becomes `unit_width` identical pixels. In the notch rows only
//! the bars of the side and middle guards stay dark.

use crate::config::Borders;
use crate::error::{EanbarError, Result};
use crate::symbology::Bitstring;

/// Largest raster, in pixels, that [`rasterize`] and [`RasterBuffer::pad`]
/// will allocate.
pub const MAX_PIXELS: usize = 1 << 27;

/// Pixel count of a `width` x `height` raster, or an error when it overflows
/// or exceeds [`MAX_PIXELS`].
fn checked_area(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&area| area <= MAX_PIXELS)
        .ok_or_else(too_large)
}

fn too_large() -> EanbarError {
    EanbarError::InvalidInput("barcode dimensions too large".to_string())
}

/// Row-major 1-bit image. `true` = dark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl RasterBuffer {
    /// All-light buffer of the given size.
    ///
    /// Fails with [`EanbarError::InvalidInput`] above [`MAX_PIXELS`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let area = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![false; area],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, row after row.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Pixel at (x, y). Out of bounds reads as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x]
    }

    /// Set a pixel. Out of bounds writes are ignored.
    pub(crate) fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = dark;
        }
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= self.height()`. Use [`RasterBuffer::get`] for a
    /// lenient read.
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// A row as a `'0'`/`'1'` string.
    pub fn row_string(&self, y: usize) -> String {
        self.row(y).iter().map(|&d| if d { '1' } else { '0' }).collect()
    }

    /// Number of dark pixels.
    pub fn dark_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Copy of this buffer surrounded by light padding.
    pub fn pad(
        &self,
        left: usize,
        right: usize,
        top: usize,
        bottom: usize,
    ) -> Result<RasterBuffer> {
        let width = sum(&[left, self.width, right])?;
        let height = sum(&[top, self.height, bottom])?;
        let mut out = RasterBuffer::new(width, height)?;
        for y in 0..self.height {
            let dst = (top + y) * width + left;
            out.pixels[dst..dst + self.width].copy_from_slice(self.row(y));
        }
        Ok(out)
    }
}

/// Rasterize a bitstring.
///
/// Output size is `borders.left + bits.len() * unit_width + borders.right`
/// by `borders.top + height + notch_size + borders.bottom`. Zero unit width
/// or height, and any size that overflows or exceeds [`MAX_PIXELS`], fail
/// with [`EanbarError::InvalidInput`].
///
/// ```
/// use eanbar::config::Borders;
/// use eanbar::render::rasterize;
///
/// let bits = "101".parse()?;
/// let raster = rasterize(&bits, 2, 1, 0, Borders::default())?;
/// assert_eq!(raster.row_string(0), "110011");
/// # Ok::<(), eanbar::EanbarError>(())
/// ```
pub fn rasterize(
    bits: &Bitstring,
    unit_width: usize,
    height: usize,
    notch_size: usize,
    borders: Borders,
) -> Result<RasterBuffer> {
    if unit_width == 0 {
        return Err(EanbarError::InvalidInput(
            "unit width must be at least 1".to_string(),
        ));
    }
    if height == 0 {
        return Err(EanbarError::InvalidInput(
            "height must be at least 1".to_string(),
        ));
    }

    let bar_width = bits.len().checked_mul(unit_width).ok_or_else(too_large)?;
    let width = sum(&[borders.left, bar_width, borders.right])?;
    let total_height = sum(&[borders.top, height, notch_size, borders.bottom])?;
    let mut raster = RasterBuffer::new(width, total_height)?;

    let mut body_row = Vec::with_capacity(bar_width);
    let mut notch_row = Vec::with_capacity(bar_width);
    for (i, dark) in bits.iter().enumerate() {
        let notch_dark = dark && bits.is_guard(i);
        for _ in 0..unit_width {
            body_row.push(dark);
            notch_row.push(notch_dark);
        }
    }

    for y in 0..height + notch_size {
        let src = if y < height { &body_row } else { &notch_row };
        let dst = (borders.top + y) * width + borders.left;
        raster.pixels[dst..dst + bar_width].copy_from_slice(src);
    }

    Ok(raster)
}

fn sum(parts: &[usize]) -> Result<usize> {
    parts
        .iter()
        .try_fold(0usize, |acc, &p| acc.checked_add(p))
        .ok_or_else(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EAN8: &str = "1010001011010111101111010110111010101001110111001010001001011100101";

    fn bits(s: &str) -> Bitstring {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_trip_single_row() {
        let b = bits(EAN8);
        let r = rasterize(&b, 1, 1, 0, Borders::default()).unwrap();
        assert_eq!(r.width(), 67);
        assert_eq!(r.height(), 1);
        assert_eq!(r.row_string(0), EAN8);
    }

    #[test]
    fn test_unit_width_scales_each_unit() {
        let r = rasterize(&bits("1001"), 3, 1, 0, Borders::default()).unwrap();
        assert_eq!(r.row_string(0), "111000000111");
    }

    #[test]
    fn test_height_repeats_row() {
        let r = rasterize(&bits("10"), 1, 4, 0, Borders::default()).unwrap();
        assert_eq!(r.height(), 4);
        for y in 0..4 {
            assert_eq!(r.row_string(y), "10");
        }
    }

    #[test]
    fn test_notch_keeps_only_guard_bars() {
        let b = bits(EAN8);
        let r = rasterize(&b, 1, 2, 3, Borders::default()).unwrap();
        assert_eq!(r.height(), 5);
        let mut expected = vec!['0'; 67];
        for i in [0, 2, 32, 34, 64, 66] {
            expected[i] = '1';
        }
        let expected: String = expected.into_iter().collect();
        for y in 2..5 {
            assert_eq!(r.row_string(y), expected, "notch row {}", y);
        }
        assert_eq!(r.row_string(1), EAN8);
    }

    #[test]
    fn test_borders_are_light() {
        let borders = Borders {
            left: 2,
            right: 3,
            top: 1,
            bottom: 4,
        };
        let r = rasterize(&bits("11"), 1, 2, 0, borders).unwrap();
        assert_eq!(r.width(), 2 + 2 + 3);
        assert_eq!(r.height(), 1 + 2 + 4);
        assert_eq!(r.row_string(0), "0000000");
        assert_eq!(r.row_string(1), "0011000");
        assert_eq!(r.row_string(2), "0011000");
        for y in 3..7 {
            assert_eq!(r.row_string(y), "0000000");
        }
    }

    #[test]
    fn test_idempotent() {
        let b = bits(EAN8);
        let borders = Borders {
            left: 4,
            right: 4,
            top: 2,
            bottom: 2,
        };
        let a = rasterize(&b, 2, 10, 3, borders).unwrap();
        let c = rasterize(&b, 2, 10, 3, borders).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        let b = bits("101");
        assert!(matches!(
            rasterize(&b, 0, 1, 0, Borders::default()),
            Err(EanbarError::InvalidInput(_))
        ));
        assert!(matches!(
            rasterize(&b, 1, 0, 0, Borders::default()),
            Err(EanbarError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_pad() {
        let r = rasterize(&bits("1"), 1, 1, 0, Borders::default()).unwrap();
        let p = r.pad(1, 2, 1, 0).unwrap();
        assert_eq!((p.width(), p.height()), (4, 2));
        assert_eq!(p.row_string(0), "0000");
        assert_eq!(p.row_string(1), "0100");
        assert!(!p.get(10, 10));
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let b = bits("1");
        let huge = Borders {
            left: 1 << 30,
            ..Default::default()
        };
        assert!(matches!(
            rasterize(&b, 1, 1 << 40, 0, huge),
            Err(EanbarError::InvalidInput(_))
        ));
        assert!(matches!(
            rasterize(&b, usize::MAX, 1, 0, Borders::default()),
            Err(EanbarError::InvalidInput(_))
        ));
        assert!(matches!(
            rasterize(&b, 1, usize::MAX, 1, Borders::default()),
            Err(EanbarError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_more_than_max_pixels() {
        let b = bits("1");
        // Fits in usize but is far too big to allocate
        assert!(matches!(
            rasterize(&b, 1 << 20, 1 << 20, 0, Borders::default()),
            Err(EanbarError::InvalidInput(_))
        ));
        assert!(RasterBuffer::new(MAX_PIXELS + 1, 1).is_err());
        assert!(RasterBuffer::new(usize::MAX, 2).is_err());

        let r = rasterize(&b, 1, 1, 0, Borders::default()).unwrap();
        assert!(r.pad(0, 0, 0, MAX_PIXELS).is_err());
        assert!(r.pad(usize::MAX, 0, 0, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let r = rasterize(&bits("1"), 1, 1, 0, Borders::default()).unwrap();
        let _ = r.row(1);
    }
}
