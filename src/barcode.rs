//! # Barcode
//!
//! Ties the symbology pipeline and the rasterizer together.
//!
//! ```
//! use eanbar::{Barcode, BarcodeOptions, Symbology};
//!
//! let barcode = Barcode::new("4006381333931", false)?;
//! assert_eq!(barcode.symbology(), Symbology::Ean13);
//!
//! let options = BarcodeOptions::default().text(false).notch_size(0);
//! let raster = barcode.render(&options)?;
//! assert_eq!(raster.width(), 95);
//! assert_eq!(raster.height(), 50);
//! # Ok::<(), eanbar::EanbarError>(())
//! ```

use crate::config::BarcodeOptions;
use crate::error::Result;
use crate::preview::text;
use crate::render::{RasterBuffer, rasterize};
use crate::symbology::{Bitstring, DigitGroups, NumericCode, Symbology, checksum, encode};

/// A checked, classified and encoded code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    code: NumericCode,
    symbology: Symbology,
    groups: DigitGroups,
    bits: Bitstring,
}

impl Barcode {
    /// Parse, check and encode a code given as text.
    pub fn new(code: &str, correct: bool) -> Result<Self> {
        let code: NumericCode = code.parse()?;
        Self::from_code(&code, correct)
    }

    /// Check and encode an already parsed code.
    pub fn from_code(code: &NumericCode, correct: bool) -> Result<Self> {
        let code = checksum::validate_or_correct(code, correct)?;
        let symbology = Symbology::classify(&code)?;
        let groups = DigitGroups::group(&code, symbology)?;
        let bits = encode::assemble(&groups, symbology);
        Ok(Self {
            code,
            symbology,
            groups,
            bits,
        })
    }

    /// The code as encoded, check digit corrected if requested.
    pub fn code(&self) -> &NumericCode {
        &self.code
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn groups(&self) -> &DigitGroups {
        &self.groups
    }

    pub fn bits(&self) -> &Bitstring {
        &self.bits
    }

    /// Bars only: body, notches and borders.
    pub fn rasterize(&self, options: &BarcodeOptions) -> Result<RasterBuffer> {
        options.validate()?;
        rasterize(
            &self.bits,
            options.unit_width as usize,
            options.height as usize,
            options.notch(),
            options.borders.resolve(),
        )
    }

    /// Bars plus human-readable digits when `options.text` is set.
    pub fn render(&self, options: &BarcodeOptions) -> Result<RasterBuffer> {
        let raster = self.rasterize(options)?;
        if !options.text {
            return Ok(raster);
        }
        text::overlay(&raster, self, options)
    }
}
