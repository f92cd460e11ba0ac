//! # Barcode Options
//!
//! Rendering configuration for a barcode image.
//!
//! ## Sources
//!
//! Options can be built in code, loaded from JSON, or both. The CLI loads an
//! optional JSON file first and then applies its own flags on top.
//!
//! ```json
//! {
//!   "unit_width": 3,
//!   "height": 120,
//!   "borders": { "all": 12, "bottom": 4 },
//!   "correct": true
//! }
//! ```
//!
//! ## Geometry
//!
//! | Option | Pixels |
//! |--------|--------|
//! | `unit_width` | width of one unit (default 1) |
//! | `height` | bar body height (default 50) |
//! | `notch_size` | guard extension below the body |
//! | `borders` | light padding per edge (default 0) |
//!
//! The notch defaults to half the height of the human-readable text, whether
//! or not text is drawn.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EanbarError, Result};
use crate::preview::font::GLYPH_HEIGHT;

/// Default bar height in pixels.
pub const DEFAULT_HEIGHT: u32 = 50;

/// Light padding around the barcode, in pixels.
///
/// `all` applies to every edge that has no override of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderSpec {
    pub all: u32,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

/// Border sizes after overrides have been applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Borders {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl BorderSpec {
    /// Same border on every edge.
    pub fn uniform(all: u32) -> Self {
        Self {
            all,
            ..Default::default()
        }
    }

    /// Apply per-edge overrides over the global value.
    ///
    /// ```
    /// use eanbar::config::BorderSpec;
    ///
    /// let spec = BorderSpec { all: 10, left: Some(2), ..Default::default() };
    /// let b = spec.resolve();
    /// assert_eq!((b.left, b.right, b.top, b.bottom), (2, 10, 10, 10));
    /// ```
    pub fn resolve(&self) -> Borders {
        let edge = |v: Option<u32>| v.unwrap_or(self.all) as usize;
        Borders {
            left: edge(self.left),
            right: edge(self.right),
            top: edge(self.top),
            bottom: edge(self.bottom),
        }
    }
}

/// Everything needed to turn a code into an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarcodeOptions {
    /// Pixels per unit (narrowest bar). Must be positive.
    pub unit_width: u32,
    /// Height of the bar body in pixels. Must be positive.
    pub height: u32,
    /// Guard extension below the body. `None` = half the text height.
    pub notch_size: Option<u32>,
    pub borders: BorderSpec,
    /// Replace the check digit instead of rejecting a wrong one.
    pub correct: bool,
    /// Draw human-readable digits under the bars.
    pub text: bool,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            unit_width: 1,
            height: DEFAULT_HEIGHT,
            notch_size: None,
            borders: BorderSpec::default(),
            correct: false,
            text: true,
        }
    }
}

impl BarcodeOptions {
    pub fn unit_width(mut self, unit_width: u32) -> Self {
        self.unit_width = unit_width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn notch_size(mut self, notch_size: u32) -> Self {
        self.notch_size = Some(notch_size);
        self
    }

    pub fn borders(mut self, borders: BorderSpec) -> Self {
        self.borders = borders;
        self
    }

    pub fn correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    pub fn text(mut self, text: bool) -> Self {
        self.text = text;
        self
    }

    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| EanbarError::InvalidInput(format!("bad options JSON: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject zero unit width or height.
    pub fn validate(&self) -> Result<()> {
        if self.unit_width == 0 {
            return Err(EanbarError::InvalidInput(
                "unit_width must be at least 1".to_string(),
            ));
        }
        if self.height == 0 {
            return Err(EanbarError::InvalidInput(
                "height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Height of the human-readable digits in pixels.
    pub fn text_height(&self) -> usize {
        GLYPH_HEIGHT * self.unit_width as usize
    }

    /// Effective notch size in pixels.
    pub fn notch(&self) -> usize {
        match self.notch_size {
            Some(n) => n as usize,
            None => self.text_height() / 2,
        }
    }
}
