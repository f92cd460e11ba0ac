//! # UPC/EAN Symbology
//!
//! This module implements the UPC-A, EAN-13 and EAN-8 symbologies, from a
//! string of digits down to the scan-line bitstring.
//!
//! ## Module Structure
//!
//! - [`checksum`]: Check digit validation and correction
//! - [`tables`]: Digit and parity encoding tables
//! - [`encode`]: Digit encoder and bitstring assembler
//!
//! ## Pipeline
//!
//! ```text
//! "4006381333931"
//!       │ NumericCode::from_str
//!       ▼
//! checksum::validate_or_correct ──► Symbology::classify ──► DigitGroups::group
//!                                                                │
//!                                   Bitstring ◄── encode::assemble
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use eanbar::symbology::{checksum, encode, DigitGroups, NumericCode, Symbology};
//!
//! let code: NumericCode = "036000291452".parse()?;
//! let code = checksum::validate_or_correct(&code, false)?;
//! let symbology = Symbology::classify(&code)?;
//! let groups = DigitGroups::group(&code, symbology)?;
//! let bits = encode::assemble(&groups, symbology);
//!
//! assert_eq!(symbology, Symbology::UpcA);
//! assert_eq!(bits.len(), 95);
//! # Ok::<(), eanbar::EanbarError>(())
//! ```

pub mod checksum;
pub mod encode;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EanbarError, Result};

pub use encode::{Bitstring, Parity};

// ============================================================================
// NUMERIC CODE
// ============================================================================

/// An ordered, non-empty sequence of decimal digits.
///
/// Parsing rejects anything that is not an ASCII digit. Length is not checked
/// here; that is the job of [`Symbology::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericCode {
    digits: Vec<u8>,
}

impl NumericCode {
    /// Build a code from digit values (each 0-9).
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        if digits.is_empty() {
            return Err(EanbarError::InvalidInput("code is empty".to_string()));
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(EanbarError::InvalidInput(format!(
                "digit value {} is out of range 0-9",
                bad
            )));
        }
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The trailing check digit.
    pub fn last_digit(&self) -> u8 {
        // Non-empty by construction
        self.digits[self.digits.len() - 1]
    }

    /// Copy of this code with the last digit replaced.
    pub(crate) fn with_last_digit(&self, digit: u8) -> Self {
        let mut digits = self.digits.clone();
        let last = digits.len() - 1;
        digits[last] = digit;
        Self { digits }
    }
}

impl FromStr for NumericCode {
    type Err = EanbarError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EanbarError::InvalidInput("code is empty".to_string()));
        }
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    EanbarError::InvalidInput(format!(
                        "code '{}' contains non-digit character '{}'",
                        s, c
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { digits })
    }
}

impl fmt::Display for NumericCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

// ============================================================================
// SYMBOLOGY
// ============================================================================

/// Barcode symbology, determined by code length.
///
/// | Symbology | Digits | Bits |
/// |-----------|--------|------|
/// | EAN-8     | 8      | 67   |
/// | UPC-A     | 12     | 95   |
/// | EAN-13    | 13     | 95   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "UPC-A")]
    UpcA,
    #[serde(rename = "EAN-13")]
    Ean13,
    #[serde(rename = "EAN-8")]
    Ean8,
}

impl Symbology {
    /// Classify a checksum-validated code by its length.
    ///
    /// ```
    /// use eanbar::symbology::{NumericCode, Symbology};
    ///
    /// let code: NumericCode = "96385074".parse()?;
    /// assert_eq!(Symbology::classify(&code)?, Symbology::Ean8);
    /// # Ok::<(), eanbar::EanbarError>(())
    /// ```
    pub fn classify(code: &NumericCode) -> Result<Self> {
        match code.len() {
            8 => Ok(Symbology::Ean8),
            12 => Ok(Symbology::UpcA),
            13 => Ok(Symbology::Ean13),
            n => Err(EanbarError::UnsupportedFormat(n)),
        }
    }

    /// Total number of digits, check digit included.
    pub fn digit_count(&self) -> usize {
        match self {
            Symbology::Ean8 => 8,
            Symbology::UpcA => 12,
            Symbology::Ean13 => 13,
        }
    }

    /// Number of digits drawn on each side of the middle guard.
    pub fn half_width_digits(&self) -> usize {
        match self {
            Symbology::Ean8 => 4,
            Symbology::UpcA | Symbology::Ean13 => 6,
        }
    }

    /// Length of the assembled bitstring in units.
    pub fn bit_len(&self) -> usize {
        let half = self.half_width_digits() * tables::DIGIT_WIDTH;
        tables::SIDE_GUARD.len() * 2 + tables::MIDDLE_GUARD.len() + half * 2
    }

    pub fn name(&self) -> &'static str {
        match self {
            Symbology::UpcA => "UPC-A",
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// DIGIT GROUPS
// ============================================================================

/// A code split into the digits drawn left and right of the middle guard.
///
/// Only [`DigitGroups::group`] builds one, so every digit is 0-9 and both
/// halves have the length of their symbology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroups {
    leading: u8,
    left: Vec<u8>,
    right: Vec<u8>,
}

impl DigitGroups {
    /// Slice a classified code into its groups.
    ///
    /// Fails with [`EanbarError::InvalidInput`] when the code does not have
    /// the digit count of `symbology`.
    pub fn group(code: &NumericCode, symbology: Symbology) -> Result<Self> {
        let d = code.digits();
        if d.len() != symbology.digit_count() {
            return Err(EanbarError::InvalidInput(format!(
                "{} digits cannot be grouped as {}",
                d.len(),
                symbology
            )));
        }
        Ok(match symbology {
            Symbology::UpcA => Self {
                leading: 0,
                left: d[0..6].to_vec(),
                right: d[6..12].to_vec(),
            },
            Symbology::Ean13 => Self {
                leading: d[0],
                left: d[1..7].to_vec(),
                right: d[7..13].to_vec(),
            },
            Symbology::Ean8 => Self {
                leading: 0,
                left: d[0..4].to_vec(),
                right: d[4..8].to_vec(),
            },
        })
    }

    /// The undrawn EAN-13 digit that selects the left parity pattern.
    /// 0 for UPC-A and EAN-8.
    pub fn leading(&self) -> u8 {
        self.leading
    }

    /// Digits left of the middle guard.
    pub fn left(&self) -> &[u8] {
        &self.left
    }

    /// Digits right of the middle guard.
    pub fn right(&self) -> &[u8] {
        &self.right
    }
}
