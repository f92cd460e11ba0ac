//! # Digit Encoder and Bitstring Assembler
//!
//! ## Layout
//!
//! ```text
//! UPC-A / EAN-13 (95 units)
//! ┌─────┬──────────────────┬───────┬──────────────────┬─────┐
//! │ 101 │ 6 left × 7 units │ 01010 │ 6 right × 7 units│ 101 │
//! └─────┴──────────────────┴───────┴──────────────────┴─────┘
//!   0-2        3-44          45-49        50-91         92-94
//!
//! EAN-8 (67 units)
//! ┌─────┬──────────────────┬───────┬──────────────────┬─────┐
//! │ 101 │ 4 left × 7 units │ 01010 │ 4 right × 7 units│ 101 │
//! └─────┴──────────────────┴───────┴──────────────────┴─────┘
//!   0-2        3-30          31-35        36-63         64-66
//! ```
//!
//! Left digits of UPC-A and EAN-8 are always odd parity. EAN-13 left digits
//! follow the parity pattern of the undrawn leading digit. Right digits always
//! use the right-hand table.

use std::fmt;
use std::str::FromStr;

use super::tables::{
    DIGIT_WIDTH, LEADING_PARITY, LEFT_EVEN, LEFT_ODD, MIDDLE_GUARD, PARITY_WIDTH, RIGHT,
    SIDE_GUARD, bits,
};
use super::{DigitGroups, Symbology};
use crate::error::{EanbarError, Result};

/// Which table a digit is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Left-hand, odd parity (L)
    OddLeft,
    /// Left-hand, even parity (G)
    EvenLeft,
    /// Right-hand (R)
    Right,
}

impl Parity {
    fn table(&self) -> &'static [u8; 10] {
        match self {
            Parity::OddLeft => &LEFT_ODD,
            Parity::EvenLeft => &LEFT_EVEN,
            Parity::Right => &RIGHT,
        }
    }
}

/// Encode a single digit as its 7-unit pattern.
///
/// ```
/// use eanbar::symbology::{encode::encode_digit, Parity};
///
/// assert_eq!(encode_digit(4, Parity::Right)?, "1011100");
/// assert_eq!(encode_digit(4, Parity::OddLeft)?, "0100011");
/// assert_eq!(encode_digit(4, Parity::EvenLeft)?, "0011101");
/// # Ok::<(), eanbar::EanbarError>(())
/// ```
pub fn encode_digit(digit: u8, parity: Parity) -> Result<String> {
    if digit > 9 {
        return Err(EanbarError::InvalidInput(format!(
            "cannot encode {} as a single digit",
            digit
        )));
    }
    Ok(pattern(digit, parity))
}

/// Table lookup for a digit already known to be 0-9.
fn pattern(digit: u8, parity: Parity) -> String {
    bits(parity.table()[digit as usize], DIGIT_WIDTH)
}

/// Parities for the left group of an EAN-13 code with the given leading digit.
pub(crate) fn leading_parities(leading: u8) -> [Parity; PARITY_WIDTH] {
    debug_assert!(leading <= 9, "leading digit {} out of range", leading);
    let mask = LEADING_PARITY[usize::from(leading)];
    let mut out = [Parity::OddLeft; PARITY_WIDTH];
    for (i, parity) in out.iter_mut().enumerate() {
        if (mask >> (PARITY_WIDTH - 1 - i)) & 1 == 1 {
            *parity = Parity::EvenLeft;
        }
    }
    out
}

/// Assemble the full scan-line bitstring for a grouped code.
pub fn assemble(groups: &DigitGroups, symbology: Symbology) -> Bitstring {
    let mut out = String::with_capacity(symbology.bit_len());
    out.push_str(SIDE_GUARD);

    match symbology {
        Symbology::Ean13 => {
            let parities = leading_parities(groups.leading());
            for (&digit, &parity) in groups.left().iter().zip(parities.iter()) {
                out.push_str(&pattern(digit, parity));
            }
        }
        Symbology::UpcA | Symbology::Ean8 => {
            for &digit in groups.left() {
                out.push_str(&pattern(digit, Parity::OddLeft));
            }
        }
    }

    out.push_str(MIDDLE_GUARD);
    for &digit in groups.right() {
        out.push_str(&pattern(digit, Parity::Right));
    }
    out.push_str(SIDE_GUARD);

    Bitstring(out)
}

// ============================================================================
// BITSTRING
// ============================================================================

/// A scan line: one `'0'` (space) or `'1'` (bar) per unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitstring(String);

impl Bitstring {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units as booleans, `true` = bar.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    /// True if unit `index` belongs to a side guard or the middle guard.
    ///
    /// Side guards are the first and last three units; the middle guard is
    /// the five units centred in the line.
    pub fn is_guard(&self, index: usize) -> bool {
        let len = self.len();
        let side = SIDE_GUARD.len();
        let middle = MIDDLE_GUARD.len();
        if index < side || index + side >= len {
            return true;
        }
        let middle_start = len.saturating_sub(middle) / 2;
        (middle_start..middle_start + middle).contains(&index)
    }
}

impl FromStr for Bitstring {
    type Err = EanbarError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(EanbarError::InvalidInput("bitstring is empty".to_string()));
        }
        if let Some(c) = s.chars().find(|&c| c != '0' && c != '1') {
            return Err(EanbarError::InvalidInput(format!(
                "bitstring contains '{}', expected only '0' and '1'",
                c
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
