//! # Check Digit
//!
//! UPC and EAN codes share one check digit rule. Counting positions from the
//! right, starting at 1 on the digit just before the check digit, odd
//! positions are weighted 3 and even positions 1:
//!
//! ```text
//! code     4  0  0  6  3  8  1  3  3  3  9  3 │ 1
//! weight   1  3  1  3  1  3  1  3  1  3  1  3 │ check
//!
//! sum   = 89
//! check = (10 - 89 % 10) % 10 = 1
//! ```
//!
//! The trailing `% 10` collapses a result of 10 to 0.

use super::NumericCode;
use crate::error::{EanbarError, Result};

/// Compute the check digit for a payload (the code without its check digit).
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 3 } else { 1 };
            d as u32 * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Check digit expected for a full code, ignoring its current last digit.
pub fn expected_check_digit(code: &NumericCode) -> u8 {
    let digits = code.digits();
    check_digit(&digits[..digits.len() - 1])
}

/// True if the code's last digit is its correct check digit.
pub fn is_valid(code: &NumericCode) -> bool {
    expected_check_digit(code) == code.last_digit()
}

/// Validate the check digit, or replace it when `correct` is set.
///
/// ```
/// use eanbar::symbology::{checksum, NumericCode};
///
/// let bad: NumericCode = "96385075".parse()?;
/// assert!(checksum::validate_or_correct(&bad, false).is_err());
///
/// let fixed = checksum::validate_or_correct(&bad, true)?;
/// assert_eq!(fixed.to_string(), "96385074");
/// # Ok::<(), eanbar::EanbarError>(())
/// ```
pub fn validate_or_correct(code: &NumericCode, correct: bool) -> Result<NumericCode> {
    let expected = expected_check_digit(code);
    if correct {
        return Ok(code.with_last_digit(expected));
    }

    let found = code.last_digit();
    if found != expected {
        return Err(EanbarError::InvalidChecksum { expected, found });
    }
    Ok(code.clone())
}
