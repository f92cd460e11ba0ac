//! # Encoding Tables
//!
//! Each digit is drawn as 7 units. Patterns are stored as small integers and
//! rendered most-significant bit first, `1` = bar, `0` = space.
//!
//! | Digit | Left odd (L) | Left even (G) | Right (R) |
//! |-------|--------------|---------------|-----------|
//! | 0 | `0001101` | `0100111` | `1110010` |
//! | 1 | `0011001` | `0110011` | `1100110` |
//! | 2 | `0010011` | `0011011` | `1101100` |
//! | 3 | `0111101` | `0100001` | `1000010` |
//! | 4 | `0100011` | `0011101` | `1011100` |
//! | 5 | `0110001` | `0111001` | `1001110` |
//! | 6 | `0101111` | `0000101` | `1010000` |
//! | 7 | `0111011` | `0010001` | `1000100` |
//! | 8 | `0110111` | `0001001` | `1001000` |
//! | 9 | `0001011` | `0010111` | `1110100` |
//!
//! R is the complement of L, and G is R reversed.
//!
//! ## EAN-13 Leading Digit
//!
//! The 13th (leading) digit is never drawn. It selects which of the six left
//! digits use G instead of L, read most-significant bit first:
//!
//! | Leading | Pattern | Left parities |
//! |---------|---------|---------------|
//! | 0 | `000000` | LLLLLL |
//! | 1 | `001011` | LLGLGG |
//! | 2 | `001101` | LLGGLG |
//! | 3 | `001110` | LLGGGL |
//! | 4 | `010011` | LGLLGG |
//! | 5 | `011001` | LGGLLG |
//! | 6 | `011100` | LGGGLL |
//! | 7 | `010101` | LGLGLG |
//! | 8 | `010110` | LGLGGL |
//! | 9 | `011010` | LGGLGL |

/// Width of one encoded digit in units.
pub const DIGIT_WIDTH: usize = 7;

/// Width of the EAN-13 parity pattern in bits.
pub const PARITY_WIDTH: usize = 6;

/// Start and end guard.
pub const SIDE_GUARD: &str = "101";

/// Guard between the left and right groups.
pub const MIDDLE_GUARD: &str = "01010";

/// Left-hand digits, odd parity (set A / L).
pub const LEFT_ODD: [u8; 10] = [13, 25, 19, 61, 35, 49, 47, 59, 55, 11];

/// Left-hand digits, even parity (set B / G).
pub const LEFT_EVEN: [u8; 10] = [39, 51, 27, 33, 29, 57, 5, 17, 9, 23];

/// Right-hand digits (set C / R), all symbologies.
pub const RIGHT: [u8; 10] = [114, 102, 108, 66, 92, 78, 80, 68, 72, 116];

/// EAN-13 parity pattern for each leading digit. A set bit means even parity.
pub const LEADING_PARITY: [u8; 10] = [0, 11, 13, 14, 19, 25, 28, 21, 22, 26];

/// Render the low `width` bits of `value`, most significant first.
/// Widths past 8 are padded with leading zeros.
///
/// ```
/// use eanbar::symbology::tables::bits;
///
/// assert_eq!(bits(15, 8), "00001111");
/// assert_eq!(bits(26, 5), "11010");
/// ```
pub fn bits(value: u8, width: usize) -> String {
    let mut out = String::with_capacity(width);
    for i in (0..width).rev() {
        let on = u32::try_from(i)
            .ok()
            .and_then(|shift| u32::from(value).checked_shr(shift))
            .is_some_and(|v| v & 1 == 1);
        out.push(if on { '1' } else { '0' });
    }
    out
}
