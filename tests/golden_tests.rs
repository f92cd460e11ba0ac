//! # Golden Tests
//!
//! End-to-end checks from code text to pixels.
//!
//! - **Golden output**: a small EAN-8 rendering compared byte for byte as PBM.
//! - **Properties**: seeded random codes for every symbology (classification,
//!   checksum correction, bitstring length, raster geometry).
//! - **Oracle**: EAN-13 bit patterns cross-checked against the `barcoders` crate.

use eanbar::config::{BorderSpec, Borders};
use eanbar::render::rasterize;
use eanbar::symbology::{NumericCode, Symbology, checksum};
use eanbar::{Barcode, BarcodeOptions, EanbarError, preview};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 96385074, 1 px units, 2 px bars, 1 px notch, 1 px border, no text.
const EAN8_GOLDEN_PBM: &str = "\
P1
# Barcode
69 5
000000000000000000000000000000000000000000000000000000000000000000000
010100010110101111011110101101110101010011101110010100010010111001010
010100010110101111011110101101110101010011101110010100010010111001010
010100000000000000000000000000000101000000000000000000000000000001010
000000000000000000000000000000000000000000000000000000000000000000000
";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// A random valid code of the given length.
fn random_code(rng: &mut StdRng, len: usize) -> String {
    let payload: Vec<u8> = (0..len - 1).map(|_| rng.random_range(0..10u8)).collect();
    let check = checksum::check_digit(&payload);
    payload
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| (b'0' + d) as char)
        .collect()
}

/// Same code with the check digit bumped by one.
fn corrupt_check_digit(code: &str) -> String {
    let mut bytes = code.as_bytes().to_vec();
    let last = bytes.len() - 1;
    bytes[last] = b'0' + (bytes[last] - b'0' + 1) % 10;
    String::from_utf8(bytes).unwrap()
}

fn bars_only() -> BarcodeOptions {
    BarcodeOptions::default().text(false)
}

// ============================================================================
// GOLDEN OUTPUT
// ============================================================================

#[test]
fn test_ean8_golden_pbm() {
    let barcode = Barcode::new("96385074", false).unwrap();
    let options = bars_only()
        .height(2)
        .notch_size(1)
        .borders(BorderSpec::uniform(1));
    let raster = barcode.render(&options).unwrap();
    assert_eq!(preview::to_pbm(&raster), EAN8_GOLDEN_PBM);
}

#[test]
fn test_scenario_upca() {
    let barcode = Barcode::new("036000291452", false).unwrap();
    assert_eq!(barcode.symbology(), Symbology::UpcA);
    assert_eq!(barcode.symbology().to_string(), "UPC-A");
    let bits = barcode.bits().as_str();
    assert!(bits.starts_with("101"));
    assert!(bits.ends_with("101"));
    assert_eq!(bits.len(), 95);
}

#[test]
fn test_scenario_ean13_parity() {
    let barcode = Barcode::new("4006381333931", false).unwrap();
    assert_eq!(barcode.symbology(), Symbology::Ean13);
    assert_eq!(barcode.groups().leading(), 4);

    // Leading 4 -> odd, even, odd, odd, even, even
    let bits = barcode.bits().as_str();
    let expected = ["0001101", "0100111", "0101111", "0111101", "0001001", "0110011"];
    for (i, want) in expected.iter().enumerate() {
        let start = 3 + i * 7;
        assert_eq!(&bits[start..start + 7], *want, "left digit {}", i);
    }
}

#[test]
fn test_scenario_ean8_corrupted() {
    // One payload digit changed: 96385074 -> 96395074
    let corrupted = "96395074";
    assert!(matches!(
        Barcode::new(corrupted, false),
        Err(EanbarError::InvalidChecksum { .. })
    ));

    let fixed = Barcode::new(corrupted, true).unwrap();
    let fixed_code = fixed.code().to_string();
    assert_eq!(fixed_code.len(), 8);
    assert_eq!(fixed.symbology(), Symbology::Ean8);
    assert_ne!(fixed_code.as_bytes()[7], corrupted.as_bytes()[7]);
    assert!(checksum::is_valid(fixed.code()));
}

#[test]
fn test_scenario_unit_width_triples_bars() {
    let barcode = Barcode::new("036000291452", false).unwrap();
    let one = barcode.rasterize(&bars_only().unit_width(1).height(1)).unwrap();
    let three = barcode.rasterize(&bars_only().unit_width(3).height(1)).unwrap();

    assert_eq!(three.width(), one.width() * 3);
    let tripled: String = one
        .row_string(0)
        .chars()
        .flat_map(|c| std::iter::repeat_n(c, 3))
        .collect();
    assert_eq!(three.row_string(0), tripled);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_random_codes_classify_and_assemble() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for (len, symbology, bit_len) in [
        (8, Symbology::Ean8, 67),
        (12, Symbology::UpcA, 95),
        (13, Symbology::Ean13, 95),
    ] {
        for _ in 0..200 {
            let code = random_code(&mut rng, len);
            let barcode = Barcode::new(&code, false).unwrap();
            assert_eq!(barcode.symbology(), symbology, "{}", code);
            assert_eq!(barcode.bits().len(), bit_len, "{}", code);
            assert_eq!(barcode.code().to_string(), code);
        }
    }
}

#[test]
fn test_random_bad_checksums() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [8, 12, 13] {
        for _ in 0..200 {
            let good = random_code(&mut rng, len);
            let bad = corrupt_check_digit(&good);
            let parsed: NumericCode = bad.parse().unwrap();

            assert!(matches!(
                checksum::validate_or_correct(&parsed, false),
                Err(EanbarError::InvalidChecksum { .. })
            ));
            let fixed = checksum::validate_or_correct(&parsed, true).unwrap();
            assert!(checksum::is_valid(&fixed));
            assert_eq!(fixed.to_string(), good);
        }
    }
}

#[test]
fn test_random_raster_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [8, 12, 13] {
        let code = random_code(&mut rng, len);
        let barcode = Barcode::new(&code, false).unwrap();
        let raster = rasterize(barcode.bits(), 1, 1, 0, Borders::default()).unwrap();
        assert_eq!(raster.height(), 1);
        assert_eq!(raster.row_string(0), barcode.bits().as_str());
    }
}

#[test]
fn test_raster_geometry() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let unit = rng.random_range(1..5u32);
        let height = rng.random_range(1..80u32);
        let notch = rng.random_range(0..10u32);
        let borders = BorderSpec {
            all: rng.random_range(0..20u32),
            left: Some(rng.random_range(0..20u32)),
            bottom: Some(rng.random_range(0..20u32)),
            ..Default::default()
        };
        let options = bars_only()
            .unit_width(unit)
            .height(height)
            .notch_size(notch)
            .borders(borders.clone());

        let barcode = Barcode::new("4006381333931", false).unwrap();
        let raster = barcode.render(&options).unwrap();
        let b = borders.resolve();
        assert_eq!(raster.width(), b.left + 95 * unit as usize + b.right);
        assert_eq!(
            raster.height(),
            b.top + (height + notch) as usize + b.bottom
        );
        assert_eq!(raster, barcode.render(&options).unwrap());
    }
}

#[test]
fn test_text_does_not_touch_bar_body() {
    let barcode = Barcode::new("96385074", false).unwrap();
    let options = BarcodeOptions::default()
        .unit_width(2)
        .height(40)
        .borders(BorderSpec::uniform(8));
    let bars = barcode.rasterize(&options).unwrap();
    let full = barcode.render(&options).unwrap();
    for y in 0..8 + 40 {
        assert_eq!(full.row(y), bars.row(y), "row {}", y);
    }
}

// ============================================================================
// ORACLE
// ============================================================================

#[test]
fn test_ean13_matches_barcoders() {
    use barcoders::sym::ean13::EAN13;

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let code = random_code(&mut rng, 13);
        let reference: String = EAN13::new(&code[..12])
            .unwrap()
            .encode()
            .iter()
            .map(|&m| if m == 1 { '1' } else { '0' })
            .collect();

        let barcode = Barcode::new(&code, false).unwrap();
        assert_eq!(barcode.bits().as_str(), reference, "{}", code);
    }
}
