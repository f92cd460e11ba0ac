//! # Eanbar - UPC/EAN Barcode Generator
//!
//! Eanbar turns UPC-A, EAN-13 and EAN-8 product codes into pixel-exact 1-bit
//! barcode images. It provides:
//!
//! - **Symbology**: check digit validation/correction, classification, digit encoding
//! - **Rendering**: scaling, guard notches and borders into a 1-bit buffer
//! - **Preview**: human-readable digits and PNG/PBM output
//!
//! ## Quick Start
//!
//! ```no_run
//! use eanbar::{Barcode, BarcodeOptions, preview};
//! use std::path::Path;
//!
//! // Check and encode
//! let barcode = Barcode::new("4006381333931", false)?;
//! println!("{}: {}", barcode.symbology(), barcode.bits());
//!
//! // Render with 3 px units and a 20 px border
//! let options = BarcodeOptions::default()
//!     .unit_width(3)
//!     .height(150)
//!     .borders(eanbar::config::BorderSpec::uniform(20));
//! let raster = barcode.render(&options)?;
//!
//! preview::save(&raster, Path::new("barcode.png"))?;
//! # Ok::<(), eanbar::EanbarError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Check digits, classification, encoding tables, bitstring assembly |
//! | [`render`] | Bitstring to 1-bit raster |
//! | [`preview`] | Digit text overlay and image containers |
//! | [`config`] | Rendering options |
//! | [`error`] | Error types |
//!
//! ## Supported Symbologies
//!
//! | Symbology | Digits | Units |
//! |-----------|--------|-------|
//! | UPC-A | 12 | 95 |
//! | EAN-13 | 13 | 95 |
//! | EAN-8 | 8 | 67 |

pub mod barcode;
pub mod config;
pub mod error;
pub mod preview;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use barcode::Barcode;
pub use config::BarcodeOptions;
pub use error::EanbarError;
pub use render::RasterBuffer;
pub use symbology::Symbology;
