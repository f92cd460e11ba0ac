//! # Rendering Module
//!
//! This module turns a scan-line bitstring into a 1-bit pixel buffer.
//!
//! ## Modules
//!
//! - [`raster`]: Horizontal/vertical scaling, guard notches and borders
//!
//! ## Usage Example
//!
//! ```
//! use eanbar::config::BorderSpec;
//! use eanbar::render::rasterize;
//! use eanbar::Barcode;
//!
//! let barcode = Barcode::new("036000291452", false)?;
//! let borders = BorderSpec::uniform(10).resolve();
//!
//! // 2 px per unit, 60 px bars, 6 px notches
//! let raster = rasterize(barcode.bits(), 2, 60, 6, borders)?;
//! assert_eq!(raster.width(), 10 + 95 * 2 + 10);
//! assert_eq!(raster.height(), 10 + 60 + 6 + 10);
//! # Ok::<(), eanbar::EanbarError>(())
//! ```

pub mod raster;

pub use raster::{MAX_PIXELS, RasterBuffer, rasterize};
