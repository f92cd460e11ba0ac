//! # Error Types
//!
//! This module defines error types used throughout the eanbar library.

use thiserror::Error;

/// Main error type for eanbar operations
#[derive(Debug, Error)]
pub enum EanbarError {
    /// Check digit does not match the one computed from the payload
    #[error("Invalid checksum: expected check digit {expected}, found {found}")]
    InvalidChecksum { expected: u8, found: u8 },

    /// Code length is not one of 8 (EAN-8), 12 (UPC-A) or 13 (EAN-13)
    #[error("Unsupported format: {0} digits (expected 8, 12 or 13)")]
    UnsupportedFormat(usize),

    /// Malformed code, bitstring or configuration value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, EanbarError>;
