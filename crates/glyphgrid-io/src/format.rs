//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file formats this crate can read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// PNG format
    #[default]
    Png,
    /// Binary PNM (P5 graymap, P6 pixmap)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// Binary PGM / PPM
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";

    /// Recognized but unsupported formats, for clearer errors
    pub const BMP: &[u8] = b"BM";
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
    pub const GIF: &[u8] = b"GIF8";
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::PGM_BINARY) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    let name = if data.starts_with(magic::BMP) {
        "BMP"
    } else if data.starts_with(magic::JPEG) {
        "JPEG"
    } else if data.starts_with(magic::GIF) {
        "GIF"
    } else if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        "TIFF"
    } else {
        "unknown"
    };
    Err(IoError::UnsupportedFormat(format!(
        "{} image data (only PNG and binary PNM are read)",
        name
    )))
}
