//! glyphgrid-io - Image decoding and glyph dumps
//!
//! Reads images into a [`Canvas`], normalizes their channels, writes
//! canvases back out, and provides [`DimensionDump`], a glyph sink that
//! stores every segmented glyph on disk grouped by size.
//!
//! Supported formats (feature-gated):
//!
//! - PNG (`png-format`, default): gray, gray+alpha, RGB, RGBA, palette,
//!   8/16 bit
//! - PNM (`pnm`, default): binary P5/P6

mod dump;
mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use dump::{Dimension, DimensionDump};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use glyphgrid_core::{Canvas, Pixel};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Options applied after decoding
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Drop the alpha channel so pixels compare on color alone
    /// (default: true)
    pub strip_alpha: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { strip_alpha: true }
    }
}

impl ReadOptions {
    /// Enable or disable alpha stripping
    pub fn with_strip_alpha(mut self, strip: bool) -> Self {
        self.strip_alpha = strip;
        self
    }

    fn apply(&self, canvas: Canvas) -> Canvas {
        if self.strip_alpha {
            strip_alpha(&canvas)
        } else {
            canvas
        }
    }
}

/// Drop the alpha channel of an RGBA canvas.
///
/// Every pixel becomes opaque and the spp drops from 4 to 3. Canvases
/// without alpha are returned unchanged (sharing their data).
pub fn strip_alpha(canvas: &Canvas) -> Canvas {
    if canvas.spp() != 4 {
        return canvas.clone();
    }
    let mut out = canvas.to_mut();
    out.remove_alpha();
    out.into()
}

/// Read an image from a file path with default options (alpha stripped).
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Canvas> {
    read_image_with(path, &ReadOptions::default())
}

/// Read an image from a file path.
pub fn read_image_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> IoResult<Canvas> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    let canvas = decode(reader, format)?;
    log::debug!(
        "read {} as {:?}: {}x{}",
        path.display(),
        format,
        canvas.width(),
        canvas.height()
    );
    Ok(options.apply(canvas))
}

/// Read an image from memory with default options (alpha stripped).
pub fn read_image_mem(data: &[u8]) -> IoResult<Canvas> {
    let format = detect_format_from_bytes(data)?;
    let canvas = decode(Cursor::new(data), format)?;
    Ok(ReadOptions::default().apply(canvas))
}

#[allow(unused_variables)]
fn decode<R: std::io::BufRead + std::io::Seek>(reader: R, format: ImageFormat) -> IoResult<Canvas> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Write a canvas to a file path.
pub fn write_image<P: AsRef<Path>>(canvas: &Canvas, path: P, format: ImageFormat) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode(canvas, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode a canvas into memory.
pub fn write_image_mem(canvas: &Canvas, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    encode(canvas, &mut buffer, format)?;
    Ok(buffer)
}

#[allow(unused_variables)]
fn encode<W: Write>(canvas: &Canvas, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(canvas, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(canvas, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Parse a background color given as `#rrggbb`, `rrggbb` or `r,g,b`.
///
/// Convenience for callers that take the background from configuration
/// text; the decoded pixel is opaque.
pub fn parse_color(text: &str) -> IoResult<Pixel> {
    let t = text.trim();
    let invalid = || IoError::InvalidData(format!("invalid color: {:?}", text));
    if t.contains(',') {
        let parts: Vec<u8> = t
            .split(',')
            .map(|s| s.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;
        return Pixel::from_channels(&parts).map(Pixel::opaque).ok_or_else(invalid);
    }
    let hex = t.strip_prefix('#').unwrap_or(t);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Pixel::rgb(byte(0)?, byte(2)?, byte(4)?))
}
