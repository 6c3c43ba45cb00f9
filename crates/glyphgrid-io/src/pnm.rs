//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary) with a maxval of
//! at most 255; samples are rescaled to 0..=255 on read. ASCII variants
//! (P1/P2/P3), PBM and PAM are not supported.

use crate::{IoError, IoResult};
use glyphgrid_core::{Canvas, Pixel};
use std::io::{BufRead, Write};

/// Largest raster, in samples, accepted from a PNM header.
const MAX_PNM_SAMPLES: usize = 1 << 28;

/// Read one whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
            continue;
        }
        if c.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            // The single whitespace after maxval separates header and raster.
            break;
        }
        token.push(c as char);
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", what, token)))
}

/// Read a binary PNM image (P5/P6) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5`/`P6` magic
///
/// # Returns
/// A canvas with spp 1 (PGM) or 3 (PPM).
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Canvas> {
    let magic = read_token(&mut reader)?;
    let channels: usize = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {} (only P5 and P6 are read)",
                other
            )));
        }
    };
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} (only 1..=255 is read)",
            maxval
        )));
    }

    let samples = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| n <= MAX_PNM_SAMPLES)
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM raster {}x{} is too large", width, height))
        })?;

    let mut raster = vec![0u8; samples];
    reader
        .read_exact(&mut raster)
        .map_err(|e| IoError::DecodeError(format!("PNM raster error: {}", e)))?;

    if maxval < 255 {
        for v in raster.iter_mut() {
            let scaled = (u32::from(*v).min(maxval) * 255 + maxval / 2) / maxval;
            *v = scaled as u8;
        }
    }

    let pixels = raster
        .chunks_exact(channels)
        .map(|c| Pixel::from_channels(c).unwrap_or_default())
        .collect();

    Ok(Canvas::from_pixels(width, height, channels as u32, pixels)?)
}

/// Write a canvas as binary PNM to a writer.
///
/// Chooses P5 for 1 spp canvases and P6 otherwise; alpha is dropped.
pub fn write_pnm<W: Write>(canvas: &Canvas, mut writer: W) -> IoResult<()> {
    let (width, height) = canvas.dimensions();
    let gray = canvas.spp() == 1;
    let magic = if gray { "P5" } else { "P6" };
    write!(writer, "{}\n{} {}\n255\n", magic, width, height)?;

    let samples = if gray { 1 } else { 3 };
    let mut data = Vec::with_capacity(canvas.data().len() * samples);
    for &p in canvas.data() {
        data.extend_from_slice(&p.channels()[..samples]);
    }
    writer.write_all(&data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_ppm_with_comment() {
        let mut bytes = b"P6\n# made by hand\n2 1\n255\n".to_vec();
        bytes.extend_from_slice(&[255, 0, 0, 1, 2, 3]);
        let canvas = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(canvas.dimensions(), (2, 1));
        assert_eq!(canvas.spp(), 3);
        assert_eq!(canvas.get_pixel(0, 0), Some(Pixel::rgb(255, 0, 0)));
        assert_eq!(canvas.get_pixel(1, 0), Some(Pixel::rgb(1, 2, 3)));
    }

    #[test]
    fn test_pgm_roundtrip() {
        let mut c = Canvas::new_filled(4, 3, 1, Pixel::gray(255)).unwrap().to_mut();
        c.set_pixel(1, 2, Pixel::gray(17)).unwrap();
        let canvas: Canvas = c.into();

        let mut buffer = Vec::new();
        write_pnm(&canvas, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P5\n4 3\n255\n"));
        let canvas2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert!(canvas2.equals(&canvas));
        assert_eq!(canvas2.spp(), 1);
    }

    #[test]
    fn test_ppm_drops_alpha() {
        let canvas = Canvas::new_filled(2, 2, 4, Pixel::rgba(9, 8, 7, 6)).unwrap();
        let mut buffer = Vec::new();
        write_pnm(&canvas, &mut buffer).unwrap();
        let canvas2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(canvas2.get_pixel(1, 1), Some(Pixel::rgb(9, 8, 7)));
    }

    #[test]
    fn test_truncated_raster() {
        let bytes = b"P5\n3 3\n255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::DecodeError(_))
        ));
    }

    #[test]
    fn test_huge_header_rejected_before_allocating() {
        let bytes = b"P6\n4294967295 4294967295\n255\n\0\0\0".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
        let bytes = b"P5\n100000 100000\n255\n\0".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_low_maxval_is_rescaled() {
        let mut bytes = b"P5\n3 1\n15\n".to_vec();
        bytes.extend_from_slice(&[0, 15, 7]);
        let canvas = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some(Pixel::gray(0)));
        assert_eq!(canvas.get_pixel(1, 0), Some(Pixel::gray(255)));
        assert_eq!(canvas.get_pixel(2, 0), Some(Pixel::gray(119)));
    }

    #[test]
    fn test_ascii_variant_rejected() {
        let bytes = b"P3\n1 1\n255\n0 0 0\n".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
