//! PNG image format support

use crate::{IoError, IoResult};
use glyphgrid_core::{Canvas, Pixel};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette and low-bit-depth images are expanded to 8-bit samples;
/// 16-bit samples keep their high byte. The canvas spp is 1 for
/// grayscale, 3 for RGB and 4 when the file carries alpha.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Canvas> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();

    let (samples, spp) = match color_type {
        ColorType::Grayscale => (1, 1),
        ColorType::GrayscaleAlpha => (2, 4),
        ColorType::Rgb => (3, 3),
        ColorType::Rgba => (4, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * bytes_per_sample;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let idx = x * stride;
            // High byte of each sample
            let s = |i: usize| row[idx + i * bytes_per_sample];
            let pixel = match samples {
                1 => Pixel::gray(s(0)),
                2 => Pixel::rgba(s(0), s(0), s(0), s(1)),
                3 => Pixel::rgb(s(0), s(1), s(2)),
                _ => Pixel::rgba(s(0), s(1), s(2), s(3)),
            };
            pixels.push(pixel);
        }
    }

    log::debug!(
        "decoded PNG {}x{} ({:?}, {:?}) -> spp {}",
        width,
        height,
        color_type,
        bit_depth,
        spp
    );
    Ok(Canvas::from_pixels(width, height, spp, pixels)?)
}

/// Write a PNG image
///
/// 1 spp canvases are written as 8-bit grayscale (red channel),
/// 3 spp as RGB and 4 spp as RGBA.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> IoResult<()> {
    let (width, height) = canvas.dimensions();
    let (color_type, samples) = match canvas.spp() {
        1 => (ColorType::Grayscale, 1),
        4 => (ColorType::Rgba, 4),
        _ => (ColorType::Rgb, 3),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(canvas.data().len() * samples);
    for &p in canvas.data() {
        data.extend_from_slice(&p.channels()[..samples]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let mut c = Canvas::new_filled(10, 10, 1, Pixel::gray(0)).unwrap().to_mut();
        for y in 0..10 {
            for x in 0..10 {
                c.set_pixel(x, y, Pixel::gray(((x + y) * 10) as u8)).unwrap();
            }
        }
        let canvas: Canvas = c.into();

        let mut buffer = Vec::new();
        write_png(&canvas, &mut buffer).unwrap();
        let canvas2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(canvas2.dimensions(), (10, 10));
        assert_eq!(canvas2.spp(), 1);
        assert!(canvas2.equals(&canvas));
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut c = Canvas::new_filled(5, 5, 3, Pixel::WHITE).unwrap().to_mut();
        c.set_pixel(0, 0, Pixel::rgb(255, 0, 0)).unwrap();
        c.set_pixel(1, 1, Pixel::rgb(0, 255, 0)).unwrap();
        c.set_pixel(2, 2, Pixel::rgb(0, 0, 255)).unwrap();
        let canvas: Canvas = c.into();

        let mut buffer = Vec::new();
        write_png(&canvas, &mut buffer).unwrap();
        let canvas2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(canvas2.spp(), 3);
        assert_eq!(canvas2.get_pixel(0, 0), Some(Pixel::rgb(255, 0, 0)));
        assert_eq!(canvas2.get_pixel(1, 1), Some(Pixel::rgb(0, 255, 0)));
        assert_eq!(canvas2.get_pixel(2, 2), Some(Pixel::rgb(0, 0, 255)));
    }

    #[test]
    fn test_png_roundtrip_rgba_keeps_alpha() {
        let mut c = Canvas::new_filled(3, 2, 4, Pixel::WHITE).unwrap().to_mut();
        c.set_pixel(2, 1, Pixel::rgba(10, 20, 30, 40)).unwrap();
        let canvas: Canvas = c.into();

        let mut buffer = Vec::new();
        write_png(&canvas, &mut buffer).unwrap();
        let canvas2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(canvas2.spp(), 4);
        assert_eq!(canvas2.get_pixel(2, 1), Some(Pixel::rgba(10, 20, 30, 40)));
    }

    #[test]
    fn test_read_png_garbage() {
        let err = read_png(Cursor::new(vec![1u8, 2, 3, 4])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
