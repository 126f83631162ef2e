//! 24-bit BMP image format support
//!
//! Reads and writes uncompressed 24 bits-per-pixel Windows bitmaps. Rows
//! are stored bottom-up as Blue, Green, Red triples, each row padded with
//! zero bytes to a multiple of 4.
//!
//! The storage order of [`Image`] is the exact reverse of the payload's
//! pixel order, so file pixel `k` (row-major from the bottom-left, padding
//! skipped) lands at storage index `n_of_pixels - 1 - k`.

use crate::header::{BmpHeader, HEADER_SIZE, INFO_HEADER_SIZE};
use crate::{IoError, IoResult};
use bmpedit_core::{Image, Pixel, row_bytes, row_padding};
use std::io::{Read, Write};

/// Read a BMP image from a reader.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(IoError::Io)?;
    decode_bmp(&data)
}

/// Decode a complete bitmap file held in memory.
///
/// # Errors
///
/// - [`IoError::InvalidData`] if the "BM" magic is missing or the header or
///   payload is truncated
/// - [`IoError::UnsupportedFormat`] for anything other than an uncompressed,
///   bottom-up, 24 bits-per-pixel bitmap
pub fn decode_bmp(data: &[u8]) -> IoResult<Image> {
    let header = BmpHeader::parse(data)?;
    log::debug!(
        "BMP header: {}x{} bpp={} offset={} image_size={}",
        header.width,
        header.height,
        header.bits_per_pixel,
        header.pixel_offset,
        header.image_size
    );

    if header.header_size < INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header.header_size
        )));
    }
    if header.planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            header.planes
        )));
    }
    if header.bits_per_pixel != 24 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            header.bits_per_pixel
        )));
    }
    if header.compression != 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            header.compression
        )));
    }
    if header.width <= 0 || header.height <= 0 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP dimensions: {}x{}",
            header.width, header.height
        )));
    }

    let width = header.width as u32;
    let height = header.height as u32;

    // The payload must be present before any pixel buffer is sized from
    // the header.
    let stride = row_bytes(width);
    let required = stride.checked_mul(height as usize).ok_or_else(|| {
        IoError::InvalidData(format!("payload size overflows for {width}x{height}"))
    })?;
    let declared = header.image_size as usize;
    if declared == 0 {
        log::warn!("BMP declares payload size 0, using computed size {required}");
    } else if declared < required {
        return Err(IoError::InvalidData(format!(
            "declared payload of {declared} bytes is smaller than {required} bytes for {width}x{height}"
        )));
    }

    let start = header.pixel_offset as usize;
    let payload = start
        .checked_add(required)
        .and_then(|end| data.get(start..end))
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "pixel data truncated: need {} bytes at offset {}, file has {}",
                required,
                start,
                data.len()
            ))
        })?;

    let mut img = Image::new(width, height)?;
    let n = img.n_of_pixels();
    let w = width as usize;
    let pixels = img.pixels_mut();
    for (row, line) in payload.chunks_exact(stride).enumerate() {
        for (col, bgr) in line[..w * 3].chunks_exact(3).enumerate() {
            pixels[n - 1 - (row * w + col)] = Pixel::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    Ok(img)
}

/// Encode an image as a complete bitmap file.
pub fn encode_bmp(img: &Image) -> Vec<u8> {
    let header = BmpHeader::for_image(img);
    let width = img.width() as usize;
    let n = img.n_of_pixels();
    let padding = row_padding(img.width());
    let pixels = img.pixels();

    let mut out = Vec::with_capacity(HEADER_SIZE + img.pixel_array_byte_size() as usize);
    out.extend_from_slice(&header.to_bytes());
    for row in 0..img.height() as usize {
        for col in 0..width {
            let p = pixels[n - 1 - (row * width + col)];
            out.extend_from_slice(&[p.blue, p.green, p.red]);
        }
        out.extend(std::iter::repeat_n(0u8, padding));
    }
    out
}

/// Write a BMP image to a writer.
///
/// The file is encoded in memory first, so a failing writer never sees a
/// partially built header.
pub fn write_bmp<W: Write>(img: &Image, mut writer: W) -> IoResult<()> {
    let data = encode_bmp(img);
    writer.write_all(&data).map_err(IoError::Io)?;
    writer.flush().map_err(IoError::Io)?;
    Ok(())
}
