//! Bitmap file header
//!
//! The 54-byte header made of the 14-byte file header and the 40-byte
//! `BITMAPINFOHEADER`, read and written at fixed offsets.

use crate::{IoError, IoResult};
use bmpedit_core::Image;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Size of the file header plus info header, and the pixel offset we write
pub const HEADER_SIZE: usize = 0x36;

/// Size of the `BITMAPINFOHEADER`
pub const INFO_HEADER_SIZE: u32 = 40;

/// Signature written at 0x06
pub const WRITER_SIGNATURE: [u8; 4] = *b"NICD";

/// Resolution written to both axes
pub const DEFAULT_RESOLUTION: i32 = 2880;

/// Byte offsets of the header fields
pub mod offset {
    pub const MAGIC: usize = 0x00;
    pub const FILE_SIZE: usize = 0x02;
    pub const SIGNATURE: usize = 0x06;
    pub const PIXEL_OFFSET: usize = 0x0A;
    pub const HEADER_SIZE: usize = 0x0E;
    pub const WIDTH: usize = 0x12;
    pub const HEIGHT: usize = 0x16;
    pub const PLANES: usize = 0x1A;
    pub const BITS_PER_PIXEL: usize = 0x1C;
    pub const COMPRESSION: usize = 0x1E;
    pub const IMAGE_SIZE: usize = 0x22;
    pub const X_RESOLUTION: usize = 0x26;
    pub const Y_RESOLUTION: usize = 0x2A;
    pub const PALETTE_COLORS: usize = 0x2E;
    pub const IMPORTANT_COLORS: usize = 0x32;
}

/// Decoded bitmap header fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    /// Total file size in bytes
    pub file_size: u32,
    /// Application signature (not validated on read)
    pub signature: [u8; 4],
    /// Byte offset of the pixel payload
    pub pixel_offset: u32,
    /// Size of the info header
    pub header_size: u32,
    /// Width in pixels (signed in the file)
    pub width: i32,
    /// Height in pixels; positive means rows are stored bottom-up
    pub height: i32,
    /// Color planes, always 1
    pub planes: u16,
    /// Bits per pixel
    pub bits_per_pixel: u16,
    /// Compression method, 0 for none
    pub compression: u32,
    /// Declared payload size in bytes; may be 0 for uncompressed files
    pub image_size: u32,
    /// Horizontal resolution
    pub x_resolution: i32,
    /// Vertical resolution
    pub y_resolution: i32,
    /// Palette color count
    pub palette_colors: u32,
    /// Important color count
    pub important_colors: u32,
}

fn field<const N: usize>(data: &[u8], at: usize) -> IoResult<[u8; N]> {
    data.get(at..at + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "header truncated: need bytes {}..{}, have {}",
                at,
                at + N,
                data.len()
            ))
        })
}

fn read_u16(data: &[u8], at: usize) -> IoResult<u16> {
    field::<2>(data, at).map(u16::from_le_bytes)
}

fn read_u32(data: &[u8], at: usize) -> IoResult<u32> {
    field::<4>(data, at).map(u32::from_le_bytes)
}

fn read_i32(data: &[u8], at: usize) -> IoResult<i32> {
    field::<4>(data, at).map(i32::from_le_bytes)
}

impl BmpHeader {
    /// Parse the header from the start of a bitmap file.
    ///
    /// Only the "BM" magic is validated here; format support is checked by
    /// the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the magic is missing or the data
    /// is shorter than the header.
    pub fn parse(data: &[u8]) -> IoResult<Self> {
        if field::<2>(data, offset::MAGIC).ok().as_ref() != Some(b"BM") {
            return Err(IoError::InvalidData("not a BMP file".to_string()));
        }
        Ok(BmpHeader {
            file_size: read_u32(data, offset::FILE_SIZE)?,
            signature: field::<4>(data, offset::SIGNATURE)?,
            pixel_offset: read_u32(data, offset::PIXEL_OFFSET)?,
            header_size: read_u32(data, offset::HEADER_SIZE)?,
            width: read_i32(data, offset::WIDTH)?,
            height: read_i32(data, offset::HEIGHT)?,
            planes: read_u16(data, offset::PLANES)?,
            bits_per_pixel: read_u16(data, offset::BITS_PER_PIXEL)?,
            compression: read_u32(data, offset::COMPRESSION)?,
            image_size: read_u32(data, offset::IMAGE_SIZE)?,
            x_resolution: read_i32(data, offset::X_RESOLUTION)?,
            y_resolution: read_i32(data, offset::Y_RESOLUTION)?,
            palette_colors: read_u32(data, offset::PALETTE_COLORS)?,
            important_colors: read_u32(data, offset::IMPORTANT_COLORS)?,
        })
    }

    /// Header describing `img` as written by this codec.
    pub fn for_image(img: &Image) -> Self {
        let image_size = img.pixel_array_byte_size();
        BmpHeader {
            file_size: HEADER_SIZE as u32 + image_size,
            signature: WRITER_SIGNATURE,
            pixel_offset: HEADER_SIZE as u32,
            header_size: INFO_HEADER_SIZE,
            width: img.width() as i32,
            height: img.height() as i32,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size,
            x_resolution: DEFAULT_RESOLUTION,
            y_resolution: DEFAULT_RESOLUTION,
            palette_colors: 0,
            important_colors: 0,
        }
    }

    /// Serialize to the 54-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut put = |at: usize, bytes: &[u8]| out[at..at + bytes.len()].copy_from_slice(bytes);
        put(offset::MAGIC, b"BM");
        put(offset::FILE_SIZE, &self.file_size.to_le_bytes());
        put(offset::SIGNATURE, &self.signature);
        put(offset::PIXEL_OFFSET, &self.pixel_offset.to_le_bytes());
        put(offset::HEADER_SIZE, &self.header_size.to_le_bytes());
        put(offset::WIDTH, &self.width.to_le_bytes());
        put(offset::HEIGHT, &self.height.to_le_bytes());
        put(offset::PLANES, &self.planes.to_le_bytes());
        put(offset::BITS_PER_PIXEL, &self.bits_per_pixel.to_le_bytes());
        put(offset::COMPRESSION, &self.compression.to_le_bytes());
        put(offset::IMAGE_SIZE, &self.image_size.to_le_bytes());
        put(offset::X_RESOLUTION, &self.x_resolution.to_le_bytes());
        put(offset::Y_RESOLUTION, &self.y_resolution.to_le_bytes());
        put(offset::PALETTE_COLORS, &self.palette_colors.to_le_bytes());
        put(offset::IMPORTANT_COLORS, &self.important_colors.to_le_bytes());
        out
    }
}

/// Read the header of a bitmap file without decoding pixel data
pub fn read_bmp_header<P: AsRef<Path>>(path: P) -> IoResult<BmpHeader> {
    let file = File::open(path.as_ref()).map_err(IoError::Io)?;
    let mut data = Vec::with_capacity(HEADER_SIZE);
    BufReader::new(file)
        .take(HEADER_SIZE as u64)
        .read_to_end(&mut data)
        .map_err(IoError::Io)?;
    BmpHeader::parse(&data)
}
