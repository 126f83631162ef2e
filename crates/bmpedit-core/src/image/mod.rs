//! Image - the owned 24-bit pixel grid
//!
//! An [`Image`] owns `width * height` [`Pixel`]s in one contiguous buffer.
//!
//! # Pixel layout
//!
//! Storage follows the row order the bitmap codec produces: index
//! `row * width + col`, where `row` counts from the visual top and `col`
//! runs right-to-left relative to visual `x`. The mapping from visual
//! coordinates is [`storage_index`]; nothing outside this module addresses
//! the buffer by position except whole-buffer pointwise operations, which
//! are order independent.
//!
//! # Ownership model
//!
//! An image has exactly one owner. Pointwise filters mutate the buffer in
//! place through `&mut Image`. Operations that change dimensions or need to
//! read the untouched source while writing (crop, convolution) build a new
//! image and swap it in whole, so width, height, pixel count and payload
//! byte size never disagree. [`Image::replace_pixels`] does the same for a
//! raw buffer.

mod access;
mod arith;
mod blend;
mod clip;

pub use access::storage_index;
pub use arith::add_two_images;
pub use blend::blend_two_images;

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Bytes per pixel in the bitmap payload
const BYTES_PER_PIXEL: usize = 3;

/// Padded byte length of one bitmap row for a 24-bit image.
///
/// Rows are padded with zero bytes to a multiple of 4:
/// `floor((24 * width + 31) / 32) * 4`.
#[inline]
pub fn row_bytes(width: u32) -> usize {
    ((24 * width as usize + 31) / 32) * 4
}

/// Number of zero bytes appended to each bitmap row.
#[inline]
pub fn row_padding(width: u32) -> usize {
    row_bytes(width) - width as usize * BYTES_PER_PIXEL
}

/// Validate dimensions and return `(n_of_pixels, pixel_array_byte_size)`.
fn layout(width: u32, height: u32) -> Result<(usize, u32)> {
    let invalid = || Error::InvalidDimension { width, height };
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(invalid());
    }
    let n = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(invalid)?;
    let byte_size = row_bytes(width)
        .checked_mul(height as usize)
        .and_then(|size| u32::try_from(size).ok())
        .ok_or_else(invalid)?;
    Ok((n, byte_size))
}

/// Allocate a pixel buffer of `n` copies of `fill`.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] when the buffer cannot be reserved.
pub(crate) fn alloc_pixels(n: usize, fill: Pixel) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(n)
        .map_err(|_| Error::AllocationFailed(n))?;
    pixels.resize(n, fill);
    Ok(pixels)
}

/// An owned 24-bit RGB image.
///
/// # Examples
///
/// ```
/// use bmpedit_core::{Image, Pixel};
///
/// let mut img = Image::new(4, 3).unwrap();
/// img.set_pixel_at(1, 2, Pixel::WHITE).unwrap();
/// assert_eq!(img.pixel_at(1, 2).unwrap(), Pixel::WHITE);
/// assert_eq!(img.n_of_pixels(), 12);
/// assert_eq!(img.pixel_array_byte_size(), 48);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Padded payload size in bytes (`row_bytes(width) * height`)
    pixel_array_byte_size: u32,
    /// Pixels in storage order
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create a black image with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// payload would not fit a 32-bit size field, and
    /// [`Error::AllocationFailed`] if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create an image with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Pixel) -> Result<Self> {
        let (n, pixel_array_byte_size) = layout(width, height)?;
        let pixels = alloc_pixels(n, fill)?;
        Ok(Image {
            width,
            height,
            pixel_array_byte_size,
            pixels,
        })
    }

    /// Create an image from a buffer already in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        let (n, pixel_array_byte_size) = layout(width, height)?;
        if pixels.len() != n {
            return Err(Error::InvalidParameter(format!(
                "{}x{} image needs {} pixels, got {}",
                width,
                height,
                n,
                pixels.len()
            )));
        }
        Ok(Image {
            width,
            height,
            pixel_array_byte_size,
            pixels,
        })
    }

    /// Create an image by evaluating `f(x, y)` at every visual coordinate.
    pub fn from_visual_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut img = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let index = img.index_unchecked(x, y);
                img.pixels[index] = f(x, y);
            }
        }
        Ok(img)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn n_of_pixels(&self) -> usize {
        self.pixels.len()
    }

    /// Get the padded payload size used when serializing the image.
    #[inline]
    pub fn pixel_array_byte_size(&self) -> u32 {
        self.pixel_array_byte_size
    }

    /// Get the pixels in storage order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get mutable access to the pixels in storage order.
    ///
    /// Intended for pointwise transforms that do not depend on position.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Copy the image into a freshly reserved buffer.
    ///
    /// Unlike `clone()`, running out of memory is reported instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] when the buffer cannot be reserved.
    pub fn try_clone(&self) -> Result<Image> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(self.pixels.len())
            .map_err(|_| Error::AllocationFailed(self.pixels.len()))?;
        pixels.extend_from_slice(&self.pixels);
        Ok(Image {
            width: self.width,
            height: self.height,
            pixel_array_byte_size: self.pixel_array_byte_size,
            pixels,
        })
    }

    /// Check if two images have the same width, height and pixel count.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.pixels.len() == other.pixels.len()
    }

    /// Apply `f` to every pixel in place.
    pub fn map_pixels_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut Pixel),
    {
        self.pixels.iter_mut().for_each(f);
    }

    /// Replace the buffer and dimensions in one step.
    ///
    /// The previous buffer is dropped. On error the image is unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Image::from_pixels`].
    pub fn replace_pixels(&mut self, width: u32, height: u32, pixels: Vec<Pixel>) -> Result<()> {
        *self = Image::from_pixels(width, height, pixels)?;
        Ok(())
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Image info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, pixels = {}",
            self.width,
            self.height,
            self.pixels.len()
        )?;
        writeln!(
            writer,
            "    row bytes = {}, payload bytes = {}",
            row_bytes(self.width),
            self.pixel_array_byte_size
        )?;
        Ok(())
    }
}
