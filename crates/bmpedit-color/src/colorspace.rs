//! Greyscale conversion
//!
//! Every channel is replaced by the integer average of the three.

use crate::ColorResult;
use bmpedit_core::{Image, Pixel};

/// Grey value of a pixel: `(r + g + b) / 3`, truncated.
#[inline]
pub fn grey_value(pixel: Pixel) -> u8 {
    // at most 765 / 3
    (pixel.channel_sum() / 3) as u8
}

/// Convert one pixel to grey.
#[inline]
pub fn greyscale_pixel(pixel: Pixel) -> Pixel {
    Pixel::gray(grey_value(pixel))
}

/// Convert an image to greyscale in place.
pub fn greyscale_inplace(img: &mut Image) {
    img.map_pixels_inplace(|p| *p = greyscale_pixel(*p));
}

/// Convert an image to greyscale, returning a new image.
///
/// # Errors
///
/// Returns [`crate::ColorError::Core`] if the copy cannot be allocated.
pub fn greyscale(img: &Image) -> ColorResult<Image> {
    let mut out = img.try_clone()?;
    greyscale_inplace(&mut out);
    Ok(out)
}
