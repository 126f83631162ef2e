//! Thresholding to black and white
//!
//! Each pixel's grey level is its channel average scaled to `[0, 1]`.
//! Pixels strictly brighter than the threshold become white, all others
//! black.

use crate::{ColorError, ColorResult};
use bmpedit_core::{Image, Pixel};

/// Grey level of a pixel as a fraction of full intensity.
#[inline]
pub fn grey_fraction(pixel: Pixel) -> f64 {
    pixel.average() / 255.0
}

/// Map one pixel to white if its grey level exceeds `threshold`, else black.
///
/// No range check is made here; a threshold below 0 turns everything but
/// black white, and one of 1 or more turns everything black.
#[inline]
pub fn threshold_pixel(threshold: f64, pixel: Pixel) -> Pixel {
    if grey_fraction(pixel) > threshold {
        Pixel::WHITE
    } else {
        Pixel::BLACK
    }
}

fn check_threshold(threshold: f64) -> ColorResult<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ColorError::InvalidParameters(format!(
            "threshold must be in [0, 1], got {threshold}"
        )));
    }
    Ok(())
}

/// Threshold an image in place.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `threshold` is outside
/// `[0, 1]`. The image is unchanged on error.
pub fn threshold_inplace(img: &mut Image, threshold: f64) -> ColorResult<()> {
    check_threshold(threshold)?;
    img.map_pixels_inplace(|p| *p = threshold_pixel(threshold, *p));
    Ok(())
}

/// Threshold an image, returning a new black and white image.
///
/// # Errors
///
/// Same as [`threshold_inplace`], plus [`ColorError::Core`] if the copy
/// cannot be allocated.
pub fn threshold_to_binary(img: &Image, threshold: f64) -> ColorResult<Image> {
    check_threshold(threshold)?;
    let mut out = img.try_clone()?;
    threshold_inplace(&mut out, threshold)?;
    Ok(out)
}
