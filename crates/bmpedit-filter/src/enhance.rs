//! Brightness adjustment
//!
//! Moves a pixel's average intensity to `p * avg + avg` while keeping the
//! differences between its channels. Each channel is rebuilt as
//! `3 * new_avg - (sum of the other two old channels)`, truncated toward
//! zero and clamped to `[0, 255]`. For non-grey pixels a single channel
//! can clamp even when the new average is in range.

use crate::{FilterError, FilterResult};
use bmpedit_core::{Image, Pixel};

/// Lower bound of the brightness change fraction
pub const MIN_BRIGHTNESS_CHANGE: f64 = -1.0;

/// Upper bound of the brightness change fraction
pub const MAX_BRIGHTNESS_CHANGE: f64 = 1.0;

/// Truncate toward zero, then clamp to a channel value.
#[inline]
fn clamp_truncated(value: f64) -> u8 {
    (value.trunc() as i64).clamp(0, 255) as u8
}

/// Change the brightness of one pixel.
///
/// `change` is the fractional change of the average: `-1.0` makes the pixel
/// black, `0.0` leaves it unchanged and `1.0` doubles the average.
pub fn brightness_pixel(change: f64, pixel: Pixel) -> Pixel {
    let r = f64::from(pixel.red);
    let g = f64::from(pixel.green);
    let b = f64::from(pixel.blue);

    let avg = pixel.average();
    let new_avg = change * avg + avg;

    Pixel::new(
        clamp_truncated(3.0 * new_avg - g - b),
        clamp_truncated(3.0 * new_avg - r - b),
        clamp_truncated(3.0 * new_avg - r - g),
    )
}

/// Change the brightness of every pixel in place.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `change` is not a finite
/// value in `[-1, 1]`. The image is left untouched on error.
pub fn brightness_inplace(img: &mut Image, change: f64) -> FilterResult<()> {
    if !(MIN_BRIGHTNESS_CHANGE..=MAX_BRIGHTNESS_CHANGE).contains(&change) {
        return Err(FilterError::InvalidParameters(format!(
            "brightness change must be in [-1, 1], got {change}"
        )));
    }
    img.map_pixels_inplace(|p| *p = brightness_pixel(change, *p));
    Ok(())
}
