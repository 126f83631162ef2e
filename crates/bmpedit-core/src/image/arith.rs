//! Pointwise arithmetic on whole images
//!
//! Inversion and saturating addition. Both walk the buffer in storage
//! order; neither depends on pixel position.

use super::Image;
use crate::error::{Error, Result};

impl Image {
    /// Invert all pixels in place: each channel becomes `255 - channel`.
    ///
    /// Applying it twice restores the original image.
    pub fn invert_inplace(&mut self) {
        self.map_pixels_inplace(|p| *p = p.inverted());
    }

    /// Return an inverted copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the copy cannot be reserved.
    pub fn invert(&self) -> Result<Image> {
        let mut out = self.try_clone()?;
        out.invert_inplace();
        Ok(out)
    }

    /// Add `other` into this image with per-channel saturation,
    /// `min(a + b, 255)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if width, height or pixel count
    /// differ. Neither image is modified in that case.
    pub fn add_inplace(&mut self, other: &Image) -> Result<()> {
        self.check_same_size(other)?;
        for (dst, src) in self.pixels.iter_mut().zip(other.pixels.iter()) {
            *dst = dst.saturating_add(*src);
        }
        Ok(())
    }

    /// Fail with [`Error::DimensionMismatch`] unless both images have the
    /// same width, height and pixel count.
    pub(crate) fn check_same_size(&self, other: &Image) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        Ok(())
    }
}

/// Add two images with per-channel saturation, storing the sum in `dst`.
///
/// Free-function form of [`Image::add_inplace`].
pub fn add_two_images(dst: &mut Image, src: &Image) -> Result<()> {
    dst.add_inplace(src)
}
