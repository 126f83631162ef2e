//! Image blending
//!
//! Linear interpolation between two equal-sized images.

use super::Image;
use crate::error::Result;

impl Image {
    /// Blend `other` into this image.
    ///
    /// Each channel becomes `(1 - fract) * self + fract * other`, truncated
    /// toward zero. `fract = 0.0` keeps this image, `fract = 1.0` yields
    /// `other`. The range of `fract` is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DimensionMismatch`] if width, height or pixel
    /// count differ; neither image is modified.
    pub fn blend_inplace(&mut self, other: &Image, fract: f64) -> Result<()> {
        self.check_same_size(other)?;
        for (dst, src) in self.pixels.iter_mut().zip(other.pixels.iter()) {
            *dst = dst.mix(*src, fract);
        }
        Ok(())
    }

    /// Return a blended copy. See [`Image::blend_inplace`].
    pub fn blend(&self, other: &Image, fract: f64) -> Result<Image> {
        let mut out = self.try_clone()?;
        out.blend_inplace(other, fract)?;
        Ok(out)
    }
}

/// Blend `img2` into `img1` with coefficient `fract`.
///
/// The result overwrites `img1`.
pub fn blend_two_images(fract: f64, img1: &mut Image, img2: &Image) -> Result<()> {
    img1.blend_inplace(img2, fract)
}
