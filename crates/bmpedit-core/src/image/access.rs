//! Pixel access by visual coordinate
//!
//! Every coordinate-addressed read or write goes through [`storage_index`].
//! [`Image::nearest_pixel`] is the edge-clamped sampler used by every
//! neighborhood operation.

use super::Image;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Map visual `(x, y)` to a storage index.
///
/// `index = width * y + (width - 1 - x)`, with `y = 0` at the top and
/// `x = 0` at the left. The result is signed because callers may pass
/// coordinates outside the image; it is only meaningful once checked
/// against `0..n_of_pixels`.
#[inline]
pub fn storage_index(width: u32, x: i32, y: i32) -> i64 {
    let width = i64::from(width);
    width * i64::from(y) + (width - 1 - i64::from(x))
}

impl Image {
    /// Storage index for coordinates already known to be inside the image.
    #[inline]
    pub(crate) fn index_unchecked(&self, x: u32, y: u32) -> usize {
        let w = self.width as usize;
        w * y as usize + (w - 1 - x as usize)
    }

    /// Checked storage index.
    ///
    /// Only the final index is bounds checked, so an `x` just outside a row
    /// lands in the neighbouring row exactly as the index formula dictates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside
    /// `0..n_of_pixels`.
    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        let index = storage_index(self.width, x, y);
        let len = self.pixels.len();
        if index < 0 || index >= len as i64 {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(index as usize)
    }

    /// Get the pixel at visual `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the mapped index falls outside
    /// the pixel array.
    pub fn pixel_at(&self, x: i32, y: i32) -> Result<Pixel> {
        let index = self.checked_index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Get a mutable reference to the pixel at visual `(x, y)`.
    pub fn pixel_at_mut(&mut self, x: i32, y: i32) -> Result<&mut Pixel> {
        let index = self.checked_index(x, y)?;
        Ok(&mut self.pixels[index])
    }

    /// Set the pixel at visual `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the mapped index falls outside
    /// the pixel array.
    pub fn set_pixel_at(&mut self, x: i32, y: i32, pixel: Pixel) -> Result<()> {
        *self.pixel_at_mut(x, y)? = pixel;
        Ok(())
    }

    /// Get the pixel nearest to `(x, y)` inside the image.
    ///
    /// `x` is clamped to `[0, width - 1]` and `y` to `[0, height - 1]`, so
    /// samples past a border repeat the edge row or column. Never fails.
    #[inline]
    pub fn nearest_pixel(&self, x: i32, y: i32) -> Pixel {
        let cx = x.clamp(0, self.width as i32 - 1) as u32;
        let cy = y.clamp(0, self.height as i32 - 1) as u32;
        self.pixels[self.index_unchecked(cx, cy)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Image {
        Image::from_visual_fn(width, height, |x, y| Pixel::gray((y * width + x) as u8)).unwrap()
    }

    #[test]
    fn test_storage_index_mapping() {
        // 3 wide: visual row 0 is stored right-to-left at 0..3
        assert_eq!(storage_index(3, 0, 0), 2);
        assert_eq!(storage_index(3, 2, 0), 0);
        assert_eq!(storage_index(3, 0, 1), 5);
        assert_eq!(storage_index(3, 1, 2), 7);
    }

    #[test]
    fn test_pixel_at_uses_mapping() {
        let img = numbered(3, 2);
        assert_eq!(img.pixels()[2], Pixel::gray(0));
        assert_eq!(img.pixels()[0], Pixel::gray(2));
        assert_eq!(img.pixel_at(1, 1).unwrap(), Pixel::gray(4));
    }

    #[test]
    fn test_pixel_at_out_of_bounds() {
        let img = numbered(3, 2);
        assert!(matches!(
            img.pixel_at(0, 2),
            Err(Error::IndexOutOfBounds { index: 8, len: 6 })
        ));
        assert!(img.pixel_at(3, 0).is_err());
    }

    #[test]
    fn test_set_pixel_at() {
        let mut img = Image::new(2, 2).unwrap();
        img.set_pixel_at(0, 1, Pixel::new(1, 2, 3)).unwrap();
        assert_eq!(img.pixel_at(0, 1).unwrap(), Pixel::new(1, 2, 3));
        assert_eq!(img.pixels()[3], Pixel::new(1, 2, 3));
        assert!(img.set_pixel_at(5, 5, Pixel::WHITE).is_err());
    }

    #[test]
    fn test_nearest_pixel_clamps() {
        let img = numbered(3, 3);
        assert_eq!(img.nearest_pixel(-2, -2), img.pixel_at(0, 0).unwrap());
        assert_eq!(img.nearest_pixel(5, -1), img.pixel_at(2, 0).unwrap());
        assert_eq!(img.nearest_pixel(1, 9), img.pixel_at(1, 2).unwrap());
        assert_eq!(img.nearest_pixel(1, 1), img.pixel_at(1, 1).unwrap());
    }
}
