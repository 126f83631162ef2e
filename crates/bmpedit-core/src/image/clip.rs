//! Rectangle cropping

use super::{Image, alloc_pixels};
use crate::error::{Error, Result};
use crate::pixel::Pixel;

impl Image {
    /// Crop to the rectangle `x1 <= x < x2`, `y1 <= y < y2`.
    ///
    /// The pixel at visual `(x, y)` moves to `(x - x1, y - y1)` in the new
    /// image, which replaces this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the new width or height is not
    /// positive, exceeds the current dimensions, or the rectangle extends
    /// past an image edge. The image is unchanged on error.
    pub fn crop_inplace(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        let cropped = self.crop(x1, y1, x2, y2)?;
        *self = cropped;
        Ok(())
    }

    /// Return the cropped rectangle as a new image. See [`Image::crop_inplace`].
    pub fn crop(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Image> {
        let new_width = i64::from(x2) - i64::from(x1);
        let new_height = i64::from(y2) - i64::from(y1);
        if new_width <= 0
            || new_height <= 0
            || new_width > i64::from(self.width)
            || new_height > i64::from(self.height)
        {
            return Err(Error::InvalidParameter(format!(
                "crop ({x1},{y1})-({x2},{y2}) gives {new_width}x{new_height}, \
                 image is {}x{}",
                self.width, self.height
            )));
        }
        if x1 < 0
            || y1 < 0
            || i64::from(x2) > i64::from(self.width)
            || i64::from(y2) > i64::from(self.height)
        {
            return Err(Error::InvalidParameter(format!(
                "crop ({x1},{y1})-({x2},{y2}) extends outside {}x{} image",
                self.width, self.height
            )));
        }

        let (new_width, new_height) = (new_width as u32, new_height as u32);
        let pixels = alloc_pixels(new_width as usize * new_height as usize, Pixel::BLACK)?;
        let mut out = Image::from_pixels(new_width, new_height, pixels)?;
        for y in y1..y2 {
            for x in x1..x2 {
                let pixel = self.pixel_at(x, y)?;
                out.set_pixel_at(x - x1, y - y1, pixel)?;
            }
        }
        log::debug!(
            "crop {}x{} -> {}x{}",
            self.width,
            self.height,
            out.width,
            out.height
        );
        Ok(out)
    }
}
