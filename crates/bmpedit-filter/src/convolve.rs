//! Convolution operations
//!
//! Applies a 5×5 [`Kernel`] across an image. Neighbours are sampled with
//! [`Image::nearest_pixel`], so pixels past a border repeat the edge.
//! Output is always written to a fresh buffer; the source is only read.

use crate::{FilterResult, Kernel};
use bmpedit_core::{Image, Pixel};

/// Clamp a channel sum to `[0, 255]` and truncate toward zero.
#[inline]
fn clamp_channel(sum: f64) -> u8 {
    sum.clamp(0.0, 255.0) as u8
}

/// Compute the kernel response at visual `(x, y)`.
///
/// For each offset `(dx, dy)` the pixel nearest to `(x + dx, y + dy)` is
/// weighted and accumulated per channel in `f64`. Each sum is then clamped
/// to `[0, 255]` and truncated; there is no rounding to nearest.
pub fn apply_at(kernel: &Kernel, img: &Image, x: i32, y: i32) -> Pixel {
    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;

    for (dx, dy, k) in kernel.iter() {
        let p = img.nearest_pixel(x + dx, y + dy);
        sum_r += f64::from(p.red) * k;
        sum_g += f64::from(p.green) * k;
        sum_b += f64::from(p.blue) * k;
    }

    Pixel::new(
        clamp_channel(sum_r),
        clamp_channel(sum_g),
        clamp_channel(sum_b),
    )
}

/// Convolve an image with a kernel, returning a new image of the same size.
///
/// Replicate (clamp) border handling: pixels outside the image boundary
/// are treated as having the same value as the nearest edge pixel.
pub fn convolve(img: &Image, kernel: &Kernel) -> FilterResult<Image> {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let mut out = Image::new(img.width(), img.height())?;

    for y in 0..h {
        for x in 0..w {
            out.set_pixel_at(x, y, apply_at(kernel, img, x, y))?;
        }
    }

    Ok(out)
}

/// Convolve in place: the result replaces the image's buffer.
///
/// The response is computed from the untouched source and swapped in once
/// complete.
pub fn convolve_inplace(img: &mut Image, kernel: &Kernel) -> FilterResult<()> {
    let out = convolve(img, kernel)?;
    *img = out;
    Ok(())
}

/// Apply Gaussian blur
///
/// Generates the 5×5 Gaussian kernel for `stddev` once, then convolves
/// `repeat` times in sequence. `repeat == 0` returns an unchanged copy.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `stddev` is not finite and
/// positive, or [`FilterError::Core`] if a working buffer cannot be
/// allocated.
pub fn gaussian_blur(img: &Image, repeat: u32, stddev: f64) -> FilterResult<Image> {
    let kernel = Kernel::gaussian(stddev)?;
    log::debug!(
        "gaussian blur: repeat={} stddev={} centre weight={:.6}",
        repeat,
        stddev,
        kernel.get(0, 0).unwrap_or(0.0)
    );
    let mut out = img.try_clone()?;
    for _ in 0..repeat {
        convolve_inplace(&mut out, &kernel)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 image whose pixels encode their visual position.
    fn numbered3() -> Image {
        Image::from_visual_fn(3, 3, |x, y| Pixel::new((x * 10) as u8, (y * 10) as u8, 100))
            .unwrap()
    }

    fn single_tap(dx: i32, dy: i32) -> Kernel {
        let mut k = Kernel::zeros();
        k.set(dx, dy, 1.0).unwrap();
        k
    }

    #[test]
    fn test_identity_kernel() {
        let img = numbered3();
        assert_eq!(convolve(&img, &Kernel::identity()).unwrap(), img);
    }

    #[test]
    fn test_single_tap_shifts_with_clamping() {
        let img = numbered3();
        // Sample two to the left and one above
        let out = convolve(&img, &single_tap(-2, -1)).unwrap();
        // Interior-ish (2, 2) reads (0, 1)
        assert_eq!(out.pixel_at(2, 2).unwrap(), img.pixel_at(0, 1).unwrap());
        // Corner (0, 0) clamps to itself
        assert_eq!(out.pixel_at(0, 0).unwrap(), img.pixel_at(0, 0).unwrap());
        // (1, 0) clamps x to 0 and y to 0
        assert_eq!(out.pixel_at(1, 0).unwrap(), img.pixel_at(0, 0).unwrap());
    }

    #[test]
    fn test_corner_average_repeats_edges() {
        // Hand-computed: 5x5 box at (0,0) of a 3x3 image samples
        // x,y in {-2..2} clamped to {0,0,0,1,2}, so column 0 and row 0
        // each count three times.
        let img = Image::from_visual_fn(3, 3, |x, y| Pixel::gray((x * 3 + y * 30) as u8)).unwrap();
        let kernel = Kernel::from_rows([[1.0; 5]; 5]).normalized();
        let p = apply_at(&kernel, &img, 0, 0);

        let weights = [3.0, 1.0, 1.0];
        let mut expected = 0.0;
        for (yi, wy) in weights.iter().enumerate() {
            for (xi, wx) in weights.iter().enumerate() {
                expected += wx * wy * (xi * 3 + yi * 30) as f64;
            }
        }
        expected /= 25.0;
        assert_eq!(p, Pixel::gray(expected as u8));
    }

    #[test]
    fn test_clamp_and_truncate() {
        let img = Image::filled(2, 2, Pixel::new(100, 200, 50)).unwrap();
        let mut k = Kernel::zeros();
        k.set(0, 0, 1.999).unwrap();
        let p = apply_at(&k, &img, 0, 0);
        // 199.9 -> 199, 399.8 -> 255, 99.95 -> 99
        assert_eq!(p, Pixel::new(199, 255, 99));

        let mut neg = Kernel::zeros();
        neg.set(0, 0, -1.0).unwrap();
        assert_eq!(apply_at(&neg, &img, 1, 1), Pixel::BLACK);
    }

    #[test]
    fn test_gaussian_blur_flat_image_unchanged() {
        let img = Image::filled(6, 4, Pixel::new(40, 80, 120)).unwrap();
        let out = gaussian_blur(&img, 3, 1.0).unwrap();
        for p in out.pixels() {
            for (got, want) in [(p.red, 40u8), (p.green, 80), (p.blue, 120)] {
                // normalized weights may sum to a hair under 1
                assert!((i32::from(want) - i32::from(got)).abs() <= 1, "{got} vs {want}");
            }
        }
    }

    #[test]
    fn test_gaussian_blur_zero_repeat() {
        let img = numbered3();
        assert_eq!(gaussian_blur(&img, 0, 2.0).unwrap(), img);
        assert!(gaussian_blur(&img, 1, 0.0).is_err());
    }
}
