//! Edge detection and enhancement operations
//!
//! - Directional Sobel filtering, combined by saturating addition -> [`sobel_edge`]
//! - Sharpening with an adjustable centre weight -> [`sharpen`]
//! - Emboss kernel convolution -> [`emboss`]

use crate::convolve::convolve;
use crate::{FilterResult, Kernel};
use bmpedit_core::{Image, add_two_images};

/// Edge detection orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeOrientation {
    /// Respond to intensity change along x
    Horizontal,
    /// Respond to intensity change along y
    Vertical,
    /// Sum of both directional responses
    #[default]
    All,
}

/// Apply Sobel edge detection.
///
/// With [`EdgeOrientation::All`] both kernels convolve the untouched source
/// into separate buffers; the two responses are then added per channel,
/// saturating at 255. Negative responses clamp to 0
/// inside the convolution, so only edges of one polarity show in each
/// direction.
///
/// # Arguments
/// * `img` - Input image
/// * `orientation` - Which edges to detect
pub fn sobel_edge(img: &Image, orientation: EdgeOrientation) -> FilterResult<Image> {
    match orientation {
        EdgeOrientation::Horizontal => convolve(img, &Kernel::sobel_horizontal()),
        EdgeOrientation::Vertical => convolve(img, &Kernel::sobel_vertical()),
        EdgeOrientation::All => {
            let mut horizontal = convolve(img, &Kernel::sobel_horizontal())?;
            let vertical = convolve(img, &Kernel::sobel_vertical())?;
            add_two_images(&mut horizontal, &vertical)?;
            Ok(horizontal)
        }
    }
}

/// Apply sharpening filter.
///
/// Uses [`Kernel::sharpen`]: a ring of -1 weights around `center`,
/// normalized. A centre just above 8 gives the strongest effect; larger
/// centres approach the identity.
///
/// # Arguments
/// * `img` - Input image
/// * `center` - Centre weight of the kernel
pub fn sharpen(img: &Image, center: f64) -> FilterResult<Image> {
    log::debug!("sharpen: centre weight {center}");
    convolve(img, &Kernel::sharpen(center))
}

/// Apply emboss effect.
///
/// Uses the fixed directional [`Kernel::emboss`] kernel, applied once.
pub fn emboss(img: &Image) -> FilterResult<Image> {
    convolve(img, &Kernel::emboss())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmpedit_core::Pixel;

    /// Left half dark, right half bright.
    fn vertical_step(w: u32, h: u32) -> Image {
        Image::from_visual_fn(w, h, |x, _| {
            if x < w / 2 { Pixel::gray(20) } else { Pixel::gray(220) }
        })
        .unwrap()
    }

    #[test]
    fn test_sobel_flat_image_is_black() {
        let img = Image::filled(7, 5, Pixel::new(90, 10, 200)).unwrap();
        for orientation in [
            EdgeOrientation::Horizontal,
            EdgeOrientation::Vertical,
            EdgeOrientation::All,
        ] {
            let out = sobel_edge(&img, orientation).unwrap();
            assert!(out.pixels().iter().all(|&p| p == Pixel::BLACK));
        }
    }

    #[test]
    fn test_sobel_horizontal_detects_vertical_step() {
        let img = vertical_step(8, 4);
        let out = sobel_edge(&img, EdgeOrientation::Horizontal).unwrap();
        // The kernel weighs left minus right: 4 * (20 - 220) clamps to 0.
        assert_eq!(out.pixel_at(3, 1).unwrap(), Pixel::BLACK);
        // Far from the step nothing changes.
        assert_eq!(out.pixel_at(0, 1).unwrap(), Pixel::BLACK);
        assert_eq!(out.pixel_at(7, 1).unwrap(), Pixel::BLACK);

        let flipped = img.invert().unwrap();
        let out = sobel_edge(&flipped, EdgeOrientation::Horizontal).unwrap();
        // Inverted: left 235, right 35 -> 4 * 200 saturates.
        assert_eq!(out.pixel_at(3, 1).unwrap(), Pixel::WHITE);
        assert_eq!(out.pixel_at(4, 1).unwrap(), Pixel::WHITE);
        assert_eq!(out.pixel_at(0, 1).unwrap(), Pixel::BLACK);
    }

    #[test]
    fn test_sobel_all_is_saturating_sum() {
        let img = Image::from_visual_fn(6, 6, |x, y| Pixel::gray((x * 30 + y * 7) as u8)).unwrap();
        let h = sobel_edge(&img, EdgeOrientation::Horizontal).unwrap();
        let v = sobel_edge(&img, EdgeOrientation::Vertical).unwrap();
        let all = sobel_edge(&img, EdgeOrientation::All).unwrap();
        for ((a, b), c) in h.pixels().iter().zip(v.pixels()).zip(all.pixels()) {
            assert_eq!(a.saturating_add(*b), *c);
        }
    }

    #[test]
    fn test_sobel_all_leaves_source_untouched() {
        let img = vertical_step(8, 4);
        let before = img.clone();
        let all = sobel_edge(&img, EdgeOrientation::All).unwrap();
        assert_eq!(img, before);
        // Inverting the step flips which direction responds.
        let flipped = sobel_edge(&img.invert().unwrap(), EdgeOrientation::All).unwrap();
        assert_ne!(all, flipped);
    }

    #[test]
    fn test_emboss_flat_image_unchanged() {
        // Emboss weights sum to 1, so a flat field is preserved exactly.
        let img = Image::filled(5, 5, Pixel::new(12, 34, 56)).unwrap();
        assert_eq!(emboss(&img).unwrap(), img);
    }

    #[test]
    fn test_sharpen_flat_image_close_to_source() {
        let img = Image::filled(5, 5, Pixel::gray(100)).unwrap();
        let out = sharpen(&img, 18.01).unwrap();
        for p in out.pixels() {
            assert!((99..=100).contains(&p.red), "got {}", p.red);
        }
    }

    #[test]
    fn test_sharpen_boosts_step_contrast() {
        let img = vertical_step(8, 3);
        let out = sharpen(&img, 8.01).unwrap();
        assert!(out.pixel_at(3, 1).unwrap().red < 20);
        assert!(out.pixel_at(4, 1).unwrap().red > 220);
    }
}
