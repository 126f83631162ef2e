//! Edit pipeline
//!
//! Decodes the input, applies the selected filters and writes the result.
//! Everything is validated before the first file is read, and the output
//! file is only written once every filter has succeeded.

use crate::error::{ArgError, EditError, EditResult};
use crate::options::{CropRect, EditOptions, GaussianArgs, brightness_change, sharpen_center};
use bmpedit_color::{greyscale_inplace, threshold_inplace};
use bmpedit_core::Image;
use bmpedit_filter::{EdgeOrientation, brightness_inplace, emboss, gaussian_blur, sharpen, sobel_edge};
use std::io::Write;
use std::path::Path;

fn read_input(path: &Path) -> EditResult<Image> {
    bmpedit_io::read_image(path).map_err(|source| EditError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the selected filters to an in-memory image.
///
/// Filters run in the fixed order blend, gaussian blur, brightness,
/// greyscale, sobel, invert, threshold, emboss, sharpen, crop. `second` is
/// the image blended in and is only required when blend is selected.
///
/// # Errors
///
/// Returns [`ArgError::MissingSecondInput`] if blend is selected without a
/// second image, or the first error raised by a filter.
pub fn apply_filters(
    options: &EditOptions,
    image: &mut Image,
    second: Option<&Image>,
) -> EditResult<()> {
    if options.is_passthrough() {
        log::info!("No filters selected, image is copied unchanged");
        return Ok(());
    }

    if let Some(coefficient) = options.blend {
        let other = second.ok_or(ArgError::MissingSecondInput)?;
        log::info!("Blending images...");
        image.blend_inplace(other, coefficient)?;
    }

    if let Some(GaussianArgs { repeat, stddev }) = options.gaussian {
        let repeat = u32::try_from(repeat).map_err(|_| ArgError::NegativeRepeat(repeat))?;
        log::info!("Applying gaussian blur...");
        *image = gaussian_blur(image, repeat, stddev)?;
    }

    if let Some(factor) = options.brightness {
        log::info!("Changing brightness of image...");
        brightness_inplace(image, brightness_change(factor))?;
    }

    if options.greyscale {
        log::info!("Converting the image to greyscale (RGB)");
        greyscale_inplace(image);
    }

    if options.sobel {
        log::info!("Applying sobel edge detection...");
        *image = sobel_edge(image, EdgeOrientation::All)?;
    }

    if options.invert {
        log::info!("Inverting image...");
        image.invert_inplace();
    }

    if let Some(t) = options.threshold {
        log::info!("Running threshold filter...");
        threshold_inplace(image, t)?;
    }

    if options.emboss {
        log::info!("Embossing image...");
        *image = emboss(image)?;
    }

    if let Some(strength) = options.sharpen {
        log::info!("Sharpening image...");
        *image = sharpen(image, sharpen_center(strength))?;
    }

    if let Some(CropRect { x1, y1, x2, y2 }) = options.crop {
        log::info!("Cropping image...");
        image.crop_inplace(x1, y1, x2, y2)?;
    }

    Ok(())
}

/// Run an edit, reporting dimensions to `report`.
///
/// Prints the input width and height, and the new dimensions when the image
/// was cropped.
pub fn run_with_report<W: Write>(options: &EditOptions, report: &mut W) -> EditResult<()> {
    options.validate()?;

    let first = options.inputs.first().ok_or(ArgError::MissingInput)?;
    let mut image = read_input(first)?;
    writeln!(report, "Image width: {}px", image.width())?;
    writeln!(report, "Image height: {}px", image.height())?;

    let second = match (options.blend, options.inputs.get(1)) {
        (Some(_), Some(path)) => Some(read_input(path)?),
        _ => None,
    };

    apply_filters(options, &mut image, second.as_ref())?;

    if options.crop.is_some() {
        writeln!(report, "New image width: {}px", image.width())?;
        writeln!(report, "New image height: {}px", image.height())?;
    }

    bmpedit_io::write_image(&image, &options.output).map_err(|source| EditError::Output {
        path: options.output.clone(),
        source,
    })?;
    log::debug!(
        "wrote {}x{} image to {}",
        image.width(),
        image.height(),
        options.output.display()
    );
    Ok(())
}

/// Run an edit, reporting dimensions on standard output.
pub fn run(options: &EditOptions) -> EditResult<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    run_with_report(options, &mut lock)
}
