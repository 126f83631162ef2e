//! Edit configuration
//!
//! [`EditOptions`] describes one run: the files involved and which filters
//! to apply. Selected filters always run in this order, no matter how they
//! were requested: blend, gaussian blur, brightness, greyscale, sobel,
//! invert, threshold, emboss, sharpen, crop.

use crate::error::ArgError;
use std::path::PathBuf;

/// Default output path
pub const DEFAULT_OUTPUT: &str = "out.bmp";

/// Crop rectangle: `x1 <= x < x2`, `y1 <= y < y2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// Gaussian blur parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianArgs {
    /// Number of passes
    pub repeat: i32,
    /// Standard deviation used to generate the kernel
    pub stddev: f64,
}

/// One edit run
#[derive(Debug, Clone, PartialEq)]
pub struct EditOptions {
    /// Destination file
    pub output: PathBuf,
    /// Input files; the second is only read for blend
    pub inputs: Vec<PathBuf>,
    /// Threshold level in `[0, 1]`
    pub threshold: Option<f64>,
    pub invert: bool,
    /// Blend coefficient in `[0, 1]`: 0 keeps the first input, 1 the second
    pub blend: Option<f64>,
    pub crop: Option<CropRect>,
    /// Brightness factor in `[0, 2]`: 1 is no change
    pub brightness: Option<f64>,
    pub emboss: bool,
    /// Sharpen strength in `[0, 20]`
    pub sharpen: Option<f64>,
    pub greyscale: bool,
    pub gaussian: Option<GaussianArgs>,
    pub sobel: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            inputs: Vec::new(),
            threshold: None,
            invert: false,
            blend: None,
            crop: None,
            brightness: None,
            emboss: false,
            sharpen: None,
            greyscale: false,
            gaussian: None,
            sobel: false,
        }
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ArgError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ArgError::OutOfRange {
            name,
            min,
            max,
            value,
        })
    }
}

impl EditOptions {
    /// Create options for a single input with no filters selected.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            inputs: vec![input.into()],
            ..Self::default()
        }
    }

    /// Check every value before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArgError`] found.
    pub fn validate(&self) -> Result<(), ArgError> {
        if self.inputs.is_empty() {
            return Err(ArgError::MissingInput);
        }
        if let Some(t) = self.threshold {
            check_range("threshold", t, 0.0, 1.0)?;
        }
        if let Some(c) = self.blend {
            check_range("blend", c, 0.0, 1.0)?;
            if self.inputs.len() < 2 {
                return Err(ArgError::MissingSecondInput);
            }
        }
        if let Some(b) = self.brightness {
            check_range("brightness", b, 0.0, 2.0)?;
        }
        if let Some(s) = self.sharpen {
            check_range("sharpen", s, 0.0, 20.0)?;
        }
        if let Some(CropRect { x1, y1, x2, y2 }) = self.crop {
            if x1 >= x2 || y1 >= y2 {
                return Err(ArgError::CropOrder { x1, y1, x2, y2 });
            }
        }
        if let Some(GaussianArgs { repeat, stddev }) = self.gaussian {
            if repeat < 0 {
                return Err(ArgError::NegativeRepeat(repeat));
            }
            if !(stddev.is_finite() && stddev > 0.0) {
                return Err(ArgError::NonPositiveStdDev(stddev));
            }
        }
        Ok(())
    }

    /// True when no filter is selected.
    pub fn is_passthrough(&self) -> bool {
        self.threshold.is_none()
            && !self.invert
            && self.blend.is_none()
            && self.crop.is_none()
            && self.brightness.is_none()
            && !self.emboss
            && self.sharpen.is_none()
            && !self.greyscale
            && self.gaussian.is_none()
            && !self.sobel
    }
}

/// Brightness factor `B` in `[0, 2]` to fractional change `B - 1`.
#[inline]
pub fn brightness_change(factor: f64) -> f64 {
    factor - 1.0
}

/// Sharpen strength in `[0, 20]` to kernel centre weight.
///
/// Strength 20 gives 8.01, just above the -8 of the surrounding ring.
#[inline]
pub fn sharpen_center(strength: f64) -> f64 {
    8.01 + (20.0 - strength)
}
