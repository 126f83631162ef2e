//! bmpedit - Simple edits of 24-bit bitmap files
//!
//! Reads an uncompressed 24 bits-per-pixel BMP file, applies a fixed
//! catalogue of filters (threshold, invert, blend, crop, brightness,
//! greyscale, emboss, sharpen, Sobel edge detection, Gaussian blur) and
//! writes the result.
//!
//! # Example
//!
//! ```
//! use bmpedit::{EditOptions, Image, Pixel, apply_filters};
//!
//! let mut img = Image::filled(4, 4, Pixel::new(10, 20, 30)).unwrap();
//! let options = EditOptions {
//!     invert: true,
//!     ..EditOptions::default()
//! };
//! apply_filters(&options, &mut img, None).unwrap();
//! assert_eq!(img.pixel_at(0, 0).unwrap(), Pixel::new(245, 235, 225));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bmpedit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bmpedit_color as color;
pub use bmpedit_filter as filter;
pub use bmpedit_io as io;

pub mod cli;
mod error;
pub mod options;
pub mod pipeline;

pub use error::{ArgError, EditError, EditResult};
pub use options::{CropRect, EditOptions, GaussianArgs};
pub use pipeline::{apply_filters, run, run_with_report};
