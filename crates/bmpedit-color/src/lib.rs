//! bmpedit-color - Point color transforms
//!
//! - **Thresholding** ([`threshold`]): black and white by grey level
//! - **Greyscale** ([`colorspace`]): channel averaging

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{grey_value, greyscale, greyscale_inplace, greyscale_pixel};
pub use threshold::{grey_fraction, threshold_inplace, threshold_pixel, threshold_to_binary};
