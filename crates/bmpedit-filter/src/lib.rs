//! bmpedit-filter - Neighbourhood and tone filters
//!
//! This crate provides the kernel-based filters of the editor:
//!
//! - 5×5 convolution with edge-clamped sampling
//! - Gaussian blur
//! - Edge detection and enhancement (Sobel, sharpen, emboss)
//! - Brightness adjustment

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{apply_at, convolve, convolve_inplace, gaussian_blur};
pub use edge::{EdgeOrientation, emboss, sharpen, sobel_edge};
pub use enhance::{brightness_inplace, brightness_pixel};
