//! bmpedit-test - Regression test framework for bmpedit
//!
//! Provides a small regression harness modelled on a numbered-check style:
//! each comparison bumps an index, failures are collected rather than
//! panicking, and [`RegParams::cleanup`] reports the outcome.
//!
//! # Usage
//!
//! ```ignore
//! use bmpedit_test::{RegParams, gradient_image};
//!
//! let mut rp = RegParams::new("invert");
//! let img = gradient_image(8, 6);
//! rp.compare_images(&img, &img.invert()?.invert()?);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use bmpedit_core::{Image, Pixel};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bmpedit-test is at crates/bmpedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/target/regout", workspace_root())
}

/// Deterministic color gradient.
///
/// Red ramps left to right, green ramps top to bottom, blue mixes both, so
/// any mirroring or flipping of the image changes the pixel values.
pub fn gradient_image(width: u32, height: u32) -> Image {
    let wd = width.max(2) - 1;
    let hd = height.max(2) - 1;
    Image::from_visual_fn(width, height, |x, y| {
        let r = (x * 255 / wd) as u8;
        let g = (y * 255 / hd) as u8;
        let b = ((x * 37 + y * 91) % 256) as u8;
        Pixel::new(r, g, b)
    })
    .unwrap_or_else(|e| panic!("gradient_image {}x{}: {}", width, height, e))
}

/// Checkerboard of `cell`-sized squares alternating `a` and `b`.
pub fn checker_image(width: u32, height: u32, cell: u32, a: Pixel, b: Pixel) -> Image {
    let cell = cell.max(1);
    Image::from_visual_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
    .unwrap_or_else(|e| panic!("checker_image {}x{}: {}", width, height, e))
}

/// Image with every pixel set to `pixel`.
pub fn solid_image(width: u32, height: u32, pixel: Pixel) -> Image {
    Image::filled(width, height, pixel)
        .unwrap_or_else(|e| panic!("solid_image {}x{}: {}", width, height, e))
}
