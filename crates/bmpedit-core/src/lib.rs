//! bmpedit Core - Basic data structures for 24-bit image editing
//!
//! This crate provides the fundamental data structures used throughout
//! the bmpedit workspace:
//!
//! - [`Pixel`] - An RGB triple with 8 bits per channel, no alpha
//! - [`Image`] - An owned width×height grid of pixels
//! - Coordinate mapping and edge-clamped sampling ([`Image::pixel_at`],
//!   [`Image::nearest_pixel`])
//! - Whole-image pixel arithmetic: invert, blend, saturating add, crop
//!
//! # Coordinates
//!
//! All public addressing uses visual coordinates: `x = 0` is the left
//! column and `y = 0` is the top row. Storage order is private to
//! [`Image`]; see [`image::storage_index`] for the mapping.

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{
    Image, add_two_images, blend_two_images, row_bytes, row_padding, storage_index,
};
pub use pixel::Pixel;
