//! I/O error types
//!
//! Provides a unified error type for bitmap decoding and encoding so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is a bitmap variant this codec does not handle
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bitmap data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. allocation failure)
    #[error("core error: {0}")]
    Core(#[from] bmpedit_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
