//! Error types for bmpedit

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or out-of-range command-line values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    /// Value contains characters other than digits and `.`
    #[error("a number is required, got {0:?}")]
    NotANumber(String),

    /// Comma-separated list with the wrong number of fields or a bad field
    #[error("expected {expected} as comma-separated values, got {value:?}")]
    MalformedList { expected: &'static str, value: String },

    /// Numeric value outside its accepted range
    #[error("{name} value must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Crop rectangle with `x1 >= x2` or `y1 >= y2`
    #[error("crop needs x1 < x2 and y1 < y2, got {x1},{y1},{x2},{y2}")]
    CropOrder { x1: i32, y1: i32, x2: i32, y2: i32 },

    /// Gaussian blur with a negative repeat count
    #[error("gaussian blur must repeat 0 or more times, got {0}")]
    NegativeRepeat(i32),

    /// Gaussian blur with a standard deviation that is not positive
    #[error("gaussian standard deviation must be positive, got {0}")]
    NonPositiveStdDev(f64),

    /// No input file was given
    #[error("an input file is required")]
    MissingInput,

    /// Blend selected with a single input file
    #[error("two input files are required for blend")]
    MissingSecondInput,
}

/// Errors that can occur while running an edit
#[derive(Debug, Error)]
pub enum EditError {
    /// Invalid options
    #[error("invalid argument: {0}")]
    Arg(#[from] ArgError),

    /// Input file could not be read or decoded
    #[error("reading {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: bmpedit_io::IoError,
    },

    /// Output file could not be written
    #[error("writing {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: bmpedit_io::IoError,
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bmpedit_core::Error),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] bmpedit_filter::FilterError),

    /// Color transform error
    #[error("color error: {0}")]
    Color(#[from] bmpedit_color::ColorError),

    /// Report could not be written
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type for edit operations
pub type EditResult<T> = Result<T, EditError>;
