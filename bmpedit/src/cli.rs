//! Command-line arguments
//!
//! Flags select the output file and any number of filters. Numeric values
//! must consist only of digits and `.`; range checks happen later in
//! [`EditOptions::validate`].

use crate::error::ArgError;
use crate::options::{CropRect, DEFAULT_OUTPUT, EditOptions, GaussianArgs};
use clap::Parser;
use std::path::PathBuf;

const ABOUT: &str = "Simple edits of 24-bit BMP image files";

const LONG_ABOUT: &str = "\
Simple edits of 24-bit BMP image files.

The width and height of the input image are printed first. The selected
filters are then applied in a fixed order (blend, gaussian blur, brightness,
greyscale, sobel, invert, threshold, emboss, sharpen, crop) and the result
is stored in BMP format in the output file.";

/// bmpedit command-line arguments
#[derive(Debug, Clone, Parser)]
#[command(name = "bmpedit", about = ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    /// Output file for the modified image
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Threshold filter: pixels brighter than the value become white
    #[arg(short = 't', long = "threshold", value_name = "0.0-1.0", value_parser = parse_decimal)]
    pub threshold: Option<f64>,

    /// Invert the image colours
    #[arg(short = 'i', long = "invert")]
    pub invert: bool,

    /// Blend with a second input: 0.0 gives image 1, 1.0 gives image 2
    #[arg(short = 'b', long = "blend", value_name = "0.0-1.0", value_parser = parse_decimal)]
    pub blend: Option<f64>,

    /// Crop from (x1,y1) inclusive to (x2,y2) exclusive
    #[arg(short = 'c', long = "crop", value_name = "x1,y1,x2,y2", value_parser = parse_crop_arg)]
    pub crop: Option<CropRect>,

    /// Change brightness by 100*(value-1)% keeping colour proportions
    #[arg(short = 'B', long = "brightness", value_name = "0.0-2.0", value_parser = parse_decimal)]
    pub brightness: Option<f64>,

    /// Emboss effect, consider using with -g
    #[arg(short = 'e', long = "emboss")]
    pub emboss: bool,

    /// Sharpen by various degrees; 16.0 is a reasonable value
    #[arg(short = 's', long = "sharpen", value_name = "0.0-20.0", value_parser = parse_decimal)]
    pub sharpen: Option<f64>,

    /// Convert to greyscale (still RGB)
    #[arg(short = 'g', long = "greyscale")]
    pub greyscale: bool,

    /// Gaussian blur run `repeat` times with standard deviation `sd`
    #[arg(short = 'G', long = "gaussian", value_name = "repeat,sd", value_parser = parse_gaussian_arg)]
    pub gaussian: Option<GaussianArgs>,

    /// Sobel edge detection, try with -g
    #[arg(short = 'S', long = "sobel")]
    pub sobel: bool,

    /// Input image, plus a second one for blend
    #[arg(value_name = "INPUT", required = true, num_args = 1..=2)]
    pub inputs: Vec<PathBuf>,
}

impl From<Args> for EditOptions {
    fn from(args: Args) -> Self {
        EditOptions {
            output: args.output,
            inputs: args.inputs,
            threshold: args.threshold,
            invert: args.invert,
            blend: args.blend,
            crop: args.crop,
            brightness: args.brightness,
            emboss: args.emboss,
            sharpen: args.sharpen,
            greyscale: args.greyscale,
            gaussian: args.gaussian,
            sobel: args.sobel,
        }
    }
}

/// True if `s` is non-empty and made only of ASCII digits and `.`.
pub fn is_digit_and_radix_point(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Parse an unsigned decimal such as `0.5`, `16` or `.25`.
///
/// # Errors
///
/// Returns [`ArgError::NotANumber`] for signs, exponents, whitespace or more
/// than one `.`.
pub fn parse_decimal(s: &str) -> Result<f64, ArgError> {
    if !is_digit_and_radix_point(s) {
        return Err(ArgError::NotANumber(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| ArgError::NotANumber(s.to_string()))
}

fn split_fields<'a>(s: &'a str, n: usize, expected: &'static str) -> Result<Vec<&'a str>, ArgError> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    if fields.len() != n || fields.iter().any(|f| f.is_empty()) {
        return Err(ArgError::MalformedList {
            expected,
            value: s.to_string(),
        });
    }
    Ok(fields)
}

/// Parse a crop rectangle `x1,y1,x2,y2`.
///
/// Coordinate order is not checked here.
pub fn parse_crop_arg(s: &str) -> Result<CropRect, ArgError> {
    const EXPECTED: &str = "x1,y1,x2,y2";
    let fields = split_fields(s, 4, EXPECTED)?;
    let mut coords = [0i32; 4];
    for (slot, field) in coords.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| ArgError::MalformedList {
            expected: EXPECTED,
            value: s.to_string(),
        })?;
    }
    let [x1, y1, x2, y2] = coords;
    Ok(CropRect { x1, y1, x2, y2 })
}

/// Parse Gaussian blur arguments `repeat,sd`.
pub fn parse_gaussian_arg(s: &str) -> Result<GaussianArgs, ArgError> {
    const EXPECTED: &str = "repeat,sd";
    let malformed = || ArgError::MalformedList {
        expected: EXPECTED,
        value: s.to_string(),
    };
    let fields = split_fields(s, 2, EXPECTED)?;
    let repeat = fields[0].parse::<i32>().map_err(|_| malformed())?;
    let stddev = fields[1].parse::<f64>().map_err(|_| malformed())?;
    Ok(GaussianArgs { repeat, stddev })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("0.5"), Ok(0.5));
        assert_eq!(parse_decimal("16"), Ok(16.0));
        assert_eq!(parse_decimal(".25"), Ok(0.25));
        assert_eq!(parse_decimal("2."), Ok(2.0));
        for bad in ["", "-1", "+1", "1e3", " 1", "abc", "1.2.3", "."] {
            assert!(parse_decimal(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_parse_crop_arg() {
        assert_eq!(
            parse_crop_arg("1,2,30,40"),
            Ok(CropRect {
                x1: 1,
                y1: 2,
                x2: 30,
                y2: 40
            })
        );
        assert_eq!(parse_crop_arg(" 0, 0 ,5,5").map(|c| c.x2), Ok(5));
        assert!(parse_crop_arg("1,2,3").is_err());
        assert!(parse_crop_arg("1,2,3,4,5").is_err());
        assert!(parse_crop_arg("1,,3,4").is_err());
        assert!(parse_crop_arg("a,b,c,d").is_err());
    }

    #[test]
    fn test_parse_gaussian_arg() {
        assert_eq!(
            parse_gaussian_arg("3,1.5"),
            Ok(GaussianArgs {
                repeat: 3,
                stddev: 1.5
            })
        );
        assert_eq!(parse_gaussian_arg("-1,2").map(|g| g.repeat), Ok(-1));
        assert!(parse_gaussian_arg("3").is_err());
        assert!(parse_gaussian_arg("1.5,3").is_err());
        assert!(parse_gaussian_arg("2,x").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "bmpedit", "-S", "-c", "0,0,4,4", "-o", "edges.bmp", "-t", "0.5", "in.bmp",
        ])
        .unwrap();
        let opts = EditOptions::from(args);
        assert!(opts.sobel);
        assert_eq!(opts.threshold, Some(0.5));
        assert_eq!(opts.output, PathBuf::from("edges.bmp"));
        assert_eq!(opts.inputs, vec![PathBuf::from("in.bmp")]);
        assert!(opts.crop.is_some());
        assert!(!opts.invert);
    }

    #[test]
    fn test_args_defaults_and_errors() {
        let args = Args::try_parse_from(["bmpedit", "in.bmp"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.bmp"));

        assert!(Args::try_parse_from(["bmpedit"]).is_err());
        assert!(Args::try_parse_from(["bmpedit", "-t", "-0.5", "in.bmp"]).is_err());
        assert!(Args::try_parse_from(["bmpedit", "-B", "x", "in.bmp"]).is_err());
        assert!(Args::try_parse_from(["bmpedit", "a.bmp", "b.bmp", "c.bmp"]).is_err());
    }

    #[test]
    fn test_args_blend_two_inputs() {
        let args = Args::try_parse_from(["bmpedit", "-b", "0.3", "a.bmp", "b.bmp"]).unwrap();
        let opts = EditOptions::from(args);
        assert_eq!(opts.blend, Some(0.3));
        assert_eq!(opts.inputs.len(), 2);
        assert!(opts.validate().is_ok());
    }
}
