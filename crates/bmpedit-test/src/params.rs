//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use bmpedit_core::Image;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and record failures (default)
    #[default]
    Compare,
    /// Display mode - run and print, never record failures
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        if !self.display() {
            self.failures.push(msg);
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Computed value
    /// * `delta` - Allowed absolute difference
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            return false;
        }
        true
    }

    /// Compare two images for identical dimensions and pixels
    ///
    /// Pixels are compared at every visual coordinate.
    pub fn compare_images(&mut self, expected: &Image, actual: &Image) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - size mismatch \
                 {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.fail(msg);
            return false;
        }

        for y in 0..expected.height() as i32 {
            for x in 0..expected.width() as i32 {
                let p1 = expected.pixel_at(x, y).ok();
                let p2 = actual.pixel_at(x, y).ok();
                if p1 != p2 {
                    let msg = format!(
                        "Failure in {}_reg: image comparison for index {} - pixel mismatch \
                         at ({}, {}): {:?} vs {:?}",
                        self.test_name, self.index, x, y, p1, p2
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let first_diff = data1
                .iter()
                .zip(data2.iter())
                .position(|(a, b)| a != b)
                .unwrap_or(data1.len().min(data2.len()));
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}, first difference at byte {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write an image to the regout directory, read it back and compare
    ///
    /// # Returns
    ///
    /// The image as decoded from disk.
    pub fn write_image_and_check(&mut self, img: &Image) -> TestResult<Image> {
        fs::create_dir_all(regout_dir())?;
        let local_path = format!(
            "{}/{}.{:02}.bmp",
            regout_dir(),
            self.test_name,
            self.index + 1
        );

        bmpedit_io::write_image(img, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;
        let reloaded = bmpedit_io::read_image(&local_path).map_err(|e| TestError::ImageLoad {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        self.compare_images(img, &reloaded);
        Ok(reloaded)
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare_params() -> RegParams {
        RegParams {
            test_name: "unit".to_string(),
            index: 0,
            mode: RegTestMode::Compare,
            success: true,
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("compare"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = compare_params();
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 2);
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = compare_params();
        assert!(rp.compare_strings(b"abc", b"abc"));
        assert!(!rp.compare_strings(b"abc", b"abd"));
        assert!(!rp.cleanup());
    }
}
