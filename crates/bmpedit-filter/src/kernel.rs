//! Convolution kernels
//!
//! A [`Kernel`] is a fixed 5×5 matrix of real weights addressed by offset
//! `(dx, dy)` from its centre, with `dx, dy` in `-2..=2`. Every kernel in
//! the filter catalogue has this size, so the weights live in a plain
//! array.

use crate::{FilterError, FilterResult};
use std::f64::consts::PI;

/// Side length of every kernel
pub const KERNEL_SIZE: usize = 5;

/// Largest offset from the kernel centre
pub const KERNEL_RADIUS: i32 = 2;

/// A 5×5 convolution kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// Weights indexed `[dy + 2][dx + 2]`
    data: [[f64; KERNEL_SIZE]; KERNEL_SIZE],
}

impl Default for Kernel {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Kernel {
    /// Create a kernel with every weight 0.
    pub const fn zeros() -> Self {
        Kernel {
            data: [[0.0; KERNEL_SIZE]; KERNEL_SIZE],
        }
    }

    /// Create a kernel from rows, top row (`dy = -2`) first.
    pub const fn from_rows(data: [[f64; KERNEL_SIZE]; KERNEL_SIZE]) -> Self {
        Kernel { data }
    }

    /// Identity kernel: 1 at the centre, 0 elsewhere.
    pub fn identity() -> Self {
        let mut k = Self::zeros();
        k.data[2][2] = 1.0;
        k
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// The weight at `(dx, dy)` is the Gaussian density evaluated at the
    /// Euclidean distance from the centre:
    /// `exp(-(dx² + dy²) / (2σ²)) / (σ√(2π))`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] unless `stddev` is finite
    /// and positive.
    pub fn gaussian(stddev: f64) -> FilterResult<Self> {
        if !stddev.is_finite() || stddev <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian standard deviation must be positive, got {stddev}"
            )));
        }
        let mut k = Self::zeros();
        for dy in -KERNEL_RADIUS..=KERNEL_RADIUS {
            for dx in -KERNEL_RADIUS..=KERNEL_RADIUS {
                let distance = euclidean_distance(f64::from(dx), f64::from(dy), 0.0, 0.0);
                k.put(dx, dy, gaussian_function(distance, stddev));
            }
        }
        k.normalize();
        Ok(k)
    }

    /// Directional emboss kernel, normalized.
    pub fn emboss() -> Self {
        Self::from_rows([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, -2.0, -1.0, 0.0, 0.0],
            [0.0, -1.0, 1.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .normalized()
    }

    /// Sharpening kernel with the given centre weight, normalized.
    ///
    /// The centre is surrounded by a ring of -1 weights; the larger the
    /// centre relative to 8, the milder the effect.
    pub fn sharpen(center: f64) -> Self {
        let mut k = Self::from_rows([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, -1.0, -1.0, 0.0],
            [0.0, -1.0, 0.0, -1.0, 0.0],
            [0.0, -1.0, -1.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ]);
        k.put(0, 0, center);
        k.normalized()
    }

    /// Sobel kernel responding to horizontal intensity change.
    ///
    /// Weights sum to zero, so normalization leaves it unchanged.
    pub fn sobel_horizontal() -> Self {
        Self::from_rows([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, -1.0, 0.0],
            [0.0, 2.0, 0.0, -2.0, 0.0],
            [0.0, 1.0, 0.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .normalized()
    }

    /// Sobel kernel responding to vertical intensity change.
    pub fn sobel_vertical() -> Self {
        Self::from_rows([
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 2.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, -2.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .normalized()
    }

    /// Get the weights, top row first.
    #[inline]
    pub fn rows(&self) -> &[[f64; KERNEL_SIZE]; KERNEL_SIZE] {
        &self.data
    }

    /// Get the weight at offset `(dx, dy)`.
    ///
    /// Returns `None` if either offset is outside `-2..=2`.
    #[inline]
    pub fn get(&self, dx: i32, dy: i32) -> Option<f64> {
        let (col, row) = Self::slot(dx, dy)?;
        Some(self.data[row][col])
    }

    /// Set the weight at offset `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if either offset is outside
    /// `-2..=2`.
    pub fn set(&mut self, dx: i32, dy: i32, value: f64) -> FilterResult<()> {
        let (col, row) = Self::slot(dx, dy).ok_or_else(|| {
            FilterError::InvalidKernel(format!("offset ({dx}, {dy}) outside 5x5 kernel"))
        })?;
        self.data[row][col] = value;
        Ok(())
    }

    #[inline]
    fn slot(dx: i32, dy: i32) -> Option<(usize, usize)> {
        let range = -KERNEL_RADIUS..=KERNEL_RADIUS;
        if range.contains(&dx) && range.contains(&dy) {
            Some(((dx + KERNEL_RADIUS) as usize, (dy + KERNEL_RADIUS) as usize))
        } else {
            None
        }
    }

    // Offsets are in range for every caller.
    #[inline]
    fn put(&mut self, dx: i32, dy: i32, value: f64) {
        self.data[(dy + KERNEL_RADIUS) as usize][(dx + KERNEL_RADIUS) as usize] = value;
    }

    /// Iterate over `(dx, dy, weight)` in row order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        self.data.iter().enumerate().flat_map(|(row, weights)| {
            weights.iter().enumerate().map(move |(col, &w)| {
                (col as i32 - KERNEL_RADIUS, row as i32 - KERNEL_RADIUS, w)
            })
        })
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// A kernel whose weights sum to exactly zero is left unchanged.
    pub fn normalize(&mut self) {
        let mut sum = self.sum();
        if sum == 0.0 {
            sum = 1.0;
        }
        for w in self.data.iter_mut().flatten() {
            *w /= sum;
        }
    }

    /// Return a normalized copy. See [`Kernel::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

/// Gaussian density at `distance` for the given standard deviation.
pub fn gaussian_function(distance: f64, stddev: f64) -> f64 {
    (-(distance * distance) / (2.0 * stddev * stddev)).exp() / ((2.0 * PI).sqrt() * stddev)
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn euclidean_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}
