//! Convolution regression test
//!
//! Kernel application with edge-clamped sampling, identity and Gaussian
//! kernels, and normalization.

use bmpedit_core::{Image, Pixel};
use bmpedit_filter::{Kernel, apply_at, convolve, gaussian_blur};
use bmpedit_test::{RegParams, checker_image, gradient_image};

/// 1/32 everywhere: exact in binary, so sums are exact.
fn flat_kernel() -> Kernel {
    Kernel::from_rows([[1.0 / 32.0; 5]; 5])
}

/// 3x3 grey ramp: value 10 * (x + 3y).
fn ramp3() -> Image {
    Image::from_visual_fn(3, 3, |x, y| Pixel::gray((10 * (x + 3 * y)) as u8)).expect("ramp3")
}

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // --- Test 1: corners repeat their row and column ---
    // At (0, 0) the clamped samples weigh column 0 and row 0 three times:
    // sum = 10 * (3 * 5 + 3 * 3 * 5) = 600, 600 / 32 = 18.75.
    let img = ramp3();
    let kernel = flat_kernel();
    let p = apply_at(&kernel, &img, 0, 0);
    rp.compare_values(18.0, p.red as f64, 0.0);
    // At (2, 2) column 2 and row 2 weigh three times: 1400 / 32 = 43.75.
    let p = apply_at(&kernel, &img, 2, 2);
    rp.compare_values(43.0, p.red as f64, 0.0);
    // The whole-image result agrees with per-pixel application.
    let out = convolve(&img, &kernel).expect("convolve ramp3");
    rp.compare_values(18.0, out.pixel_at(0, 0).expect("corner").green as f64, 0.0);
    rp.compare_values(43.0, out.pixel_at(2, 2).expect("corner").blue as f64, 0.0);

    // --- Test 2: an interior pixel sees no clamping ---
    let img = gradient_image(9, 9);
    let mut expected = 0.0;
    for dy in -2..=2 {
        for dx in -2..=2 {
            expected += img.pixel_at(4 + dx, 4 + dy).expect("interior").blue as f64 / 32.0;
        }
    }
    let p = apply_at(&kernel, &img, 4, 4);
    rp.compare_values(expected.trunc(), p.blue as f64, 0.0);
    eprintln!("  interior blue: expected {:.3}, got {}", expected, p.blue);

    // --- Test 3: identity kernel is a no-op ---
    let img = gradient_image(13, 6);
    let out = convolve(&img, &Kernel::identity()).expect("identity");
    rp.compare_images(&img, &out);

    // --- Test 4: Gaussian blur keeps size and reduces variation ---
    let img = checker_image(12, 12, 1, Pixel::BLACK, Pixel::WHITE);
    for &(repeat, sigma) in &[(1, 1.0), (2, 0.8), (3, 2.0)] {
        let blurred = gaussian_blur(&img, repeat, sigma).expect("gaussian_blur");
        rp.compare_values(12.0, blurred.width() as f64, 0.0);
        rp.compare_values(12.0, blurred.height() as f64, 0.0);
        let reduced = variance(&blurred) < variance(&img);
        rp.compare_values(1.0, if reduced { 1.0 } else { 0.0 }, 0.0);
        eprintln!(
            "  gaussian_blur({}, {}): variance {:.1} -> {:.1}",
            repeat,
            sigma,
            variance(&img),
            variance(&blurred)
        );
    }

    // --- Test 5: zero repeats returns the input ---
    let out = gaussian_blur(&img, 0, 1.0).expect("gaussian_blur zero");
    rp.compare_images(&img, &out);

    // --- Test 6: normalization ---
    let k = Kernel::from_rows([
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 1.0, 1.0, 0.0],
        [0.0, 1.0, 8.0, 1.0, 0.0],
        [0.0, 1.0, 1.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0],
    ])
    .normalized();
    rp.compare_values(1.0, k.sum(), 1e-12);
    rp.compare_values(0.5, k.get(0, 0).expect("centre"), 1e-12);
    let sobel = Kernel::sobel_vertical();
    rp.compare_values(2.0, sobel.get(0, -1).expect("top"), 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}

fn variance(img: &Image) -> f64 {
    let n = img.n_of_pixels() as f64;
    let mean = img.pixels().iter().map(|p| p.average()).sum::<f64>() / n;
    img.pixels()
        .iter()
        .map(|p| (p.average() - mean).powi(2))
        .sum::<f64>()
        / n
}
