//! Coordinate mapping and edge-sampling regression test
//!
//! Checks the visual-coordinate to storage-index mapping and the clamped
//! nearest-pixel sampler used by every neighbourhood operation.

use bmpedit_core::{Error, Image, Pixel, storage_index};
use bmpedit_test::{RegParams, gradient_image};

#[test]
fn access_reg() {
    let mut rp = RegParams::new("access");

    // --- Test 1: mapping formula ---
    // index = width * y + (width - 1 - x)
    for &(w, x, y, want) in &[
        (4u32, 0, 0, 3i64),
        (4, 3, 0, 0),
        (4, 0, 1, 7),
        (4, 2, 2, 9),
        (1, 0, 5, 5),
    ] {
        rp.compare_values(want as f64, storage_index(w, x, y) as f64, 0.0);
    }

    // --- Test 2: visual builder and storage agree ---
    let img = Image::from_visual_fn(5, 3, |x, y| Pixel::new(x as u8, y as u8, 0)).expect("build");
    for (i, p) in img.pixels().iter().enumerate() {
        let (x, y) = (p.red as i64, p.green as i64);
        rp.compare_values(i as f64, storage_index(5, x as i32, y as i32) as f64, 0.0);
    }

    // --- Test 3: set then get at every coordinate ---
    let mut img = Image::new(6, 4).expect("new");
    for y in 0..4 {
        for x in 0..6 {
            img.set_pixel_at(x, y, Pixel::new(x as u8 * 10, y as u8 * 10, 7))
                .expect("set");
        }
    }
    let mut ok = true;
    for y in 0..4 {
        for x in 0..6 {
            ok &= img.pixel_at(x, y).expect("get") == Pixel::new(x as u8 * 10, y as u8 * 10, 7);
        }
    }
    rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: indices outside the array fail ---
    for &(x, y) in &[(0, 4), (0, -1), (6, -1), (-1, 3)] {
        let r = img.pixel_at(x, y);
        rp.compare_values(
            1.0,
            if matches!(r, Err(Error::IndexOutOfBounds { .. })) { 1.0 } else { 0.0 },
            0.0,
        );
    }
    // x one past the right edge of row 1 maps to storage slot 5, which
    // holds the leftmost pixel of row 0
    let wrapped = img.pixel_at(6, 1).expect("aliased");
    rp.compare_values(
        img.pixel_at(0, 0).expect("origin").red as f64,
        wrapped.red as f64,
        0.0,
    );

    // --- Test 5: nearest pixel clamps each axis ---
    let img = gradient_image(7, 5);
    for &(x, y, cx, cy) in &[
        (-3, -3, 0, 0),
        (10, -1, 6, 0),
        (-1, 10, 0, 4),
        (100, 100, 6, 4),
        (3, 2, 3, 2),
        (3, -2, 3, 0),
    ] {
        let same = img.nearest_pixel(x, y) == img.pixel_at(cx, cy).expect("clamped");
        rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "access regression test failed");
}
