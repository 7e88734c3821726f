//! Viewport regression test
//!
//! The normalization formula, its inverse and the alignment between
//! integer pixels and raw pointer positions.

use midline_core::Point;
use midline_test::RegParams;
use midline_transform::{TransformError, Viewport};

#[test]
fn viewport_reg() {
    let mut rp = RegParams::new("viewport");

    // --- Test 1: formula on an offset canvas ---
    let vp = Viewport::new(640, 480).unwrap().with_origin(40.0, 24.0).unwrap();
    for (x, y) in [(0, 0), (40, 24), (360, 264), (680, 504), (-100, 900)] {
        let n = vp.normalize(Point::new(x, y));
        let xf = x as f64;
        let yf = y as f64;
        let x_expected = 2.0 * xf / 640.0 + (-2.0 * 40.0 / 640.0 - 1.0);
        let y_expected = 2.0 * (24.0 - yf) / 480.0 + 1.0;
        rp.compare_values(x_expected, n.x as f64, 1e-6);
        rp.compare_values(y_expected, n.y as f64, 1e-6);
    }

    // --- Test 2: canvas corners and center ---
    let tl = vp.normalize_xy(40.0, 24.0);
    let br = vp.normalize_xy(680.0, 504.0);
    let mid = vp.normalize_xy(360.0, 264.0);
    rp.compare_values(-1.0, tl.x as f64, 1e-6);
    rp.compare_values(1.0, tl.y as f64, 1e-6);
    rp.compare_values(1.0, br.x as f64, 1e-6);
    rp.compare_values(-1.0, br.y as f64, 1e-6);
    rp.compare_values(0.0, mid.x as f64, 1e-6);
    rp.compare_values(0.0, mid.y as f64, 1e-6);

    // --- Test 3: pixels and pointer positions share one mapping ---
    let p = Point::new(123, 45);
    let same = vp.normalize(p) == vp.normalize_xy(123.0, 45.0);
    rp.compare_values(1.0, same as u8 as f64, 0.0);

    // --- Test 4: denormalize inverts normalize ---
    for (x, y) in [(0, 0), (17, 399), (639, 1), (-50, -50)] {
        let (bx, by) = vp.denormalize(vp.normalize(Point::new(x, y)));
        rp.compare_values(x as f64, bx, 1e-3);
        rp.compare_values(y as f64, by, 1e-3);
    }

    // --- Test 5: configuration errors ---
    let zero = Viewport::new(0, 480);
    rp.compare_values(
        1.0,
        matches!(zero, Err(TransformError::InvalidViewport { width: 0, .. })) as u8 as f64,
        0.0,
    );
    let nan = Viewport::new(10, 10).unwrap().with_origin(f64::NAN, 0.0);
    rp.compare_values(
        1.0,
        matches!(nan, Err(TransformError::InvalidOrigin { .. })) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
