//! Session regression test
//!
//! Buffer accounting across many draw calls, the overflow policies, the
//! click-to-segment flow and the built-in test pattern.

use midline_core::{Error, Point};
use midline_raster::{
    ClickOutcome, Fidelity, Line, LineKind, Octant, OverflowPolicy, RasterError, Session,
    SessionOptions, test_pattern,
};
use midline_test::RegParams;
use midline_transform::Viewport;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn viewport() -> Viewport {
    Viewport::new(800, 600).unwrap()
}

#[test]
fn session_buffer_invariant_reg() {
    let mut rp = RegParams::new("session_buffer");
    let capacity = 2500;
    let mut session = Session::new(viewport(), SessionOptions::default().with_capacity(capacity));
    let mut rng = StdRng::seed_from_u64(2023);

    let mut emitted = 0usize;
    let mut rejections = 0usize;
    for _ in 0..500 {
        let a = Point::new(rng.random_range(-20..820), rng.random_range(-20..620));
        let b = Point::new(rng.random_range(-20..820), rng.random_range(-20..620));
        let before = session.buffer().len();
        let needed = Line::new(a, b).len();

        match session.draw_line(a, b) {
            Ok(px) => {
                rp.compare_values(needed as f64, px.len() as f64, 0.0);
                emitted += px.len();
            }
            Err(RasterError::Core(Error::CapacityExceeded { capacity: c, requested })) => {
                rejections += 1;
                rp.compare_values(capacity as f64, c as f64, 0.0);
                rp.compare_values((before + needed) as f64, requested as f64, 0.0);
                rp.compare_values(before as f64, session.buffer().len() as f64, 0.0);
            }
            Err(e) => panic!("unexpected error: {e}"),
        }

        rp.compare_values(emitted as f64, session.buffer().len() as f64, 0.0);
        let within = session.buffer().len() <= session.buffer().capacity();
        rp.compare_values(1.0, within as u8 as f64, 0.0);
    }

    // the run reached the capacity boundary
    rp.compare_values(1.0, (rejections > 0) as u8 as f64, 0.0);
    rp.compare_values(capacity as f64, session.buffer().capacity() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_grow_reg() {
    let mut rp = RegParams::new("session_grow");
    let mut session = Session::new(
        viewport(),
        SessionOptions::default()
            .with_capacity(16)
            .with_overflow(OverflowPolicy::Grow),
    );

    let total = session.draw_test_pattern().unwrap();
    rp.compare_values(total as f64, session.buffer().len() as f64, 0.0);
    let within = session.buffer().len() <= session.buffer().capacity();
    rp.compare_values(1.0, within as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_test_pattern_reg() {
    let mut rp = RegParams::new("session_test_pattern");

    // --- corrected: every segment ends on its endpoint ---
    let mut session = Session::new(viewport(), SessionOptions::default());
    let total = session.draw_test_pattern().unwrap();
    rp.compare_values(5818.0, total as f64, 0.0);
    rp.compare_values(5818.0, session.buffer().len() as f64, 0.0);

    for line in test_pattern(&viewport()) {
        let px = line.segment.rasterize();
        let (s, e) = (line.segment.start, line.segment.end);
        let has_both = px.contains(&s) && px.contains(&e);
        if !has_both {
            eprintln!("missing endpoint on '{}'", line.label);
        }
        rp.compare_values(1.0, has_both as u8 as f64, 0.0);
    }

    // --- legacy: the six steep-negative segments lose one pixel each ---
    let mut legacy = Session::new(
        viewport(),
        SessionOptions::default().with_fidelity(Fidelity::Legacy),
    );
    rp.compare_values(5812.0, legacy.draw_test_pattern().unwrap() as f64, 0.0);

    let steep_negative = test_pattern(&viewport())
        .iter()
        .filter(|l| {
            Line::new(l.segment.start, l.segment.end).kind()
                == LineKind::Stepped(Octant::SteepNegative)
        })
        .count();
    rp.compare_values(6.0, steep_negative as f64, 0.0);

    // --- every pattern pixel stays on the canvas ---
    let visible = session.buffer().iter().all(|p| p.is_visible());
    rp.compare_values(1.0, visible as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_clicks_reg() {
    let mut rp = RegParams::new("session_clicks");
    let vp = Viewport::new(400, 300).unwrap().with_origin(8.0, 16.0).unwrap();
    let mut session = Session::new(vp, SessionOptions::default());

    let first = session.add_click(108.0, 116.0).unwrap();
    rp.compare_values(
        1.0,
        (first == ClickOutcome::Pending(Point::new(108, 116))) as u8 as f64,
        0.0,
    );

    let second = session.add_click(112.0, 118.0).unwrap();
    match second {
        ClickOutcome::Drawn(px) => {
            rp.compare_points(
                &[
                    Point::new(108, 116),
                    Point::new(109, 116),
                    Point::new(110, 117),
                    Point::new(111, 117),
                    Point::new(112, 118),
                ],
                &px,
            );
        }
        ClickOutcome::Pending(_) => {
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    // two markers, then five pixels; each marker coincides with its pixel
    rp.compare_values(7.0, session.buffer().len() as f64, 0.0);
    let buf = session.buffer();
    rp.compare_values(1.0, (buf.get(0) == buf.get(2)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (buf.get(1) == buf.get(6)) as u8 as f64, 0.0);

    // the canvas origin maps to the top-left corner
    let corner = vp.normalize_xy(8.0, 16.0);
    rp.compare_values(-1.0, corner.x as f64, 1e-6);
    rp.compare_values(1.0, corner.y as f64, 1e-6);

    assert!(rp.cleanup());
}

#[test]
fn session_rejected_click_reg() {
    let mut rp = RegParams::new("session_rejected_click");
    let mut session = Session::new(viewport(), SessionOptions::default().with_capacity(3));

    session.add_click(0.0, 0.0).unwrap();
    let second = session.add_click(10.0, 0.0);
    let rejected = matches!(
        second,
        Err(RasterError::Core(Error::CapacityExceeded { .. }))
    );
    rp.compare_values(1.0, rejected as u8 as f64, 0.0);

    // only the first marker is stored and the first click still waits
    rp.compare_values(1.0, session.buffer().len() as f64, 0.0);
    let pending = session.pending_click() == Some(Point::new(0, 0));
    rp.compare_values(1.0, pending as u8 as f64, 0.0);

    // the same session accepts a pair that fits
    session.cancel_click();
    session.add_click(5.0, 5.0).unwrap();
    rp.compare_values(2.0, session.buffer().len() as f64, 0.0);
    let full = session.add_click(6.0, 5.0);
    rp.compare_values(1.0, full.is_err() as u8 as f64, 0.0);
    rp.compare_values(2.0, session.buffer().len() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_resize_reg() {
    let mut rp = RegParams::new("session_resize");
    let mut session = Session::new(viewport(), SessionOptions::default());

    let corner = Point::new(800, 0);
    session.draw_line(corner, corner).unwrap();
    let stored = session.buffer().get(0).unwrap();
    rp.compare_values(1.0, stored.x as f64, 1e-6);
    rp.compare_values(1.0, stored.y as f64, 1e-6);

    // after a resize the stored point keeps its old normalization
    session.set_viewport(Viewport::new(1600, 1200).unwrap());
    let kept = session.buffer().get(0) == Some(stored);
    rp.compare_values(1.0, kept as u8 as f64, 0.0);

    // new points use the new viewport
    session.draw_line(corner, corner).unwrap();
    let fresh = session.buffer().get(1).unwrap();
    rp.compare_values(0.0, fresh.x as f64, 1e-6);
    rp.compare_values(1.0, fresh.y as f64, 1e-6);

    assert!(rp.cleanup());
}
