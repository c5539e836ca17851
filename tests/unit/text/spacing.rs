use super::*;
use crate::text::metrics::{FixedAdvanceMetrics, FontFamily, FontSpec, TextMetrics};

const FONT: FontSpec = FontSpec::new(FontFamily::StoneSerifRegular, 20.0);

#[test]
fn left_run_advances_with_tracking() {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FONT);
    let end = fill_text_with_spacing(&mut p, "AB1", 0.1, 10.0, 50.0, Direction::Left);
    let natural = m.advance(&FONT, "AB1");
    assert!((end - (10.0 + natural * 1.1)).abs() < 1e-9);

    let list = p.finish();
    let xs: Vec<f64> = list.texts().map(|t| t.origin.x).collect();
    assert_eq!(list.texts().count(), 3);
    assert!((xs[0] - 10.0).abs() < 1e-9);
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn right_run_is_mirrored_from_anchor() {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FONT);
    let end = fill_text_with_spacing(&mut p, "AB", 0.0, 100.0, 50.0, Direction::Right);
    assert!((end - (100.0 - m.advance(&FONT, "AB"))).abs() < 1e-9);

    let list = p.finish();
    let runs: Vec<_> = list.texts().collect();
    // last character is placed first, flush against the anchor
    assert_eq!(runs[0].text, "B");
    assert!((runs[0].origin.x + m.advance(&FONT, "B") - 100.0).abs() < 1e-9);
    assert_eq!(runs[1].text, "A");
    assert!((runs[1].origin.x - end).abs() < 1e-9);
}

#[test]
fn empty_text_keeps_cursor() {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FONT);
    assert_eq!(
        fill_text_with_spacing(&mut p, "", 0.3, 42.0, 0.0, Direction::Right),
        42.0
    );
    assert!(p.finish().is_empty());
}
