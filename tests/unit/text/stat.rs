use super::*;
use crate::draw::display_list::{DisplayList, TextRun};
use crate::text::metrics::{FixedAdvanceMetrics, FontFamily, FontSpec, TextMetrics};

const EDGE: f64 = 500.0;
const BASELINE: f64 = 1100.0;

fn render(value: &str) -> (Option<f64>, DisplayList) {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FontSpec::new(FontFamily::Matrix, 10.0));
    let left = draw_stat(&mut p, value, EDGE, BASELINE);
    (left, p.finish())
}

fn right_end(run: &TextRun) -> f64 {
    run.origin.x + run.scaled_width(&FixedAdvanceMetrics)
}

#[test]
fn condensed_value_fills_the_box_exactly() {
    let (left, list) = render("1234567");
    let left = left.expect("drawn");
    assert!((EDGE + STAT_BOX_WIDTH - left - STAT_BOX_WIDTH).abs() < 1e-9);
    let run = list.texts().next().expect("run");
    assert!(run.scale.x < 1.0);
    assert!((right_end(run) - (EDGE + STAT_BOX_WIDTH)).abs() < 1e-9);
}

#[test]
fn narrow_value_keeps_natural_width() {
    let (left, list) = render("25");
    let natural = FixedAdvanceMetrics.advance(&STAT_FONT, "25");
    assert!(natural < STAT_BOX_WIDTH);
    assert!((EDGE + STAT_BOX_WIDTH - left.expect("drawn") - natural).abs() < 1e-9);
    let run = list.texts().next().expect("run");
    assert_eq!(run.scale.x, 1.0);
    assert!((run.origin.y - (BASELINE - 1.0)).abs() < 1e-9);
}

#[test]
fn lone_unknown_is_stretched_and_right_aligned() {
    let (_, list) = render("?");
    let runs: Vec<_> = list.texts().collect();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].font, STAT_UNKNOWN_FONT);
    assert_eq!(runs[0].scale.y, STAT_UNKNOWN_SCALE_Y);
    assert!((runs[0].origin.y - (BASELINE - 1.29)).abs() < 1e-9);
    assert!((right_end(runs[0]) - (EDGE + STAT_BOX_WIDTH)).abs() < 1e-9);
}

#[test]
fn infinity_uses_bold_matrix() {
    let (_, list) = render("∞");
    let run = list.texts().next().expect("run");
    assert_eq!(run.font, STAT_INFINITY_FONT);
    assert_eq!(run.origin.y, BASELINE);
}

#[test]
fn mixed_value_is_laid_out_right_to_left() {
    let (left, list) = render("1?0");
    let texts: Vec<&str> = list.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "?", "1"]);
    let runs: Vec<_> = list.texts().collect();
    assert!(runs[0].origin.x > runs[1].origin.x && runs[1].origin.x > runs[2].origin.x);
    assert!((runs[2].origin.x - left.expect("drawn")).abs() < 1e-9);
}

#[test]
fn double_unknown_draws_adjacent_glyphs() {
    let (_, list) = render("??");
    let marks: Vec<_> = list.texts().filter(|t| t.text == "?").collect();
    assert_eq!(marks.len(), 2);
    let gap = marks[0].origin.x - marks[1].origin.x;
    assert!((gap - marks[1].scaled_width(&FixedAdvanceMetrics)).abs() < 1e-9);
}

#[test]
fn empty_value_draws_nothing() {
    let (left, list) = render("");
    assert!(left.is_none());
    assert!(list.is_empty());
}

#[test]
fn label_ends_after_slash() {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FontSpec::new(FontFamily::Matrix, 10.0));
    let end = draw_stat_label(&mut p, "ATK", 400.0, BASELINE);
    let list = p.finish();
    let texts: Vec<&str> = list.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "T", "K", "/"]);
    let slash = list.texts().last().expect("slash");
    assert!((end - (slash.origin.x + m.advance(&STAT_SLASH_FONT, "/") * 1.15)).abs() < 1e-9);
}
