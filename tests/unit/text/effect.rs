use super::*;
use crate::draw::directive::{MONSTER_EFFECT_BOX, MONSTER_EFFECT_PRESETS};
use crate::text::metrics::FixedAdvanceMetrics;
use proptest::prelude::*;

const TINY_PRESETS: &[EffectPreset] = &[
    EffectPreset {
        font_size: 10.0,
        line_height: 12.0,
    },
    EffectPreset {
        font_size: 5.0,
        line_height: 6.0,
    },
];

fn request<'a>(text: &'a str, area: Rect, presets: &'a [EffectPreset], tolerance: f64) -> EffectRequest<'a> {
    EffectRequest {
        text,
        family: FontFamily::MatrixBook,
        italic: false,
        area,
        presets,
        tolerance,
    }
}

fn monster(text: &str) -> EffectLayout {
    fit_effect(
        &FixedAdvanceMetrics,
        &request(text, MONSTER_EFFECT_BOX, MONSTER_EFFECT_PRESETS, STRICT_TOLERANCE),
    )
}

#[test]
fn short_text_uses_the_largest_preset() {
    let layout = monster("Cannot be Normal Summoned.");
    assert_eq!(layout.preset_index, 0);
    assert!(layout.fits);
    assert_eq!(layout.lines.len(), 1);
}

#[test]
fn long_text_steps_down_and_stays_inside_the_box() {
    let text = "Once per turn, you can target 1 face-up monster your opponent controls; ".repeat(8);
    let layout = monster(&text);
    assert!(layout.preset_index > 0);
    assert!(layout.fits);
    let height = layout.lines.len() as f64 * layout.line_height;
    assert!(height <= MONSTER_EFFECT_BOX.height() + 1e-6);
}

#[test]
fn unfittable_text_overflows_at_the_smallest_preset() {
    let text = "word ".repeat(2000);
    let layout = monster(&text);
    assert_eq!(layout.preset_index, MONSTER_EFFECT_PRESETS.len() - 1);
    assert!(!layout.fits);
}

#[test]
fn tolerance_lets_a_line_condense_instead_of_shrinking() {
    // 21 glyphs at 5 units each: 5% wider than the box
    let word = "a".repeat(21);
    let area = Rect::new(0.0, 0.0, 100.0, 12.0);
    let m = FixedAdvanceMetrics;
    let strict = fit_effect(&m, &request(&word, area, TINY_PRESETS, STRICT_TOLERANCE));
    let tolerant = fit_effect(&m, &request(&word, area, TINY_PRESETS, TOLERANT_TOLERANCE));
    assert_eq!(strict.preset_index, 1);
    assert_eq!(tolerant.preset_index, 0);

    let mut p = Painter::new(&m, tolerant.font);
    draw_effect(&mut p, &tolerant, area);
    let list = p.finish();
    let run = list.texts().next().expect("line");
    assert!((run.scaled_width(&m) - 100.0).abs() < 1e-9);
}

#[test]
fn tolerance_is_clamped() {
    let word = "a".repeat(30);
    let area = Rect::new(0.0, 0.0, 100.0, 12.0);
    // 150 units would need a 0.33 condense, beyond the 0.3 bound
    let layout = fit_effect(&FixedAdvanceMetrics, &request(&word, area, TINY_PRESETS, 0.9));
    assert_eq!(layout.preset_index, 1);
}

#[test]
fn paragraphs_break_lines_and_are_not_justified() {
    let m = FixedAdvanceMetrics;
    let area = Rect::new(10.0, 0.0, 410.0, 200.0);
    let layout = fit_effect(&m, &request("First part.\nSecond part.", area, TINY_PRESETS, 0.0));
    assert_eq!(layout.lines.len(), 2);
    assert!(layout.lines.iter().all(|l| l.ends_paragraph));

    let mut p = Painter::new(&m, layout.font);
    draw_effect(&mut p, &layout, area);
    let list = p.finish();
    let runs: Vec<_> = list.texts().collect();
    assert_eq!(runs.len(), 2);
    assert!(runs.iter().all(|r| r.origin.x == 10.0));
    assert!(runs[1].origin.y > runs[0].origin.y);
}

#[test]
fn inner_lines_are_justified_to_the_box() {
    let m = FixedAdvanceMetrics;
    let area = Rect::new(0.0, 0.0, 100.0, 120.0);
    let layout = fit_effect(&m, &request("aaa bbb ccc ddd eee fff ggg", area, TINY_PRESETS, 0.0));
    assert!(layout.lines.len() > 1);
    let mut p = Painter::new(&m, layout.font);
    draw_effect(&mut p, &layout, area);
    let list = p.finish();
    let first_y = list.texts().next().map(|t| t.origin.y).expect("runs");
    let last_word = list
        .texts()
        .filter(|t| t.origin.y == first_y)
        .last()
        .expect("word");
    assert!((last_word.origin.x + m.advance(&layout.font, &last_word.text) - 100.0).abs() < 1e-9);
}

#[test]
fn blank_text_fits_with_no_lines() {
    let layout = monster("   ");
    assert_eq!(layout.preset_index, 0);
    assert!(layout.lines.is_empty());
}

proptest! {
    #[test]
    fn preset_index_never_decreases_as_text_grows(
        words in prop::collection::vec("[a-zA-Z]{1,12}", 1..120),
        cut in 0usize..120,
        tolerant in any::<bool>(),
    ) {
        let cut = cut.min(words.len());
        let full = words.join(" ");
        let prefix = words[..cut].join(" ");
        let m = FixedAdvanceMetrics;
        let tol = condense_tolerance(tolerant);
        let a = fit_effect(&m, &request(&prefix, MONSTER_EFFECT_BOX, MONSTER_EFFECT_PRESETS, tol));
        let b = fit_effect(&m, &request(&full, MONSTER_EFFECT_BOX, MONSTER_EFFECT_PRESETS, tol));
        prop_assert!(a.preset_index <= b.preset_index);
        prop_assert!(a.font.size >= b.font.size);
    }
}
