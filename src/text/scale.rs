//! Pendulum scale digits.
//!
//! Printed two-digit scales keep their leading `1` in the same spot whatever the second digit
//! is, so the two-digit case is laid out by hand instead of centering the run.

use crate::draw::display_list::Painter;
use crate::text::metrics::{FontFamily, FontSpec};

/// Share of a `1`'s advance used when centering runs of three or more digits.
const NARROW_ONE: f64 = 0.7;

/// Draw a pendulum scale centered on `edge`. The glyph baseline is `baseline + font_size`.
pub fn draw_scale(painter: &mut Painter<'_>, value: &str, edge: f64, baseline: f64, font_size: f64) {
    if value.is_empty() {
        return;
    }
    painter.set_font(FontSpec::new(FontFamily::MatrixBoldSmallCaps, font_size));
    let y = baseline + font_size;
    let mut buf = [0u8; 4];
    let digits: Vec<char> = value.chars().collect();

    match digits.as_slice() {
        [d] => {
            let glyph = d.encode_utf8(&mut buf);
            let w = painter.measure(glyph);
            let x = edge - w / 2.0;
            let x = if *d == '1' { x + 2.0 } else { x };
            painter.fill_text(glyph, x, y);
        }
        [first, second] => {
            let (x1, x2) = two_digit_positions(painter, *first, *second, edge);
            painter.fill_text(first.encode_utf8(&mut buf), x1, y);
            painter.fill_text(second.encode_utf8(&mut buf), x2, y);
        }
        _ => {
            let weight = |c: char| if c == '1' { NARROW_ONE } else { 1.0 };
            let advances: Vec<f64> = digits
                .iter()
                .map(|c| painter.measure(c.encode_utf8(&mut buf)) * weight(*c))
                .collect();
            let total: f64 = advances.iter().sum();
            let mut x = edge - total / 2.0;
            for (c, adv) in digits.iter().zip(advances) {
                painter.fill_text(c.encode_utf8(&mut buf), x, y);
                x += adv;
            }
        }
    }
}

fn two_digit_positions(painter: &Painter<'_>, first: char, second: char, edge: f64) -> (f64, f64) {
    let mut buf = [0u8; 4];
    let fw = painter.measure(first.encode_utf8(&mut buf)) * 0.825;
    let sw = painter.measure(second.encode_utf8(&mut buf));
    let x1 = edge - fw - if first == '1' { 0.0 } else { fw * 0.1 };
    let pull = if first == '1' {
        if second == '1' {
            painter.measure("1") * 0.1
        } else {
            sw * 0.1
        }
    } else {
        sw * -0.1
    };
    (x1, x1 + fw - pull)
}

#[cfg(test)]
#[path = "../../tests/unit/text/scale.rs"]
mod tests;
