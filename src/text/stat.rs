//! ATK/DEF values and labels.

use crate::draw::directive::{
    STAT_BOX_WIDTH, STAT_FONT, STAT_INFINITY_FONT, STAT_LABEL_FONT, STAT_NUMBER_OFFSET,
    STAT_SLASH_FONT, STAT_UNKNOWN_FONT, STAT_UNKNOWN_SCALE_Y,
};
use crate::draw::display_list::Painter;
use crate::text::spacing::{Direction, fill_text_with_spacing};

/// Draw a stat value right-aligned inside the stat box starting at `edge`.
///
/// Returns the left end of the drawn value, or `None` when nothing was drawn.
pub fn draw_stat(painter: &mut Painter<'_>, value: &str, edge: f64, baseline: f64) -> Option<f64> {
    let right = edge + STAT_BOX_WIDTH;
    painter.save();
    let left = match value {
        "" => None,
        "∞" => {
            painter.set_font(STAT_INFINITY_FONT);
            let x = right - painter.measure(value);
            painter.fill_text(value, x, baseline);
            Some(x)
        }
        "?" => {
            painter.set_font(STAT_UNKNOWN_FONT);
            painter.set_scale(1.0, STAT_UNKNOWN_SCALE_Y);
            let x = right - painter.measure(value);
            painter.fill_text(value, x, baseline + STAT_UNKNOWN_SCALE_Y * STAT_NUMBER_OFFSET);
            Some(x)
        }
        _ => draw_mixed(painter, value, right, baseline),
    };
    painter.restore();
    left
}

/// Digits with embedded `?` glyphs, condensed as a whole to fit the box.
fn draw_mixed(painter: &mut Painter<'_>, value: &str, right: f64, baseline: f64) -> Option<f64> {
    let tokens: Vec<&str> = value.split('?').collect();
    let unknown_w = painter.measure_with(&STAT_UNKNOWN_FONT, "?");
    let digits_w: f64 = tokens
        .iter()
        .map(|t| painter.measure_with(&STAT_FONT, t))
        .sum();
    let total = digits_w + unknown_w * (tokens.len() - 1) as f64;
    if total <= 0.0 {
        return None;
    }

    let ratio = (STAT_BOX_WIDTH / total).min(1.0);
    let mut cursor = right;
    for (i, token) in tokens.iter().rev().enumerate() {
        painter.set_font(STAT_FONT);
        painter.set_scale(ratio, 1.0);
        cursor -= painter.measure(token) * ratio;
        painter.fill_text(token, cursor, baseline + STAT_NUMBER_OFFSET);

        if i + 1 < tokens.len() {
            painter.set_font(STAT_UNKNOWN_FONT);
            painter.set_scale(ratio, STAT_UNKNOWN_SCALE_Y);
            cursor -= unknown_w * ratio;
            painter.fill_text(
                "?",
                cursor,
                baseline + STAT_UNKNOWN_SCALE_Y * STAT_NUMBER_OFFSET,
            );
        }
    }
    Some(cursor)
}

/// Draw an "ATK"/"DEF" label followed by its slash. Returns the cursor after the slash.
pub fn draw_stat_label(painter: &mut Painter<'_>, label: &str, edge: f64, baseline: f64) -> f64 {
    painter.save();
    painter.set_font(STAT_LABEL_FONT);
    painter.set_scale(1.0, 0.98);
    let end = fill_text_with_spacing(painter, label, 0.075, edge, baseline, Direction::Left);
    painter.set_font(STAT_SLASH_FONT);
    painter.set_scale(1.0, 1.01);
    let end = fill_text_with_spacing(painter, "/", 0.15, end + 5.0, baseline, Direction::Left);
    painter.restore();
    end
}

#[cfg(test)]
#[path = "../../tests/unit/text/stat.rs"]
mod tests;
