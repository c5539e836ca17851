use crate::draw::display_list::{Painter, TextStroke};
use crate::text::metrics::{FontFamily, FontSpec};

const SUPERSCRIPT_RAISE: f64 = 7.4;

/// Draw the "1st Edition" badge with its left edge at `edge`. Returns the cursor after the
/// badge.
pub fn draw_first_edition(
    painter: &mut Painter<'_>,
    edge: f64,
    baseline: f64,
    stroke: Option<TextStroke>,
) -> f64 {
    painter.save();
    painter.set_stroke(stroke);

    let mut x = edge;
    painter.set_font(FontSpec::new(FontFamily::PalatinoLinotypeBold, 23.7));
    painter.fill_text("1", x, baseline);
    x += painter.measure("1") - 2.0;

    painter.set_font(FontSpec::new(FontFamily::PalatinoLinotypeBold, 17.78));
    painter.fill_text("st", x, baseline - SUPERSCRIPT_RAISE);
    x += painter.measure("st");

    painter.set_font(FontSpec::new(FontFamily::PalatinoLinotypeBold, 22.22));
    painter.fill_text(" Edition", x, baseline);
    x += painter.measure(" Edition");

    painter.restore();
    x
}
