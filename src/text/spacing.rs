use crate::draw::display_list::Painter;

/// Which side of the anchor a tracked run grows towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Anchor is the left edge; characters advance rightwards.
    Left,
    /// Anchor is the right edge; the last character is placed first.
    Right,
}

/// Draw `text` one character at a time, advancing by width x (1 + `tracking`).
///
/// Returns the cursor after the run: the right end for [`Direction::Left`], the left end for
/// [`Direction::Right`]. Widths are unscaled advances in the painter's current font.
pub fn fill_text_with_spacing(
    painter: &mut Painter<'_>,
    text: &str,
    tracking: f64,
    anchor_x: f64,
    baseline_y: f64,
    direction: Direction,
) -> f64 {
    let mut buf = [0u8; 4];
    let mut cursor = anchor_x;
    match direction {
        Direction::Left => {
            for c in text.chars() {
                let glyph = c.encode_utf8(&mut buf);
                let w = painter.measure(glyph);
                painter.fill_text(glyph, cursor, baseline_y);
                cursor += w * (1.0 + tracking);
            }
        }
        Direction::Right => {
            for c in text.chars().rev() {
                let glyph = c.encode_utf8(&mut buf);
                let w = painter.measure(glyph);
                cursor -= w;
                painter.fill_text(glyph, cursor, baseline_y);
                cursor -= w * tracking;
            }
        }
    }
    cursor
}

#[cfg(test)]
#[path = "../../tests/unit/text/spacing.rs"]
mod tests;
