//! Effect text fitting.
//!
//! Text is word-wrapped into a fixed box. Lines may be condensed horizontally down to
//! `1 - tolerance` of their natural width; when a line still does not fit, or the lines do not
//! fit vertically, the next smaller preset is tried.

use crate::draw::directive::EffectPreset;
use crate::draw::display_list::Painter;
use crate::foundation::core::Rect;
use crate::text::metrics::{FontFamily, FontSpec, TextMetrics};

pub const STRICT_TOLERANCE: f64 = 0.03;
pub const TOLERANT_TOLERANCE: f64 = 0.12;
pub const MAX_TOLERANCE: f64 = 0.3;

/// Condense tolerance for the card's effect style.
pub fn condense_tolerance(tolerant: bool) -> f64 {
    if tolerant {
        TOLERANT_TOLERANCE
    } else {
        STRICT_TOLERANCE
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EffectRequest<'a> {
    pub text: &'a str,
    pub family: FontFamily,
    pub italic: bool,
    pub area: Rect,
    /// Candidate presets, largest first.
    pub presets: &'a [EffectPreset],
    pub tolerance: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectLine {
    pub text: String,
    pub natural_width: f64,
    /// Last line of its paragraph; never justified.
    pub ends_paragraph: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectLayout {
    pub preset_index: usize,
    pub font: FontSpec,
    pub line_height: f64,
    pub lines: Vec<EffectLine>,
    /// False when even the smallest preset overflows.
    pub fits: bool,
}

/// Pick the first preset the text fits at. Falls back to the smallest preset, overflowing.
#[tracing::instrument(level = "debug", skip_all, fields(presets = req.presets.len()))]
pub fn fit_effect(metrics: &dyn TextMetrics, req: &EffectRequest<'_>) -> EffectLayout {
    let tolerance = req.tolerance.clamp(0.0, MAX_TOLERANCE);
    let max_natural = req.area.width() / (1.0 - tolerance);
    let font_for = |p: &EffectPreset| {
        let font = FontSpec::new(req.family, p.font_size);
        if req.italic { font.italic() } else { font }
    };

    let mut last = None;
    for (index, preset) in req.presets.iter().enumerate() {
        let font = font_for(preset);
        let (lines, word_overflow) = wrap(metrics, &font, req.text, max_natural);
        let fits = !word_overflow && lines_fit(lines.len(), preset.line_height, req.area.height());
        let layout = EffectLayout {
            preset_index: index,
            font,
            line_height: preset.line_height,
            lines,
            fits,
        };
        if fits {
            return layout;
        }
        last = Some(layout);
    }

    last.unwrap_or_else(|| EffectLayout {
        preset_index: 0,
        font: FontSpec::new(req.family, 0.0),
        line_height: 0.0,
        lines: Vec::new(),
        fits: false,
    })
}

fn lines_fit(count: usize, line_height: f64, height: f64) -> bool {
    count as f64 * line_height <= height + 1e-6
}

/// Greedy word wrap per paragraph. The flag reports a single word wider than `max_width`.
fn wrap(metrics: &dyn TextMetrics, font: &FontSpec, text: &str, max_width: f64) -> (Vec<EffectLine>, bool) {
    let mut lines = Vec::new();
    let mut overflow = false;
    if text.trim().is_empty() {
        return (lines, overflow);
    }

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            overflow |= metrics.advance(font, word) > max_width;
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if metrics.advance(font, &candidate) <= max_width {
                current = candidate;
            } else {
                let done = std::mem::replace(&mut current, word.to_string());
                lines.push(EffectLine {
                    natural_width: metrics.advance(font, &done),
                    text: done,
                    ends_paragraph: false,
                });
            }
        }
        lines.push(EffectLine {
            natural_width: metrics.advance(font, &current),
            text: current,
            ends_paragraph: true,
        });
    }
    (lines, overflow)
}

/// Draw a fitted layout inside `area`. Overwide lines are condensed, inner paragraph lines
/// are justified.
pub fn draw_effect(painter: &mut Painter<'_>, layout: &EffectLayout, area: Rect) {
    painter.save();
    painter.set_font(layout.font);
    let width = area.width();
    for (i, line) in layout.lines.iter().enumerate() {
        let y = area.y0 + layout.font.size + layout.line_height * i as f64;
        if line.natural_width > width {
            painter.set_scale(width / line.natural_width, 1.0);
            painter.fill_text(&line.text, area.x0, y);
            painter.set_scale(1.0, 1.0);
            continue;
        }

        let words: Vec<&str> = line.text.split(' ').collect();
        if line.ends_paragraph || words.len() < 2 {
            painter.fill_text(&line.text, area.x0, y);
            continue;
        }
        let word_widths: Vec<f64> = words.iter().map(|w| painter.measure(w)).collect();
        let gap = (width - word_widths.iter().sum::<f64>()) / (words.len() - 1) as f64;
        let mut x = area.x0;
        for (word, w) in words.iter().zip(word_widths) {
            painter.fill_text(word, x, y);
            x += w + gap;
        }
    }
    painter.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/text/effect.rs"]
mod tests;
