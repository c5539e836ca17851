//! Bracketed type/ability line: `[Dragon/Effect]`.

use crate::draw::directive::{
    NO_ICON, SPELL_TRAP_ICON_GAP, SPELL_TRAP_ICON_SIZE, TYPE_LARGE, TYPE_MEDIUM,
    TYPE_RIGHT_MARGIN, TYPE_SMALL, TypeLineMetrics,
};
use crate::draw::display_list::Painter;
use crate::text::spacing::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeLineSize {
    Small,
    Medium,
    /// Spell/trap header line, right-aligned next to the property icon.
    Large,
}

impl TypeLineSize {
    pub fn metrics(self) -> TypeLineMetrics {
        match self {
            Self::Small => TYPE_SMALL,
            Self::Medium => TYPE_MEDIUM,
            Self::Large => TYPE_LARGE,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TypeLine<'a> {
    pub entries: &'a [String],
    pub sub_family: &'a str,
    /// Vertical offset applied to the size's baseline.
    pub baseline_shift: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step<'a> {
    Bracket(&'static str),
    Space,
    Entry { text: &'a str, last: bool },
    /// Signed distance along the layout direction.
    Gap(f64),
    IconSpace,
}

/// Outcome of a type line render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeLineLayout {
    pub size: TypeLineSize,
    /// Cursor after the last step: the right end for left-aligned lines, the left end otherwise.
    pub end: f64,
}

/// Draw the bracketed type line. A `Medium` line running past the right margin is discarded
/// and drawn again at `Small`.
pub fn draw_type_ability(
    painter: &mut Painter<'_>,
    line: &TypeLine<'_>,
    size: TypeLineSize,
    alignment: Direction,
) -> TypeLineLayout {
    let mark = painter.mark();
    let mut steps = build_steps(line, size, alignment);
    if alignment == Direction::Right {
        steps.reverse();
    }

    let metrics = size.metrics();
    let baseline = metrics.baseline + line.baseline_shift;
    painter.save();
    let end = steps.iter().fold(metrics.anchor, |cursor, step| {
        run_step(painter, *step, cursor, baseline, &metrics, alignment)
    });
    painter.restore();

    if end > TYPE_RIGHT_MARGIN && size == TypeLineSize::Medium {
        tracing::debug!(end, "type line overflows, shrinking");
        painter.truncate(mark);
        return draw_type_ability(painter, line, TypeLineSize::Small, alignment);
    }
    TypeLineLayout { size, end }
}

fn build_steps<'a>(line: &TypeLine<'a>, size: TypeLineSize, alignment: Direction) -> Vec<Step<'a>> {
    let mut steps = vec![Step::Bracket("["), Step::Space];
    let count = line.entries.len();
    steps.extend(line.entries.iter().enumerate().map(|(i, text)| Step::Entry {
        text: text.as_str(),
        last: i + 1 == count,
    }));
    steps.push(match size {
        TypeLineSize::Large if line.sub_family.eq_ignore_ascii_case(NO_ICON) => Step::Gap(
            if alignment == Direction::Left {
                4.0
            } else {
                -4.0
            },
        ),
        TypeLineSize::Large => Step::IconSpace,
        _ => Step::Gap(2.0),
    });
    steps.push(Step::Bracket("]"));
    steps
}

fn run_step(
    painter: &mut Painter<'_>,
    step: Step<'_>,
    cursor: f64,
    baseline: f64,
    metrics: &TypeLineMetrics,
    alignment: Direction,
) -> f64 {
    let place = |w: f64| match alignment {
        Direction::Left => (cursor, cursor + w),
        Direction::Right => (cursor - w, cursor - w),
    };
    match step {
        Step::Bracket(b) => {
            painter.set_font(metrics.bracket_font);
            let (x, next) = place(painter.measure(b));
            painter.fill_text(b, x, baseline);
            next
        }
        Step::Space => {
            painter.set_font(metrics.font);
            place(painter.measure(" ")).1
        }
        Step::Entry { text, last } => {
            painter.set_font(metrics.font);
            let text = if last {
                text.to_string()
            } else {
                format!("{text}/")
            };
            let (x, next) = place(painter.measure(&text));
            painter.fill_text(&text, x, baseline);
            next
        }
        Step::Gap(d) => cursor + d,
        Step::IconSpace => place(SPELL_TRAP_ICON_SIZE + SPELL_TRAP_ICON_GAP).1,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/type_line.rs"]
mod tests;
