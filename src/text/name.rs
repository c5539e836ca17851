use crate::card::model::{Card, Foil, NameStyleType, TextStyle};
use crate::card::predicates::{is_link, is_monster, is_xyz};
use crate::draw::directive::{NAME_FONT, NAME_MAX_WIDTH, NAME_POS};
use crate::draw::display_list::{Painter, TextShadow, TextStroke};
use crate::foundation::core::{Rgba8, Vec2};

const STYLE_STROKE_WIDTH: f64 = 1.5;
const STYLE_SHADOW_BLUR: f64 = 3.0;

/// Name style actually used for `card`.
pub fn resolve_name_style(card: &Card) -> TextStyle {
    if card.name_style_type == NameStyleType::Custom {
        return card.name_style;
    }
    match card.foil {
        Foil::Gold => TextStyle {
            fill: Rgba8::opaque(0xe8, 0xc5, 0x5b),
            stroke: None,
            shadow: Some(Rgba8::opaque(0x3c, 0x2a, 0x00)),
        },
        Foil::Platinum => TextStyle {
            fill: Rgba8::opaque(0xd8, 0xd8, 0xd8),
            stroke: None,
            shadow: Some(Rgba8::opaque(0x20, 0x20, 0x20)),
        },
        Foil::Normal => {
            let light = !is_monster(card) || is_link(card) || is_xyz(card);
            TextStyle {
                fill: if light { Rgba8::WHITE } else { Rgba8::BLACK },
                ..TextStyle::default()
            }
        }
    }
}

/// Load fill, stroke and glow of `style` into the painter.
pub fn apply_text_style(painter: &mut Painter<'_>, style: &TextStyle) {
    painter.set_fill(style.fill);
    painter.set_stroke(style.stroke.map(|color| TextStroke {
        color,
        width: STYLE_STROKE_WIDTH,
    }));
    painter.set_shadow(style.shadow.map(|color| TextShadow {
        color,
        blur: STYLE_SHADOW_BLUR,
        offset: Vec2::ZERO,
    }));
}

/// Draw the card name on one line, condensed horizontally to the name box.
pub fn draw_name(painter: &mut Painter<'_>, name: &str, style: &TextStyle) {
    painter.save();
    painter.set_font(NAME_FONT);
    apply_text_style(painter, style);
    let width = painter.measure(name);
    let ratio = if width > NAME_MAX_WIDTH {
        NAME_MAX_WIDTH / width
    } else {
        1.0
    };
    painter.set_scale(ratio, 1.0);
    painter.fill_text(name, NAME_POS.0, NAME_POS.1);
    painter.restore();
}
