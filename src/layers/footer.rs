//! Stats, set id, passcode with era marks, creator credit and sticker.

use crate::assets::paths;
use crate::card::era::{EraFlag, active_marks};
use crate::card::model::{Card, CardFormat};
use crate::card::predicates::{has_light_footer, is_link, is_monster, is_pendulum};
use crate::draw::directive::{
    ART_MARK_HEIGHT, ART_MARK_POS, ATK_EDGE, ATK_LABEL_EDGE, CREATOR_FONT, CREATOR_POS,
    DEF_EDGE, DEF_LABEL_EDGE, FIRST_EDITION_GAP, FIRST_EDITION_MIN_EDGE, FOOTER_FONT,
    LIMITED_EDITION_FONT, PASSCODE_POS, PASSCODE_TRACKING, PENDULUM_ART_MARK_POS,
    SET_ID_LINK_POS, SET_ID_PENDULUM_POS, SET_ID_POS, STAT_BASELINE, STICKER_POS,
};
use crate::draw::display_list::{ImageDraw, ImageRef, Painter, TextStroke};
use crate::foundation::core::Rgba8;
use crate::layers::descriptor::LayerEnv;
use crate::layers::fingerprint::{DepFingerprint, DepHasher};
use crate::text::edition::draw_first_edition;
use crate::text::spacing::{Direction, fill_text_with_spacing};
use crate::text::stat::{draw_stat, draw_stat_label};

const LIMITED_EDITION: &str = "LIMITED EDITION";

fn footer_fill(card: &Card) -> Rgba8 {
    if has_light_footer(card) {
        Rgba8::WHITE
    } else {
        Rgba8::BLACK
    }
}

pub(crate) fn stats_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.frame.slug())
        .str(env.card.atk.as_str())
        .str(env.card.def.as_str())
        .finish()
}

pub(crate) fn draw_stats(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    if !is_monster(card) {
        return;
    }
    painter.set_fill(Rgba8::BLACK);
    draw_stat_label(painter, "ATK", ATK_LABEL_EDGE, STAT_BASELINE);
    draw_stat(painter, card.atk.as_str(), ATK_EDGE, STAT_BASELINE);
    if !is_link(card) {
        draw_stat_label(painter, "DEF", DEF_LABEL_EDGE, STAT_BASELINE);
        draw_stat(painter, card.def.as_str(), DEF_EDGE, STAT_BASELINE);
    }
}

pub(crate) fn set_id_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let card = env.card;
    DepHasher::new()
        .str(card.frame.slug())
        .bool(is_pendulum(card))
        .str(&card.set_id)
        .u8(card.format as u8)
        .finish()
}

pub(crate) fn draw_set_id(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    let (tracking, dx, dy) = match card.format {
        CardFormat::Tcg => (0.125, 0.0, 0.0),
        CardFormat::Ocg => (0.145, -3.0, -1.0),
    };
    painter.set_font(FOOTER_FONT);
    painter.set_fill(footer_fill(card));

    let id = card.set_id.as_str();
    if is_pendulum(card) {
        let (x, y) = SET_ID_PENDULUM_POS;
        fill_text_with_spacing(painter, id, tracking, x + dx, y + dy, Direction::Left);
    } else {
        let (x, y) = if is_link(card) {
            SET_ID_LINK_POS
        } else {
            SET_ID_POS
        };
        fill_text_with_spacing(painter, id, tracking, x + dx, y + dy, Direction::Right);
    }
}

pub(crate) fn password_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let card = env.card;
    let mut h = DepHasher::new();
    h.str(card.frame.slug())
        .bool(is_pendulum(card))
        .str(&card.passcode)
        .bool(card.is_legacy_card);
    for flag in EraFlag::ALL {
        h.bool(flag.get(card));
    }
    h.finish()
}

/// Passcode, then era marks: edition text right of the passcode on modern cards, everything
/// else over the bottom-left corner of the artwork.
pub(crate) fn draw_password(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    painter.set_font(FOOTER_FONT);
    painter.set_fill(footer_fill(card));
    let (x, baseline) = PASSCODE_POS;
    let end = fill_text_with_spacing(
        painter,
        &card.passcode,
        PASSCODE_TRACKING,
        x,
        baseline,
        Direction::Left,
    );
    let edition_edge = (end + FIRST_EDITION_GAP).max(FIRST_EDITION_MIN_EDGE);

    let (mark_x, mark_y) = if is_pendulum(card) {
        PENDULUM_ART_MARK_POS
    } else {
        ART_MARK_POS
    };
    for mark in active_marks(card) {
        let beside_passcode = !card.is_legacy_card
            && matches!(mark, EraFlag::FirstEdition | EraFlag::LimitedEdition);
        if beside_passcode {
            draw_edition_text(painter, mark, edition_edge, baseline, None);
            continue;
        }
        match mark {
            EraFlag::FirstEdition | EraFlag::LimitedEdition => {
                painter.save();
                painter.set_fill(Rgba8::BLACK);
                let outline = TextStroke {
                    color: Rgba8::WHITE,
                    width: 2.0,
                };
                draw_edition_text(painter, mark, mark_x, mark_y, Some(outline));
                painter.restore();
            }
            EraFlag::DuelTerminal => painter.draw_image(ImageDraw::at(
                ImageRef::Asset(paths::DUEL_TERMINAL_MARK.to_string()),
                mark_x,
                mark_y - ART_MARK_HEIGHT,
            )),
            EraFlag::Speed => painter.draw_image(ImageDraw::at(
                ImageRef::Asset(paths::SPEED_DUEL_MARK.to_string()),
                mark_x,
                mark_y - ART_MARK_HEIGHT,
            )),
        }
    }
}

fn draw_edition_text(
    painter: &mut Painter<'_>,
    mark: EraFlag,
    edge: f64,
    baseline: f64,
    stroke: Option<TextStroke>,
) {
    if mark == EraFlag::FirstEdition {
        draw_first_edition(painter, edge, baseline, stroke);
        return;
    }
    painter.save();
    painter.set_font(LIMITED_EDITION_FONT);
    painter.set_stroke(stroke);
    painter.fill_text(LIMITED_EDITION, edge, baseline);
    painter.restore();
}

pub(crate) fn creator_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.frame.slug())
        .bool(is_pendulum(env.card))
        .str(&env.card.creator)
        .finish()
}

pub(crate) fn draw_creator(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    painter.set_font(CREATOR_FONT);
    painter.set_fill(footer_fill(card));
    let x = CREATOR_POS.0 - painter.measure(&card.creator);
    painter.fill_text(&card.creator, x, CREATOR_POS.1);
}

pub(crate) fn sticker_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.sticker.slug().unwrap_or("no-sticker"))
        .finish()
}

pub(crate) fn draw_sticker(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    if let Some(slug) = env.card.sticker.slug() {
        painter.draw_image(ImageDraw::at(
            ImageRef::Asset(paths::sticker(slug)),
            STICKER_POS.0,
            STICKER_POS.1,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/footer.rs"]
mod tests;
