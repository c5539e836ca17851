//! Name, attribute and the level/rank row (or spell/trap property icon).

use crate::assets::paths;
use crate::card::model::TextStyle;
use crate::card::predicates::{is_link, is_monster, is_xyz};
use crate::draw::directive::{
    ATTRIBUTE_POS, HEADER_WIDTH, NO_ICON, SPELL_TRAP_ICON_EDGE, SPELL_TRAP_ICON_GAP,
    SPELL_TRAP_ICON_SIZE, SPELL_TRAP_ICON_TOP, SPELL_TRAP_ICONS, STAR_GAP, STAR_LEVEL_EDGE,
    STAR_MAX, STAR_RANK_EDGE, STAR_SIZE, STAR_TOP,
};
use crate::draw::display_list::{ImageDraw, ImageRef, ImageX, Painter};
use crate::foundation::core::Rgba8;
use crate::layers::descriptor::LayerEnv;
use crate::layers::fingerprint::{DepFingerprint, DepHasher};
use crate::text::name::{draw_name, resolve_name_style};

fn hash_style(h: &mut DepHasher, style: &TextStyle) {
    let color = |h: &mut DepHasher, c: Option<Rgba8>| match c {
        Some(c) => {
            h.u8(1).u8(c.r).u8(c.g).u8(c.b).u8(c.a);
        }
        None => {
            h.u8(0);
        }
    };
    color(h, Some(style.fill));
    color(h, style.stroke);
    color(h, style.shadow);
}

pub(crate) fn name_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let card = env.card;
    let mut h = DepHasher::new();
    h.str(&card.name)
        .u8(card.name_style_type as u8)
        .str(card.foil.slug())
        .str(card.frame.slug());
    hash_style(&mut h, &card.name_style);
    h.finish()
}

pub(crate) fn draw_name_layer(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let style = resolve_name_style(env.card);
    draw_name(painter, &env.card.name, &style);
}

pub(crate) fn attribute_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.attribute.slug())
        .str(env.card.frame.slug())
        .finish()
}

pub(crate) fn draw_attribute(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    painter.draw_image(ImageDraw::at(
        ImageRef::Asset(paths::attribute(env.card.attribute)),
        ATTRIBUTE_POS.0,
        ATTRIBUTE_POS.1,
    ));
}

pub(crate) fn star_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.frame.slug())
        .u64(u64::from(env.card.star))
        .str(&env.card.sub_family)
        .finish()
}

/// Left edge of each level/rank icon. Up to twelve icons hug the frame edge (right for
/// levels, left for ranks); thirteen are centered in the header.
pub fn star_positions(star: u32, rank: bool) -> Vec<f64> {
    let count = star.min(STAR_MAX);
    if count == 0 {
        return Vec::new();
    }
    let step = STAR_SIZE + STAR_GAP;
    let total = STAR_SIZE * f64::from(count) + STAR_GAP * f64::from(count - 1);
    let centered_left = (HEADER_WIDTH - total) / 2.0;
    (0..count)
        .map(|i| {
            let offset = step * f64::from(i);
            match (rank, count <= 12) {
                (true, true) => STAR_RANK_EDGE + offset,
                (true, false) => centered_left + offset,
                (false, true) => STAR_LEVEL_EDGE - STAR_SIZE - offset,
                (false, false) => centered_left + total - STAR_SIZE - offset,
            }
        })
        .collect()
}

/// Property icon name for a spell/trap, if it has one.
pub fn spell_trap_icon(sub_family: &str) -> Option<String> {
    let normalized = sub_family.to_ascii_uppercase();
    (normalized != NO_ICON && SPELL_TRAP_ICONS.contains(&normalized.as_str())).then_some(normalized)
}

pub(crate) fn draw_star(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    if is_monster(card) {
        if is_link(card) {
            return;
        }
        let rank = is_xyz(card);
        let asset = paths::star(rank);
        for x in star_positions(card.star, rank) {
            painter.draw_image(ImageDraw::at(ImageRef::Asset(asset.clone()), x, STAR_TOP));
        }
        return;
    }

    if let Some(icon) = spell_trap_icon(&card.sub_family) {
        painter.draw_image(ImageDraw {
            image: ImageRef::Asset(paths::spell_trap_icon(&icon)),
            x: ImageX::RightOf {
                edge: SPELL_TRAP_ICON_EDGE,
                gap: SPELL_TRAP_ICON_GAP,
            },
            y: SPELL_TRAP_ICON_TOP,
            size: None,
        }
        .sized(SPELL_TRAP_ICON_SIZE, SPELL_TRAP_ICON_SIZE));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/header.rs"]
mod tests;
