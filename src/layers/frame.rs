//! Frame, artwork and the pendulum/link overlays drawn above the artwork.

use crate::assets::paths;
use crate::card::model::Foil;
use crate::card::predicates::{is_link, is_pendulum, is_xyz};
use crate::draw::directive::{
    ART_RECT, FOIL_ART_POS, FOIL_EFFECT_POS, LINK_ARROW_RECTS, LINK_COUNT_FONT, LINK_COUNT_POS,
    LINK_COUNT_SCALE_X, LINK_OVERLAY_FOIL_POS, LINK_OVERLAY_POS, PENDULUM_ART_RECT,
};
use crate::draw::display_list::{ImageDraw, ImageRef, Painter};
use crate::foundation::core::{DESIGN_CANVAS, Rgba8};
use crate::layers::descriptor::LayerEnv;
use crate::layers::fingerprint::{DepFingerprint, DepHasher};

/// Full-card overlay drawn at the design size.
fn full_card(path: String) -> ImageDraw {
    ImageDraw::at(ImageRef::Asset(path), 0.0, 0.0).sized(
        f64::from(DESIGN_CANVAS.width),
        f64::from(DESIGN_CANVAS.height),
    )
}

pub(crate) fn frame_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .str(env.card.frame.slug())
        .str(env.card.foil.slug())
        .finish()
}

pub(crate) fn draw_frame(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    painter.draw_image(full_card(paths::frame(card.frame)));
    if card.foil.is_foiled() {
        painter.draw_image(ImageDraw::at(
            ImageRef::Asset(paths::foil_art(card.foil)),
            FOIL_ART_POS.0,
            FOIL_ART_POS.1,
        ));
        painter.draw_image(ImageDraw::at(
            ImageRef::Asset(paths::foil_effect(card.foil)),
            FOIL_EFFECT_POS.0,
            FOIL_EFFECT_POS.1,
        ));
    }
}

pub(crate) fn art_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .bool(is_pendulum(env.card))
        .u64(env.artwork_revision)
        .finish()
}

pub(crate) fn draw_art(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let rect = if is_pendulum(env.card) {
        PENDULUM_ART_RECT
    } else {
        ART_RECT
    };
    painter.draw_image(
        ImageDraw::at(ImageRef::Artwork, rect.x0, rect.y0).sized(rect.width(), rect.height()),
    );
}

pub(crate) fn special_frame_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let card = env.card;
    let mut h = DepHasher::new();
    h.str(card.frame.slug())
        .str(card.foil.slug())
        .bool(card.is_pendulum)
        .u64(card.link_map.len() as u64);
    for arrow in &card.link_map {
        h.u8(arrow.code());
    }
    h.finish()
}

pub(crate) fn draw_special_frame(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    let foil = card.foil;

    if is_pendulum(card) {
        if !is_xyz(card) {
            painter.draw_image(full_card(paths::pendulum_overlay(card.frame)));
        }
        painter.draw_image(full_card(paths::pendulum_frame(Foil::Normal)));
        if foil.is_foiled() {
            painter.draw_image(full_card(paths::pendulum_frame(foil)));
        }
    }

    painter.draw_image(full_card(paths::border(foil)));

    if card.is_pendulum || !is_link(card) {
        return;
    }
    if foil.is_foiled() {
        let (x, y) = LINK_OVERLAY_FOIL_POS;
        painter.draw_image(ImageDraw::at(ImageRef::Asset(paths::link_overlay(foil)), x, y));
        painter.draw_image(ImageDraw::at(
            ImageRef::Asset(paths::link_overlay_arrow(foil)),
            x,
            y,
        ));
    } else {
        let (x, y) = LINK_OVERLAY_POS;
        painter.draw_image(ImageDraw::at(ImageRef::Asset(paths::link_overlay(foil)), x, y));
    }

    for arrow in &card.link_map {
        let (x, y, w, h) = LINK_ARROW_RECTS[usize::from(arrow.code()) - 1];
        painter.draw_image(
            ImageDraw::at(ImageRef::Asset(paths::link_arrow(*arrow, foil)), x, y).sized(w, h),
        );
    }

    let rating = card.link_map.len().to_string();
    painter.save();
    painter.set_font(LINK_COUNT_FONT);
    painter.set_fill(Rgba8::BLACK);
    painter.set_scale(LINK_COUNT_SCALE_X, 1.0);
    let x = LINK_COUNT_POS.0 - painter.measure(&rating) * LINK_COUNT_SCALE_X;
    painter.fill_text(&rating, x, LINK_COUNT_POS.1);
    painter.restore();
}
