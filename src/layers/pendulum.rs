use crate::card::predicates::is_pendulum;
use crate::draw::directive::{
    BLUE_SCALE_EDGE, EFFECT_FAMILY, PENDULUM_EFFECT_BOX, PENDULUM_EFFECT_PRESETS, RED_SCALE_EDGE,
    SCALE_FONT_SIZE, SCALE_TOP,
};
use crate::draw::display_list::Painter;
use crate::foundation::core::Rgba8;
use crate::layers::descriptor::LayerEnv;
use crate::layers::fingerprint::{DepFingerprint, DepHasher};
use crate::text::effect::{EffectRequest, condense_tolerance, draw_effect, fit_effect};
use crate::text::scale::draw_scale;

pub(crate) fn scale_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    DepHasher::new()
        .bool(is_pendulum(env.card))
        .str(&env.card.blue_scale)
        .str(&env.card.red_scale)
        .finish()
}

pub(crate) fn draw_scales(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    if !is_pendulum(env.card) {
        return;
    }
    painter.set_fill(Rgba8::BLACK);
    draw_scale(painter, &env.card.blue_scale, BLUE_SCALE_EDGE, SCALE_TOP, SCALE_FONT_SIZE);
    draw_scale(painter, &env.card.red_scale, RED_SCALE_EDGE, SCALE_TOP, SCALE_FONT_SIZE);
}

pub(crate) fn effect_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let card = env.card;
    DepHasher::new()
        .bool(is_pendulum(card))
        .str(card.frame.slug())
        .str(&card.pendulum_effect)
        .bool(card.effect_style.condense_tolerant)
        .finish()
}

pub(crate) fn draw_pendulum_effect(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    if !is_pendulum(card) {
        return;
    }
    let req = EffectRequest {
        text: &card.pendulum_effect,
        family: EFFECT_FAMILY,
        italic: false,
        area: PENDULUM_EFFECT_BOX,
        presets: PENDULUM_EFFECT_PRESETS,
        tolerance: condense_tolerance(card.effect_style.condense_tolerant),
    };
    let layout = fit_effect(painter.metrics(), &req);
    painter.set_fill(Rgba8::BLACK);
    draw_effect(painter, &layout, PENDULUM_EFFECT_BOX);
}
