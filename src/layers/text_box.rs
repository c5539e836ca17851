//! Type line and main effect text. The type line size depends on how the effect text fits.

use crate::card::model::Card;
use crate::card::predicates::{is_monster, is_normal, is_pendulum};
use crate::draw::directive::{
    EFFECT_FAMILY, FLAVOR_FAMILY, MONSTER_EFFECT_BOX, MONSTER_EFFECT_PRESETS,
    PENDULUM_MONSTER_EFFECT_BOX, SPELL_TRAP_EFFECT_BOX, SPELL_TRAP_EFFECT_PRESETS,
    TYPE_PENDULUM_SHIFT,
};
use crate::draw::display_list::Painter;
use crate::foundation::core::{Rect, Rgba8};
use crate::layers::descriptor::LayerEnv;
use crate::layers::fingerprint::{DepFingerprint, DepHasher};
use crate::text::effect::{EffectLayout, EffectRequest, condense_tolerance, draw_effect, fit_effect};
use crate::text::metrics::TextMetrics;
use crate::text::spacing::Direction;
use crate::text::type_line::{TypeLine, TypeLineSize, draw_type_ability};

/// Fit the main effect text for `card`, returning the layout and the box it belongs in.
pub fn main_effect_layout(metrics: &dyn TextMetrics, card: &Card) -> (EffectLayout, Rect) {
    let monster = is_monster(card);
    let area = match (monster, is_pendulum(card)) {
        (false, _) => SPELL_TRAP_EFFECT_BOX,
        (true, true) => PENDULUM_MONSTER_EFFECT_BOX,
        (true, false) => MONSTER_EFFECT_BOX,
    };
    let flavor = monster && is_normal(card);
    let req = EffectRequest {
        text: &card.effect,
        family: if flavor { FLAVOR_FAMILY } else { EFFECT_FAMILY },
        italic: flavor,
        area,
        presets: if monster {
            MONSTER_EFFECT_PRESETS
        } else {
            SPELL_TRAP_EFFECT_PRESETS
        },
        tolerance: condense_tolerance(card.effect_style.condense_tolerant),
    };
    (fit_effect(metrics, &req), area)
}

fn hash_effect_inputs(h: &mut DepHasher, card: &Card) {
    h.str(card.frame.slug())
        .bool(is_pendulum(card))
        .str(&card.effect)
        .bool(card.effect_style.condense_tolerant);
}

pub(crate) fn type_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let mut h = DepHasher::new();
    hash_effect_inputs(&mut h, env.card);
    h.strs(&env.card.type_ability).str(&env.card.sub_family);
    h.finish()
}

pub(crate) fn draw_type_line(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let card = env.card;
    painter.set_fill(Rgba8::BLACK);
    let mut line = TypeLine {
        entries: &card.type_ability,
        sub_family: &card.sub_family,
        baseline_shift: 0.0,
    };

    if !is_monster(card) {
        draw_type_ability(painter, &line, TypeLineSize::Large, Direction::Right);
        return;
    }
    let (layout, _) = main_effect_layout(painter.metrics(), card);
    let size = if layout.preset_index == 0 {
        TypeLineSize::Medium
    } else {
        TypeLineSize::Small
    };
    if is_pendulum(card) {
        line.baseline_shift = TYPE_PENDULUM_SHIFT;
    }
    draw_type_ability(painter, &line, size, Direction::Left);
}

pub(crate) fn effect_deps(env: &LayerEnv<'_>) -> DepFingerprint {
    let mut h = DepHasher::new();
    hash_effect_inputs(&mut h, env.card);
    h.finish()
}

pub(crate) fn draw_effect_text(env: &LayerEnv<'_>, painter: &mut Painter<'_>) {
    let (layout, area) = main_effect_layout(painter.metrics(), env.card);
    if !layout.fits {
        tracing::debug!(preset = layout.preset_index, "effect text overflows its box");
    }
    painter.set_fill(Rgba8::BLACK);
    draw_effect(painter, &layout, area);
}

#[cfg(test)]
#[path = "../../tests/unit/layers/text_box.rs"]
mod tests;
