//! Layer table: identity, z-order, dependency fingerprint and redraw function per layer.

use crate::card::model::Card;
use crate::draw::display_list::Painter;
use crate::layers::fingerprint::DepFingerprint;
use crate::layers::{footer, frame, header, pendulum, text_box};

/// Layers in compositing order, bottom first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerId {
    Frame,
    Art,
    SpecialFrame,
    Name,
    Attribute,
    Star,
    PendulumScale,
    PendulumEffect,
    TypeAbility,
    Effect,
    Stats,
    SetId,
    Password,
    Creator,
    Sticker,
}

impl LayerId {
    pub const Z_ORDER: [Self; 15] = [
        Self::Frame,
        Self::Art,
        Self::SpecialFrame,
        Self::Name,
        Self::Attribute,
        Self::Star,
        Self::PendulumScale,
        Self::PendulumEffect,
        Self::TypeAbility,
        Self::Effect,
        Self::Stats,
        Self::SetId,
        Self::Password,
        Self::Creator,
        Self::Sticker,
    ];

    pub fn descriptor(self) -> &'static LayerDescriptor {
        &LAYERS[self as usize]
    }
}

/// Everything a layer may read while redrawing.
#[derive(Clone, Copy, Debug)]
pub struct LayerEnv<'a> {
    pub card: &'a Card,
    /// Bumped whenever the artwork bitmap is replaced.
    pub artwork_revision: u64,
}

pub struct LayerDescriptor {
    pub id: LayerId,
    pub fingerprint: fn(&LayerEnv<'_>) -> DepFingerprint,
    pub redraw: fn(&LayerEnv<'_>, &mut Painter<'_>),
}

impl std::fmt::Debug for LayerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerDescriptor")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

const fn layer(
    id: LayerId,
    fingerprint: fn(&LayerEnv<'_>) -> DepFingerprint,
    redraw: fn(&LayerEnv<'_>, &mut Painter<'_>),
) -> LayerDescriptor {
    LayerDescriptor {
        id,
        fingerprint,
        redraw,
    }
}

/// Indexed by `LayerId as usize`.
pub static LAYERS: [LayerDescriptor; 15] = [
    layer(LayerId::Frame, frame::frame_deps, frame::draw_frame),
    layer(LayerId::Art, frame::art_deps, frame::draw_art),
    layer(LayerId::SpecialFrame, frame::special_frame_deps, frame::draw_special_frame),
    layer(LayerId::Name, header::name_deps, header::draw_name_layer),
    layer(LayerId::Attribute, header::attribute_deps, header::draw_attribute),
    layer(LayerId::Star, header::star_deps, header::draw_star),
    layer(LayerId::PendulumScale, pendulum::scale_deps, pendulum::draw_scales),
    layer(LayerId::PendulumEffect, pendulum::effect_deps, pendulum::draw_pendulum_effect),
    layer(LayerId::TypeAbility, text_box::type_deps, text_box::draw_type_line),
    layer(LayerId::Effect, text_box::effect_deps, text_box::draw_effect_text),
    layer(LayerId::Stats, footer::stats_deps, footer::draw_stats),
    layer(LayerId::SetId, footer::set_id_deps, footer::draw_set_id),
    layer(LayerId::Password, footer::password_deps, footer::draw_password),
    layer(LayerId::Creator, footer::creator_deps, footer::draw_creator),
    layer(LayerId::Sticker, footer::sticker_deps, footer::draw_sticker),
];
