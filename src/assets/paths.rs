//! Asset path templates, relative to the asset root.

use crate::card::model::{Attribute, Foil, Frame, LinkArrow};

fn foiled(base: &str, foil: Foil) -> String {
    if foil.is_foiled() {
        format!("{base}-{}.png", foil.slug())
    } else {
        format!("{base}.png")
    }
}

pub fn frame(frame: Frame) -> String {
    format!("frame/frame-{}.png", frame.slug())
}

pub fn foil_art(foil: Foil) -> String {
    format!("frame/frame-art-{}.png", foil.slug())
}

pub fn foil_effect(foil: Foil) -> String {
    format!("frame/frame-effect-{}.png", foil.slug())
}

pub fn pendulum_overlay(frame: Frame) -> String {
    format!("pendulum/overlay-pendulum-{}.png", frame.slug())
}

pub fn pendulum_frame(foil: Foil) -> String {
    foiled("frame/frame-pendulum-medium", foil)
}

pub fn border(foil: Foil) -> String {
    foiled("frame/frame-border", foil)
}

pub fn link_overlay(foil: Foil) -> String {
    foiled("link/link-overlay", foil)
}

pub fn link_overlay_arrow(foil: Foil) -> String {
    format!("link/link-overlay-arrow-{}.png", foil.slug())
}

pub fn link_arrow(arrow: LinkArrow, foil: Foil) -> String {
    foiled(&format!("link/link-arrow-{}", arrow.code()), foil)
}

pub fn attribute(attribute: Attribute) -> String {
    format!("attribute/attr-{}.png", attribute.slug())
}

pub fn star(rank: bool) -> String {
    format!(
        "sub-family/subfamily-{}.png",
        if rank { "rank" } else { "level" }
    )
}

pub fn spell_trap_icon(sub_family: &str) -> String {
    format!("sub-family/subfamily-{}.png", sub_family.to_ascii_lowercase())
}

pub fn sticker(slug: &str) -> String {
    format!("sticker/sticker-{slug}.png")
}

pub const DUEL_TERMINAL_MARK: &str = "mark/duel-terminal.png";
pub const SPEED_DUEL_MARK: &str = "mark/speed-duel.png";
