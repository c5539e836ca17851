//! Derived classifiers. Always computed from the card, never stored on it.

use crate::card::model::{Card, Frame};

pub fn is_monster(card: &Card) -> bool {
    !matches!(card.frame, Frame::Spell | Frame::Trap | Frame::Skill)
}

/// Flavor-text monsters: their effect box uses the italic flavor font.
pub fn is_normal(card: &Card) -> bool {
    matches!(card.frame, Frame::Normal | Frame::Token)
}

pub fn is_xyz(card: &Card) -> bool {
    card.frame == Frame::Xyz
}

pub fn is_link(card: &Card) -> bool {
    card.frame == Frame::Link
}

/// The pendulum flag only takes effect on non-link monsters.
pub fn is_pendulum(card: &Card) -> bool {
    card.is_pendulum && is_monster(card) && !is_link(card)
}

/// Footer text is drawn white on dark non-pendulum frames.
pub fn has_light_footer(card: &Card) -> bool {
    is_xyz(card) && !is_pendulum(card)
}

#[cfg(test)]
#[path = "../../tests/unit/card/predicates.rs"]
mod tests;
