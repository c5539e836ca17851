//! Era mark exclusivity.
//!
//! Legacy cards print every mark bottom-left of the artwork, so at most one mark may be set.
//! Modern cards print first/limited edition right of the passcode and duel-terminal/speed marks
//! bottom-left of the artwork, giving two independent exclusive pairs.

use crate::card::model::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraFlag {
    FirstEdition,
    LimitedEdition,
    DuelTerminal,
    Speed,
}

impl EraFlag {
    pub const ALL: [Self; 4] = [
        Self::FirstEdition,
        Self::LimitedEdition,
        Self::DuelTerminal,
        Self::Speed,
    ];

    pub fn get(self, card: &Card) -> bool {
        match self {
            Self::FirstEdition => card.is_first_edition,
            Self::LimitedEdition => card.is_limited_edition,
            Self::DuelTerminal => card.is_duel_terminal_card,
            Self::Speed => card.is_speed_card,
        }
    }

    fn set(self, card: &mut Card, value: bool) {
        match self {
            Self::FirstEdition => card.is_first_edition = value,
            Self::LimitedEdition => card.is_limited_edition = value,
            Self::DuelTerminal => card.is_duel_terminal_card = value,
            Self::Speed => card.is_speed_card = value,
        }
    }

    /// Flags that must be cleared before this one is set.
    pub fn exclusivity_group(self, legacy: bool) -> &'static [EraFlag] {
        if legacy {
            return &Self::ALL;
        }
        match self {
            Self::FirstEdition | Self::LimitedEdition => {
                &[Self::FirstEdition, Self::LimitedEdition]
            }
            Self::DuelTerminal | Self::Speed => &[Self::DuelTerminal, Self::Speed],
        }
    }
}

/// Toggle one era mark, clearing its exclusivity group first when enabling it.
pub fn set_era_flag(card: &Card, flag: EraFlag, value: bool) -> Card {
    let mut next = card.clone();
    if value {
        for other in flag.exclusivity_group(card.is_legacy_card) {
            other.set(&mut next, false);
        }
    }
    flag.set(&mut next, value);
    next
}

/// Switch between legacy and modern mode, resolving conflicting marks.
///
/// Entering legacy keeps first edition, then speed, then duel terminal, then limited edition.
/// Leaving legacy keeps first edition over limited edition and speed over duel terminal.
pub fn set_legacy_mode(card: &Card, legacy: bool) -> Card {
    let mut next = card.clone();
    let first = card.is_first_edition;
    if legacy {
        let speed = !first && card.is_speed_card;
        let terminal = !(first || speed) && card.is_duel_terminal_card;
        let limited = !(first || speed || terminal) && card.is_limited_edition;
        next.is_first_edition = first;
        next.is_speed_card = speed;
        next.is_duel_terminal_card = terminal;
        next.is_limited_edition = limited;
    } else {
        next.is_first_edition = first;
        next.is_limited_edition = !first && card.is_limited_edition;
        next.is_speed_card = card.is_speed_card;
        next.is_duel_terminal_card = !card.is_speed_card && card.is_duel_terminal_card;
    }
    next.is_legacy_card = legacy;
    next
}

/// Marks currently set, in priority order.
pub fn active_marks(card: &Card) -> Vec<EraFlag> {
    [
        EraFlag::FirstEdition,
        EraFlag::Speed,
        EraFlag::DuelTerminal,
        EraFlag::LimitedEdition,
    ]
    .into_iter()
    .filter(|f| f.get(card))
    .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/card/era.rs"]
mod tests;
