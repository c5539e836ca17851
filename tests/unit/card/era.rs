use super::*;
use proptest::prelude::*;

fn flags(card: &Card) -> [bool; 4] {
    [
        card.is_first_edition,
        card.is_limited_edition,
        card.is_duel_terminal_card,
        card.is_speed_card,
    ]
}

#[test]
fn entering_legacy_prefers_first_edition_over_speed() {
    let card = Card {
        is_first_edition: true,
        is_speed_card: true,
        ..Card::default()
    };
    let next = set_legacy_mode(&card, true);
    assert!(next.is_legacy_card);
    assert!(next.is_first_edition);
    assert!(!next.is_speed_card);
}

#[test]
fn entering_legacy_priority_chain() {
    let card = Card {
        is_limited_edition: true,
        is_speed_card: true,
        ..Card::default()
    };
    assert_eq!(flags(&set_legacy_mode(&card, true)), [false, false, false, true]);

    let card = Card {
        is_limited_edition: true,
        is_duel_terminal_card: true,
        ..Card::default()
    };
    assert_eq!(flags(&set_legacy_mode(&card, true)), [false, false, true, false]);

    let card = Card {
        is_limited_edition: true,
        ..Card::default()
    };
    assert_eq!(flags(&set_legacy_mode(&card, true)), [false, true, false, false]);
}

#[test]
fn modern_pairs_are_independent() {
    let card = set_era_flag(&Card::default(), EraFlag::FirstEdition, true);
    let card = set_era_flag(&card, EraFlag::Speed, true);
    assert_eq!(flags(&card), [true, false, false, true]);

    let card = set_era_flag(&card, EraFlag::LimitedEdition, true);
    assert_eq!(flags(&card), [false, true, false, true]);

    let card = set_era_flag(&card, EraFlag::DuelTerminal, true);
    assert_eq!(flags(&card), [false, true, true, false]);
}

#[test]
fn legacy_toggle_clears_everything_else() {
    let card = set_legacy_mode(&Card::default(), true);
    let card = set_era_flag(&card, EraFlag::FirstEdition, true);
    let card = set_era_flag(&card, EraFlag::DuelTerminal, true);
    assert_eq!(flags(&card), [false, false, true, false]);
}

#[test]
fn clearing_a_flag_only_touches_that_flag() {
    let card = Card {
        is_first_edition: true,
        is_speed_card: true,
        ..Card::default()
    };
    let next = set_era_flag(&card, EraFlag::Speed, false);
    assert_eq!(flags(&next), [true, false, false, false]);
}

#[test]
fn leaving_legacy_keeps_the_single_mark() {
    let card = set_legacy_mode(&Card::default(), true);
    let card = set_era_flag(&card, EraFlag::LimitedEdition, true);
    let next = set_legacy_mode(&card, false);
    assert!(!next.is_legacy_card);
    assert_eq!(flags(&next), [false, true, false, false]);
}

fn arb_step() -> impl Strategy<Value = (u8, bool)> {
    (0u8..5, any::<bool>())
}

proptest! {
    #[test]
    fn legacy_mode_never_holds_two_marks(
        start in any::<[bool; 4]>(),
        steps in proptest::collection::vec(arb_step(), 0..24),
    ) {
        let mut card = Card {
            is_first_edition: start[0],
            is_limited_edition: start[1],
            is_duel_terminal_card: start[2],
            is_speed_card: start[3],
            ..Card::default()
        };
        card = set_legacy_mode(&card, true);
        prop_assert!(flags(&card).iter().filter(|f| **f).count() <= 1);

        for (which, value) in steps {
            card = match which {
                4 => set_legacy_mode(&card, true),
                i => set_era_flag(&card, EraFlag::ALL[i as usize], value),
            };
            prop_assert!(flags(&card).iter().filter(|f| **f).count() <= 1);
            card.validate().unwrap();
        }
    }

    #[test]
    fn modern_mode_respects_both_pairs(
        steps in proptest::collection::vec(arb_step(), 0..24),
    ) {
        let mut card = Card::default();
        for (which, value) in steps {
            if which == 4 {
                continue;
            }
            card = set_era_flag(&card, EraFlag::ALL[which as usize], value);
            prop_assert!(card.validate().is_ok());
        }
    }
}
