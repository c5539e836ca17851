use super::*;

fn card(frame: Frame, pendulum: bool) -> Card {
    Card {
        frame,
        is_pendulum: pendulum,
        ..Card::default()
    }
}

#[test]
fn spell_trap_and_skill_are_not_monsters() {
    for f in [Frame::Spell, Frame::Trap, Frame::Skill] {
        assert!(!is_monster(&card(f, false)));
    }
    for f in [Frame::Normal, Frame::Effect, Frame::Xyz, Frame::Link, Frame::Token] {
        assert!(is_monster(&card(f, false)));
    }
}

#[test]
fn pendulum_requires_non_link_monster() {
    assert!(is_pendulum(&card(Frame::Effect, true)));
    assert!(is_pendulum(&card(Frame::Xyz, true)));
    assert!(!is_pendulum(&card(Frame::Link, true)));
    assert!(!is_pendulum(&card(Frame::Spell, true)));
    assert!(!is_pendulum(&card(Frame::Effect, false)));
}

#[test]
fn predicates_follow_replacement() {
    let a = card(Frame::Xyz, false);
    assert!(is_xyz(&a) && has_light_footer(&a));
    let b = Card {
        is_pendulum: true,
        ..a
    };
    assert!(is_xyz(&b) && !has_light_footer(&b));
    assert!(is_normal(&card(Frame::Normal, false)));
    assert!(!is_normal(&card(Frame::Effect, false)));
}
