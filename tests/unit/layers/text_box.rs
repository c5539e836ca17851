use super::*;
use crate::card::model::Frame;
use crate::draw::directive::{TYPE_LARGE, TYPE_MEDIUM, TYPE_SMALL};
use crate::draw::display_list::DisplayList;
use crate::text::metrics::{FixedAdvanceMetrics, FontFamily, FontSpec};

fn redraw(card: &Card, f: fn(&LayerEnv<'_>, &mut Painter<'_>)) -> DisplayList {
    let m = FixedAdvanceMetrics;
    let mut p = Painter::new(&m, FontSpec::new(FontFamily::Matrix, 10.0));
    f(
        &LayerEnv {
            card,
            artwork_revision: 0,
        },
        &mut p,
    );
    p.finish()
}

fn bracket_font(list: &DisplayList) -> FontSpec {
    list.texts()
        .find(|t| t.text == "[")
        .map(|t| t.font)
        .expect("opening bracket")
}

#[test]
fn short_effect_keeps_medium_type_line() {
    let card = Card::default();
    let list = redraw(&card, draw_type_line);
    assert_eq!(bracket_font(&list), TYPE_MEDIUM.bracket_font);
}

#[test]
fn crowded_effect_shrinks_type_line() {
    let card = Card {
        effect: "Banish 1 card from your opponent's Graveyard, then draw 1 card. ".repeat(8),
        ..Card::default()
    };
    let (layout, _) = main_effect_layout(&FixedAdvanceMetrics, &card);
    assert!(layout.preset_index > 0);
    let list = redraw(&card, draw_type_line);
    assert_eq!(bracket_font(&list), TYPE_SMALL.bracket_font);
}

#[test]
fn spell_type_line_is_large_and_right_aligned() {
    let card = Card {
        frame: Frame::Spell,
        type_ability: vec!["Spell Card".into()],
        sub_family: "EQUIP".into(),
        ..Card::default()
    };
    let list = redraw(&card, draw_type_line);
    let texts: Vec<&str> = list.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["]", "Spell Card", "["]);
    let closing = list.texts().next().expect("closing bracket");
    assert_eq!(closing.font, TYPE_LARGE.bracket_font);
    assert!(closing.origin.x < TYPE_LARGE.anchor);
}

#[test]
fn pendulum_type_line_moves_below_the_pendulum_box() {
    let card = Card {
        is_pendulum: true,
        ..Card::default()
    };
    let list = redraw(&card, draw_type_line);
    let y = list.texts().next().map(|t| t.origin.y).expect("runs");
    assert!((y - (TYPE_MEDIUM.baseline + TYPE_PENDULUM_SHIFT)).abs() < 1e-9);

    let effect = redraw(&card, draw_effect_text);
    let top = effect.texts().next().map(|t| t.origin.y).expect("effect");
    assert!(top > PENDULUM_MONSTER_EFFECT_BOX.y0);
}

#[test]
fn normal_monsters_use_italic_flavor_text() {
    let card = Card {
        frame: Frame::Normal,
        effect: "A quiet dragon.".into(),
        ..Card::default()
    };
    let list = redraw(&card, draw_effect_text);
    let run = list.texts().next().expect("flavor");
    assert_eq!(run.font.family, FLAVOR_FAMILY);
    assert!(run.font.italic);
}

fn env(card: &Card) -> LayerEnv<'_> {
    LayerEnv {
        card,
        artwork_revision: 0,
    }
}

#[test]
fn type_fingerprint_follows_effect_text() {
    let a = Card::default();
    let b = Card {
        effect: "Different.".into(),
        ..Card::default()
    };
    assert_ne!(type_deps(&env(&a)), type_deps(&env(&b)));
    assert_ne!(effect_deps(&env(&a)), effect_deps(&env(&b)));
    let c = Card {
        name: "Renamed".into(),
        ..Card::default()
    };
    assert_eq!(type_deps(&env(&a)), type_deps(&env(&c)));
}
