use super::*;
use crate::card::era::{set_era_flag, set_legacy_mode};
use crate::card::model::{Frame, Stat, Sticker};
use crate::draw::display_list::{DisplayList, TextPaint};
use crate::text::metrics::{FixedAdvanceMetrics, FontFamily, FontSpec, TextMetrics};

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

fn texts(list: &DisplayList) -> Vec<String> {
    list.texts().map(|t| t.text.clone()).collect()
}

#[test]
fn link_monsters_have_no_def() {
    let card = Card {
        frame: Frame::Link,
        atk: Stat::new("2300"),
        ..Card::default()
    };
    let t = texts(&redraw(&card, draw_stats));
    assert!(t.contains(&"2300".to_string()));
    assert!(!t.contains(&"D".to_string()));

    let spell = Card {
        frame: Frame::Trap,
        ..Card::default()
    };
    assert!(redraw(&spell, draw_stats).is_empty());
}

#[test]
fn set_id_anchor_depends_on_frame() {
    let normal = redraw(&Card::default(), draw_set_id);
    let last = normal.texts().next().expect("glyph");
    // right-aligned: last character first
    assert_eq!(last.text, "1");
    assert!(last.origin.x < SET_ID_POS.0);

    let pendulum = Card {
        is_pendulum: true,
        ..Card::default()
    };
    let first = redraw(&pendulum, draw_set_id);
    let run = first.texts().next().expect("glyph");
    assert_eq!(run.text, "C");
    assert_eq!(run.origin.x, SET_ID_PENDULUM_POS.0);

    let ocg = Card {
        is_pendulum: true,
        format: CardFormat::Ocg,
        ..Card::default()
    };
    let run = redraw(&ocg, draw_set_id).texts().next().cloned().expect("glyph");
    assert_eq!(run.origin.x, SET_ID_PENDULUM_POS.0 - 3.0);
    assert_eq!(run.origin.y, SET_ID_PENDULUM_POS.1 - 1.0);
}

#[test]
fn xyz_footer_is_white_unless_pendulum() {
    let xyz = Card {
        frame: Frame::Xyz,
        ..Card::default()
    };
    let run = redraw(&xyz, draw_password).texts().next().cloned().expect("glyph");
    assert_eq!(run.paint, TextPaint::Fill(Rgba8::WHITE));

    let xyz_pendulum = Card {
        is_pendulum: true,
        ..xyz
    };
    let run = redraw(&xyz_pendulum, draw_password)
        .texts()
        .next()
        .cloned()
        .expect("glyph");
    assert_eq!(run.paint, TextPaint::Fill(Rgba8::BLACK));
}

#[test]
fn modern_first_edition_sits_right_of_the_passcode() {
    let card = set_era_flag(&Card::default(), EraFlag::FirstEdition, true);
    let list = redraw(&card, draw_password);
    let digits = card.passcode.chars().count();
    let runs: Vec<_> = list.texts().collect();
    assert_eq!(runs[digits].text, "1");
    assert!(runs[digits].origin.x >= FIRST_EDITION_MIN_EDGE);
    assert!(runs[digits].origin.x > runs[digits - 1].origin.x);
    assert_eq!(runs[digits].origin.y, PASSCODE_POS.1);
}

#[test]
fn legacy_marks_move_onto_the_artwork() {
    let card = set_legacy_mode(&Card::default(), true);
    let card = set_era_flag(&card, EraFlag::LimitedEdition, true);
    let list = redraw(&card, draw_password);
    let limited = list
        .texts()
        .find(|t| t.text == LIMITED_EDITION)
        .expect("limited edition");
    assert_eq!(limited.origin.x, ART_MARK_POS.0);
    assert!(
        list.texts()
            .any(|t| t.text == LIMITED_EDITION && matches!(t.paint, TextPaint::Stroke(_)))
    );

    let speed = set_era_flag(&card, EraFlag::Speed, true);
    let list = redraw(&speed, draw_password);
    assert!(list.texts().all(|t| t.text != LIMITED_EDITION));
    assert_eq!(
        list.image_refs(),
        vec![ImageRef::Asset(paths::SPEED_DUEL_MARK.to_string())]
    );
}

#[test]
fn modern_duel_terminal_mark_is_an_image() {
    let card = set_era_flag(&Card::default(), EraFlag::DuelTerminal, true);
    let card = set_era_flag(&card, EraFlag::LimitedEdition, true);
    let list = redraw(&card, draw_password);
    assert_eq!(
        list.image_refs(),
        vec![ImageRef::Asset(paths::DUEL_TERMINAL_MARK.to_string())]
    );
    let limited = list
        .texts()
        .find(|t| t.text == LIMITED_EDITION)
        .expect("limited edition");
    assert_eq!(limited.origin.y, PASSCODE_POS.1);
}

#[test]
fn creator_is_right_aligned_and_sticker_optional() {
    let card = Card {
        creator: "by someone".into(),
        sticker: Sticker::Gold,
        ..Card::default()
    };
    let run = redraw(&card, draw_creator).texts().next().cloned().expect("credit");
    let w = FixedAdvanceMetrics.advance(&CREATOR_FONT, "by someone");
    assert!((run.origin.x + w - CREATOR_POS.0).abs() < 1e-9);

    assert_eq!(
        redraw(&card, draw_sticker).image_refs(),
        vec![ImageRef::Asset("sticker/sticker-gold.png".into())]
    );
    assert!(redraw(&Card::default(), draw_sticker).is_empty());
}
