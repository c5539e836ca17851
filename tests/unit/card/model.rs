use super::*;

#[test]
fn default_card_is_valid() {
    Card::default().validate().unwrap();
}

#[test]
fn link_arrows_serialize_as_keypad_codes() {
    let mut card = Card::default();
    card.link_map.insert(LinkArrow::TopRight);
    card.link_map.insert(LinkArrow::BottomLeft);
    let v = serde_json::to_value(&card).unwrap();
    assert_eq!(v["link_map"], serde_json::json!([1, 9]));

    let bad: Result<BTreeSet<LinkArrow>, _> = serde_json::from_str("[5]");
    assert!(bad.is_err());
}

#[test]
fn stat_accepts_numbers_and_strings() {
    let s: Stat = serde_json::from_str("2500").unwrap();
    assert_eq!(s.as_str(), "2500");
    let s: Stat = serde_json::from_str("\"?\"").unwrap();
    assert_eq!(s.as_str(), Stat::UNKNOWN);
}

#[test]
fn art_source_is_not_serialized() {
    let card = Card {
        art_source: ArtSource::Internal,
        ..Card::default()
    };
    let json = serde_json::to_string(&card).unwrap();
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back.art_source, ArtSource::External);
    assert!(!card.art_is_portable());
}

#[test]
fn validate_rejects_conflicting_era_marks() {
    let legacy = Card {
        is_legacy_card: true,
        is_first_edition: true,
        is_speed_card: true,
        ..Card::default()
    };
    assert!(legacy.validate().is_err());

    let modern = Card {
        is_first_edition: true,
        is_speed_card: true,
        ..Card::default()
    };
    modern.validate().unwrap();

    let modern_bad = Card {
        is_duel_terminal_card: true,
        is_speed_card: true,
        ..Card::default()
    };
    assert!(modern_bad.validate().is_err());
}

#[test]
fn validate_rejects_negative_crop() {
    let card = Card {
        picture_crop: PictureCrop {
            x: -1.0,
            ..PictureCrop::default()
        },
        ..Card::default()
    };
    assert!(card.validate().is_err());
}
