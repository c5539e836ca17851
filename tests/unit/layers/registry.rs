use super::*;
use crate::card::model::Card;
use crate::foundation::core::Canvas;

fn surface() -> Surface {
    Surface::transparent(Canvas {
        width: 1,
        height: 1,
    })
}

fn env(card: &Card) -> LayerEnv<'_> {
    LayerEnv {
        card,
        artwork_revision: 0,
    }
}

fn store_all(reg: &mut LayerRegistry, card: &Card) {
    for (id, fp) in reg.dirty_layers(&env(card)) {
        reg.store(id, fp, surface(), true);
    }
}

#[test]
fn fresh_registry_is_all_dirty() {
    let card = Card::default();
    let reg = LayerRegistry::new();
    let dirty: Vec<_> = reg.dirty_layers(&env(&card)).into_iter().map(|d| d.0).collect();
    assert_eq!(dirty, LayerId::Z_ORDER.to_vec());
}

#[test]
fn only_dependent_layers_turn_dirty() {
    let mut card = Card::default();
    let mut reg = LayerRegistry::new();
    store_all(&mut reg, &card);
    assert!(reg.dirty_layers(&env(&card)).is_empty());

    card.creator = "someone else".to_owned();
    let dirty: Vec<_> = reg.dirty_layers(&env(&card)).into_iter().map(|d| d.0).collect();
    assert_eq!(dirty, vec![LayerId::Creator]);

    card.sticker = crate::card::model::Sticker::Gold;
    let dirty: Vec<_> = reg.dirty_layers(&env(&card)).into_iter().map(|d| d.0).collect();
    assert_eq!(dirty, vec![LayerId::Creator, LayerId::Sticker]);
}

#[test]
fn artwork_revision_dirties_art_only() {
    let card = Card::default();
    let mut reg = LayerRegistry::new();
    store_all(&mut reg, &card);
    let bumped = LayerEnv {
        card: &card,
        artwork_revision: 1,
    };
    let dirty: Vec<_> = reg.dirty_layers(&bumped).into_iter().map(|d| d.0).collect();
    assert_eq!(dirty, vec![LayerId::Art]);
}

#[test]
fn failed_assets_keep_layer_dirty() {
    let card = Card::default();
    let mut reg = LayerRegistry::new();
    let fp = (LayerId::Frame.descriptor().fingerprint)(&env(&card));
    reg.store(LayerId::Frame, fp, surface(), false);
    assert!(reg.is_dirty(LayerId::Frame, fp));
    assert_eq!(reg.assets_ok(LayerId::Frame), Some(false));

    reg.store(LayerId::Frame, fp, surface(), true);
    assert!(!reg.is_dirty(LayerId::Frame, fp));

    assert!(reg.surface(LayerId::Frame).is_some());
}
