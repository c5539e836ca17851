//! Per-layer cache of the last fingerprint, surface and asset outcome.

use std::collections::BTreeMap;

use crate::layers::descriptor::{LayerEnv, LayerId};
use crate::layers::fingerprint::DepFingerprint;
use crate::render::surface::Surface;

#[derive(Clone, Debug)]
struct LayerSlot {
    fingerprint: DepFingerprint,
    surface: Surface,
    assets_ok: bool,
}

/// A layer is dirty when it was never drawn, its fingerprint changed, or its last draw
/// missed an asset.
#[derive(Clone, Debug, Default)]
pub struct LayerRegistry {
    slots: BTreeMap<LayerId, LayerSlot>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dirty(&self, id: LayerId, fingerprint: DepFingerprint) -> bool {
        match self.slots.get(&id) {
            None => true,
            Some(slot) => slot.fingerprint != fingerprint || !slot.assets_ok,
        }
    }

    /// Layers needing a redraw for `env`, in z-order, with their fresh fingerprints.
    pub fn dirty_layers(&self, env: &LayerEnv<'_>) -> Vec<(LayerId, DepFingerprint)> {
        LayerId::Z_ORDER
            .iter()
            .map(|&id| (id, (id.descriptor().fingerprint)(env)))
            .filter(|&(id, fp)| self.is_dirty(id, fp))
            .collect()
    }

    pub fn store(
        &mut self,
        id: LayerId,
        fingerprint: DepFingerprint,
        surface: Surface,
        assets_ok: bool,
    ) {
        self.slots.insert(
            id,
            LayerSlot {
                fingerprint,
                surface,
                assets_ok,
            },
        );
    }

    pub fn surface(&self, id: LayerId) -> Option<&Surface> {
        self.slots.get(&id).map(|s| &s.surface)
    }

    pub fn assets_ok(&self, id: LayerId) -> Option<bool> {
        self.slots.get(&id).map(|s| s.assets_ok)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/registry.rs"]
mod tests;
