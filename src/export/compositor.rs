//! Redraws dirty layers and composes the card frame.

use futures::future::join_all;

use crate::assets::decode::PreparedImage;
use crate::assets::source::AssetSource;
use crate::card::model::Card;
use crate::draw::display_list::{DisplayList, ImageRef, Painter};
use crate::foundation::core::Rgba8;
use crate::foundation::error::CardResult;
use crate::layers::descriptor::{LayerEnv, LayerId};
use crate::layers::fingerprint::DepFingerprint;
use crate::layers::registry::LayerRegistry;
use crate::render::backend::{ImageSet, RasterBackend};
use crate::render::composite::over_in_place;
use crate::render::surface::Surface;
use crate::text::metrics::{FontFamily, FontSpec, TextMetrics};

/// The user's artwork bitmap. `revision` must change whenever `image` does.
#[derive(Clone, Debug, PartialEq)]
pub struct Artwork {
    pub image: PreparedImage,
    pub revision: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayerReport {
    pub id: LayerId,
    pub redrawn: bool,
    /// Whether every template asset of the layer's last draw loaded.
    pub assets_ok: bool,
}

#[derive(Clone, Debug)]
pub struct ExportFrame {
    pub surface: Surface,
    /// One entry per layer, in z-order.
    pub layers: Vec<LayerReport>,
}

impl ExportFrame {
    pub fn assets_ok(&self) -> bool {
        self.layers.iter().all(|l| l.assets_ok)
    }
}

struct Redrawn {
    id: LayerId,
    fingerprint: DepFingerprint,
    list: DisplayList,
    images: ImageSet,
    assets_ok: bool,
}

pub struct Compositor<B> {
    backend: B,
    registry: LayerRegistry,
    clear: [u8; 4],
    output: Surface,
}

impl<B: RasterBackend> Compositor<B> {
    pub fn new(backend: B, clear_color: Rgba8) -> Self {
        let output = Surface::transparent(backend.canvas());
        Self {
            backend,
            registry: LayerRegistry::new(),
            clear: clear_color.premultiplied().to_array(),
            output,
        }
    }

    pub fn registry(&self) -> &LayerRegistry {
        &self.registry
    }

    /// Clear, redraw every dirty layer concurrently, then compose all layers bottom-up.
    #[tracing::instrument(skip_all, fields(card = %card.name))]
    pub async fn export(
        &mut self,
        card: &Card,
        artwork: Option<&Artwork>,
        assets: &dyn AssetSource,
    ) -> CardResult<ExportFrame> {
        self.output.clear(self.clear);

        let env = LayerEnv {
            card,
            artwork_revision: artwork.map_or(0, |a| a.revision),
        };
        let dirty = self.registry.dirty_layers(&env);
        tracing::debug!(dirty = dirty.len(), "layers to redraw");

        let metrics = self.backend.metrics();
        let redrawn = join_all(dirty.into_iter().map(|(id, fingerprint)| {
            redraw_layer(id, fingerprint, &env, metrics, artwork, assets)
        }))
        .await;

        let mut reports: Vec<LayerReport> = LayerId::Z_ORDER
            .iter()
            .map(|&id| LayerReport {
                id,
                redrawn: false,
                assets_ok: true,
            })
            .collect();
        for layer in redrawn {
            let surface = self.backend.rasterize(&layer.list, &layer.images)?;
            self.registry
                .store(layer.id, layer.fingerprint, surface, layer.assets_ok);
            reports[layer.id as usize].redrawn = true;
        }

        for report in &mut reports {
            report.assets_ok = self.registry.assets_ok(report.id).unwrap_or(false);
            if let Some(surface) = self.registry.surface(report.id) {
                over_in_place(&mut self.output, surface)?;
            }
        }

        Ok(ExportFrame {
            surface: self.output.clone(),
            layers: reports,
        })
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(layer = ?id))]
async fn redraw_layer(
    id: LayerId,
    fingerprint: DepFingerprint,
    env: &LayerEnv<'_>,
    metrics: &dyn TextMetrics,
    artwork: Option<&Artwork>,
    assets: &dyn AssetSource,
) -> Redrawn {
    let mut painter = Painter::new(metrics, FontSpec::new(FontFamily::MatrixBook, 24.0));
    (id.descriptor().redraw)(env, &mut painter);
    let list = painter.finish();

    let mut images = ImageSet::new();
    let mut assets_ok = true;
    for image_ref in list.image_refs() {
        match &image_ref {
            // No artwork yet is not a failure; the slot just stays empty.
            ImageRef::Artwork => {
                if let Some(art) = artwork {
                    images.insert(image_ref, art.image.clone());
                }
            }
            ImageRef::Asset(path) => match assets.load(path).await {
                Ok(img) => {
                    images.insert(image_ref, img);
                }
                Err(e) => {
                    tracing::warn!(layer = ?id, path = %path, error = %e, "asset failed to load");
                    assets_ok = false;
                }
            },
        }
    }

    Redrawn {
        id,
        fingerprint,
        list,
        images,
        assets_ok,
    }
}
