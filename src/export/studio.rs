//! The card being edited, its export driver and the download path.

use std::cell::{Cell, RefCell};

use crate::assets::decode::PreparedImage;
use crate::assets::source::AssetSource;
use crate::card::era::{EraFlag, set_era_flag, set_legacy_mode};
use crate::card::model::Card;
use crate::export::compositor::{Artwork, Compositor, LayerReport};
use crate::export::gate::{DownloadRequest, ExportGate, ExportStatus, RunOutcome};
use crate::export::sink::{OutputSink, encode_png};
use crate::foundation::error::{CardError, CardResult};
use crate::render::backend::RasterBackend;
use crate::render::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved,
    /// An export is in flight; the download happens when the last queued run completes.
    Deferred,
    /// The sink refused this canvas. Sticky for the rest of the session.
    Restricted,
}

/// What one [`CardStudio::pump`] call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PumpReport {
    pub runs: u32,
    pub download: Option<DownloadOutcome>,
}

/// Owns the latest card and drives exports through the single-flight gate.
///
/// Mutations only record the new card and request an export; [`CardStudio::pump`] performs the
/// runs. Only complete frames are ever published.
pub struct CardStudio<B, A, S> {
    card: RefCell<Card>,
    artwork: RefCell<Option<Artwork>>,
    /// Bumped on every artwork change, clearing included.
    artwork_revision: Cell<u64>,
    gate: RefCell<ExportGate>,
    compositor: RefCell<Option<Compositor<B>>>,
    assets: A,
    sink: S,
    file_name: String,
    frame: RefCell<Option<Surface>>,
    last_report: RefCell<Vec<LayerReport>>,
    restricted: Cell<bool>,
    runs_total: Cell<u64>,
}

impl<B, A, S> CardStudio<B, A, S>
where
    B: RasterBackend,
    A: AssetSource,
    S: OutputSink,
{
    pub fn new(
        compositor: Compositor<B>,
        assets: A,
        sink: S,
        card: Card,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            card: RefCell::new(card),
            artwork: RefCell::new(None),
            artwork_revision: Cell::new(0),
            gate: RefCell::new(ExportGate::new()),
            compositor: RefCell::new(Some(compositor)),
            assets,
            sink,
            file_name: file_name.into(),
            frame: RefCell::new(None),
            last_report: RefCell::new(Vec::new()),
            restricted: Cell::new(false),
            runs_total: Cell::new(0),
        }
    }

    pub fn card(&self) -> Card {
        self.card.borrow().clone()
    }

    pub fn status(&self) -> ExportStatus {
        self.gate.borrow().status()
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted.get()
    }

    /// A download is waiting for the next successful export.
    pub fn download_pending(&self) -> bool {
        self.gate.borrow().download_pending()
    }

    /// Last fully composed frame.
    pub fn frame(&self) -> Option<Surface> {
        self.frame.borrow().clone()
    }

    pub fn last_report(&self) -> Vec<LayerReport> {
        self.last_report.borrow().clone()
    }

    /// Export runs completed since the studio was created.
    pub fn runs_total(&self) -> u64 {
        self.runs_total.get()
    }

    pub fn request_export(&self) -> ExportStatus {
        let mut gate = self.gate.borrow_mut();
        gate.request();
        gate.status()
    }

    pub fn set_card(&self, card: Card) -> ExportStatus {
        *self.card.borrow_mut() = card;
        self.request_export()
    }

    pub fn update_card(&self, f: impl FnOnce(&mut Card)) -> ExportStatus {
        f(&mut self.card.borrow_mut());
        self.request_export()
    }

    pub fn set_era_flag(&self, flag: EraFlag, value: bool) -> ExportStatus {
        let next = set_era_flag(&self.card.borrow(), flag, value);
        self.set_card(next)
    }

    pub fn set_legacy_mode(&self, legacy: bool) -> ExportStatus {
        let next = set_legacy_mode(&self.card.borrow(), legacy);
        self.set_card(next)
    }

    pub fn set_artwork(&self, image: Option<PreparedImage>) -> ExportStatus {
        let revision = self.artwork_revision.get() + 1;
        self.artwork_revision.set(revision);
        *self.artwork.borrow_mut() = image.map(|image| Artwork { image, revision });
        self.request_export()
    }

    /// Drive export runs until the gate settles, then perform a deferred download if one
    /// was requested. Returns immediately when another `pump` is already driving.
    ///
    /// When the final run fails its error is returned and a deferred download stays pending
    /// until a later run succeeds.
    pub async fn pump(&self) -> CardResult<PumpReport> {
        let Some(mut compositor) = self.compositor.borrow_mut().take() else {
            return Ok(PumpReport::default());
        };
        let result = self.drive(&mut compositor).await;
        *self.compositor.borrow_mut() = Some(compositor);
        result
    }

    async fn drive(&self, compositor: &mut Compositor<B>) -> CardResult<PumpReport> {
        let mut report = PumpReport::default();
        let mut last_error = None;
        while self.gate.borrow().is_busy() {
            let card = self.card();
            let artwork = self.artwork.borrow().clone();
            match compositor
                .export(&card, artwork.as_ref(), &self.assets)
                .await
            {
                Ok(frame) => {
                    *self.frame.borrow_mut() = Some(frame.surface);
                    *self.last_report.borrow_mut() = frame.layers;
                    last_error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "export run failed");
                    last_error = Some(e);
                }
            }
            report.runs += 1;
            self.runs_total.set(self.runs_total.get() + 1);

            let outcome = self.gate.borrow_mut().finish();
            if let RunOutcome::Settled { download: true } = outcome {
                if last_error.is_some() {
                    // The published frame predates the failed card; keep the download waiting.
                    self.gate.borrow_mut().keep_download_pending();
                } else {
                    report.download = Some(self.save_now()?);
                }
            }
        }
        tracing::debug!(runs = report.runs, "export settled");
        match last_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    /// Save the current frame, or defer until the in-flight export settles.
    pub fn download(&self) -> CardResult<DownloadOutcome> {
        if self.restricted.get() {
            return Ok(DownloadOutcome::Restricted);
        }
        match self.gate.borrow_mut().request_download() {
            DownloadRequest::Deferred => return Ok(DownloadOutcome::Deferred),
            DownloadRequest::Now => {}
        }
        self.save_now()
    }

    fn save_now(&self) -> CardResult<DownloadOutcome> {
        if self.restricted.get() {
            return Ok(DownloadOutcome::Restricted);
        }
        let png = {
            let frame = self.frame.borrow();
            let surface = frame
                .as_ref()
                .ok_or_else(|| CardError::validation("nothing has been exported yet"))?;
            encode_png(surface)?
        };
        match self.sink.save(&self.file_name, &png) {
            Ok(()) => Ok(DownloadOutcome::Saved),
            Err(CardError::ExportRestricted(reason)) => {
                tracing::warn!(%reason, "export restricted");
                self.restricted.set(true);
                Ok(DownloadOutcome::Restricted)
            }
            Err(e) => Err(e),
        }
    }
}
