#![forbid(unsafe_code)]

pub mod assets;
pub mod card;
pub mod draw;
pub mod export;
pub mod foundation;
pub mod layers;
pub mod render;
pub mod text;

pub use assets::decode::PreparedImage;
pub use assets::source::{AssetSource, FsAssetSource};
pub use card::codec::{DecodeMode, StoredCard, decode_card, encode_card, restore_card};
pub use card::era::{EraFlag, set_era_flag, set_legacy_mode};
pub use card::model::{Card, Frame, Stat};
pub use export::compositor::{Artwork, Compositor, ExportFrame, LayerReport};
pub use export::config::StudioOpts;
pub use export::gate::{ExportGate, ExportStatus};
pub use export::sink::{FileSink, InMemorySink, OutputSink, encode_png};
pub use export::studio::{CardStudio, DownloadOutcome, PumpReport};
pub use foundation::core::{Canvas, DESIGN_CANVAS, Rgba8};
pub use foundation::error::{CardError, CardResult};
pub use layers::descriptor::LayerId;
pub use render::backend::{ImageSet, RasterBackend};
pub use render::cpu::CpuBackend;
pub use render::surface::Surface;
pub use text::fonts::FontBook;
pub use text::metrics::{FixedAdvanceMetrics, TextMetrics};
