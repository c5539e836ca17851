use std::collections::HashMap;

use crate::assets::decode::PreparedImage;
use crate::draw::display_list::{DisplayList, ImageRef};
use crate::foundation::core::Canvas;
use crate::foundation::error::CardResult;
use crate::render::surface::Surface;
use crate::text::metrics::TextMetrics;

/// Images resolved for one display list.
pub type ImageSet = HashMap<ImageRef, PreparedImage>;

/// Turns recorded layer display lists into pixels.
///
/// The same [`TextMetrics`] must back both layout (through [`RasterBackend::metrics`]) and
/// rasterization, otherwise condensed runs no longer match their boxes.
pub trait RasterBackend {
    fn canvas(&self) -> Canvas;

    fn metrics(&self) -> &dyn TextMetrics;

    /// Rasterize `list` into a fresh transparent surface of [`RasterBackend::canvas`] size.
    /// Images absent from `images` are skipped.
    fn rasterize(&mut self, list: &DisplayList, images: &ImageSet) -> CardResult<Surface>;
}
