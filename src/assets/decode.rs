use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Vec2;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::mul_div255_u8;

/// Raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    pub fn new(width: u32, height: u32, rgba8_premul: Vec<u8>) -> CardResult<Self> {
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(CardError::validation("prepared image byte length mismatch"));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// One premultiplied color everywhere.
    pub fn solid(width: u32, height: u32, premul: [u8; 4]) -> Self {
        let px = width as usize * height as usize;
        Self {
            width,
            height,
            rgba8_premul: Arc::new(premul.repeat(px)),
        }
    }

    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Decode PNG/JPEG bytes and premultiply.
pub fn decode_image(bytes: &[u8]) -> CardResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    PreparedImage::new(width, height, rgba8_premul)
}

/// Parse an SVG document and rasterize it at its natural size.
pub fn decode_svg(bytes: &[u8]) -> CardResult<PreparedImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let size = tree.size();
    let width = size.width().ceil().max(1.0) as u32;
    let height = size.height().ceil().max(1.0) as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CardError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    PreparedImage::new(width, height, pixmap.data().to_vec())
}

/// Decode by file extension: `.svg` through resvg, everything else through `image`.
pub fn decode_asset(path: &str, bytes: &[u8]) -> CardResult<PreparedImage> {
    if path.to_ascii_lowercase().ends_with(".svg") {
        decode_svg(bytes)
    } else {
        decode_image(bytes)
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
