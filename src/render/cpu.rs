//! CPU raster backend on `vello_cpu`, with text shaped by the parley-backed [`FontBook`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::draw::display_list::{DisplayList, DrawOp, ImageDraw, ImageRef, TextPaint, TextRun};
use crate::foundation::core::{Affine, Canvas, DESIGN_CANVAS, Rgba8, Vec2};
use crate::foundation::error::{CardError, CardResult};
use crate::render::backend::{ImageSet, RasterBackend};
use crate::render::composite::over_in_place;
use crate::render::glow::blur_surface;
use crate::render::surface::Surface;
use crate::text::fonts::FontBook;
use crate::text::metrics::TextMetrics;

pub struct CpuBackend {
    fonts: FontBook,
    canvas: Canvas,
    /// Design units to device pixels.
    global: Affine,
    global_scale: f64,
    image_cache: HashMap<ImageRef, (Arc<Vec<u8>>, vello_cpu::Image)>,
}

impl CpuBackend {
    pub fn new(fonts: FontBook, global_scale: f64) -> CardResult<Self> {
        let canvas = DESIGN_CANVAS.scaled(global_scale)?;
        Ok(Self {
            fonts,
            canvas,
            global: Affine::scale(global_scale),
            global_scale,
            image_cache: HashMap::new(),
        })
    }

    fn image_paint_for(
        &mut self,
        image_ref: &ImageRef,
        prepared: &PreparedImage,
    ) -> CardResult<vello_cpu::Image> {
        if let Some((bytes, paint)) = self.image_cache.get(image_ref) {
            if Arc::ptr_eq(bytes, &prepared.rgba8_premul) {
                return Ok(paint.clone());
            }
        }

        let pixmap = premul_bytes_to_pixmap(
            prepared.rgba8_premul.as_slice(),
            prepared.width,
            prepared.height,
        )?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.image_cache.insert(
            image_ref.clone(),
            (prepared.rgba8_premul.clone(), paint.clone()),
        );
        Ok(paint)
    }

    fn draw_image(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        draw: &ImageDraw,
        images: &ImageSet,
    ) -> CardResult<()> {
        let Some(prepared) = images.get(&draw.image) else {
            tracing::trace!(image = ?draw.image, "image not provided, skipped");
            return Ok(());
        };
        if prepared.width == 0 || prepared.height == 0 {
            return Ok(());
        }
        let natural = prepared.natural_size();
        let (pos, size) = draw.resolve(natural);
        let paint = self.image_paint_for(&draw.image, prepared)?;

        let local = Affine::translate(pos.to_vec2())
            * Affine::scale_non_uniform(size.x / natural.x, size.y / natural.y);
        ctx.set_transform(affine_to_cpu(self.global * local));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, natural.x, natural.y));
        Ok(())
    }

    fn draw_text(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        run: &TextRun,
        paint: TextPaint,
        offset: Vec2,
    ) -> CardResult<()> {
        let shaped = self.fonts.shape(&run.font, &run.text)?;
        let local = Affine::translate(run.origin.to_vec2() + offset)
            * Affine::scale_non_uniform(run.scale.x, run.scale.y);
        ctx.set_transform(affine_to_cpu(self.global * local));

        match paint {
            TextPaint::Fill(color) => {
                ctx.set_paint(color_to_cpu(color));
                ctx.glyph_run(&shaped.font)
                    .font_size(shaped.font_size)
                    .fill_glyphs(shaped.glyphs.into_iter());
            }
            TextPaint::Stroke(stroke) => {
                ctx.set_paint(color_to_cpu(stroke.color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
                ctx.glyph_run(&shaped.font)
                    .font_size(shaped.font_size)
                    .stroke_glyphs(shaped.glyphs.into_iter());
            }
        }
        Ok(())
    }

    /// Blurred shadows of every shadowed run, drawn beneath the layer's own content.
    fn shadow_surface(&self, list: &DisplayList) -> CardResult<Option<Surface>> {
        let shadowed: Vec<&TextRun> = list.texts().filter(|t| t.shadow.is_some()).collect();
        let Some(blur) = shadowed
            .iter()
            .filter_map(|t| t.shadow.map(|s| s.blur))
            .reduce(f64::max)
        else {
            return Ok(None);
        };

        let mut ctx = self.context();
        for run in &shadowed {
            if let Some(shadow) = run.shadow {
                self.draw_text(&mut ctx, run, TextPaint::Fill(shadow.color), shadow.offset)?;
            }
        }
        let mut surface = self.finish(&mut ctx)?;
        blur_surface(&mut surface, (blur * self.global_scale).ceil().max(0.0) as u32)?;
        Ok(Some(surface))
    }

    fn context(&self) -> vello_cpu::RenderContext {
        let mut ctx =
            vello_cpu::RenderContext::new(self.canvas.width as u16, self.canvas.height as u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx
    }

    fn finish(&self, ctx: &mut vello_cpu::RenderContext) -> CardResult<Surface> {
        let mut pixmap =
            vello_cpu::Pixmap::new(self.canvas.width as u16, self.canvas.height as u16);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Surface::from_premul(
            self.canvas.width,
            self.canvas.height,
            pixmap.data_as_u8_slice().to_vec(),
        )
    }
}

impl RasterBackend for CpuBackend {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn metrics(&self) -> &dyn TextMetrics {
        &self.fonts
    }

    fn rasterize(&mut self, list: &DisplayList, images: &ImageSet) -> CardResult<Surface> {
        if list.is_empty() {
            return Ok(Surface::transparent(self.canvas));
        }

        let mut ctx = self.context();
        for op in &list.ops {
            match op {
                DrawOp::Image(draw) => self.draw_image(&mut ctx, draw, images)?,
                DrawOp::Text(run) => self.draw_text(&mut ctx, run, run.paint, Vec2::ZERO)?,
            }
        }
        let content = self.finish(&mut ctx)?;

        match self.shadow_surface(list)? {
            Some(mut base) => {
                over_in_place(&mut base, &content)?;
                Ok(base)
            }
            None => Ok(content),
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}
