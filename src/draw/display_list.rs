//! Recorded draw operations for one layer.
//!
//! Layers never touch pixels. They drive a [`Painter`] with canvas-like state and the painter
//! records immutable [`DrawOp`]s that the raster backend replays later.

use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::text::metrics::{FontSpec, TextMetrics};

/// Stroke pass over a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStroke {
    pub color: Rgba8,
    pub width: f64,
}

/// Soft glow drawn below a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    pub color: Rgba8,
    pub blur: f64,
    pub offset: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextPaint {
    Fill(Rgba8),
    Stroke(TextStroke),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: FontSpec,
    /// Baseline origin in design units.
    pub origin: Point,
    /// Local glyph scale around the origin.
    pub scale: Vec2,
    pub paint: TextPaint,
    pub shadow: Option<TextShadow>,
}

impl TextRun {
    /// Horizontal extent of the run once scaled.
    pub fn scaled_width(&self, metrics: &dyn TextMetrics) -> f64 {
        metrics.advance(&self.font, &self.text) * self.scale.x
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageRef {
    /// Template asset, relative to the asset root.
    Asset(String),
    /// The user's artwork bitmap.
    Artwork,
}

/// Horizontal placement of an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageX {
    Left(f64),
    /// Right edge sits `gap` units left of `edge`; the width is the drawn width.
    RightOf { edge: f64, gap: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageDraw {
    pub image: ImageRef,
    pub x: ImageX,
    pub y: f64,
    /// Drawn size in design units; the natural size when `None`.
    pub size: Option<Vec2>,
}

impl ImageDraw {
    pub fn at(image: ImageRef, x: f64, y: f64) -> Self {
        Self {
            image,
            x: ImageX::Left(x),
            y,
            size: None,
        }
    }

    pub fn sized(mut self, w: f64, h: f64) -> Self {
        self.size = Some(Vec2::new(w, h));
        self
    }

    /// Resolve the top-left corner and drawn size against the image's natural size.
    pub fn resolve(&self, natural: Vec2) -> (Point, Vec2) {
        let size = self.size.unwrap_or(natural);
        let x = match self.x {
            ImageX::Left(x) => x,
            ImageX::RightOf { edge, gap } => edge - size.x - gap,
        };
        (Point::new(x, self.y), size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Image(ImageDraw),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            DrawOp::Image(_) => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageDraw> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image(i) => Some(i),
            DrawOp::Text(_) => None,
        })
    }

    /// Distinct images referenced by the list, in first-use order.
    pub fn image_refs(&self) -> Vec<ImageRef> {
        let mut out: Vec<ImageRef> = Vec::new();
        for img in self.images() {
            if !out.contains(&img.image) {
                out.push(img.image.clone());
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug)]
struct PaintState {
    font: FontSpec,
    fill: Rgba8,
    stroke: Option<TextStroke>,
    shadow: Option<TextShadow>,
    scale: Vec2,
}

/// Canvas-like recording context.
pub struct Painter<'m> {
    metrics: &'m dyn TextMetrics,
    state: PaintState,
    saved: Vec<PaintState>,
    ops: Vec<DrawOp>,
}

impl<'m> Painter<'m> {
    pub fn new(metrics: &'m dyn TextMetrics, font: FontSpec) -> Self {
        Self {
            metrics,
            state: PaintState {
                font,
                fill: Rgba8::BLACK,
                stroke: None,
                shadow: None,
                scale: Vec2::new(1.0, 1.0),
            },
            saved: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn metrics(&self) -> &'m dyn TextMetrics {
        self.metrics
    }

    pub fn font(&self) -> FontSpec {
        self.state.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    pub fn set_fill(&mut self, fill: Rgba8) {
        self.state.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: Option<TextStroke>) {
        self.state.stroke = stroke;
    }

    pub fn set_shadow(&mut self, shadow: Option<TextShadow>) {
        self.state.shadow = shadow;
    }

    /// Local glyph scale applied to subsequent text.
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.state.scale = Vec2::new(sx, sy);
    }

    pub fn save(&mut self) {
        self.saved.push(self.state);
    }

    pub fn restore(&mut self) {
        if let Some(s) = self.saved.pop() {
            self.state = s;
        }
    }

    /// Unscaled advance of `text` in the current font.
    pub fn measure(&self, text: &str) -> f64 {
        self.metrics.advance(&self.state.font, text)
    }

    /// Unscaled advance of `text` in `font`.
    pub fn measure_with(&self, font: &FontSpec, text: &str) -> f64 {
        self.metrics.advance(font, text)
    }

    /// Fill `text` with its baseline origin at (`x`, `y`), then run the stroke pass if one is
    /// set.
    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }
        let run = TextRun {
            text: text.to_string(),
            font: self.state.font,
            origin: Point::new(x, y),
            scale: self.state.scale,
            paint: TextPaint::Fill(self.state.fill),
            shadow: self.state.shadow,
        };
        let stroke = self.state.stroke;
        self.ops.push(DrawOp::Text(run.clone()));
        if let Some(stroke) = stroke {
            self.ops.push(DrawOp::Text(TextRun {
                paint: TextPaint::Stroke(stroke),
                shadow: None,
                ..run
            }));
        }
    }

    pub fn draw_image(&mut self, draw: ImageDraw) {
        self.ops.push(DrawOp::Image(draw));
    }

    /// Number of recorded ops; pair with [`Painter::truncate`] to discard a tentative layout.
    pub fn mark(&self) -> usize {
        self.ops.len()
    }

    pub fn truncate(&mut self, mark: usize) {
        self.ops.truncate(mark);
    }

    pub fn finish(self) -> DisplayList {
        DisplayList { ops: self.ops }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/display_list.rs"]
mod tests;
