//! Font files, shaping and measurement backed by parley.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};
use crate::text::metrics::{FontFamily, FontSpec, TextMetrics};

/// One registered font file.
#[derive(Clone)]
struct Face {
    /// Family name as registered in the parley collection.
    family_name: String,
    data: vello_cpu::peniko::FontData,
}

struct Contexts {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

/// A shaped single-line run, glyph positions relative to the baseline origin.
#[derive(Clone)]
pub struct ShapedRun {
    pub font: vello_cpu::peniko::FontData,
    pub font_size: f32,
    pub glyphs: Vec<vello_cpu::Glyph>,
    pub advance: f64,
}

/// The card font families, each resolved to a loaded face.
pub struct FontBook {
    faces: HashMap<FontFamily, Face>,
    ctx: RefCell<Contexts>,
}

impl FontBook {
    /// Register every font file in `dir` and resolve the card families against them.
    ///
    /// A family with no matching file falls back to another loaded face. A directory with no
    /// usable font at all is a [`CardError::FontLoad`].
    #[tracing::instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> CardResult<Self> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("read font dir {}", dir.display()))
            .map_err(|e| CardError::font_load(format!("{e:#}")))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
            })
            .collect();
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            match std::fs::read(&path) {
                Ok(bytes) => files.push(bytes),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font"),
            }
        }
        Self::from_bytes(files)
    }

    /// Build a font book from raw font files.
    pub fn from_bytes(files: Vec<Vec<u8>>) -> CardResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut registered: Vec<Face> = Vec::new();
        for bytes in files {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
            for (id, _) in families {
                let Some(name) = font_ctx.collection.family_name(id) else {
                    continue;
                };
                registered.push(Face {
                    family_name: name.to_string(),
                    data: vello_cpu::peniko::FontData::new(
                        vello_cpu::peniko::Blob::from(bytes.clone()),
                        0,
                    ),
                });
            }
        }

        let fallback = registered
            .first()
            .cloned()
            .ok_or_else(|| CardError::font_load("no usable font files"))?;

        let mut faces = HashMap::new();
        for family in FontFamily::ALL {
            let wanted = squash(family.family_name());
            let face = match registered.iter().find(|f| squash(&f.family_name) == wanted) {
                Some(face) => face.clone(),
                None => {
                    tracing::warn!(
                        family = family.family_name(),
                        fallback = %fallback.family_name,
                        "font family missing, using fallback"
                    );
                    fallback.clone()
                }
            };
            faces.insert(family, face);
        }

        Ok(Self {
            faces,
            ctx: RefCell::new(Contexts {
                font_ctx,
                layout_ctx: parley::LayoutContext::new(),
            }),
        })
    }

    /// Shape `text` on a single line.
    pub fn shape(&self, font: &FontSpec, text: &str) -> CardResult<ShapedRun> {
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(CardError::validation("font size must be finite and > 0"));
        }
        let face = self
            .faces
            .get(&font.family)
            .ok_or_else(|| CardError::render(format!("no face for {:?}", font.family)))?;

        let mut ctx = self.ctx.borrow_mut();
        let Contexts {
            font_ctx,
            layout_ctx,
        } = &mut *ctx;
        let size = font.size as f32;
        let mut builder = layout_ctx.ranged_builder(font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        if font.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        if font.italic {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            let baseline = line.metrics().baseline;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y - baseline,
                }));
            }
        }

        Ok(ShapedRun {
            font: face.data.clone(),
            font_size: size,
            glyphs,
            advance: f64::from(layout.full_width()),
        })
    }
}

impl TextMetrics for FontBook {
    fn advance(&self, font: &FontSpec, text: &str) -> f64 {
        match self.shape(font, text) {
            Ok(run) => run.advance,
            Err(e) => {
                tracing::warn!(error = %e, "text measurement failed");
                0.0
            }
        }
    }
}

/// Family names compared case-insensitively, ignoring spaces, dashes and underscores.
fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
