//! PNG encoding and the places finished cards are written to.

use std::cell::RefCell;
use std::io::Cursor;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};
use crate::render::composite::unpremultiply;
use crate::render::surface::Surface;

pub trait OutputSink {
    /// Persist `png` under `file_name`. [`CardError::ExportRestricted`] means the sink refuses
    /// this canvas and will keep refusing it.
    fn save(&self, file_name: &str, png: &[u8]) -> CardResult<()>;
}

pub fn encode_png(surface: &Surface) -> CardResult<Vec<u8>> {
    let straight = unpremultiply(&surface.data);
    let img = image::RgbaImage::from_raw(surface.width, surface.height, straight)
        .ok_or_else(|| CardError::render("surface size does not match its pixel data"))?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Writes into a directory, creating it on first save.
#[derive(Clone, Debug)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for FileSink {
    fn save(&self, file_name: &str, png: &[u8]) -> CardResult<()> {
        if file_name.contains(['/', '\\']) || file_name == ".." {
            return Err(CardError::validation(format!(
                "output file name '{file_name}' must not contain a path"
            )));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, png).with_context(|| format!("write png '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "card saved");
        Ok(())
    }
}

/// Keeps saved files in memory. Can be switched to refuse every save.
#[derive(Debug, Default)]
pub struct InMemorySink {
    saved: RefCell<Vec<(String, Vec<u8>)>>,
    restricted: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restricted() -> Self {
        Self {
            saved: RefCell::default(),
            restricted: true,
        }
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.borrow().clone()
    }
}

impl OutputSink for InMemorySink {
    fn save(&self, file_name: &str, png: &[u8]) -> CardResult<()> {
        if self.restricted {
            return Err(CardError::export_restricted(
                "canvas holds artwork from an uncontrolled source",
            ));
        }
        self.saved
            .borrow_mut()
            .push((file_name.to_owned(), png.to_vec()));
        Ok(())
    }
}

impl<T: OutputSink + ?Sized> OutputSink for std::rc::Rc<T> {
    fn save(&self, file_name: &str, png: &[u8]) -> CardResult<()> {
        (**self).save(file_name, png)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
