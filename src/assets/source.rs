//! Where template assets come from.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use futures::future::LocalBoxFuture;

use crate::assets::decode::{PreparedImage, decode_asset};
use crate::foundation::error::{CardError, CardResult};

/// Asynchronous loader for template assets. Loads are the suspension points of a layer redraw.
pub trait AssetSource {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, CardResult<PreparedImage>>;
}

/// Normalize an asset path relative to the asset root.
///
/// Uses `/` separators, drops `.` segments, rejects absolute paths and `..`.
pub fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardError::validation("asset paths must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }
    if out.is_empty() {
        return Err(CardError::validation("asset path must contain a file name"));
    }
    Ok(out.join("/"))
}

/// Reads and decodes assets below a root directory, caching decoded images by path.
pub struct FsAssetSource {
    root: PathBuf,
    cache: RefCell<HashMap<String, PreparedImage>>,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn load_now(&self, path: &str) -> CardResult<PreparedImage> {
        let rel = normalize_rel_path(path)?;
        if let Some(hit) = self.cache.borrow().get(&rel) {
            return Ok(hit.clone());
        }

        let full = self.root.join(&rel);
        let bytes = std::fs::read(&full)
            .map_err(|e| CardError::asset_load(format!("{}: {e}", full.display())))?;
        let image = decode_asset(&rel, &bytes)
            .map_err(|e| CardError::asset_load(format!("{rel}: {e}")))?;
        self.cache.borrow_mut().insert(rel, image.clone());
        Ok(image)
    }
}

impl AssetSource for FsAssetSource {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, CardResult<PreparedImage>> {
        let path = path.to_string();
        Box::pin(async move { self.load_now(&path) })
    }
}

impl<T: AssetSource + ?Sized> AssetSource for std::rc::Rc<T> {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, CardResult<PreparedImage>> {
        (**self).load(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
