use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

/// Studio options, loadable from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioOpts {
    /// Root directory of the template assets (`frame/`, `attribute/`, `star/`, ...).
    pub assets_root: PathBuf,
    pub fonts_dir: PathBuf,
    /// Device pixels per design unit.
    pub global_scale: f64,
    pub clear_color: Rgba8,
    pub output_file_name: String,
}

impl Default for StudioOpts {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("assets"),
            fonts_dir: PathBuf::from("assets/font"),
            global_scale: 1.0,
            clear_color: Rgba8 {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            },
            output_file_name: "card.png".to_owned(),
        }
    }
}

impl StudioOpts {
    pub fn from_json_file(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse options '{}'", path.display()))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> CardResult<()> {
        if !self.global_scale.is_finite() || self.global_scale <= 0.0 {
            return Err(CardError::validation("global_scale must be finite and > 0"));
        }
        if self.output_file_name.trim().is_empty() {
            return Err(CardError::validation("output_file_name must be non-empty"));
        }
        Ok(())
    }
}
