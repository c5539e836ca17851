/// Convenience result type used across cardsmith.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid user-provided card or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A single raster asset could not be read or decoded.
    ///
    /// Layers treat this as non-fatal: the layer is drawn without the asset.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// Fonts could not be loaded. Fatal at initialization.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// Malformed or incompatible imported card data.
    #[error("decode error: {0}")]
    Decode(String),

    /// The output sink refused to serialize the canvas (e.g. an uncontrolled artwork source).
    #[error("export restricted: {0}")]
    ExportRestricted(String),

    /// Rasterization or compositing failures.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::AssetLoad`] value.
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    /// Build a [`CardError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`CardError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CardError::ExportRestricted`] value.
    pub fn export_restricted(msg: impl Into<String>) -> Self {
        Self::ExportRestricted(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
