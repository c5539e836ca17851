pub mod descriptor;
pub mod fingerprint;
pub(crate) mod footer;
pub(crate) mod frame;
pub(crate) mod header;
pub(crate) mod pendulum;
pub mod registry;
pub(crate) mod text_box;
