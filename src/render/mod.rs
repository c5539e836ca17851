pub mod backend;
pub mod composite;
pub mod cpu;
pub(crate) mod glow;
pub mod surface;
