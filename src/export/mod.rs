pub mod compositor;
pub mod config;
pub mod gate;
pub mod sink;
pub mod studio;
