pub mod decode;
pub mod paths;
pub mod source;
