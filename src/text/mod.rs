pub(crate) mod edition;
pub mod effect;
pub mod fonts;
pub mod metrics;
pub(crate) mod name;
pub(crate) mod scale;
pub(crate) mod spacing;
pub(crate) mod stat;
pub(crate) mod type_line;
