pub(crate) mod directive;
pub mod display_list;
