pub mod codec;
pub mod era;
pub mod model;
pub mod predicates;
