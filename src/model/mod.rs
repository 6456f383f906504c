pub mod collection;
pub mod movie;
