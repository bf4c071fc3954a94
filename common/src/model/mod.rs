pub mod attribute;
pub mod segment;
