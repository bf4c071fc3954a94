pub mod helpers;
pub mod save_segment;
pub mod schema_dropdown;
pub mod segments;
