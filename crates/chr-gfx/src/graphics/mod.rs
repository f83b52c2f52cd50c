pub mod color;
pub mod palette;
pub mod pattern_table;
pub mod tile;
