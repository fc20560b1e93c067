pub mod collections;
pub mod color;
pub mod palette;
