pub mod probe;
pub mod subset;
pub mod tile;
