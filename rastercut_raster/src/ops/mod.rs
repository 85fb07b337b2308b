//! The high-level operations: pixel-window subsetting and parallel tiling.

mod subset;
mod tile;

pub use subset::{SubsetParams, subset_window};
pub use tile::{TileParams, create_tiles};
