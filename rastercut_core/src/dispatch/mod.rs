//! The tile-job dispatcher: one independent unit of work per tile, executed
//! across a bounded worker pool, with per-tile success/failure collection.

mod dispatcher;
mod report;

pub use dispatcher::{DispatchOptions, dispatch_tiles};
pub use report::{TileOutcome, TileRunReport};
