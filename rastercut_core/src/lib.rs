//! Core types and logic for cutting rasters into grid-aligned pixel tiles.
//!
//! # Overview
//!
//! This crate contains everything that is independent of any concrete raster
//! backend:
//!
//! - [`RasterExtent`], [`PixelBBox`], [`TileId`] and [`TileSpec`]: the pixel
//!   geometry vocabulary.
//! - [`TileGrid`]: the extent partitioner, decomposing an extent into a
//!   row-major sequence of tiles with remainder handling.
//! - [`dispatch_tiles`]: the parallel tile-job dispatcher, collecting
//!   per-tile success or failure without aborting unrelated tiles.
//! - [`GeoTransform`]: pixel-to-world mapping with world-file support.
//! - The error taxonomy: [`InvalidExtentError`], [`TileProcessingError`] and
//!   [`AllTilesFailedError`].

mod dispatch;
mod error;
pub mod progress;
mod types;

pub use dispatch::*;
pub use error::*;
pub use types::*;
