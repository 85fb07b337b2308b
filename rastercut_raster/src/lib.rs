//! The raster I/O provider seam and the tiling/subsetting operations built
//! on top of it.
//!
//! # Overview
//!
//! - [`RasterSource`]: the provider trait with extent, optional
//!   georeferencing and pixel sub-window reads.
//! - [`ImageRaster`]: an implementation backed by the `image` crate
//!   (png, jpeg, tiff) with ESRI world-file sidecar support.
//! - [`subset_window`]: write one pixel window of a source to a new raster.
//! - [`create_tiles`]: partition a raster and write every tile in parallel.

mod data_type;
mod format;
mod ops;
mod raster;
#[cfg(test)]
mod testing;
pub mod world_file;

pub use data_type::RasterDataType;
pub use format::RasterFormat;
pub use ops::*;
pub use raster::{ImageRaster, RasterSource};
