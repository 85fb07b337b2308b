//! The raster provider seam.

mod image_raster;

pub use image_raster::ImageRaster;

use anyhow::Result;
use image::DynamicImage;
use rastercut_core::{GeoTransform, PixelBBox, RasterExtent};

/// A read-only raster data source.
///
/// Implementations are immutable after opening, so a source can be shared
/// across worker threads; tile jobs nevertheless open their own handle per
/// job, keeping every unit of work fully independent.
pub trait RasterSource: Send + Sync {
	/// Pixel dimensions of the source.
	fn extent(&self) -> RasterExtent;

	/// World georeferencing, if the source carries any.
	fn geo_transform(&self) -> Option<GeoTransform>;

	/// Reads the pixels of a sub-window.
	///
	/// # Errors
	///
	/// Fails when the window does not fit within the extent.
	fn read_window(&self, bbox: &PixelBBox) -> Result<DynamicImage>;
}
