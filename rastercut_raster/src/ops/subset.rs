//! Subsetting a raster to a pixel bounding box.

use crate::{RasterDataType, RasterFormat, raster::RasterSource, world_file};
use anyhow::{Context, Result};
use rastercut_core::PixelBBox;
use std::path::Path;

/// Output parameters of a subset operation.
#[derive(Clone, Copy, Debug)]
pub struct SubsetParams {
	/// Output raster format.
	pub format: RasterFormat,
	/// Output pixel data type; `None` keeps the source type.
	pub data_type: Option<RasterDataType>,
}

/// Reads one pixel window of `source` and writes it as a new raster file.
///
/// When the source is georeferenced, a world-file sidecar with the window's
/// shifted origin is written next to the output.
///
/// # Errors
///
/// Fails when the window exceeds the source extent or when the output
/// cannot be encoded or written.
pub fn subset_window(source: &dyn RasterSource, bbox: &PixelBBox, path: &Path, params: &SubsetParams) -> Result<()> {
	let window = source.read_window(bbox)?;
	let window = match params.data_type {
		Some(data_type) => data_type.convert(window)?,
		None => window,
	};

	window
		.save_with_format(path, params.format.as_image_format())
		.with_context(|| format!("could not write raster {path:?}"))?;

	if let Some(geo_transform) = source.geo_transform() {
		world_file::write_sidecar(path, &geo_transform.window(bbox))?;
	}

	log::debug!("wrote {path:?} ({}x{})", bbox.width(), bbox.height());
	Ok(())
}
