//! This module defines the `ImageRaster` struct, a [`RasterSource`] backed
//! by the `image` crate.
//!
//! The whole raster is decoded once at open time; window reads are cheap
//! crops of the decoded pixels. Georeferencing is picked up from a world
//! file sidecar when one exists next to the raster.

use crate::{raster::RasterSource, world_file};
use anyhow::{Context, Result, ensure};
use image::DynamicImage;
use rastercut_core::{GeoTransform, PixelBBox, RasterExtent};
use std::path::{Path, PathBuf};

/// A raster file opened through the `image` backend.
#[derive(Debug)]
pub struct ImageRaster {
	path: PathBuf,
	image: DynamicImage,
	extent: RasterExtent,
	geo_transform: Option<GeoTransform>,
}

impl ImageRaster {
	/// Opens and decodes a raster file, reading its world-file sidecar when
	/// present.
	///
	/// # Errors
	///
	/// Fails when the file cannot be opened or decoded, or when an existing
	/// sidecar is unreadable.
	pub fn open(path: &Path) -> Result<ImageRaster> {
		let image = image::open(path).with_context(|| format!("could not open raster image {path:?}"))?;
		let extent = RasterExtent::new(image.width(), image.height())?;
		let geo_transform = world_file::read_sidecar(path)?;
		log::debug!("opened {path:?}: {extent}, {:?}", image.color());
		Ok(ImageRaster {
			path: path.to_path_buf(),
			image,
			extent,
			geo_transform,
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Pixel color type of the decoded raster.
	pub fn color(&self) -> image::ColorType {
		self.image.color()
	}
}

impl RasterSource for ImageRaster {
	fn extent(&self) -> RasterExtent {
		self.extent
	}

	fn geo_transform(&self) -> Option<GeoTransform> {
		self.geo_transform
	}

	fn read_window(&self, bbox: &PixelBBox) -> Result<DynamicImage> {
		ensure!(
			bbox.fits_within(&self.extent),
			"the pixel window ({bbox}) is bigger than the raster extent ({})",
			self.extent
		);
		Ok(self.image.crop_imm(bbox.x_min, bbox.y_min, bbox.width(), bbox.height()))
	}
}
