//! This module defines the `RasterFormat` enum, the supported output raster
//! formats and their file extensions.
//!
//! # Examples
//!
//! ```
//! use rastercut_raster::RasterFormat;
//!
//! assert_eq!(RasterFormat::Png.as_extension(), "png");
//! assert_eq!(RasterFormat::try_from_str("JPEG").unwrap(), RasterFormat::Jpeg);
//! ```

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::{
	fmt::{Display, Formatter},
	path::Path,
};

/// Supported raster file formats.
///
/// Each variant corresponds to a format the `image` backend can encode and
/// decode. `Jpeg` also maps from the alternative `.jpeg` extension, `Tiff`
/// from `.tiff`.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RasterFormat {
	Png,
	Jpeg,
	Tiff,
}

impl RasterFormat {
	/// The canonical file extension, without the leading dot.
	pub fn as_extension(&self) -> &str {
		match self {
			RasterFormat::Png => "png",
			RasterFormat::Jpeg => "jpg",
			RasterFormat::Tiff => "tif",
		}
	}

	/// Parses a format name or extension, case-insensitive.
	pub fn try_from_str(value: &str) -> Result<RasterFormat> {
		Ok(match value.to_lowercase().trim() {
			"png" => RasterFormat::Png,
			"jpg" | "jpeg" => RasterFormat::Jpeg,
			"tif" | "tiff" => RasterFormat::Tiff,
			_ => bail!("unknown raster format: {value:?}"),
		})
	}

	/// Derives the format from a file extension.
	pub fn from_path(path: &Path) -> Result<RasterFormat> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.ok_or_else(|| anyhow::anyhow!("path {path:?} has no file extension"))?;
		RasterFormat::try_from_str(extension)
	}

	/// The corresponding encoder format of the `image` backend.
	pub fn as_image_format(&self) -> image::ImageFormat {
		match self {
			RasterFormat::Png => image::ImageFormat::Png,
			RasterFormat::Jpeg => image::ImageFormat::Jpeg,
			RasterFormat::Tiff => image::ImageFormat::Tiff,
		}
	}
}

impl Display for RasterFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_extension())
	}
}
