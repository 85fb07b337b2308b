//! This module defines the `RasterDataType` enum, the pixel data type of an
//! output raster.
//!
//! The channel layout of the source (grayscale/color, with or without alpha)
//! is preserved; only the per-channel bit depth changes.

use anyhow::Result;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use image::DynamicImage;
use std::fmt::{Display, Formatter};

/// Pixel data type of an output raster.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RasterDataType {
	/// 8 bit per channel.
	Uint8,
	/// 16 bit per channel.
	Uint16,
}

impl RasterDataType {
	pub fn as_str(&self) -> &str {
		match self {
			RasterDataType::Uint8 => "uint8",
			RasterDataType::Uint16 => "uint16",
		}
	}

	/// Converts an image to this data type, keeping its channel layout.
	pub fn convert(&self, image: DynamicImage) -> Result<DynamicImage> {
		let color = image.color();
		let grayscale = color.channel_count() <= 2;
		let alpha = color.has_alpha();

		Ok(match (self, grayscale, alpha) {
			(RasterDataType::Uint8, true, false) => DynamicImage::ImageLuma8(image.into_luma8()),
			(RasterDataType::Uint8, true, true) => DynamicImage::ImageLumaA8(image.into_luma_alpha8()),
			(RasterDataType::Uint8, false, false) => DynamicImage::ImageRgb8(image.into_rgb8()),
			(RasterDataType::Uint8, false, true) => DynamicImage::ImageRgba8(image.into_rgba8()),
			(RasterDataType::Uint16, true, false) => DynamicImage::ImageLuma16(image.into_luma16()),
			(RasterDataType::Uint16, true, true) => DynamicImage::ImageLumaA16(image.into_luma_alpha16()),
			(RasterDataType::Uint16, false, false) => DynamicImage::ImageRgb16(image.into_rgb16()),
			(RasterDataType::Uint16, false, true) => DynamicImage::ImageRgba16(image.into_rgba16()),
		})
	}
}

impl Display for RasterDataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
