//! Test fixtures shared across the crate's test modules.

use image::{DynamicImage, ImageBuffer, Rgb};
use rastercut_core::GeoTransform;
use std::{fs, path::Path};

/// Writes a small RGB gradient so every pixel value encodes its position:
/// `(x % 256, y % 256, 7)`.
pub fn write_gradient_png(path: &Path, width: u32, height: u32) {
	let image = DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
		Rgb([(x % 256) as u8, (y % 256) as u8, 7])
	}));
	image.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Writes the gradient plus a world-file sidecar.
pub fn write_georeferenced_png(path: &Path, width: u32, height: u32, transform: &GeoTransform) {
	write_gradient_png(path, width, height);
	fs::write(path.with_extension("pgw"), transform.to_world_file()).unwrap();
}
