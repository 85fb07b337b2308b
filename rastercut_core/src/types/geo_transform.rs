//! This module defines the `GeoTransform` struct, an affine mapping from
//! pixel offsets to world coordinates, with ESRI world-file support.
//!
//! # Overview
//!
//! The transform is anchored at the world position of the top-left *corner*
//! of the top-left pixel and carries signed pixel sizes. For the usual
//! north-up raster `pixel_height` is negative. Rotated rasters are not
//! supported; world files with non-zero skew terms are rejected.
//!
//! World files store the *center* of the top-left pixel, so half a pixel is
//! added or removed when reading and writing.

use crate::types::PixelBBox;
use anyhow::{Result, bail, ensure};
use std::fmt;

/// An affine pixel-to-world mapping without rotation.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoTransform {
	/// World x of the top-left corner of pixel (0, 0).
	pub origin_x: f64,
	/// World y of the top-left corner of pixel (0, 0).
	pub origin_y: f64,
	/// Signed world width of one pixel.
	pub pixel_width: f64,
	/// Signed world height of one pixel (negative for north-up rasters).
	pub pixel_height: f64,
}

impl GeoTransform {
	/// Creates a new `GeoTransform`.
	///
	/// # Errors
	///
	/// Fails if either pixel size is zero or not finite.
	pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Result<GeoTransform> {
		ensure!(
			pixel_width.is_finite() && pixel_width != 0.0,
			"pixel_width ({pixel_width}) must be finite and non-zero"
		);
		ensure!(
			pixel_height.is_finite() && pixel_height != 0.0,
			"pixel_height ({pixel_height}) must be finite and non-zero"
		);
		ensure!(origin_x.is_finite() && origin_y.is_finite(), "origin must be finite");
		Ok(GeoTransform {
			origin_x,
			origin_y,
			pixel_width,
			pixel_height,
		})
	}

	/// Maps a pixel offset to world coordinates.
	///
	/// Integer offsets land on pixel corners; `x + 0.5`, `y + 0.5` is the
	/// center of pixel `(x, y)`.
	pub fn pixel_to_world(&self, x: f64, y: f64) -> (f64, f64) {
		(self.origin_x + x * self.pixel_width, self.origin_y + y * self.pixel_height)
	}

	/// The transform of a pixel sub-window: same pixel sizes, origin shifted
	/// to the window's top-left corner.
	pub fn window(&self, bbox: &PixelBBox) -> GeoTransform {
		let (origin_x, origin_y) = self.pixel_to_world(bbox.x_min as f64, bbox.y_min as f64);
		GeoTransform {
			origin_x,
			origin_y,
			pixel_width: self.pixel_width,
			pixel_height: self.pixel_height,
		}
	}

	/// Absolute pixel resolution `(x, y)`.
	pub fn resolution(&self) -> (f64, f64) {
		(self.pixel_width.abs(), self.pixel_height.abs())
	}

	/// World bounds `(x_min, x_max, y_min, y_max)` of a pixel box, sorted
	/// regardless of the sign of the pixel sizes.
	pub fn world_bounds(&self, bbox: &PixelBBox) -> (f64, f64, f64, f64) {
		let (ax, ay) = self.pixel_to_world(bbox.x_min as f64, bbox.y_min as f64);
		let (bx, by) = self.pixel_to_world(bbox.x_max as f64, bbox.y_max as f64);
		(ax.min(bx), ax.max(bx), ay.min(by), ay.max(by))
	}

	// -------------------------------------------------------------------------
	// World files
	// -------------------------------------------------------------------------

	/// Parses the six-line ESRI world-file format.
	///
	/// Line order: x pixel size, y skew, x skew, y pixel size, x center of
	/// the top-left pixel, y center of the top-left pixel.
	///
	/// # Errors
	///
	/// Fails on fewer than six numeric lines or non-zero skew terms.
	pub fn from_world_file(text: &str) -> Result<GeoTransform> {
		let values = text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(|line| {
				line
					.parse::<f64>()
					.map_err(|_| anyhow::anyhow!("world file line {line:?} is not a number"))
			})
			.collect::<Result<Vec<f64>>>()?;
		ensure!(values.len() >= 6, "world file must contain 6 values, got {}", values.len());

		let (pixel_width, y_skew, x_skew, pixel_height, center_x, center_y) =
			(values[0], values[1], values[2], values[3], values[4], values[5]);
		if y_skew != 0.0 || x_skew != 0.0 {
			bail!("rotated rasters are not supported (skew terms {y_skew}, {x_skew})");
		}

		GeoTransform::new(
			center_x - pixel_width / 2.0,
			center_y - pixel_height / 2.0,
			pixel_width,
			pixel_height,
		)
	}

	/// Serializes the transform into the six-line ESRI world-file format.
	pub fn to_world_file(&self) -> String {
		format!(
			"{:.10}\n0.0\n0.0\n{:.10}\n{:.10}\n{:.10}\n",
			self.pixel_width,
			self.pixel_height,
			self.origin_x + self.pixel_width / 2.0,
			self.origin_y + self.pixel_height / 2.0,
		)
	}
}

impl fmt::Debug for GeoTransform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"GeoTransform(origin ({}, {}), pixel {} x {})",
			self.origin_x, self.origin_y, self.pixel_width, self.pixel_height
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_close(a: f64, b: f64) {
		assert!((a - b).abs() < 1e-9, "{a} != {b}");
	}

	fn north_up() -> GeoTransform {
		GeoTransform::new(500_000.0, 4_600_000.0, 10.0, -10.0).unwrap()
	}

	#[test]
	fn pixel_to_world_maps_corners() {
		let geo = north_up();
		assert_eq!(geo.pixel_to_world(0.0, 0.0), (500_000.0, 4_600_000.0));
		assert_eq!(geo.pixel_to_world(100.0, 50.0), (501_000.0, 4_599_500.0));
	}

	#[test]
	fn window_shifts_the_origin() {
		let geo = north_up();
		let window = geo.window(&PixelBBox::new(300, 400, 200, 250).unwrap());
		assert_eq!(window.origin_x, 503_000.0);
		assert_eq!(window.origin_y, 4_598_000.0);
		assert_eq!(window.pixel_width, 10.0);
		assert_eq!(window.pixel_height, -10.0);
	}

	#[test]
	fn world_bounds_are_sorted_for_north_up() {
		let geo = north_up();
		let (x_min, x_max, y_min, y_max) = geo.world_bounds(&PixelBBox::new(0, 100, 0, 50).unwrap());
		assert_eq!(x_min, 500_000.0);
		assert_eq!(x_max, 501_000.0);
		assert_eq!(y_min, 4_599_500.0);
		assert_eq!(y_max, 4_600_000.0);
	}

	#[test]
	fn world_file_round_trip() {
		let geo = north_up();
		let parsed = GeoTransform::from_world_file(&geo.to_world_file()).unwrap();
		assert_close(parsed.origin_x, geo.origin_x);
		assert_close(parsed.origin_y, geo.origin_y);
		assert_close(parsed.pixel_width, geo.pixel_width);
		assert_close(parsed.pixel_height, geo.pixel_height);
	}

	#[test]
	fn world_file_stores_pixel_centers() {
		let text = "10.0\n0.0\n0.0\n-10.0\n500005.0\n4599995.0\n";
		let geo = GeoTransform::from_world_file(text).unwrap();
		assert_close(geo.origin_x, 500_000.0);
		assert_close(geo.origin_y, 4_600_000.0);
	}

	#[test]
	fn rotated_world_files_are_rejected() {
		let text = "10.0\n0.1\n0.0\n-10.0\n500005.0\n4599995.0\n";
		assert!(GeoTransform::from_world_file(text).is_err());
	}

	#[test]
	fn short_or_garbled_world_files_are_rejected() {
		assert!(GeoTransform::from_world_file("10.0\n0.0\n0.0\n").is_err());
		assert!(GeoTransform::from_world_file("10.0\n0.0\nfoo\n-10.0\n1.0\n2.0\n").is_err());
	}

	#[test]
	fn zero_pixel_sizes_are_rejected() {
		assert!(GeoTransform::new(0.0, 0.0, 0.0, -10.0).is_err());
		assert!(GeoTransform::new(0.0, 0.0, 10.0, 0.0).is_err());
	}
}
