//! This module defines the `PixelBBox` struct, a rectangular pixel-space
//! sub-region of a raster extent.
//!
//! # Overview
//!
//! A `PixelBBox` is half-open in both axes: it covers the pixel columns
//! `x_min..x_max` and rows `y_min..y_max`. All coordinates are integers, so
//! there is no rounding ambiguity anywhere in the partitioning math.
//!
//! # Examples
//!
//! ```
//! use rastercut_core::PixelBBox;
//!
//! let bbox = PixelBBox::new(0, 300, 0, 200).unwrap();
//! assert_eq!(bbox.width(), 300);
//! assert_eq!(bbox.height(), 200);
//! assert!(bbox.contains(299, 199));
//! assert!(!bbox.contains(300, 199));
//! ```

use crate::{error::InvalidExtentError, types::RasterExtent};
use anyhow::{Result, ensure};
use std::fmt;

/// A half-open pixel bounding box `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelBBox {
	/// First pixel column covered.
	pub x_min: u32,
	/// One past the last pixel column covered.
	pub x_max: u32,
	/// First pixel row covered.
	pub y_min: u32,
	/// One past the last pixel row covered.
	pub y_max: u32,
}

impl PixelBBox {
	/// Creates a new `PixelBBox`.
	///
	/// # Errors
	///
	/// Returns [`InvalidExtentError`] if the box is degenerate
	/// (`x_min >= x_max` or `y_min >= y_max`).
	pub fn new(x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> Result<PixelBBox> {
		if x_min >= x_max || y_min >= y_max {
			return Err(
				InvalidExtentError::new(format!(
					"pixel bbox [{x_min},{x_max}) x [{y_min},{y_max}) must have x_min < x_max and y_min < y_max"
				))
				.into(),
			);
		}
		Ok(PixelBBox { x_min, x_max, y_min, y_max })
	}

	/// Parses a bounding box from a `x_min,x_max,y_min,y_max` string, as used
	/// by the `--bbox` command line argument.
	pub fn parse_str(value: &str) -> Result<PixelBBox> {
		let fields = value
			.split(&[' ', ',', ';'])
			.filter(|s| !s.is_empty())
			.map(|s| {
				s.parse::<u32>()
					.map_err(|_| anyhow::anyhow!("bbox value {s:?} is not a non-negative integer"))
			})
			.collect::<Result<Vec<u32>>>()?;
		ensure!(fields.len() == 4, "bbox must contain exactly 4 values, got {value:?}");
		PixelBBox::new(fields[0], fields[1], fields[2], fields[3])
	}

	/// Width of the box in pixels.
	pub fn width(&self) -> u32 {
		self.x_max - self.x_min
	}

	/// Height of the box in pixels.
	pub fn height(&self) -> u32 {
		self.y_max - self.y_min
	}

	/// Number of pixels covered by the box.
	pub fn count_pixels(&self) -> u64 {
		(self.width() as u64) * (self.height() as u64)
	}

	/// Checks whether the pixel at column `x` and row `y` is inside the box.
	pub fn contains(&self, x: u32, y: u32) -> bool {
		x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
	}

	/// Checks whether the box lies completely within `extent`.
	pub fn fits_within(&self, extent: &RasterExtent) -> bool {
		self.x_max <= extent.width && self.y_max <= extent.height
	}
}

impl fmt::Display for PixelBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "x {}..{}, y {}..{}", self.x_min, self.x_max, self.y_min, self.y_max)
	}
}

impl fmt::Debug for PixelBBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "PixelBBox({self})")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_measures() {
		let bbox = PixelBBox::new(10, 40, 5, 25).unwrap();
		assert_eq!(bbox.width(), 30);
		assert_eq!(bbox.height(), 20);
		assert_eq!(bbox.count_pixels(), 600);
		assert_eq!(bbox.to_string(), "x 10..40, y 5..25");
	}

	#[test]
	fn degenerate_boxes_are_rejected() {
		for (x_min, x_max, y_min, y_max) in [(10, 10, 0, 5), (11, 10, 0, 5), (0, 5, 3, 3), (0, 5, 4, 3)] {
			let error = PixelBBox::new(x_min, x_max, y_min, y_max).unwrap_err();
			assert!(error.is::<InvalidExtentError>());
		}
	}

	#[test]
	fn contains_is_half_open() {
		let bbox = PixelBBox::new(2, 4, 1, 3).unwrap();
		assert!(bbox.contains(2, 1));
		assert!(bbox.contains(3, 2));
		assert!(!bbox.contains(4, 2));
		assert!(!bbox.contains(3, 3));
		assert!(!bbox.contains(1, 1));
	}

	#[test]
	fn fits_within_extent() {
		let extent = RasterExtent::new(100, 50).unwrap();
		assert!(PixelBBox::new(0, 100, 0, 50).unwrap().fits_within(&extent));
		assert!(PixelBBox::new(90, 100, 40, 50).unwrap().fits_within(&extent));
		assert!(!PixelBBox::new(90, 101, 40, 50).unwrap().fits_within(&extent));
		assert!(!PixelBBox::new(0, 100, 0, 51).unwrap().fits_within(&extent));
	}

	#[test]
	fn parse_str_accepts_separators() {
		let expected = PixelBBox::new(0, 300, 100, 200).unwrap();
		assert_eq!(PixelBBox::parse_str("0,300,100,200").unwrap(), expected);
		assert_eq!(PixelBBox::parse_str("0 300 100 200").unwrap(), expected);
		assert_eq!(PixelBBox::parse_str("0;300;100;200").unwrap(), expected);
	}

	#[test]
	fn parse_str_rejects_garbage() {
		assert!(PixelBBox::parse_str("0,300,100").is_err());
		assert!(PixelBBox::parse_str("0,300,100,200,1").is_err());
		assert!(PixelBBox::parse_str("0,abc,100,200").is_err());
		assert!(PixelBBox::parse_str("-1,300,100,200").is_err());
	}
}
