//! This module defines the `RasterExtent` struct, the pixel width and height
//! of a raster.
//!
//! # Examples
//!
//! ```
//! use rastercut_core::RasterExtent;
//!
//! let extent = RasterExtent::new(1000, 800).unwrap();
//! assert_eq!(extent.width, 1000);
//! assert_eq!(extent.height, 800);
//! assert_eq!(extent.count_pixels(), 800_000);
//! ```

use crate::{error::InvalidExtentError, types::PixelBBox};
use anyhow::Result;
use std::fmt;

/// The pixel dimensions of a raster.
///
/// Both dimensions are guaranteed to be positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterExtent {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl RasterExtent {
	/// Creates a new `RasterExtent`.
	///
	/// # Errors
	///
	/// Returns [`InvalidExtentError`] if either dimension is zero.
	pub fn new(width: u32, height: u32) -> Result<RasterExtent> {
		if width == 0 || height == 0 {
			return Err(InvalidExtentError::new(format!("raster extent {width}x{height} must have positive dimensions")).into());
		}
		Ok(RasterExtent { width, height })
	}

	/// Total number of pixels in the extent.
	pub fn count_pixels(&self) -> u64 {
		(self.width as u64) * (self.height as u64)
	}

	/// The full extent as a pixel bounding box `[0,width) × [0,height)`.
	pub fn as_bbox(&self) -> PixelBBox {
		PixelBBox {
			x_min: 0,
			x_max: self.width,
			y_min: 0,
			y_max: self.height,
		}
	}
}

impl fmt::Display for RasterExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

impl fmt::Debug for RasterExtent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RasterExtent({}x{})", self.width, self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_getters() {
		let extent = RasterExtent::new(500, 400).unwrap();
		assert_eq!(extent.width, 500);
		assert_eq!(extent.height, 400);
		assert_eq!(extent.count_pixels(), 200_000);
		assert_eq!(extent.to_string(), "500x400");
	}

	#[test]
	fn zero_dimensions_are_rejected() {
		for (width, height) in [(0, 100), (100, 0), (0, 0)] {
			let error = RasterExtent::new(width, height).unwrap_err();
			assert!(error.is::<InvalidExtentError>(), "expected InvalidExtentError for {width}x{height}");
		}
	}

	#[test]
	fn as_bbox_covers_the_full_extent() {
		let bbox = RasterExtent::new(30, 20).unwrap().as_bbox();
		assert_eq!((bbox.x_min, bbox.x_max, bbox.y_min, bbox.y_max), (0, 30, 0, 20));
	}
}
