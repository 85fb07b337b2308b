//! This module defines the `TileSpec` struct, one tile of a partitioned
//! raster extent: its id plus its pixel bounding box.

use crate::types::{PixelBBox, TileId};
use std::fmt;

/// One tile of a partitioned extent.
///
/// A `TileSpec` is an immutable value; it is produced by the partitioner and
/// consumed by exactly one tile job.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSpec {
	/// Deterministic key of the tile within its grid.
	pub id: TileId,
	/// Pixel-space region covered by the tile.
	pub bbox: PixelBBox,
}

impl TileSpec {
	pub fn new(id: TileId, bbox: PixelBBox) -> TileSpec {
		TileSpec { id, bbox }
	}

	/// The output file name for this tile: `{base}_{id}.{extension}`.
	///
	/// # Examples
	///
	/// ```
	/// use rastercut_core::{PixelBBox, TileId, TileSpec};
	///
	/// let tile = TileSpec::new(TileId::new(2, 3).unwrap(), PixelBBox::new(0, 10, 0, 10).unwrap());
	/// assert_eq!(tile.output_name("out/scene", "png"), "out/scene_x2y3.png");
	/// ```
	pub fn output_name(&self, base: &str, extension: &str) -> String {
		format!("{}_{}.{}", base, self.id, extension)
	}
}

impl fmt::Debug for TileSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileSpec({}, {})", self.id, self.bbox)
	}
}
