//! This module defines the `TileGrid` struct, the extent partitioner: a
//! deterministic decomposition of a raster extent into a sequence of tiles.
//!
//! # Overview
//!
//! The grid covers 100% of the extent with no gaps and no overlaps. Full
//! tiles of the requested nominal size are emitted first; when the extent is
//! not an exact multiple of the tile size, one narrower remainder column
//! and/or one shorter remainder row is appended at the far edge. Remainder
//! tiles are always the last tile of their row or column, never split or
//! distributed, and a remainder of exactly zero emits no extra tile.
//!
//! Tiles are ordered row-major: all tiles of row 1 before row 2, and
//! column-major within a row.
//!
//! # Examples
//!
//! ```
//! use rastercut_core::{RasterExtent, TileGrid};
//!
//! let extent = RasterExtent::new(1000, 1000).unwrap();
//! let grid = TileGrid::partition(extent, 300, 300).unwrap();
//! assert_eq!(grid.columns(), 4);
//! assert_eq!(grid.rows(), 4);
//! assert_eq!(grid.len(), 16);
//! assert_eq!(grid.tiles()[0].id.to_string(), "x1y1");
//! assert_eq!(grid.tiles()[15].id.to_string(), "x4y4");
//! ```

use crate::{
	error::InvalidExtentError,
	types::{PixelBBox, RasterExtent, TileId, TileSpec},
};
use anyhow::Result;

/// A grid-aligned partition of a raster extent into pixel tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
	/// The partitioned extent.
	pub extent: RasterExtent,
	/// Nominal tile width in pixels.
	pub tile_width: u32,
	/// Nominal tile height in pixels.
	pub tile_height: u32,
	tiles: Vec<TileSpec>,
}

impl TileGrid {
	/// Partitions `extent` into tiles of the requested nominal size.
	///
	/// Tile sizes may exceed the extent dimensions; the result is then a
	/// single (remainder) tile in that axis.
	///
	/// # Errors
	///
	/// Returns [`InvalidExtentError`] if `tile_width` or `tile_height` is
	/// zero.
	pub fn partition(extent: RasterExtent, tile_width: u32, tile_height: u32) -> Result<TileGrid> {
		if tile_width == 0 || tile_height == 0 {
			return Err(InvalidExtentError::new(format!("tile size {tile_width}x{tile_height} must have positive dimensions")).into());
		}

		let n_full_cols = extent.width / tile_width;
		let x_remainder = extent.width - n_full_cols * tile_width;
		let n_full_rows = extent.height / tile_height;
		let y_remainder = extent.height - n_full_rows * tile_height;

		let columns = n_full_cols + u32::from(x_remainder > 0);
		let rows = n_full_rows + u32::from(y_remainder > 0);

		let mut tiles = Vec::with_capacity((columns as usize) * (rows as usize));

		let mut push_row = |row: u32, y_min: u32, y_max: u32| {
			for col in 0..n_full_cols {
				let x_min = col * tile_width;
				tiles.push(TileSpec {
					id: TileId { col: col + 1, row },
					bbox: PixelBBox {
						x_min,
						x_max: x_min + tile_width,
						y_min,
						y_max,
					},
				});
			}
			if x_remainder > 0 {
				let x_min = n_full_cols * tile_width;
				tiles.push(TileSpec {
					id: TileId { col: n_full_cols + 1, row },
					bbox: PixelBBox {
						x_min,
						x_max: extent.width,
						y_min,
						y_max,
					},
				});
			}
		};

		for row in 0..n_full_rows {
			let y_min = row * tile_height;
			push_row(row + 1, y_min, y_min + tile_height);
		}
		if y_remainder > 0 {
			push_row(n_full_rows + 1, n_full_rows * tile_height, extent.height);
		}

		Ok(TileGrid {
			extent,
			tile_width,
			tile_height,
			tiles,
		})
	}

	/// Number of tile columns, counting a remainder column.
	pub fn columns(&self) -> u32 {
		self.extent.width.div_ceil(self.tile_width)
	}

	/// Number of tile rows, counting a remainder row.
	pub fn rows(&self) -> u32 {
		self.extent.height.div_ceil(self.tile_height)
	}

	/// Total number of tiles.
	pub fn len(&self) -> usize {
		self.tiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	/// The tiles in row-major order.
	pub fn tiles(&self) -> &[TileSpec] {
		&self.tiles
	}

	/// Consumes the grid and returns the tiles in row-major order.
	pub fn into_tiles(self) -> Vec<TileSpec> {
		self.tiles
	}

	/// Looks up a tile by its 1-based column and row index.
	pub fn get(&self, col: u32, row: u32) -> Option<&TileSpec> {
		if col < 1 || row < 1 || col > self.columns() || row > self.rows() {
			return None;
		}
		let index = (row - 1) * self.columns() + (col - 1);
		self.tiles.get(index as usize)
	}
}

impl IntoIterator for TileGrid {
	type Item = TileSpec;
	type IntoIter = std::vec::IntoIter<TileSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.tiles.into_iter()
	}
}

impl<'a> IntoIterator for &'a TileGrid {
	type Item = &'a TileSpec;
	type IntoIter = std::slice::Iter<'a, TileSpec>;

	fn into_iter(self) -> Self::IntoIter {
		self.tiles.iter()
	}
}
