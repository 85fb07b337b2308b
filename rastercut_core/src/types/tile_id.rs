//! This module defines the `TileId` struct, the deterministic key of a tile
//! within a grid.
//!
//! Ids are written as `x{col}y{row}` with 1-based column and row indices and
//! order row-major, i.e. in the reading order of the grid.
//!
//! # Examples
//!
//! ```
//! use rastercut_core::TileId;
//!
//! let id = TileId::new(3, 4).unwrap();
//! assert_eq!(id.to_string(), "x3y4");
//! assert_eq!("x3y4".parse::<TileId>().unwrap(), id);
//! ```

use anyhow::{Result, ensure};
use std::{cmp::Ordering, fmt, str::FromStr};

/// The deterministic key of a tile: 1-based column and row indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
	/// 1-based column index.
	pub col: u32,
	/// 1-based row index.
	pub row: u32,
}

impl TileId {
	/// Creates a new `TileId`.
	///
	/// # Errors
	///
	/// Fails if `col` or `row` is zero; indices are 1-based.
	pub fn new(col: u32, row: u32) -> Result<TileId> {
		ensure!(col >= 1, "tile column ({col}) must be >= 1");
		ensure!(row >= 1, "tile row ({row}) must be >= 1");
		Ok(TileId { col, row })
	}
}

impl fmt::Display for TileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "x{}y{}", self.col, self.row)
	}
}

impl fmt::Debug for TileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileId(x{}y{})", self.col, self.row)
	}
}

impl FromStr for TileId {
	type Err = anyhow::Error;

	fn from_str(value: &str) -> Result<TileId> {
		let rest = value
			.strip_prefix('x')
			.ok_or_else(|| anyhow::anyhow!("tile id {value:?} must start with 'x'"))?;
		let (col, row) = rest
			.split_once('y')
			.ok_or_else(|| anyhow::anyhow!("tile id {value:?} must contain 'y'"))?;
		TileId::new(
			col.parse().map_err(|_| anyhow::anyhow!("tile id {value:?} has an invalid column"))?,
			row.parse().map_err(|_| anyhow::anyhow!("tile id {value:?} has an invalid row"))?,
		)
	}
}

impl Ord for TileId {
	/// Row-major reading order: all tiles of a row sort before the next row.
	fn cmp(&self, other: &Self) -> Ordering {
		self.row.cmp(&other.row).then(self.col.cmp(&other.col))
	}
}

impl PartialOrd for TileId {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
