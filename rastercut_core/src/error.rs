//! The error taxonomy of the crate.
//!
//! Partition errors are always fatal and synchronous. Per-tile errors are
//! collected by the dispatcher and only escalate to [`AllTilesFailedError`]
//! when not a single tile succeeded; partial failure is left to the caller.

use crate::types::TileId;
use std::fmt;
use thiserror::Error;

/// An extent or tile size that cannot form a valid partition.
#[derive(Debug, Error)]
#[error("invalid extent: {reason}")]
pub struct InvalidExtentError {
	reason: String,
}

impl InvalidExtentError {
	pub fn new(reason: impl Into<String>) -> InvalidExtentError {
		InvalidExtentError { reason: reason.into() }
	}
}

/// The failure of a single tile job, carrying the id of the affected tile.
#[derive(Debug, Error)]
#[error("tile {id} failed: {source:#}")]
pub struct TileProcessingError {
	/// Id of the tile whose job failed.
	pub id: TileId,
	/// The underlying error, usually from the raster I/O provider.
	#[source]
	pub source: anyhow::Error,
}

impl TileProcessingError {
	pub fn new(id: TileId, source: anyhow::Error) -> TileProcessingError {
		TileProcessingError { id, source }
	}
}

/// Every tile of a non-empty batch failed.
///
/// Carries all underlying per-tile errors in submission order.
#[derive(Debug, Error)]
pub struct AllTilesFailedError {
	pub errors: Vec<TileProcessingError>,
}

impl fmt::Display for AllTilesFailedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "all {} tiles failed", self.errors.len())?;
		for error in &self.errors {
			write!(f, "\n  {error}")?;
		}
		Ok(())
	}
}
