//! This module defines the `TileRunReport` struct, the per-tile result
//! mapping produced by the dispatcher.

use crate::{
	error::{AllTilesFailedError, TileProcessingError},
	types::TileId,
};
use anyhow::Result;
use std::{collections::BTreeMap, fmt};

/// Outcome of a single tile job.
#[derive(Debug)]
pub enum TileOutcome {
	Success,
	Failed(TileProcessingError),
}

impl TileOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, TileOutcome::Success)
	}
}

/// The result mapping of one dispatch run: `TileId -> success | error`.
///
/// Iteration is in row-major tile order regardless of completion order.
#[derive(Debug, Default)]
pub struct TileRunReport {
	outcomes: BTreeMap<TileId, TileOutcome>,
}

impl TileRunReport {
	pub fn new() -> TileRunReport {
		TileRunReport::default()
	}

	/// Records the result of one tile job.
	pub fn record(&mut self, id: TileId, result: Result<()>) {
		let outcome = match result {
			Ok(()) => TileOutcome::Success,
			Err(source) => TileOutcome::Failed(TileProcessingError::new(id, source)),
		};
		self.outcomes.insert(id, outcome);
	}

	pub fn len(&self) -> usize {
		self.outcomes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.outcomes.is_empty()
	}

	pub fn success_count(&self) -> usize {
		self.outcomes.values().filter(|o| o.is_success()).count()
	}

	pub fn failure_count(&self) -> usize {
		self.len() - self.success_count()
	}

	/// The outcome recorded for a tile, if any.
	pub fn outcome(&self, id: &TileId) -> Option<&TileOutcome> {
		self.outcomes.get(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&TileId, &TileOutcome)> {
		self.outcomes.iter()
	}

	/// All per-tile errors, in row-major tile order.
	pub fn failures(&self) -> impl Iterator<Item = &TileProcessingError> {
		self.outcomes.values().filter_map(|outcome| match outcome {
			TileOutcome::Failed(error) => Some(error),
			TileOutcome::Success => None,
		})
	}

	/// True when the run was non-empty and not a single tile succeeded.
	pub fn all_failed(&self) -> bool {
		!self.is_empty() && self.success_count() == 0
	}

	/// Consumes the report into an [`AllTilesFailedError`] carrying every
	/// per-tile error.
	pub fn into_all_failed_error(self) -> AllTilesFailedError {
		AllTilesFailedError {
			errors: self
				.outcomes
				.into_values()
				.filter_map(|outcome| match outcome {
					TileOutcome::Failed(error) => Some(error),
					TileOutcome::Success => None,
				})
				.collect(),
		}
	}
}

impl fmt::Display for TileRunReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} tiles: {} succeeded, {} failed",
			self.len(),
			self.success_count(),
			self.failure_count()
		)
	}
}
