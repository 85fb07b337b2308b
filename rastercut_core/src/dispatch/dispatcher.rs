//! This module implements the tile-job dispatcher.
//!
//! # Overview
//!
//! Each [`TileSpec`] is mapped to one blocking job closure, executed on the
//! tokio blocking thread pool with a bounded number of in-flight tasks.
//! Submission follows the partitioner's row-major order; completion order is
//! unconstrained. Jobs share no mutable state: every job opens its own
//! source handle and writes its own output file.
//!
//! A failing (or panicking) job is recorded against its tile id and never
//! cancels other in-flight or pending jobs. The dispatcher itself only
//! errors when a non-empty batch produced zero successes.

use crate::{
	dispatch::report::TileRunReport,
	progress::ProgressBar,
	types::{TileId, TileSpec},
};
use anyhow::{Result, anyhow};
use futures::{StreamExt, stream};
use std::{sync::Arc, time::Duration};

/// Tuning knobs for one dispatch run.
#[derive(Clone, Copy, Debug)]
pub struct DispatchOptions {
	/// Number of tile jobs processed concurrently. Clamped to at least 1.
	pub workers: usize,
	/// Optional per-tile time limit. `None` preserves the historical
	/// behavior of running without any timeout.
	pub task_timeout: Option<Duration>,
}

impl Default for DispatchOptions {
	fn default() -> Self {
		DispatchOptions {
			workers: 1,
			task_timeout: None,
		}
	}
}

impl DispatchOptions {
	pub fn new(workers: usize) -> DispatchOptions {
		DispatchOptions {
			workers,
			task_timeout: None,
		}
	}

	/// One worker per logical CPU.
	pub fn auto() -> DispatchOptions {
		DispatchOptions::new(num_cpus::get())
	}

	pub fn with_task_timeout(mut self, limit: Duration) -> DispatchOptions {
		self.task_timeout = Some(limit);
		self
	}
}

/// Runs one job per tile across a bounded worker pool and collects per-tile
/// outcomes.
///
/// Blocks (asynchronously) until every submitted job has finished; there is
/// no mid-run cancellation.
///
/// # Errors
///
/// Returns [`AllTilesFailedError`](crate::AllTilesFailedError) when the
/// batch was non-empty and every job failed. Partial failure is reported
/// through the returned [`TileRunReport`] and left to the caller.
pub async fn dispatch_tiles<F>(tiles: Vec<TileSpec>, job: F, options: DispatchOptions) -> Result<TileRunReport>
where
	F: Fn(&TileSpec) -> Result<()> + Send + Sync + 'static,
{
	let workers = options.workers.max(1);
	let job = Arc::new(job);
	log::debug!("dispatching {} tile jobs across {workers} workers", tiles.len());

	let progress = ProgressBar::new("processing tiles", tiles.len() as u64);
	let mut report = TileRunReport::new();

	let mut outcomes = stream::iter(tiles)
		.map(|spec| run_tile(spec, Arc::clone(&job), options.task_timeout))
		.buffer_unordered(workers);

	while let Some((id, result)) = outcomes.next().await {
		if let Err(error) = &result {
			log::warn!("tile {id} failed: {error:#}");
		}
		report.record(id, result);
		progress.inc(1);
	}
	progress.finish();

	if report.all_failed() {
		return Err(report.into_all_failed_error().into());
	}
	Ok(report)
}

async fn run_tile<F>(spec: TileSpec, job: Arc<F>, task_timeout: Option<Duration>) -> (TileId, Result<()>)
where
	F: Fn(&TileSpec) -> Result<()> + Send + Sync + 'static,
{
	let id = spec.id;
	let handle = tokio::task::spawn_blocking(move || job(&spec));

	let joined = match task_timeout {
		Some(limit) => match tokio::time::timeout(limit, handle).await {
			Ok(joined) => joined,
			// The blocking job itself is not interruptible; it keeps running
			// in the background while its tile is reported as failed.
			Err(_) => return (id, Err(anyhow!("tile job exceeded the time limit of {limit:?}"))),
		},
		None => handle.await,
	};

	match joined {
		Ok(result) => (id, result),
		Err(join_error) => (id, Err(anyhow!("tile job panicked: {join_error}"))),
	}
}
