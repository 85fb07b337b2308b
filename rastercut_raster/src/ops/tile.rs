//! Cutting a raster into a grid of tiles, in parallel.

use crate::{
	ImageRaster, RasterDataType, RasterFormat,
	ops::subset::{SubsetParams, subset_window},
	raster::RasterSource,
};
use anyhow::Result;
use rastercut_core::{DispatchOptions, TileGrid, TileRunReport, TileSpec, dispatch_tiles};
use std::{
	path::{Path, PathBuf},
	time::Duration,
};

/// Parameters of a tiling run.
#[derive(Clone, Debug)]
pub struct TileParams {
	/// Nominal tile width in pixels.
	pub tile_width: u32,
	/// Nominal tile height in pixels.
	pub tile_height: u32,
	/// Output raster format.
	pub format: RasterFormat,
	/// Output pixel data type; `None` keeps the source type.
	pub data_type: Option<RasterDataType>,
	/// File extension of the output tiles; `None` uses the format's
	/// canonical extension.
	pub extension: Option<String>,
	/// Number of parallel workers.
	pub workers: usize,
	/// Optional per-tile time limit.
	pub task_timeout: Option<Duration>,
}

impl TileParams {
	pub fn new(tile_width: u32, tile_height: u32, format: RasterFormat) -> TileParams {
		TileParams {
			tile_width,
			tile_height,
			format,
			data_type: None,
			extension: None,
			workers: 1,
			task_timeout: None,
		}
	}
}

/// Cuts `input` into grid-aligned tiles written as `{base}_{tile_id}.{ext}`.
///
/// The input is opened once up front to read its extent, then every tile job
/// opens its own handle, keeping the jobs fully independent. Per-tile
/// failures are collected in the returned report; only a run where every
/// tile failed is an error.
pub async fn create_tiles(input: &Path, output_base: &str, params: &TileParams) -> Result<TileRunReport> {
	let source = ImageRaster::open(input)?;
	let grid = TileGrid::partition(source.extent(), params.tile_width, params.tile_height)?;
	log::info!(
		"cutting {input:?} ({}) into {} tiles ({} columns x {} rows)",
		source.extent(),
		grid.len(),
		grid.columns(),
		grid.rows()
	);
	drop(source);

	let extension = params
		.extension
		.clone()
		.unwrap_or_else(|| params.format.as_extension().to_string());
	let subset_params = SubsetParams {
		format: params.format,
		data_type: params.data_type,
	};
	let input = input.to_path_buf();
	let output_base = output_base.to_string();

	let job = move |spec: &TileSpec| -> Result<()> {
		let source = ImageRaster::open(&input)?;
		let path = PathBuf::from(spec.output_name(&output_base, &extension));
		subset_window(&source, &spec.bbox, &path, &subset_params)
	};

	let mut options = DispatchOptions::new(params.workers);
	options.task_timeout = params.task_timeout;

	dispatch_tiles(grid.into_tiles(), job, options).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{testing, world_file};
	use image::Rgb;
	use rastercut_core::{AllTilesFailedError, GeoTransform, InvalidExtentError};

	fn params(tile_width: u32, tile_height: u32, workers: usize) -> TileParams {
		TileParams {
			workers,
			..TileParams::new(tile_width, tile_height, RasterFormat::Png)
		}
	}

	#[tokio::test]
	async fn cuts_a_raster_into_the_expected_file_set() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		testing::write_gradient_png(&input, 10, 7);

		let base = dir.path().join("tiles/scene");
		std::fs::create_dir(dir.path().join("tiles")).unwrap();
		let report = create_tiles(&input, base.to_str().unwrap(), &params(4, 3, 4)).await.unwrap();

		// 10/4 -> 2 full columns + remainder, 7/3 -> 2 full rows + remainder
		assert_eq!(report.len(), 9);
		assert_eq!(report.success_count(), 9);

		for id in ["x1y1", "x2y1", "x3y1", "x1y2", "x2y2", "x3y2", "x1y3", "x2y3", "x3y3"] {
			assert!(dir.path().join(format!("tiles/scene_{id}.png")).exists(), "missing tile {id}");
		}

		// remainder column is 2 pixels wide, remainder row 1 pixel high
		let tile = image::open(dir.path().join("tiles/scene_x3y1.png")).unwrap();
		assert_eq!((tile.width(), tile.height()), (2, 3));
		let tile = image::open(dir.path().join("tiles/scene_x1y3.png")).unwrap();
		assert_eq!((tile.width(), tile.height()), (4, 1));

		// pixel content matches the source window: tile x2y2 starts at (4, 3)
		let tile = image::open(dir.path().join("tiles/scene_x2y2.png")).unwrap().to_rgb8();
		assert_eq!(tile.get_pixel(0, 0), &Rgb([4, 3, 7]));
	}

	#[tokio::test]
	async fn tiles_inherit_shifted_georeferencing() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		let transform = GeoTransform::new(500.0, 800.0, 2.0, -2.0).unwrap();
		testing::write_georeferenced_png(&input, 6, 6, &transform);

		let base = dir.path().join("scene_tile");
		create_tiles(&input, base.to_str().unwrap(), &params(3, 3, 1)).await.unwrap();

		let sidecar = world_file::read_sidecar(&dir.path().join("scene_tile_x2y2.png"))
			.unwrap()
			.unwrap();
		assert!((sidecar.origin_x - 506.0).abs() < 1e-9);
		assert!((sidecar.origin_y - 794.0).abs() < 1e-9);
	}

	#[tokio::test]
	async fn an_unwritable_output_location_fails_every_tile() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		testing::write_gradient_png(&input, 10, 10);

		let base = dir.path().join("no/such/dir/scene");
		let error = create_tiles(&input, base.to_str().unwrap(), &params(5, 5, 2)).await.unwrap_err();
		let all_failed = error.downcast::<AllTilesFailedError>().unwrap();
		assert_eq!(all_failed.errors.len(), 4);
	}

	#[tokio::test]
	async fn zero_tile_sizes_fail_synchronously() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		testing::write_gradient_png(&input, 10, 10);

		let error = create_tiles(&input, "base", &params(0, 5, 1)).await.unwrap_err();
		assert!(error.is::<InvalidExtentError>());
	}

	#[tokio::test]
	async fn a_missing_input_fails_before_dispatch() {
		let error = create_tiles(Path::new("/no/such/scene.png"), "base", &params(5, 5, 1))
			.await
			.unwrap_err();
		assert!(error.to_string().contains("could not open raster image"));
	}

	#[tokio::test]
	async fn a_custom_extension_overrides_the_format_default() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		testing::write_gradient_png(&input, 4, 4);

		let base = dir.path().join("scene_tile");
		let params = TileParams {
			extension: Some("tile.png".to_string()),
			..params(4, 4, 1)
		};
		create_tiles(&input, base.to_str().unwrap(), &params).await.unwrap();
		assert!(dir.path().join("scene_tile_x1y1.tile.png").exists());
	}
}
