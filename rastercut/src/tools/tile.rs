use anyhow::{Result, ensure};
use rastercut_raster::{RasterDataType, RasterFormat, TileParams, create_tiles};
use std::{path::Path, time::Duration};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input raster (png, jpg or tif)
	#[arg()]
	input: String,

	/// base path of the output tiles; tiles are written as "<base>_x{col}y{row}.<ext>"
	#[arg()]
	output_base: String,

	/// tile width in pixels
	#[arg(long, value_name = "int", display_order = 1)]
	tile_width: u32,

	/// tile height in pixels
	#[arg(long, value_name = "int", display_order = 1)]
	tile_height: u32,

	/// output raster format
	#[arg(long, value_enum, default_value_t = RasterFormat::Png, display_order = 2)]
	format: RasterFormat,

	/// output pixel data type; keeps the source type if not set
	#[arg(long, value_enum, display_order = 2)]
	data_type: Option<RasterDataType>,

	/// file extension of the output tiles; defaults to the canonical extension of the format
	#[arg(long, value_name = "ext", display_order = 2)]
	ext: Option<String>,

	/// number of parallel workers
	#[arg(long, value_name = "int", default_value_t = 1, display_order = 3)]
	workers: usize,

	/// per-tile time limit in seconds
	#[arg(long, value_name = "seconds", display_order = 3)]
	task_timeout: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	ensure!(arguments.workers >= 1, "workers ({}) must be >= 1", arguments.workers);

	let params = TileParams {
		tile_width: arguments.tile_width,
		tile_height: arguments.tile_height,
		format: arguments.format,
		data_type: arguments.data_type,
		extension: arguments.ext.clone(),
		workers: arguments.workers,
		task_timeout: arguments.task_timeout.map(Duration::from_secs),
	};

	let report = create_tiles(Path::new(&arguments.input), &arguments.output_base, &params).await?;

	eprintln!("{report}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use image::{DynamicImage, ImageBuffer, Rgb};

	fn write_png(path: &std::path::Path, width: u32, height: u32) {
		let image = DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |x, y| {
			Rgb([(x % 256) as u8, (y % 256) as u8, 0])
		}));
		image.save_with_format(path, image::ImageFormat::Png).unwrap();
	}

	#[test]
	fn cuts_tiles_end_to_end() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let input = dir.path().join("scene.png");
		write_png(&input, 10, 10);
		let base = dir.path().join("scene_tile");

		run_command(vec![
			"rastercut",
			"tile",
			input.to_str().unwrap(),
			base.to_str().unwrap(),
			"--tile-width=4",
			"--tile-height=4",
			"--workers=2",
		])?;

		for id in ["x1y1", "x2y1", "x3y1", "x1y2", "x3y3"] {
			assert!(dir.path().join(format!("scene_tile_{id}.png")).exists(), "missing tile {id}");
		}
		Ok(())
	}

	#[test]
	fn rejects_zero_tile_sizes() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		write_png(&input, 10, 10);

		let result = run_command(vec![
			"rastercut",
			"tile",
			input.to_str().unwrap(),
			"base",
			"--tile-width=0",
			"--tile-height=4",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn rejects_zero_workers() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("scene.png");
		write_png(&input, 10, 10);

		let result = run_command(vec![
			"rastercut",
			"tile",
			input.to_str().unwrap(),
			"base",
			"--tile-width=4",
			"--tile-height=4",
			"--workers=0",
		]);
		assert!(result.is_err());
	}
}
