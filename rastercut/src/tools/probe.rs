use anyhow::Result;
use rastercut_raster::{ImageRaster, RasterSource};
use std::path::Path;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// raster file to inspect
	#[arg()]
	input: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let raster = ImageRaster::open(Path::new(&arguments.input))?;
	let extent = raster.extent();

	println!("path: {}", arguments.input);
	println!("extent: {extent}");
	println!("pixels: {}", extent.count_pixels());
	println!("color type: {:?}", raster.color());

	match raster.geo_transform() {
		Some(geo_transform) => {
			let (x_res, y_res) = geo_transform.resolution();
			let (x_min, x_max, y_min, y_max) = geo_transform.world_bounds(&extent.as_bbox());
			println!("resolution: {x_res} x {y_res}");
			println!("world bounds: x {x_min}..{x_max}, y {y_min}..{y_max}");
		}
		None => println!("georeferencing: none"),
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use image::{DynamicImage, ImageBuffer, Luma};

	#[test]
	fn probes_a_raster() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let input = dir.path().join("scene.png");
		let image = DynamicImage::ImageLuma8(ImageBuffer::from_fn(6, 4, |x, _| Luma([x as u8])));
		image.save_with_format(&input, image::ImageFormat::Png)?;

		run_command(vec!["rastercut", "probe", input.to_str().unwrap()])?;
		Ok(())
	}

	#[test]
	fn fails_on_a_missing_raster() {
		assert!(run_command(vec!["rastercut", "probe", "/no/such/raster.png"]).is_err());
	}
}
