use anyhow::Result;
use rastercut_core::PixelBBox;
use rastercut_raster::{ImageRaster, RasterDataType, RasterFormat, SubsetParams, subset_window};
use std::path::Path;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input raster (png, jpg or tif)
	#[arg()]
	input: String,

	/// output raster file
	#[arg()]
	output: String,

	/// pixel bounding box of the subset
	#[arg(long, value_name = "x_min,x_max,y_min,y_max", display_order = 1)]
	bbox: String,

	/// output raster format; derived from the output extension if not set
	#[arg(long, value_enum, display_order = 2)]
	format: Option<RasterFormat>,

	/// output pixel data type; keeps the source type if not set
	#[arg(long, value_enum, display_order = 2)]
	data_type: Option<RasterDataType>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::trace!("parsing bbox argument: {:?}", arguments.bbox);
	let bbox = PixelBBox::parse_str(&arguments.bbox)?;
	let output = Path::new(&arguments.output);

	let params = SubsetParams {
		format: match arguments.format {
			Some(format) => format,
			None => RasterFormat::from_path(output)?,
		},
		data_type: arguments.data_type,
	};

	let source = ImageRaster::open(Path::new(&arguments.input))?;
	subset_window(&source, &bbox, output, &params)?;

	eprintln!("wrote {output:?} ({}x{})", bbox.width(), bbox.height());
	Ok(())
}
