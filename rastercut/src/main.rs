mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "tiles")]
	/// Cut a raster into grid-aligned pixel tiles
	Tile(tools::tile::Subcommand),

	/// Subset a raster to a pixel bounding box
	Subset(tools::subset::Subcommand),

	/// Show information about a raster
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Tile(arguments) => tools::tile::run(arguments),
		Commands::Subset(arguments) => tools::subset::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}
