//! ESRI world-file sidecars.
//!
//! A world file carries the georeferencing of a raster that its own format
//! cannot store. Sidecars live next to the raster; the classic spelling
//! drops the middle of the raster extension and appends `w` (`.png` →
//! `.pgw`, `.tif` → `.tfw`), the generic spelling is `.wld`. Reading tries
//! the specific spelling first, then `.wld`; writing uses the specific
//! spelling when one can be derived.

use anyhow::{Context, Result};
use rastercut_core::GeoTransform;
use std::{
	fs,
	path::{Path, PathBuf},
};

/// The format-specific sidecar extension for a raster extension, e.g.
/// `png` → `pgw`. Needs at least three characters to abbreviate.
fn specific_extension(extension: &str) -> Option<String> {
	let chars: Vec<char> = extension.chars().collect();
	if chars.len() < 3 {
		return None;
	}
	Some(format!("{}{}w", chars[0], chars[chars.len() - 1]).to_lowercase())
}

/// The sidecar paths that may georeference `path`, in lookup order.
pub fn sidecar_candidates(path: &Path) -> Vec<PathBuf> {
	let mut candidates = Vec::new();
	if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
		if let Some(specific) = specific_extension(extension) {
			candidates.push(path.with_extension(specific));
		}
	}
	candidates.push(path.with_extension("wld"));
	candidates
}

/// Reads the world file of a raster, if one exists.
///
/// # Errors
///
/// Returns an error when a sidecar exists but cannot be read or parsed;
/// a missing sidecar is `Ok(None)`.
pub fn read_sidecar(path: &Path) -> Result<Option<GeoTransform>> {
	for candidate in sidecar_candidates(path) {
		if candidate.exists() {
			let text = fs::read_to_string(&candidate).with_context(|| format!("could not read world file {candidate:?}"))?;
			let transform =
				GeoTransform::from_world_file(&text).with_context(|| format!("could not parse world file {candidate:?}"))?;
			log::debug!("read world file {candidate:?}");
			return Ok(Some(transform));
		}
	}
	Ok(None)
}

/// Writes the world file of a raster and returns its path.
pub fn write_sidecar(path: &Path, transform: &GeoTransform) -> Result<PathBuf> {
	let sidecar = sidecar_candidates(path)
		.into_iter()
		.next()
		.expect("sidecar_candidates always returns at least the .wld spelling");
	fs::write(&sidecar, transform.to_world_file()).with_context(|| format!("could not write world file {sidecar:?}"))?;
	Ok(sidecar)
}
