//! The pixel-geometry vocabulary: extents, bounding boxes, tile ids and the
//! extent partitioner.

mod geo_transform;
mod pixel_bbox;
mod raster_extent;
mod tile_grid;
mod tile_id;
mod tile_spec;

pub use geo_transform::GeoTransform;
pub use pixel_bbox::PixelBBox;
pub use raster_extent::RasterExtent;
pub use tile_grid::TileGrid;
pub use tile_id::TileId;
pub use tile_spec::TileSpec;
