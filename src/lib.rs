//! Slippy map tile math on the spherical (Web) Mercator projection.
//!
//! Converts between geographic positions, world pixels, tile coordinates
//! and quadkeys, enumerates the tiles covering a region, and fits a
//! viewport around a bounding box. Everything is a pure function of its
//! arguments; the only side effect is `tracing` output.

mod config;
mod constants;
mod errors;
mod mercator;
mod quadkey;
mod region;
mod tile;
mod types;
mod viewport;

// Create a single, consistent public API
pub use config::TileGrid;
pub use constants::{
    DEFAULT_TILE_SIZE, EARTH_RADIUS, MAX_LATITUDE, MAX_LONGITUDE, MAX_ZOOM_LEVEL, MIN_LATITUDE,
    MIN_LONGITUDE,
};
pub use errors::{QuadKeyError, Result};
pub use mercator::MercatorProjection;
pub use quadkey::{quad_key_to_tile_xy, tile_xy_to_quad_key, QuadKey};
pub use region::{
    get_quadkeys_in_bounding_box, get_quadkeys_in_view, get_tiles_in_bounding_box,
    get_view_bounding_box,
};
pub use tile::Tile;
pub use types::{BoundingBox, GeoPosition, TileCoordinate, Viewport, WorldPixel};
pub use viewport::find_best_map_view;
