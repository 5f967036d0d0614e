//! Enumerates the tiles covering a geographic box or a screen-sized view.

use tracing::debug;

use crate::constants::MAX_ZOOM_LEVEL;
use crate::mercator::MercatorProjection;
use crate::quadkey::QuadKey;
use crate::tile::Tile;
use crate::types::{BoundingBox, GeoPosition, WorldPixel};

/// Every tile intersecting `bounds` at `zoom_level`, row by row from the
/// north-west corner.
///
/// Missing or non-finite bounds give an empty result. A box with
/// `west > east` wraps across the antimeridian: its columns run from the
/// west edge to the last column and continue from column 0 to the east
/// edge.
pub fn get_tiles_in_bounding_box(bounds: Option<&BoundingBox>, zoom_level: u8, tile_size: u32) -> Vec<Tile> {
    let bounds = match bounds {
        Some(bounds) if bounds.is_finite() => bounds,
        _ => {
            debug!("No usable bounds, nothing to enumerate");
            return Vec::new();
        }
    };
    let zoom_level = zoom_level.min(MAX_ZOOM_LEVEL);

    let top_left = MercatorProjection::position_to_tile_xy(&bounds.north_west(), zoom_level, tile_size);
    let bottom_right = MercatorProjection::position_to_tile_xy(&bounds.south_east(), zoom_level, tile_size);

    let columns = column_range(
        top_left.tile_x,
        bottom_right.tile_x,
        bounds.crosses_antimeridian(),
        MercatorProjection::tile_count(zoom_level),
    );
    debug!(
        "Enumerating {} columns x rows {}..={} at zoom {} (antimeridian: {})",
        columns.len(),
        top_left.tile_y,
        bottom_right.tile_y,
        zoom_level,
        bounds.crosses_antimeridian()
    );

    let mut tiles = Vec::new();
    for tile_y in top_left.tile_y..=bottom_right.tile_y {
        for &tile_x in &columns {
            tiles.push(Tile::new(tile_x, tile_y, zoom_level));
        }
    }
    tiles
}

/// Quadkeys of [`get_tiles_in_bounding_box`], in the same order.
pub fn get_quadkeys_in_bounding_box(bounds: Option<&BoundingBox>, zoom_level: u8, tile_size: u32) -> Vec<QuadKey> {
    get_tiles_in_bounding_box(bounds, zoom_level, tile_size)
        .iter()
        .map(Tile::quad_key)
        .collect()
}

/// Geographic box seen by a `width` x `height` pixel screen centered on
/// `position`. The half extents are applied in world pixel space so the
/// box matches the screen exactly at this zoom.
pub fn get_view_bounding_box(
    position: &GeoPosition,
    zoom_level: u8,
    width: f64,
    height: f64,
    tile_size: u32,
) -> BoundingBox {
    let zoom = f64::from(zoom_level);
    let center = MercatorProjection::position_to_world_pixel(position, zoom, tile_size);

    let top_left = WorldPixel::new(center.x - width * 0.5, center.y - height * 0.5);
    let bottom_right = WorldPixel::new(center.x + width * 0.5, center.y + height * 0.5);

    let nw = MercatorProjection::world_pixel_to_position(&top_left, zoom, tile_size);
    let se = MercatorProjection::world_pixel_to_position(&bottom_right, zoom, tile_size);

    BoundingBox::new(nw.longitude, se.latitude, se.longitude, nw.latitude)
}

pub fn get_quadkeys_in_view(
    position: &GeoPosition,
    zoom_level: u8,
    width: f64,
    height: f64,
    tile_size: u32,
) -> Vec<QuadKey> {
    let bounds = get_view_bounding_box(position, zoom_level, width, height, tile_size);
    get_quadkeys_in_bounding_box(Some(&bounds), zoom_level, tile_size)
}

fn column_range(west_column: u32, east_column: u32, wraps: bool, tile_count: u64) -> Vec<u32> {
    if !wraps {
        return (west_column..=east_column).collect();
    }
    let last_column = (tile_count - 1) as u32;
    if west_column <= east_column {
        // Both edges share a column, so the box spans the whole world.
        return (0..=last_column).collect();
    }
    (west_column..=last_column).chain(0..=east_column).collect()
}
