#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TILE_SIZE, MAX_ZOOM_LEVEL};
use crate::mercator::MercatorProjection;
use crate::quadkey::QuadKey;
use crate::region::{get_quadkeys_in_bounding_box, get_quadkeys_in_view};
use crate::tile::Tile;
use crate::types::{BoundingBox, GeoPosition, Viewport};
use crate::viewport::find_best_map_view;

/// Tile pyramid settings shared by a map client: tile size and the zoom
/// levels it can serve.
///
/// This is a plain value. Its methods forward to the free functions with
/// the stored tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TileGrid {
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            min_zoom: 0,
            max_zoom: 22,
        }
    }
}

impl TileGrid {
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Sets the served zoom range. Bounds are put in order and clipped to
    /// [`MAX_ZOOM_LEVEL`].
    pub fn with_zoom_range(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        let (low, high) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = low.min(MAX_ZOOM_LEVEL);
        self.max_zoom = high.min(MAX_ZOOM_LEVEL);
        self
    }

    /// Floors a fractional zoom and clamps it to the served range. NaN maps
    /// to `min_zoom`.
    pub fn clamp_zoom(&self, zoom: f64) -> u8 {
        if zoom.is_nan() {
            return self.min_zoom;
        }
        let zoom = zoom
            .floor()
            .max(f64::from(self.min_zoom))
            .min(f64::from(self.max_zoom));
        zoom as u8
    }

    pub fn map_size(&self, zoom: f64) -> u64 {
        MercatorProjection::get_map_size(zoom, self.tile_size)
    }

    pub fn position_to_tile(&self, position: &GeoPosition, zoom_level: u8) -> Tile {
        Tile::from_position(position, zoom_level, self.tile_size)
    }

    pub fn tile_bounding_box(&self, tile: &Tile) -> BoundingBox {
        tile.get_bounding_box(self.tile_size)
    }

    pub fn quadkeys_in_bounding_box(&self, bounds: Option<&BoundingBox>, zoom_level: u8) -> Vec<QuadKey> {
        get_quadkeys_in_bounding_box(bounds, zoom_level, self.tile_size)
    }

    pub fn quadkeys_in_view(&self, position: &GeoPosition, zoom_level: u8, width: f64, height: f64) -> Vec<QuadKey> {
        get_quadkeys_in_view(position, zoom_level, width, height, self.tile_size)
    }

    pub fn find_best_map_view(
        &self,
        bounds: Option<&BoundingBox>,
        map_width: f64,
        map_height: f64,
        padding: f64,
    ) -> Viewport {
        find_best_map_view(bounds, map_width, map_height, padding, self.tile_size)
    }
}
