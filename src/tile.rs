#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ZOOM_LEVEL;
use crate::mercator::MercatorProjection;
use crate::quadkey::{tile_xy_to_quad_key, QuadKey};
use crate::types::{BoundingBox, GeoPosition, TileCoordinate};

/// A tile of the slippy map pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    pub tile_x: u32,
    pub tile_y: u32,
    pub zoom_level: u8,
}

impl Tile {
    pub fn new(tile_x: u32, tile_y: u32, zoom_level: u8) -> Self {
        Self {
            tile_x,
            tile_y,
            zoom_level,
        }
    }

    /// The tile containing `position`.
    pub fn from_position(position: &GeoPosition, zoom_level: u8, tile_size: u32) -> Self {
        let coordinate = MercatorProjection::position_to_tile_xy(position, zoom_level, tile_size);
        Self::new(coordinate.tile_x, coordinate.tile_y, zoom_level)
    }

    pub fn coordinate(&self) -> TileCoordinate {
        TileCoordinate::new(self.tile_x, self.tile_y)
    }

    /// Whether the coordinates fall inside the grid of the tile's zoom level.
    pub fn is_valid(&self) -> bool {
        let tile_count = MercatorProjection::tile_count(self.zoom_level);
        self.zoom_level <= MAX_ZOOM_LEVEL
            && u64::from(self.tile_x) < tile_count
            && u64::from(self.tile_y) < tile_count
    }

    pub fn quad_key(&self) -> QuadKey {
        tile_xy_to_quad_key(self.tile_x, self.tile_y, self.zoom_level)
    }

    pub fn get_bounding_box(&self, tile_size: u32) -> BoundingBox {
        MercatorProjection::tile_xy_to_bounding_box(self.tile_x, self.tile_y, self.zoom_level, tile_size)
    }

    pub fn get_center_point(&self, tile_size: u32) -> GeoPosition {
        MercatorProjection::get_center_coords_of_tile(self.tile_x, self.tile_y, self.zoom_level, tile_size)
    }

    pub fn parent(&self) -> Option<Tile> {
        if self.zoom_level == 0 {
            None
        } else {
            Some(Tile::new(self.tile_x / 2, self.tile_y / 2, self.zoom_level - 1))
        }
    }

    /// Children in quadkey digit order.
    pub fn children(&self) -> Vec<Tile> {
        if self.zoom_level >= MAX_ZOOM_LEVEL {
            return Vec::new();
        }
        let x = self.tile_x.saturating_mul(2);
        let y = self.tile_y.saturating_mul(2);
        let zoom_level = self.zoom_level + 1;
        vec![
            Tile::new(x, y, zoom_level),
            Tile::new(x.saturating_add(1), y, zoom_level),
            Tile::new(x, y.saturating_add(1), zoom_level),
            Tile::new(x.saturating_add(1), y.saturating_add(1), zoom_level),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_follow_quadkey_digits() {
        let tile = Tile::new(3, 5, 3);
        let keys: Vec<String> = tile.children().iter().map(|t| t.quad_key().into_string()).collect();
        assert_eq!(keys, vec!["2130", "2131", "2132", "2133"]);
        for child in tile.children() {
            assert_eq!(child.parent(), Some(tile));
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(Tile::new(0, 0, 0).is_valid());
        assert!(!Tile::new(1, 0, 0).is_valid());
        assert!(Tile::new(3, 3, 2).is_valid());
        assert!(!Tile::new(3, 4, 2).is_valid());
        assert!(!Tile::new(0, 0, MAX_ZOOM_LEVEL + 1).is_valid());
    }
}
