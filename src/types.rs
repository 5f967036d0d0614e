#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic position in degrees. Longitude comes first, matching the
/// `[lon, lat]` ordering used by GeoJSON and by the bounding box layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPosition {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<[f64; 2]> for GeoPosition {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

/// Continuous pixel coordinates in the world canvas of a given zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldPixel {
    pub x: f64,
    pub y: f64,
}

impl WorldPixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for WorldPixel {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Column and row of a tile in the grid of some zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileCoordinate {
    pub tile_x: u32,
    pub tile_y: u32,
}

impl TileCoordinate {
    pub fn new(tile_x: u32, tile_y: u32) -> Self {
        Self { tile_x, tile_y }
    }
}

/// Geographic box in degrees. A box whose `west` edge lies east of its
/// `east` edge wraps across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Reads a `[west, south, east, north]` slice. Returns `None` when fewer
    /// than four values are given; extra values are ignored.
    pub fn from_slice(bounds: &[f64]) -> Option<Self> {
        match bounds {
            [west, south, east, north, ..] => Some(Self::new(*west, *south, *east, *north)),
            _ => None,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    pub fn north_west(&self) -> GeoPosition {
        GeoPosition::new(self.west, self.north)
    }

    pub fn south_east(&self) -> GeoPosition {
        GeoPosition::new(self.east, self.south)
    }

    /// Whether the position lies inside the box, edges included. Handles
    /// boxes that wrap across the antimeridian.
    pub fn contains(&self, position: &GeoPosition) -> bool {
        if position.latitude < self.south || position.latitude > self.north {
            return false;
        }
        if self.crosses_antimeridian() {
            position.longitude >= self.west || position.longitude <= self.east
        } else {
            position.longitude >= self.west && position.longitude <= self.east
        }
    }
}

/// A map view: center position plus a continuous zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub center: GeoPosition,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: GeoPosition, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for Viewport {
    /// The whole-world view used when no usable bounds are available.
    fn default() -> Self {
        Self::new(GeoPosition::new(0.0, 0.0), 1.0)
    }
}
