/// Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Latitude bounds of the square Web Mercator world. Beyond them the
/// projected y coordinate diverges.
pub const MAX_LATITUDE: f64 = 85.05112878;
pub const MIN_LATITUDE: f64 = -MAX_LATITUDE;

pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LONGITUDE: f64 = -MAX_LONGITUDE;

/// Standard tile size
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Deepest supported zoom level. Keys and tile coordinates beyond it are
/// clipped or rejected.
pub const MAX_ZOOM_LEVEL: u8 = 31;

/// Meters per inch, used to turn a screen DPI into a map scale.
pub(crate) const METERS_PER_INCH: f64 = 0.0254;

/// `256 / 2π`: world pixels per radian of Mercator y at zoom 0.
pub(crate) const PIXELS_PER_RADIAN: f64 = 40.7436654315252;

pub(crate) const PI: f64 = std::f64::consts::PI;

#[inline]
pub(crate) fn clip(n: f64, min_value: f64, max_value: f64) -> f64 {
    n.max(min_value).min(max_value)
}
