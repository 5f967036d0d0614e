use crate::constants::{
    clip, EARTH_RADIUS, MAX_LATITUDE, MAX_LONGITUDE, MAX_ZOOM_LEVEL, METERS_PER_INCH,
    MIN_LATITUDE, MIN_LONGITUDE, PI,
};
use crate::types::{BoundingBox, GeoPosition, TileCoordinate, WorldPixel};

/// Spherical (Web) Mercator math between geographic positions, world pixels
/// and tile grid coordinates.
///
/// Every function is pure and takes zoom and tile size explicitly. Inputs
/// outside the valid ranges are clipped, never rejected: latitudes to
/// [`MIN_LATITUDE`, `MAX_LATITUDE`], longitudes to [-180, 180] and world pixels
/// to `[0, map_size - 1]`.
pub struct MercatorProjection;

impl MercatorProjection {
    /// Width and height of the whole world in pixels at `zoom`. Fractional
    /// zooms are allowed and rounded up to a whole pixel.
    pub fn get_map_size(zoom: f64, tile_size: u32) -> u64 {
        (f64::from(tile_size) * 2f64.powf(zoom)).ceil() as u64
    }

    /// Number of tiles along each axis at `zoom_level`.
    pub fn tile_count(zoom_level: u8) -> u64 {
        1u64 << zoom_level.min(MAX_ZOOM_LEVEL)
    }

    /// Ground resolution at `latitude`.
    pub fn meters_per_pixel(latitude: f64, zoom: f64, tile_size: u32) -> f64 {
        let latitude = clip(latitude, MIN_LATITUDE, MAX_LATITUDE);
        (latitude * PI / 180.0).cos() * 2.0 * PI * EARTH_RADIUS
            / Self::get_map_size(zoom, tile_size) as f64
    }

    /// Map scale denominator (1 : N) for a screen of `screen_dpi`.
    pub fn get_map_scale(latitude: f64, zoom: f64, screen_dpi: f64, tile_size: u32) -> f64 {
        Self::meters_per_pixel(latitude, zoom, tile_size) * screen_dpi / METERS_PER_INCH
    }

    pub fn position_to_world_pixel(position: &GeoPosition, zoom: f64, tile_size: u32) -> WorldPixel {
        let latitude = clip(position.latitude, MIN_LATITUDE, MAX_LATITUDE);
        let longitude = clip(position.longitude, MIN_LONGITUDE, MAX_LONGITUDE);

        let x = (longitude + 180.0) / 360.0;
        let sin_latitude = (latitude * PI / 180.0).sin();
        let y = 0.5 - ((1.0 + sin_latitude) / (1.0 - sin_latitude)).ln() / (4.0 * PI);

        let map_size = Self::get_map_size(zoom, tile_size) as f64;

        // Rounding at the poles and at lon = 180 can overshoot the canvas.
        WorldPixel::new(
            clip(x * map_size, 0.0, map_size - 1.0),
            clip(y * map_size, 0.0, map_size - 1.0),
        )
    }

    pub fn world_pixel_to_position(pixel: &WorldPixel, zoom: f64, tile_size: u32) -> GeoPosition {
        let map_size = Self::get_map_size(zoom, tile_size) as f64;

        let x = (clip(pixel.x, 0.0, map_size - 1.0) / map_size) - 0.5;
        let y = 0.5 - (clip(pixel.y, 0.0, map_size - 1.0) / map_size);

        GeoPosition::new(
            360.0 * x,
            90.0 - 360.0 * (-y * 2.0 * PI).exp().atan() / PI,
        )
    }

    /// Nearest tile corner to `pixel`, by rounding each axis.
    ///
    /// This is not the tile containing the pixel; use
    /// [`MercatorProjection::position_to_tile_xy`] for containment. Negative
    /// pixels saturate to 0.
    pub fn world_pixel_to_tile_xy(pixel: &WorldPixel, tile_size: u32) -> TileCoordinate {
        let tile_size = f64::from(tile_size);
        TileCoordinate::new(
            (pixel.x / tile_size).round() as u32,
            (pixel.y / tile_size).round() as u32,
        )
    }

    /// The tile containing `position` at `zoom_level`.
    ///
    /// Goes through the clipped world pixel and floors it, so a point on the
    /// last pixel row or column still lands in the last tile.
    pub fn position_to_tile_xy(position: &GeoPosition, zoom_level: u8, tile_size: u32) -> TileCoordinate {
        let pixel = Self::position_to_world_pixel(position, f64::from(zoom_level), tile_size);
        let tile_size = f64::from(tile_size);
        TileCoordinate::new(
            (pixel.x / tile_size).floor() as u32,
            (pixel.y / tile_size).floor() as u32,
        )
    }

    /// Top left corner of a tile in world pixels.
    pub fn tile_xy_to_world_pixel(tile_x: u32, tile_y: u32, tile_size: u32) -> WorldPixel {
        let tile_size = f64::from(tile_size);
        WorldPixel::new(f64::from(tile_x) * tile_size, f64::from(tile_y) * tile_size)
    }

    pub fn tile_xy_to_bounding_box(tile_x: u32, tile_y: u32, zoom_level: u8, tile_size: u32) -> BoundingBox {
        let zoom = f64::from(zoom_level);

        let top_left = Self::tile_xy_to_world_pixel(tile_x, tile_y, tile_size);
        let bottom_right = WorldPixel::new(
            top_left.x + f64::from(tile_size),
            top_left.y + f64::from(tile_size),
        );

        let nw = Self::world_pixel_to_position(&top_left, zoom, tile_size);
        let se = Self::world_pixel_to_position(&bottom_right, zoom, tile_size);

        BoundingBox::new(nw.longitude, se.latitude, se.longitude, nw.latitude)
    }

    pub fn get_center_coords_of_tile(tile_x: u32, tile_y: u32, zoom_level: u8, tile_size: u32) -> GeoPosition {
        let top_left = Self::tile_xy_to_world_pixel(tile_x, tile_y, tile_size);
        let half = 0.5 * f64::from(tile_size);
        let center = WorldPixel::new(top_left.x + half, top_left.y + half);
        Self::world_pixel_to_position(&center, f64::from(zoom_level), tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_size() {
        assert_eq!(MercatorProjection::get_map_size(0.0, 256), 256);
        assert_eq!(MercatorProjection::get_map_size(3.0, 256), 2048);
        assert_eq!(MercatorProjection::get_map_size(1.0, 512), 1024);
        // 256 * 2^0.5 = 362.03...
        assert_eq!(MercatorProjection::get_map_size(0.5, 256), 363);
    }

    #[test]
    fn test_tile_count_clamps_zoom() {
        assert_eq!(MercatorProjection::tile_count(0), 1);
        assert_eq!(MercatorProjection::tile_count(10), 1024);
        assert_eq!(MercatorProjection::tile_count(200), 1u64 << MAX_ZOOM_LEVEL);
    }

    #[test]
    fn test_equator_meridian_is_world_center() {
        let pixel = MercatorProjection::position_to_world_pixel(&GeoPosition::new(0.0, 0.0), 1.0, 256);
        assert!((pixel.x - 256.0).abs() < 1e-9);
        assert!((pixel.y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_nan_input_is_clipped() {
        let pixel = MercatorProjection::position_to_world_pixel(&GeoPosition::new(f64::NAN, f64::NAN), 2.0, 256);
        assert!(pixel.x.is_finite());
        assert!(pixel.y.is_finite());
    }

    #[test]
    fn test_world_pixel_to_tile_xy_saturates_negative() {
        let tile = MercatorProjection::world_pixel_to_tile_xy(&WorldPixel::new(-900.0, 10.0), 256);
        assert_eq!(tile, TileCoordinate::new(0, 0));
    }
}
