use tracing::{debug, trace};

use crate::constants::{clip, MAX_LATITUDE, MIN_LATITUDE, PI, PIXELS_PER_RADIAN};
use crate::types::{BoundingBox, GeoPosition, Viewport};

/// Finds the center and zoom that fit `bounds` into a `map_width` x
/// `map_height` pixel canvas, keeping `padding` pixels free on every side.
///
/// The zoom is continuous; callers floor or clamp it to the zoom levels
/// they support (see [`crate::TileGrid::clamp_zoom`]). A box with
/// `east <= west` is taken to wrap across the antimeridian. Missing or
/// non-finite bounds give [`Viewport::default`].
pub fn find_best_map_view(
    bounds: Option<&BoundingBox>,
    map_width: f64,
    map_height: f64,
    padding: f64,
    tile_size: u32,
) -> Viewport {
    let bounds = match bounds {
        Some(bounds) if bounds.is_finite() => bounds,
        _ => {
            debug!("No usable bounds, falling back to the default view");
            return Viewport::default();
        }
    };

    let (west, east) = (bounds.west, bounds.east);
    let south = clip(bounds.south, MIN_LATITUDE, MAX_LATITUDE);
    let north = clip(bounds.north, MIN_LATITUDE, MAX_LATITUDE);

    let (delta_lon, center_lon) = if east > west {
        (east - west, (east + west) / 2.0)
    } else {
        debug!("Bounds cross the antimeridian: west {} east {}", west, east);
        (360.0 - (west - east), ((east + west) / 2.0 + 360.0) % 360.0 - 180.0)
    };

    // Midpoint in projected space, so the box is visually centered.
    let ry1 = mercator_y(south);
    let ry2 = mercator_y(north);
    let center_lat = ((ry1 + ry2) / 2.0).sinh().atan() * 180.0 / PI;

    let usable_width = (map_width - padding * 2.0).max(1.0);
    let usable_height = (map_height - padding * 2.0).max(1.0);

    let resolution_horizontal = delta_lon / usable_width;

    let vy0 = log_tan(center_lat);
    let vy1 = log_tan(north);
    let zoom_factor_powered = (usable_height * 0.5) / (PIXELS_PER_RADIAN * (vy1 - vy0));
    let resolution_vertical = 360.0 / (zoom_factor_powered * f64::from(tile_size));

    let resolution = resolution_horizontal.max(resolution_vertical);
    trace!(
        "Resolution horizontal {} vertical {}, {} binds",
        resolution_horizontal,
        resolution_vertical,
        if resolution_horizontal >= resolution_vertical {
            "width"
        } else {
            "height"
        }
    );

    let zoom = (360.0 / (resolution * f64::from(tile_size))).log2();

    Viewport::new(GeoPosition::new(center_lon, center_lat), zoom)
}

fn mercator_y(latitude: f64) -> f64 {
    let radians = latitude * PI / 180.0;
    ((radians.sin() + 1.0) / radians.cos()).ln()
}

fn log_tan(latitude: f64) -> f64 {
    (PI * (0.25 + latitude / 360.0)).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mercator_y_matches_log_tan() {
        for latitude in [-80.0, -33.3, 0.0, 12.5, 60.0, 85.0] {
            assert!((mercator_y(latitude) - log_tan(latitude)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_polar_north_edge_stays_finite() {
        let bounds = BoundingBox::new(-10.0, 0.0, 10.0, 90.0);
        let view = find_best_map_view(Some(&bounds), 800.0, 600.0, 0.0, 256);
        assert!(view.zoom.is_finite());
        assert!(view.center.latitude.is_finite());
    }

    #[test]
    fn test_padding_wider_than_canvas_stays_finite() {
        let bounds = BoundingBox::new(-10.0, -10.0, 10.0, 10.0);
        let view = find_best_map_view(Some(&bounds), 100.0, 100.0, 80.0, 256);
        assert!(view.zoom.is_finite());
    }
}
