use std::env;
use std::time::Instant;

use mercator_tiles::{
    get_quadkeys_in_view, quad_key_to_tile_xy, GeoPosition, MercatorProjection, TileGrid,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Default view center
const INITIAL_LON: f64 = 93.9074701;
const INITIAL_LAT: f64 = 26.7428831;
const INITIAL_ZOOM_LEVEL: u8 = 14;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let longitude = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(INITIAL_LON);
    let latitude = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(INITIAL_LAT);
    let zoom_level = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(INITIAL_ZOOM_LEVEL);

    let grid = TileGrid::default();
    let position = GeoPosition::new(longitude, latitude);
    let start = Instant::now();

    let tile = grid.position_to_tile(&position, zoom_level);
    let bounds = grid.tile_bounding_box(&tile);
    println!("Position: {:?}", position);
    println!("  Tile: x={} y={} zoom={}", tile.tile_x, tile.tile_y, tile.zoom_level);
    println!("  QuadKey: {}", tile.quad_key());
    println!(
        "  Tile bounds: west={:.6} south={:.6} east={:.6} north={:.6}",
        bounds.west, bounds.south, bounds.east, bounds.north
    );
    println!(
        "  Ground resolution: {:.3} m/px",
        MercatorProjection::meters_per_pixel(latitude, f64::from(zoom_level), grid.tile_size)
    );

    let quad_keys = get_quadkeys_in_view(&position, zoom_level, 800.0, 600.0, grid.tile_size);
    println!("Tiles for an 800x600 view: {}", quad_keys.len());
    for key in &quad_keys {
        match quad_key_to_tile_xy(key.as_str()) {
            Ok(t) => println!("  {} -> ({}, {})", key, t.tile_x, t.tile_y),
            Err(e) => println!("  {} -> error: {}", key, e),
        }
    }

    info!("Done in {:?}", start.elapsed());
}
