use std::env;

use mercator_tiles::{BoundingBox, TileGrid};
use tracing_subscriber::EnvFilter;

const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 600.0;
const PADDING: f64 = 20.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // west south east north
    let values: Vec<f64> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let bounds = if values.is_empty() {
        // Fiji, across the antimeridian
        BoundingBox::from_slice(&[176.0, -19.5, -178.0, -15.5])
    } else {
        BoundingBox::from_slice(&values)
    };

    let grid = TileGrid::default().with_zoom_range(0, 20);
    let view = grid.find_best_map_view(bounds.as_ref(), MAP_WIDTH, MAP_HEIGHT, PADDING);

    match &bounds {
        Some(b) => println!(
            "Bounds: {:?} (crosses antimeridian: {})",
            b.to_array(),
            b.crosses_antimeridian()
        ),
        None => println!("No usable bounds, using the default view"),
    }
    println!(
        "Center: lon={:.6} lat={:.6}",
        view.center.longitude, view.center.latitude
    );
    println!("Zoom: {:.3} (tile zoom {})", view.zoom, grid.clamp_zoom(view.zoom));
}
