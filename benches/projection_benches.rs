use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mercator_tiles::*;

fn fixed_position() -> GeoPosition {
    // San Francisco
    GeoPosition::new(-122.4194, 37.7749)
}

fn bench_position_to_tile_xy(c: &mut Criterion) {
    let position = fixed_position();
    let mut group = c.benchmark_group("position_to_tile_xy");

    for zoom in [0u8, 5, 10, 18].iter() {
        group.bench_with_input(format!("zoom_{}", zoom), zoom, |b, &z| {
            b.iter(|| MercatorProjection::position_to_tile_xy(black_box(&position), black_box(z), DEFAULT_TILE_SIZE));
        });
    }
    group.finish();
}

fn bench_world_pixel_round_trip(c: &mut Criterion) {
    let position = fixed_position();
    c.bench_function("world_pixel_round_trip", |b| {
        b.iter(|| {
            let pixel = MercatorProjection::position_to_world_pixel(black_box(&position), 12.0, DEFAULT_TILE_SIZE);
            MercatorProjection::world_pixel_to_position(&pixel, 12.0, DEFAULT_TILE_SIZE)
        })
    });
}

fn bench_quad_keys(c: &mut Criterion) {
    let key = tile_xy_to_quad_key(1_310, 3_166, 13);

    c.benchmark_group("quad_key")
        .bench_function("encode_zoom_13", |b| {
            b.iter(|| tile_xy_to_quad_key(black_box(1_310), black_box(3_166), black_box(13)))
        })
        .bench_function("decode_zoom_13", |b| b.iter(|| quad_key_to_tile_xy(black_box(key.as_str()))));
}

fn bench_region_and_view(c: &mut Criterion) {
    let bay_area = BoundingBox::new(-122.6, 37.6, -122.2, 37.9);

    c.benchmark_group("region")
        .bench_function("quadkeys_in_bounding_box_zoom_12", |b| {
            b.iter(|| get_quadkeys_in_bounding_box(black_box(Some(&bay_area)), 12, DEFAULT_TILE_SIZE))
        })
        .bench_function("quadkeys_in_view_zoom_14", |b| {
            b.iter(|| get_quadkeys_in_view(black_box(&fixed_position()), 14, 1920.0, 1080.0, DEFAULT_TILE_SIZE))
        })
        .bench_function("find_best_map_view", |b| {
            b.iter(|| find_best_map_view(black_box(Some(&bay_area)), 800.0, 600.0, 20.0, DEFAULT_TILE_SIZE))
        });
}

criterion_group!(
    projection_benches,
    bench_position_to_tile_xy,
    bench_world_pixel_round_trip,
    bench_quad_keys,
    bench_region_and_view
);
criterion_main!(projection_benches);
