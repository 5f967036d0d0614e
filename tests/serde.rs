// Only compiled with the "serde" feature.
#![cfg(feature = "serde")]

use mercator_tiles::{BoundingBox, GeoPosition, QuadKey, Tile, TileGrid, Viewport};

#[test]
fn test_geo_position_serde() {
    let position = GeoPosition::new(13.405, 52.52);
    let serialized = serde_json::to_string(&position).unwrap();
    assert_eq!(serialized, r#"{"longitude":13.405,"latitude":52.52}"#);
    let deserialized: GeoPosition = serde_json::from_str(&serialized).unwrap();
    assert_eq!(position, deserialized);
}

#[test]
fn test_quad_key_serializes_as_string() {
    let key = QuadKey::parse("0231").unwrap();
    let serialized = serde_json::to_string(&key).unwrap();
    assert_eq!(serialized, r#""0231""#);
    let deserialized: QuadKey = serde_json::from_str(&serialized).unwrap();
    assert_eq!(key, deserialized);
}

#[test]
fn test_quad_key_is_validated_on_deserialize() {
    let result: Result<QuadKey, _> = serde_json::from_str(r#""0241""#);
    assert!(result.is_err());
}

#[test]
fn test_viewport_and_bounds_serde() {
    let view = Viewport::new(GeoPosition::new(-180.0, 0.0), 5.29);
    let json = serde_json::to_string(&view).unwrap();
    assert_eq!(serde_json::from_str::<Viewport>(&json).unwrap(), view);

    let bounds = BoundingBox::new(170.0, -10.0, -170.0, 10.0);
    let json = serde_json::to_string(&bounds).unwrap();
    assert_eq!(json, r#"{"west":170.0,"south":-10.0,"east":-170.0,"north":10.0}"#);
    assert_eq!(serde_json::from_str::<BoundingBox>(&json).unwrap(), bounds);

    let tile = Tile::new(550, 335, 10);
    let json = serde_json::to_string(&tile).unwrap();
    assert_eq!(json, r#"{"tile_x":550,"tile_y":335,"zoom_level":10}"#);
}

#[test]
fn test_tile_grid_fills_missing_fields() {
    let grid: TileGrid = serde_json::from_str(r#"{"tile_size":512}"#).unwrap();
    assert_eq!(grid, TileGrid::default().with_tile_size(512));
}
