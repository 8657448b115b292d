//! Deserialization must uphold the same invariants as the constructors

use orthodrome::{CartesianCoordinate, CoordinateRegistry, SphericCoordinate, EARTH_RADIUS};
use serde_json::json;

#[test]
fn test_spheric_serializes_all_fields() {
    let coord = SphericCoordinate::new(49.58, 11.01, 1.0).unwrap();
    let value = serde_json::to_value(coord).unwrap();
    assert_eq!(
        value,
        json!({"latitude": 49.58, "longitude": 11.01, "radius": 1.0})
    );
}

#[test]
fn test_spheric_radius_defaults_to_earth() {
    let coord: SphericCoordinate =
        serde_json::from_value(json!({"latitude": -33.86, "longitude": 151.2})).unwrap();
    assert_eq!(coord.latitude(), -33.86);
    assert_eq!(coord.radius(), EARTH_RADIUS);
}

#[test]
fn test_spheric_out_of_range_rejected() {
    let result: Result<SphericCoordinate, _> =
        serde_json::from_value(json!({"latitude": 91.0, "longitude": 0.0}));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("latitude"), "unexpected error: {}", message);

    let result: Result<SphericCoordinate, _> =
        serde_json::from_value(json!({"latitude": 0.0, "longitude": 0.0, "radius": -2.0}));
    assert!(result.is_err());
}

#[test]
fn test_cartesian_round_trip_through_json() {
    let coord = CartesianCoordinate::new(1.5, -2.0, 3.25).unwrap();
    let text = serde_json::to_string(&coord).unwrap();
    let back: CartesianCoordinate = serde_json::from_str(&text).unwrap();
    assert_eq!(coord, back);
}

#[test]
fn test_deserialized_values_can_be_interned() {
    let registry = CoordinateRegistry::new();
    let parsed: SphericCoordinate =
        serde_json::from_str(r#"{"latitude": 62.03, "longitude": 129.6}"#).unwrap();

    let from_json = registry.intern_spheric(parsed);
    let built = registry.spheric_on_earth(62.03, 129.6).unwrap();
    assert!(std::sync::Arc::ptr_eq(&from_json, &built));
}
