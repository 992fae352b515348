use pplane_core::errors::{ErrorInfo, PlaneError};
use pplane_core::{LineId, PointId, SchemaVersion};

#[test]
fn point_id_roundtrip() {
    let id = PointId::from_raw(42);
    let json = serde_json::to_string(&id).unwrap();
    let restored: PointId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, restored);
    assert_eq!(restored.as_raw(), 42);
}

#[test]
fn line_id_roundtrip() {
    let id = LineId::from_raw(7);
    let json = serde_json::to_string(&id).unwrap();
    let restored: LineId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, restored);
}

#[test]
fn schema_version_roundtrip() {
    let version = SchemaVersion::new(1, 2, 3);
    let json = serde_json::to_string(&version).unwrap();
    let restored: SchemaVersion = serde_json::from_str(&json).unwrap();
    assert_eq!(version, restored);
}

#[test]
fn error_roundtrip_preserves_family_and_payload() {
    let err = PlaneError::Incidence(
        ErrorInfo::new("incidence-count", "expected 4 incident points, found 5")
            .with_context("order", "4"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let restored: PlaneError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
    assert!(json.contains("\"family\""));
}
