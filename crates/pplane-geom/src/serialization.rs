use pplane_core::errors::{ErrorInfo, PlaneError};
use pplane_core::{PointId, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::plane::IncidencePlane;
use crate::vector::GfVector;

/// Serializes the plane to a compact binary representation using `bincode`.
pub fn plane_to_bytes(plane: &IncidencePlane) -> Result<Vec<u8>, PlaneError> {
    let serializable = SerializablePlane::from_plane(plane);
    bincode::serialize(&serializable)
        .map_err(|err| PlaneError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a plane from its binary representation.
pub fn plane_from_bytes(bytes: &[u8]) -> Result<IncidencePlane, PlaneError> {
    let serializable: SerializablePlane = bincode::deserialize(bytes)
        .map_err(|err| PlaneError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_plane()
}

/// Serializes the plane to a JSON string.
pub fn plane_to_json(plane: &IncidencePlane) -> Result<String, PlaneError> {
    let serializable = SerializablePlane::from_plane(plane);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| PlaneError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a plane from a JSON string.
pub fn plane_from_json(json: &str) -> Result<IncidencePlane, PlaneError> {
    let serializable: SerializablePlane = serde_json::from_str(json)
        .map_err(|err| PlaneError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_plane()
}

const SCHEMA_VERSION: SchemaVersion = SchemaVersion::new(1, 0, 0);

#[derive(Debug, Serialize, Deserialize)]
struct SerializablePlane {
    schema_version: SchemaVersion,
    order: u64,
    points: Vec<[u64; 3]>,
    lines: Vec<Vec<u64>>,
}

impl SerializablePlane {
    fn from_plane(plane: &IncidencePlane) -> Self {
        let points = plane
            .point_vectors()
            .iter()
            .map(|vector| [vector.x1, vector.x2, vector.x3])
            .collect();
        let lines = plane
            .lines()
            .iter()
            .map(|line| line.iter().map(|id| id.as_raw()).collect())
            .collect();
        Self {
            schema_version: SCHEMA_VERSION,
            order: plane.order(),
            points,
            lines,
        }
    }

    fn into_plane(self) -> Result<IncidencePlane, PlaneError> {
        if self.schema_version.major != SCHEMA_VERSION.major {
            return Err(PlaneError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported schema major version")
                    .with_context("found", self.schema_version.major.to_string())
                    .with_context("supported", SCHEMA_VERSION.major.to_string()),
            ));
        }
        let points = self
            .points
            .into_iter()
            .map(|[x1, x2, x3]| GfVector::new(x1, x2, x3))
            .collect();
        let lines = self
            .lines
            .into_iter()
            .map(|line| line.into_iter().map(PointId::from_raw).collect())
            .collect();
        IncidencePlane::from_parts(self.order, points, lines)
    }
}
