use sha2::{Digest, Sha256};

use crate::plane::IncidencePlane;

/// Computes the canonical structural hash of a plane.
///
/// Covers the order, every point vector in id order, and every line's point
/// ids in emission order, so two builds agree on the hash iff they agree on
/// the full incidence structure.
pub fn canonical_hash(plane: &IncidencePlane) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plane.order().to_le_bytes());

    hasher.update((plane.point_count() as u64).to_le_bytes());
    for vector in plane.point_vectors() {
        hasher.update(vector.x1.to_le_bytes());
        hasher.update(vector.x2.to_le_bytes());
        hasher.update(vector.x3.to_le_bytes());
    }

    hasher.update((plane.line_count() as u64).to_le_bytes());
    for line in plane.lines() {
        hasher.update((line.len() as u64).to_le_bytes());
        for point in line {
            hasher.update(point.as_raw().to_le_bytes());
        }
    }

    format!("{:x}", hasher.finalize())
}
