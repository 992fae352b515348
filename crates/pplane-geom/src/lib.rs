#![deny(missing_docs)]

//! Deterministic construction of the incidence structure of the projective
//! plane of prime order, built on the `pplane-core` vocabulary.

mod hash;
mod lines;
mod plane;
mod points;
mod serialization;
mod vector;

pub use hash::canonical_hash;
pub use lines::build_lines;
pub use plane::IncidencePlane;
pub use points::{build_points, point_count};
pub use vector::GfVector;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{plane_from_bytes, plane_from_json, plane_to_bytes, plane_to_json};
