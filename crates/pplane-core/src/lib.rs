#![deny(missing_docs)]

//! Core identifiers and shared types for the projective plane workspace.

use serde::{Deserialize, Serialize};

pub mod errors;
mod schema;

pub use errors::{ErrorInfo, PlaneError};
pub use schema::SchemaVersion;

/// Identifier for a point of the projective plane.
///
/// Point ids are assigned in construction order and are the only handle the
/// rest of the workspace uses to refer to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(u64);

impl PointId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Identifier for a line of the projective plane, assigned in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(u64);

impl LineId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}
